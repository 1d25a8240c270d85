// User Deposit Instruction
//
// Escrows raised tokens for a user and opens a position for them.
// The position is represented by a fresh mint with a supply of one; the
// unit goes to the user and the mint authority is revoked right after.
// The whitelist authority co-signs every deposit.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::*, errors::*, events::UserDeposited, helpers::*, state::*};

#[derive(Accounts)]
pub struct UserDeposit<'info> {
    pub whitelist_authority: Signer<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [LBP_SEED, lbp.uid.to_le_bytes().as_ref()],
        bump = lbp.bump,
    )]
    pub lbp: Box<Account<'info, Lbp>>,

    /// CHECK: PDA signer, mint authority of the position mint
    #[account(
        seeds = [ESCROW_AUTHORITY_SEED, lbp.key().as_ref()],
        bump = lbp.escrow_authority_bump,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(address = lbp.raised_token_mint @ LbpError::InvalidMint)]
    pub raised_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = raised_token_mint,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_raised_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = lbp.raised_token_escrow,
    )]
    pub raised_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    // Generated by the caller, signs the transaction.
    // Reusing a mint fails here, the account is already in use.
    #[account(
        init,
        payer = user,
        mint::decimals = POSITION_MINT_DECIMALS,
        mint::authority = escrow_authority,
        mint::token_program = token_program,
    )]
    pub position_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Position::INIT_SPACE,
        seeds = [POSITION_SEED, lbp.key().as_ref(), position_mint.key().as_ref()],
        bump
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        init,
        payer = user,
        associated_token::mint = position_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_position_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> UserDeposit<'info> {
    pub fn user_deposit(&mut self, amount: u64, bumps: &UserDepositBumps) -> Result<()> {
        self.config
            .assert_whitelist_authority(&self.whitelist_authority.key())?;

        let now = Clock::get()?.unix_timestamp;
        let raised_token_cap = self.lbp.record_user_deposit(amount, now)?;

        transfer_to_escrow(
            amount,
            self.raised_token_mint.decimals,
            &self.token_program.to_account_info(),
            &self.user_raised_token_account.to_account_info(),
            &self.raised_token_mint.to_account_info(),
            &self.raised_token_escrow.to_account_info(),
            &self.user.to_account_info(),
        )?;

        self.mint_claim()?;

        let lbp_key = self.lbp.key();
        self.position.set_inner(Position::new(
            self.position_mint.key(),
            lbp_key,
            amount,
            bumps.position,
        ));

        emit!(UserDeposited {
            lbp: lbp_key,
            user: self.user.key(),
            position: self.position.key(),
            amount,
            raised_token_cap,
        });

        msg!("User {} deposited {} raised tokens", self.user.key(), amount);
        msg!(
            "Raised token cap: {} / {}",
            raised_token_cap,
            self.lbp.raised_token_max_cap
        );

        Ok(())
    }

    fn mint_claim(&self) -> Result<()> {
        let lbp_key = self.lbp.key();
        let bump = [self.lbp.escrow_authority_bump];
        let escrow_authority_seeds: &[&[u8]] = &[ESCROW_AUTHORITY_SEED, lbp_key.as_ref(), &bump];

        mint_position_claim(
            &self.token_program.to_account_info(),
            &self.position_mint.to_account_info(),
            &self.user_position_token_account.to_account_info(),
            &self.escrow_authority.to_account_info(),
            escrow_authority_seeds,
        )
    }
}
