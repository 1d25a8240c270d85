// User Refund Instruction
//
// Whoever holds the claim token of a position gets the deposit back.
// The claim token is burned and both the claim token account and the
// position are closed, so a position can only be refunded once.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::*, errors::*, events::UserRefunded, helpers::*, state::*};

#[derive(Accounts)]
pub struct UserRefund<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [LBP_SEED, lbp.uid.to_le_bytes().as_ref()],
        bump = lbp.bump,
    )]
    pub lbp: Box<Account<'info, Lbp>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [ESCROW_AUTHORITY_SEED, lbp.key().as_ref()],
        bump = lbp.escrow_authority_bump,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(address = lbp.raised_token_mint @ LbpError::InvalidMint)]
    pub raised_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = lbp.raised_token_escrow,
    )]
    pub raised_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = raised_token_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_raised_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    // Derived from the lbp stored in the position, the handler checks it
    // against the lbp passed in
    #[account(
        mut,
        close = user,
        seeds = [POSITION_SEED, position.lbp.as_ref(), position_mint.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(mut)]
    pub position_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = position_mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_position_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> UserRefund<'info> {
    pub fn user_refund(&mut self) -> Result<()> {
        self.lbp.assert_phase(Phase::Refund)?;
        self.position.assert_belongs_to(&self.lbp.key())?;
        require!(
            self.user_position_token_account.amount == POSITION_CLAIM_AMOUNT,
            LbpError::DoesNotHoldPosition
        );

        let amount = self.position.amount;
        let lbp_key = self.lbp.key();
        let bump = [self.lbp.escrow_authority_bump];
        let escrow_authority_seeds: &[&[u8]] = &[ESCROW_AUTHORITY_SEED, lbp_key.as_ref(), &bump];

        transfer_from_escrow(
            amount,
            self.raised_token_mint.decimals,
            &self.token_program.to_account_info(),
            &self.raised_token_escrow.to_account_info(),
            &self.raised_token_mint.to_account_info(),
            &self.user_raised_token_account.to_account_info(),
            &self.escrow_authority.to_account_info(),
            escrow_authority_seeds,
        )?;

        burn_position_claim(
            &self.token_program.to_account_info(),
            &self.position_mint.to_account_info(),
            &self.user_position_token_account.to_account_info(),
            &self.user.to_account_info(),
        )?;

        emit!(UserRefunded {
            lbp: lbp_key,
            user: self.user.key(),
            position: self.position.key(),
            amount,
        });

        msg!("User {} refunded {} raised tokens", self.user.key(), amount);

        Ok(())
    }
}
