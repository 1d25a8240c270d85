// Initialize Lbp Instruction
//
// Creates a sale in the fund collection phase together with its two escrow
// token accounts, both owned by the escrow authority PDA of the lbp.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::*, errors::*, events::LbpInitialized, state::*};

#[derive(Accounts)]
#[instruction(data: LbpInitializeData)]
pub struct InitializeLbp<'info> {
    #[account(mut)]
    pub admin_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    // A duplicate uid fails here, the lbp address is already in use
    #[account(
        init,
        payer = admin_authority,
        space = ANCHOR_DISCRIMINATOR + Lbp::INIT_SPACE,
        seeds = [LBP_SEED, data.uid.to_le_bytes().as_ref()],
        bump
    )]
    pub lbp: Box<Account<'info, Lbp>>,

    /// CHECK: data-less PDA, owner of both escrows and creator of the pool
    #[account(
        seeds = [ESCROW_AUTHORITY_SEED, lbp.key().as_ref()],
        bump
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(
        mint::token_program = token_program,
        constraint = launched_token_mint.key() == data.launched_token_mint @ LbpError::InvalidMint,
    )]
    pub launched_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mint::token_program = token_program,
        constraint = raised_token_mint.key() == data.raised_token_mint @ LbpError::InvalidMint,
        constraint = raised_token_mint.key() != launched_token_mint.key() @ LbpError::InvalidMint,
    )]
    pub raised_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = admin_authority,
        associated_token::mint = launched_token_mint,
        associated_token::authority = escrow_authority,
        associated_token::token_program = token_program,
    )]
    pub launched_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin_authority,
        associated_token::mint = raised_token_mint,
        associated_token::authority = escrow_authority,
        associated_token::token_program = token_program,
    )]
    pub raised_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeLbp<'info> {
    pub fn initialize_lbp(
        &mut self,
        data: LbpInitializeData,
        bumps: &InitializeLbpBumps,
    ) -> Result<()> {
        self.config
            .assert_admin_authority(&self.admin_authority.key())?;

        data.validate()?;

        let uid = data.uid;
        let project = data.project;

        self.lbp.set_inner(Lbp::new(
            data,
            self.launched_token_escrow.key(),
            self.raised_token_escrow.key(),
            bumps.lbp,
            bumps.escrow_authority,
        ));

        emit!(LbpInitialized {
            lbp: self.lbp.key(),
            uid,
            project,
            launched_token_mint: self.launched_token_mint.key(),
            raised_token_mint: self.raised_token_mint.key(),
        });

        msg!("Lbp {} initialized for project {}", uid, project);
        msg!(
            "Launched token cap: {}, raised token caps: {} / {}",
            self.lbp.launched_token_cap,
            self.lbp.raised_token_min_cap,
            self.lbp.raised_token_max_cap
        );

        Ok(())
    }
}
