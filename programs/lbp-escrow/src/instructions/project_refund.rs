use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::*, errors::*, events::ProjectRefunded, helpers::*, state::*};

#[derive(Accounts)]
pub struct ProjectRefund<'info> {
    #[account(mut)]
    pub project: Signer<'info>,

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

    #[account(address = lbp.launched_token_mint @ LbpError::InvalidMint)]
    pub launched_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = lbp.launched_token_escrow,
    )]
    pub launched_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = project,
        associated_token::mint = launched_token_mint,
        associated_token::authority = project,
        associated_token::token_program = token_program,
    )]
    pub project_launched_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ProjectRefund<'info> {
    pub fn project_refund(&mut self) -> Result<()> {
        self.lbp.assert_project(&self.project.key())?;
        let amount = self
            .lbp
            .check_project_refund(self.launched_token_escrow.amount)?;

        let lbp_key = self.lbp.key();
        let bump = [self.lbp.escrow_authority_bump];
        let escrow_authority_seeds: &[&[u8]] = &[ESCROW_AUTHORITY_SEED, lbp_key.as_ref(), &bump];

        transfer_from_escrow(
            amount,
            self.launched_token_mint.decimals,
            &self.token_program.to_account_info(),
            &self.launched_token_escrow.to_account_info(),
            &self.launched_token_mint.to_account_info(),
            &self.project_launched_token_account.to_account_info(),
            &self.escrow_authority.to_account_info(),
            escrow_authority_seeds,
        )?;

        emit!(ProjectRefunded {
            lbp: lbp_key,
            amount,
        });

        msg!("Project refunded {} launched tokens", amount);

        Ok(())
    }
}
