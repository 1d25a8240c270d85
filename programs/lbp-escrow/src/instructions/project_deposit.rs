use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{constants::*, errors::*, events::ProjectDeposited, helpers::*, state::*};

#[derive(Accounts)]
pub struct ProjectDeposit<'info> {
    pub project: Signer<'info>,

    #[account(
        mut,
        seeds = [LBP_SEED, lbp.uid.to_le_bytes().as_ref()],
        bump = lbp.bump,
    )]
    pub lbp: Box<Account<'info, Lbp>>,

    #[account(address = lbp.launched_token_mint @ LbpError::InvalidMint)]
    pub launched_token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = launched_token_mint,
        token::authority = project,
        token::token_program = token_program,
    )]
    pub project_launched_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = lbp.launched_token_escrow,
    )]
    pub launched_token_escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ProjectDeposit<'info> {
    pub fn project_deposit(&mut self, amount: u64) -> Result<()> {
        self.lbp.assert_project(&self.project.key())?;
        self.lbp.record_project_deposit(amount)?;

        transfer_to_escrow(
            amount,
            self.launched_token_mint.decimals,
            &self.token_program.to_account_info(),
            &self.project_launched_token_account.to_account_info(),
            &self.launched_token_mint.to_account_info(),
            &self.launched_token_escrow.to_account_info(),
            &self.project.to_account_info(),
        )?;

        emit!(ProjectDeposited {
            lbp: self.lbp.key(),
            amount,
        });

        msg!("Project deposited {} launched tokens", amount);

        Ok(())
    }
}
