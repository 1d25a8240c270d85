use anchor_lang::prelude::*;

use crate::{constants::*, events::PhaseChanged, state::*};

#[derive(Accounts)]
pub struct MoveToRefundPhase<'info> {
    pub admin_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [LBP_SEED, lbp.uid.to_le_bytes().as_ref()],
        bump = lbp.bump,
    )]
    pub lbp: Box<Account<'info, Lbp>>,
}

impl<'info> MoveToRefundPhase<'info> {
    pub fn move_to_refund_phase(&mut self) -> Result<()> {
        self.config
            .assert_admin_authority(&self.admin_authority.key())?;

        let from = self.lbp.phase;
        self.lbp.enter_refund_phase()?;

        emit!(PhaseChanged {
            lbp: self.lbp.key(),
            from,
            to: self.lbp.phase,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("Lbp {} moved to refund phase", self.lbp.uid);

        Ok(())
    }
}
