use anchor_lang::prelude::*;

use crate::{constants::*, events::AdminNominated, state::*};

#[derive(Accounts)]
pub struct NominateNewAdminAuthority<'info> {
    pub admin_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> NominateNewAdminAuthority<'info> {
    pub fn nominate_new_admin_authority(&mut self, nominee: Pubkey) -> Result<()> {
        self.config
            .nominate_admin_authority(&self.admin_authority.key(), nominee)?;

        emit!(AdminNominated {
            admin_authority: self.config.admin_authority,
            nominee,
        });

        msg!("Admin authority nominated: {}", nominee);

        Ok(())
    }
}
