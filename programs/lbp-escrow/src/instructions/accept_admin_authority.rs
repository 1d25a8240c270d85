use anchor_lang::prelude::*;

use crate::{constants::*, events::AdminAccepted, state::*};

#[derive(Accounts)]
pub struct AcceptAdminAuthority<'info> {
    // Must be the pending admin authority
    pub new_admin_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> AcceptAdminAuthority<'info> {
    pub fn accept_admin_authority(&mut self) -> Result<()> {
        let admin_authority = self.new_admin_authority.key();
        let previous_admin_authority = self.config.accept_admin_authority(&admin_authority)?;

        emit!(AdminAccepted {
            previous_admin_authority,
            admin_authority,
        });

        msg!(
            "Admin authority transferred: {} -> {}",
            previous_admin_authority,
            admin_authority
        );

        Ok(())
    }
}
