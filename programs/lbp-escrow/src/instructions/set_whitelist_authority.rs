use anchor_lang::prelude::*;

use crate::{constants::*, events::WhitelistAuthorityChanged, state::*};

#[derive(Accounts)]
pub struct SetWhitelistAuthority<'info> {
    pub admin_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> SetWhitelistAuthority<'info> {
    pub fn set_whitelist_authority(&mut self, whitelist_authority: Pubkey) -> Result<()> {
        let previous_whitelist_authority = self
            .config
            .set_whitelist_authority(&self.admin_authority.key(), whitelist_authority)?;

        emit!(WhitelistAuthorityChanged {
            previous_whitelist_authority,
            whitelist_authority,
        });

        msg!("Whitelist authority set: {}", whitelist_authority);

        Ok(())
    }
}
