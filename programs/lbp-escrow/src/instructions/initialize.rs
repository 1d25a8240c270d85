use anchor_lang::prelude::*;

use crate::{constants::*, errors::LbpError, events::ConfigInitialized, program::LbpEscrow, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    // A second initialize fails here, the config address is already in use
    #[account(
        init,
        payer = deployer,
        space = ANCHOR_DISCRIMINATOR + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    // Only the upgrade authority of this deployment may create the config
    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, LbpEscrow>,

    #[account(
        constraint = program_data.upgrade_authority_address == Some(deployer.key())
            @ LbpError::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        admin_authority: Pubkey,
        whitelist_authority: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.config
            .initialize(admin_authority, whitelist_authority, bumps.config);

        emit!(ConfigInitialized {
            admin_authority,
            whitelist_authority,
        });

        msg!("Config initialized by upgrade authority {}", self.deployer.key());
        msg!("Admin: {}", admin_authority);
        msg!("Whitelist authority: {}", whitelist_authority);

        Ok(())
    }
}
