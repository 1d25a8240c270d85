use anchor_lang::prelude::*;

use crate::errors::LbpError;

// Program wide configuration, a single PDA per deployment
#[account]
#[derive(InitSpace)]
pub struct Config {
    // Full administrative rights: creates lbps and drives their phases
    pub admin_authority: Pubkey,

    // Nominated admin waiting to accept, None when no transfer is in flight
    pub pending_admin_authority: Option<Pubkey>,

    // Must co-sign every user deposit
    pub whitelist_authority: Pubkey,

    // PDA bump seed
    pub bump: u8,
}

impl Config {
    pub fn initialize(&mut self, admin_authority: Pubkey, whitelist_authority: Pubkey, bump: u8) {
        self.admin_authority = admin_authority;
        self.pending_admin_authority = None;
        self.whitelist_authority = whitelist_authority;
        self.bump = bump;
    }

    pub fn assert_admin_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin_authority, *caller, LbpError::NotAdminAuthority);
        Ok(())
    }

    pub fn assert_whitelist_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.whitelist_authority, *caller, LbpError::NotWhitelistAuthority);
        Ok(())
    }

    // First step of the admin transfer. The current admin keeps full rights
    // until the nominee accepts, so a mistyped nominee can simply be replaced.
    pub fn nominate_admin_authority(&mut self, caller: &Pubkey, nominee: Pubkey) -> Result<()> {
        self.assert_admin_authority(caller)?;
        require_keys_neq!(self.admin_authority, nominee, LbpError::SameAdminAuthority);

        self.pending_admin_authority = Some(nominee);
        Ok(())
    }

    // Second step, signed by the nominee. Returns the admin being replaced.
    pub fn accept_admin_authority(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        require!(
            self.pending_admin_authority == Some(*caller),
            LbpError::NotAdminAuthority
        );

        let previous = self.admin_authority;
        self.admin_authority = *caller;
        self.pending_admin_authority = None;
        Ok(previous)
    }

    // Single step rotation, returns the authority being replaced
    pub fn set_whitelist_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<Pubkey> {
        self.assert_admin_authority(caller)?;

        let previous = self.whitelist_authority;
        self.whitelist_authority = new_authority;
        Ok(previous)
    }
}
