use anchor_lang::prelude::*;

use crate::errors::LbpError;

// One position per user deposit.
// The position mint is a fresh 0 decimal mint with a supply of one; holding
// that unit is what entitles a user to the position. The mint can back at
// most one position since it is part of the position address.
#[account]
#[derive(InitSpace)]
pub struct Position {
    pub mint: Pubkey,
    pub lbp: Pubkey,
    // Raised token deposited, never changes
    pub amount: u64,
    pub bump: u8,
}

impl Position {
    pub fn new(mint: Pubkey, lbp: Pubkey, amount: u64, bump: u8) -> Self {
        Position { mint, lbp, amount, bump }
    }

    pub fn assert_belongs_to(&self, lbp: &Pubkey) -> Result<()> {
        require_keys_eq!(self.lbp, *lbp, LbpError::InvalidPosition);
        Ok(())
    }
}
