use anchor_lang::prelude::*;

use crate::state::Phase;

#[event]
pub struct ConfigInitialized {
    pub admin_authority: Pubkey,
    pub whitelist_authority: Pubkey,
}

#[event]
pub struct AdminNominated {
    pub admin_authority: Pubkey,
    pub nominee: Pubkey,
}

#[event]
pub struct AdminAccepted {
    pub previous_admin_authority: Pubkey,
    pub admin_authority: Pubkey,
}

#[event]
pub struct WhitelistAuthorityChanged {
    pub previous_whitelist_authority: Pubkey,
    pub whitelist_authority: Pubkey,
}

#[event]
pub struct LbpInitialized {
    pub lbp: Pubkey,
    pub uid: u64,
    pub project: Pubkey,
    pub launched_token_mint: Pubkey,
    pub raised_token_mint: Pubkey,
}

#[event]
pub struct ProjectDeposited {
    pub lbp: Pubkey,
    pub amount: u64,
}

#[event]
pub struct UserDeposited {
    pub lbp: Pubkey,
    pub user: Pubkey,
    pub position: Pubkey,
    pub amount: u64,
    pub raised_token_cap: u64,
}

#[event]
pub struct PhaseChanged {
    pub lbp: Pubkey,
    pub from: Phase,
    pub to: Phase,
    pub timestamp: i64,
}

#[event]
pub struct PoolSeeded {
    pub lbp: Pubkey,
    pub pool_state: Pubkey,
    pub launched_token_amount: u64,
    pub raised_token_amount: u64,
}

#[event]
pub struct ProjectRefunded {
    pub lbp: Pubkey,
    pub amount: u64,
}

#[event]
pub struct UserRefunded {
    pub lbp: Pubkey,
    pub user: Pubkey,
    pub position: Pubkey,
    pub amount: u64,
}
