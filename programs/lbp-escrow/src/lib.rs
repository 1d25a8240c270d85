// LBP Escrow Program
//
// Escrow and vesting for liquidity bootstrapping sales.
// A project escrows its launched token, whitelisted users escrow the raised
// token and receive a position per deposit. A failed raise refunds everyone,
// a successful one seeds a Raydium CP-swap pool from the escrows.
//
// Instructions:
// - initialize: Create the program config (admin + whitelist authority)
// - nominate_new_admin_authority / accept_admin_authority: Two step admin transfer
// - set_whitelist_authority: Rotate the deposit co-signer
// - initialize_lbp: Create a sale and its escrows
// - project_deposit / user_deposit: Fund the escrows
// - move_to_refund_phase / move_to_vesting_phase: Close the fund collection
// - project_refund / user_refund: Take deposits back after a failed raise

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("LBPEscroW5xyWX2sUQ9bC4pN8VjQ3Tz7rHmKdYe1fAu");

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "LBP Escrow",
    project_url: "TBD",
    contacts: "TBD",
    policy: "TBD"
}

#[program]
pub mod lbp_escrow {
    use super::*;

    // One time setup by the upgrade authority, the config address can only be
    // created once
    pub fn initialize(
        ctx: Context<Initialize>,
        admin_authority: Pubkey,
        whitelist_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize(admin_authority, whitelist_authority, &ctx.bumps)
    }

    // Admin nominates its successor, who must accept before anything changes
    pub fn nominate_new_admin_authority(
        ctx: Context<NominateNewAdminAuthority>,
        nominee: Pubkey,
    ) -> Result<()> {
        ctx.accounts.nominate_new_admin_authority(nominee)
    }

    // Pending admin takes over
    pub fn accept_admin_authority(ctx: Context<AcceptAdminAuthority>) -> Result<()> {
        ctx.accounts.accept_admin_authority()
    }

    // Admin only, takes effect immediately
    pub fn set_whitelist_authority(
        ctx: Context<SetWhitelistAuthority>,
        whitelist_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts.set_whitelist_authority(whitelist_authority)
    }

    // Admin only
    // Creates the lbp in fund collection plus both escrow token accounts
    pub fn initialize_lbp(ctx: Context<InitializeLbp>, data: LbpInitializeData) -> Result<()> {
        ctx.accounts.initialize_lbp(data, &ctx.bumps)
    }

    // Project escrows exactly the launched token cap
    pub fn project_deposit(ctx: Context<ProjectDeposit>, amount: u64) -> Result<()> {
        ctx.accounts.project_deposit(amount)
    }

    // Co-signed by the whitelist authority
    // Escrows raised tokens and mints the position claim token to the user
    pub fn user_deposit(ctx: Context<UserDeposit>, amount: u64) -> Result<()> {
        ctx.accounts.user_deposit(amount, &ctx.bumps)
    }

    // Admin only, fund collection -> refund
    pub fn move_to_refund_phase(ctx: Context<MoveToRefundPhase>) -> Result<()> {
        ctx.accounts.move_to_refund_phase()
    }

    // Admin only, fund collection -> vesting
    // Seeds the pool from the escrows
    pub fn move_to_vesting_phase(ctx: Context<MoveToVestingPhase>) -> Result<()> {
        ctx.accounts.move_to_vesting_phase()
    }

    // Project takes its launched tokens back, once
    pub fn project_refund(ctx: Context<ProjectRefund>) -> Result<()> {
        ctx.accounts.project_refund()
    }

    // Claim holder takes the deposit back, burns the claim and closes the position
    pub fn user_refund(ctx: Context<UserRefund>) -> Result<()> {
        ctx.accounts.user_refund()
    }
}
