use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::{constants::MAX_LP_DISTRIBUTION, errors::LbpError};

// Lbp phase
//
// Valid phase changes:
//   FundCollection -> Refund
//   FundCollection -> Vesting
// Refund and Vesting are terminal.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    // Project escrows the launched token, users deposit the raised token
    FundCollection,
    // The raise failed, everyone takes back what they deposited
    Refund,
    // The raise succeeded, the pool is seeded and rewards vest
    Vesting,
}

impl Phase {
    pub fn can_transition_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::FundCollection, Phase::Refund) | (Phase::FundCollection, Phase::Vesting)
        )
    }
}

// Parameters supplied by the admin when creating an lbp
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct LbpInitializeData {
    // Unique id of the lbp, part of its address
    pub uid: u64,

    // Owner of the lbp, i.e. the project launching the token
    pub project: Pubkey,

    // Token supplied by the project
    pub launched_token_mint: Pubkey,
    // Percentage of the launched token cap sent to the liquidity pool,
    // the rest stays in escrow for the reward pool
    pub launched_token_lp_distribution: u8,
    // Exact amount of launched token the project must deposit
    pub launched_token_cap: u64,

    // Token supplied by the users
    pub raised_token_mint: Pubkey,
    // Below this amount the raise failed and users are refunded
    pub raised_token_min_cap: u64,
    // Users can never deposit more than this in total
    pub raised_token_max_cap: u64,

    // Deposit window, unix seconds, both ends inclusive
    pub fund_collection_start_time: i64,
    pub fund_collection_end_time: i64,

    // Seconds
    pub cliff_duration: u64,
    pub vesting_duration: u64,
}

impl LbpInitializeData {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.raised_token_min_cap <= self.raised_token_max_cap,
            LbpError::InvalidCaps
        );
        require!(
            self.launched_token_lp_distribution <= MAX_LP_DISTRIBUTION,
            LbpError::InvalidLpDistribution
        );
        require!(
            self.fund_collection_start_time <= self.fund_collection_end_time,
            LbpError::InvalidFundCollectionWindow
        );
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct Lbp {
    pub uid: u64,

    pub project: Pubkey,

    pub launched_token_mint: Pubkey,
    // Escrow token account holding the project deposit
    pub launched_token_escrow: Pubkey,
    pub launched_token_lp_distribution: u8,
    pub launched_token_cap: u64,
    // Set by the project deposit. The escrow balance alone cannot tell,
    // anyone may send tokens to the escrow account.
    pub launched_token_deposited: bool,

    pub raised_token_mint: Pubkey,
    // Escrow token account holding the user deposits
    pub raised_token_escrow: Pubkey,
    pub raised_token_min_cap: u64,
    pub raised_token_max_cap: u64,
    // Sum of all user deposits, never above raised_token_max_cap.
    // Refunds do not decrease it, the lbp stays as an audit trail.
    pub raised_token_cap: u64,

    pub phase: Phase,
    pub fund_collection_start_time: i64,
    pub fund_collection_end_time: i64,
    // Set once, when the lbp moves to the vesting phase
    pub vesting_start_time: Option<i64>,
    pub cliff_duration: u64,
    pub vesting_duration: u64,

    // PDA bump seeds
    pub bump: u8,
    pub escrow_authority_bump: u8,
}

impl Lbp {
    pub fn new(
        data: LbpInitializeData,
        launched_token_escrow: Pubkey,
        raised_token_escrow: Pubkey,
        bump: u8,
        escrow_authority_bump: u8,
    ) -> Self {
        Lbp {
            uid: data.uid,
            project: data.project,
            launched_token_mint: data.launched_token_mint,
            launched_token_escrow,
            launched_token_lp_distribution: data.launched_token_lp_distribution,
            launched_token_cap: data.launched_token_cap,
            launched_token_deposited: false,
            raised_token_mint: data.raised_token_mint,
            raised_token_escrow,
            raised_token_min_cap: data.raised_token_min_cap,
            raised_token_max_cap: data.raised_token_max_cap,
            raised_token_cap: 0,
            phase: Phase::FundCollection,
            fund_collection_start_time: data.fund_collection_start_time,
            fund_collection_end_time: data.fund_collection_end_time,
            vesting_start_time: None,
            cliff_duration: data.cliff_duration,
            vesting_duration: data.vesting_duration,
            bump,
            escrow_authority_bump,
        }
    }

    pub fn assert_project(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.project, *caller, LbpError::NotProject);
        Ok(())
    }

    pub fn assert_phase(&self, expected: Phase) -> Result<()> {
        require!(
            self.phase == expected,
            LbpError::UnauthorisedOperationInCurrentPhase
        );
        Ok(())
    }

    pub fn assert_fund_collection_open(&self, now: i64) -> Result<()> {
        self.assert_phase(Phase::FundCollection)?;
        require!(
            now >= self.fund_collection_start_time,
            LbpError::FundCollectionPhaseNotStarted
        );
        require!(
            now <= self.fund_collection_end_time,
            LbpError::FundCollectionPhaseCompleted
        );
        Ok(())
    }

    // Cap check and increment in one step. On error nothing is written, so
    // a rejected deposit leaves raised_token_cap untouched.
    pub fn record_user_deposit(&mut self, amount: u64, now: i64) -> Result<u64> {
        self.assert_fund_collection_open(now)?;
        require!(amount > 0, LbpError::InvalidAmount);

        let raised_token_cap = self
            .raised_token_cap
            .checked_add(amount)
            .ok_or(LbpError::MathOverflow)?;
        require!(
            raised_token_cap <= self.raised_token_max_cap,
            LbpError::MaxCapReached
        );

        self.raised_token_cap = raised_token_cap;
        Ok(raised_token_cap)
    }

    // The project deposits the whole launched token cap in one go
    pub fn record_project_deposit(&mut self, amount: u64) -> Result<()> {
        self.assert_phase(Phase::FundCollection)?;
        require!(!self.launched_token_deposited, LbpError::MaxCapReached);
        require!(amount == self.launched_token_cap, LbpError::InvalidAmount);

        self.launched_token_deposited = true;
        Ok(())
    }

    fn transition(&mut self, next: Phase) -> Result<()> {
        require!(
            self.phase.can_transition_to(next),
            LbpError::InvalidPhaseChange
        );
        self.phase = next;
        Ok(())
    }

    // Whether the raise reached its min cap is the admin's call, only the
    // transition itself is checked here
    pub fn enter_refund_phase(&mut self) -> Result<()> {
        self.transition(Phase::Refund)
    }

    // A raise below its min cap can only be refunded
    pub fn enter_vesting_phase(&mut self, now: i64, launched_escrow_balance: u64) -> Result<()> {
        require!(
            self.phase.can_transition_to(Phase::Vesting),
            LbpError::InvalidPhaseChange
        );
        require!(
            self.raised_token_cap >= self.raised_token_min_cap,
            LbpError::InvalidPhaseChange
        );
        require!(
            self.launched_token_deposited && launched_escrow_balance >= self.launched_token_cap,
            LbpError::InvalidAmount
        );

        self.transition(Phase::Vesting)?;
        self.vesting_start_time = Some(now);
        Ok(())
    }

    // Share of the launched token cap that seeds the liquidity pool
    pub fn lp_launched_token_amount(&self) -> Result<u64> {
        let amount = (self.launched_token_cap as u128)
            .checked_mul(self.launched_token_lp_distribution as u128)
            .ok_or(LbpError::MathOverflow)?
            .checked_div(MAX_LP_DISTRIBUTION as u128)
            .ok_or(LbpError::MathOverflow)?;

        u64::try_from(amount).map_err(|_| error!(LbpError::MathOverflow))
    }

    // Launched token left in escrow for the reward pool once the pool is seeded
    pub fn reward_launched_token_amount(&self) -> Result<u64> {
        self.launched_token_cap
            .checked_sub(self.lp_launched_token_amount()?)
            .ok_or_else(|| error!(LbpError::MathOverflow))
    }

    // The refund is one shot: it empties the escrow, so an empty escrow means
    // the project was already paid back. Returns the amount to send back.
    pub fn check_project_refund(&self, escrow_balance: u64) -> Result<u64> {
        self.assert_phase(Phase::Refund)?;
        require!(escrow_balance > 0, LbpError::AlreadyRefunded);
        Ok(escrow_balance)
    }
}
