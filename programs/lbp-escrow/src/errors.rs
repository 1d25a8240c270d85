use anchor_lang::prelude::*;

#[error_code]
pub enum LbpError {
    // Authorization errors
    #[msg("Signer is not the admin authority")]
    NotAdminAuthority,

    #[msg("Signer is not the project owning this lbp")]
    NotProject,

    #[msg("Signer is not the whitelist authority")]
    NotWhitelistAuthority,

    // Phase errors
    #[msg("This phase change is not allowed")]
    InvalidPhaseChange,

    #[msg("Operation is not allowed in the current phase")]
    UnauthorisedOperationInCurrentPhase,

    #[msg("The fund collection phase is over")]
    FundCollectionPhaseCompleted,

    #[msg("The fund collection phase has not started yet")]
    FundCollectionPhaseNotStarted,

    // Capacity errors
    #[msg("Deposit would exceed the max cap")]
    MaxCapReached,

    // Consistency errors
    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Mint does not match the lbp")]
    InvalidMint,

    #[msg("Position does not belong to this lbp")]
    InvalidPosition,

    #[msg("Signer does not hold the position")]
    DoesNotHoldPosition,

    #[msg("Raised token min cap must not exceed the max cap")]
    InvalidCaps,

    #[msg("Lp distribution must be between 0 and 100")]
    InvalidLpDistribution,

    #[msg("Fund collection must not end before it starts")]
    InvalidFundCollectionWindow,

    #[msg("Pool program is not the supported pool program")]
    InvalidPoolProgram,

    // Idempotency errors
    #[msg("Nominee is already the admin authority")]
    SameAdminAuthority,

    #[msg("Launched token has already been refunded")]
    AlreadyRefunded,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    MathOverflow,

    // Setup errors
    #[msg("Signer is not the upgrade authority of the program")]
    NotUpgradeAuthority,
}
