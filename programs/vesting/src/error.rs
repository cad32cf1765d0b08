use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Schedule is paused")]
    SchedulePaused,

    #[msg("Schedule is not paused")]
    ScheduleNotPaused,

    #[msg("Schedule is revoked")]
    ScheduleRevoked,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidBeneficiaryAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed total allocation")]
    OverDeposit,

    #[msg("Deposit after start timestamp is not allowed")]
    DepositAfterStart,

    #[msg("Vault must be exactly funded to the total allocation before claims")]
    VaultNotExactlyFunded,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Sweep not allowed before vesting end")]
    SweepBeforeEnd,

    #[msg("Sweep not allowed: unclaimed allocation remains")]
    SweepNotAllowedOutstanding,
}
