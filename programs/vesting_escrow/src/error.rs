//! Program error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid vesting schedule")]
    InvalidSchedule,

    #[msg("A vesting record already exists for this sender and recipient")]
    DuplicateRecord,

    #[msg("Caller is not authorized for this vesting record")]
    Unauthorized,

    #[msg("Nothing new has unlocked yet")]
    NothingUnlocked,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // ---------------------------------------------------------------------
    // Account validation
    // ---------------------------------------------------------------------
    #[msg("Token account or mint does not match the vesting record")]
    InvalidMint,

    #[msg("Custody account does not belong to this vesting record")]
    InvalidCustodyAccount,

    #[msg("Custody balance is below the deliverable amount")]
    CustodyShortfall,
}
