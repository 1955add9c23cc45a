//! Program events for indexer visibility
//!
//! Every state transition emits a structured event so that off-chain
//! indexers can follow a vesting record from funding to full payout
//! without parsing account data.

use anchor_lang::prelude::*;

/// Emitted when a vesting record is created and its custody funded
#[event]
pub struct VestingCreated {
    pub escrow: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub mint: Pubkey,
    pub custody: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub unlock_interval: u64,
}

/// Emitted on every successful withdraw
#[event]
pub struct UnlockedWithdrawn {
    pub escrow: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub withdrawn_amount: u64,
    pub remaining_amount: u64,
    pub timestamp: i64,
}

/// Emitted by the withdraw that pays out the last unit
#[event]
pub struct VestingCompleted {
    pub escrow: Pubkey,
    pub recipient: Pubkey,
    pub total_amount: u64,
    pub timestamp: i64,
}
