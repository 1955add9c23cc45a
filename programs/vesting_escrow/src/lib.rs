//! Vesting Escrow Program
//!
//! A time-locked token escrow. A sender deposits tokens for a single
//! recipient, who withdraws them as they unlock on a linear, interval-
//! quantized schedule. Records are addressed by the (sender, recipient)
//! pair, and custody is signed for only by a program-derived authority.

use anchor_lang::prelude::*;

declare_id!("8d7EotuEDkxAUjq6yJBMPZpeef2SJRvMYxVN9QVewsLH");

pub mod authority;
pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod pda;
pub mod state;


pub use instructions::*;
use state::VestingQuote;

#[program]
pub mod vesting_escrow {
    use super::*;

    /// Create a vesting record for `recipient` and move `total_amount` into custody
    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        recipient: Pubkey,
        total_amount: u64,
        start_time: i64,
        end_time: i64,
        unlock_interval: u64,
    ) -> Result<()> {
        instructions::create_vesting::process_create_vesting(
            ctx,
            recipient,
            total_amount,
            start_time,
            end_time,
            unlock_interval,
        )
    }

    /// Withdraw everything unlocked so far; returns the amount transferred
    pub fn withdraw_unlocked(ctx: Context<WithdrawUnlocked>) -> Result<u64> {
        instructions::withdraw_unlocked::process_withdraw_unlocked(ctx)
    }

    /// Read-only view of a record plus its unlocked amount as of now
    pub fn query_record(ctx: Context<QueryRecord>) -> Result<VestingQuote> {
        instructions::query_record::process_query_record(ctx)
    }
}
