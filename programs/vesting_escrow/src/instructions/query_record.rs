//! Query record instruction - read-only quote of a vesting record

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::error::EscrowError;
use crate::state::{VestingEscrow, VestingQuote};

#[derive(Accounts)]
pub struct QueryRecord<'info> {
    pub escrow: Account<'info, VestingEscrow>,

    #[account(address = escrow.custody @ EscrowError::InvalidCustodyAccount)]
    pub custody: InterfaceAccount<'info, TokenAccount>,
}

pub fn process_query_record(ctx: Context<QueryRecord>) -> Result<VestingQuote> {
    let clock = Clock::get()?;
    let quote = ctx
        .accounts
        .escrow
        .quote(clock.unix_timestamp, ctx.accounts.custody.amount)?;

    msg!(
        "Vesting {}: unlocked={}, withdrawn={}, withdrawable={}, custody={}",
        ctx.accounts.escrow.key(),
        quote.unlocked_amount,
        quote.withdrawn_amount,
        quote.withdrawable_amount,
        quote.custody_balance
    );
    Ok(quote)
}
