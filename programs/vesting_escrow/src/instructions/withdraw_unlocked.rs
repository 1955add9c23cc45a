//! Withdraw unlocked instruction - pay the recipient everything unlocked so far
//!
//! Authorization is checked against the record itself before any balance is
//! looked at: the signer must be the stored recipient, and the supplied
//! record address must re-derive from the stored `(sender, recipient)` pair.
//! Custody accounts are not trusted by key either; they must match the
//! addresses bound at creation.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::authority::CustodyAuthority;
use crate::error::EscrowError;
use crate::state::VestingEscrow;

#[derive(Accounts)]
pub struct WithdrawUnlocked<'info> {
    pub recipient: Signer<'info>,

    #[account(mut)]
    pub escrow: Account<'info, VestingEscrow>,

    /// Verified against `escrow.custody` in the handler
    #[account(mut)]
    pub custody: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Verified against the record's custody authority in the handler
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = recipient,
        token::token_program = token_program
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn process_withdraw_unlocked(ctx: Context<WithdrawUnlocked>) -> Result<u64> {
    let program_id = ctx.program_id;
    let escrow_key = ctx.accounts.escrow.key();
    let recipient_key = ctx.accounts.recipient.key();
    let custody_key = ctx.accounts.custody.key();
    let clock = Clock::get()?;

    // CRITICAL: bind caller and address to the record before anything else
    ctx.accounts
        .escrow
        .authorize_withdrawal(program_id, &escrow_key, &recipient_key)?;

    ctx.accounts
        .escrow
        .check_custody(program_id, &escrow_key, &custody_key)?;

    let authority = CustodyAuthority::for_escrow(escrow_key, &ctx.accounts.escrow);
    require_keys_eq!(
        authority
            .address(program_id)
            .ok_or(EscrowError::InvalidCustodyAccount)?,
        ctx.accounts.custody_authority.key(),
        EscrowError::InvalidCustodyAccount
    );

    require_keys_eq!(
        ctx.accounts.mint.key(),
        ctx.accounts.escrow.mint,
        EscrowError::InvalidMint
    );

    let deliverable = ctx.accounts.escrow.settle(clock.unix_timestamp)?;

    require!(
        ctx.accounts.custody.amount >= deliverable,
        EscrowError::CustodyShortfall
    );

    let seeds = authority.seeds();
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.custody.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.custody_authority.to_account_info(),
            },
            &[&seeds[..]],
        ),
        deliverable,
        ctx.accounts.mint.decimals,
    )?;

    let escrow = &ctx.accounts.escrow;

    emit!(crate::events::UnlockedWithdrawn {
        escrow: escrow_key,
        recipient: recipient_key,
        amount: deliverable,
        withdrawn_amount: escrow.withdrawn_amount,
        remaining_amount: escrow.remaining_amount(),
        timestamp: clock.unix_timestamp,
    });

    if escrow.is_fully_withdrawn() {
        emit!(crate::events::VestingCompleted {
            escrow: escrow_key,
            recipient: recipient_key,
            total_amount: escrow.total_amount,
            timestamp: clock.unix_timestamp,
        });
    }

    msg!(
        "Withdrew {} from vesting {}: withdrawn={}/{}",
        deliverable,
        escrow_key,
        escrow.withdrawn_amount,
        escrow.total_amount
    );
    Ok(deliverable)
}
