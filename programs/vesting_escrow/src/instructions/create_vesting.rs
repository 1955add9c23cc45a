//! Create vesting instruction - write the record and fund custody atomically

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{CUSTODY_AUTHORITY_SEED, CUSTODY_SEED, VESTING_SEED};
use crate::error::EscrowError;
use crate::state::{EscrowAddresses, VestingEscrow, VestingTerms};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct CreateVesting<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = sender,
        token::token_program = token_program
    )]
    pub sender_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Vesting record, keyed on both parties.
    /// `init_if_needed` so a replay surfaces `DuplicateRecord` from the handler.
    #[account(
        init_if_needed,
        payer = sender,
        space = VestingEscrow::SIZE,
        seeds = [VESTING_SEED, sender.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub escrow: Account<'info, VestingEscrow>,

    /// CHECK: PDA signer for the custody account; holds no data
    #[account(
        seeds = [CUSTODY_AUTHORITY_SEED, escrow.key().as_ref()],
        bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = sender,
        token::mint = mint,
        token::authority = custody_authority,
        token::token_program = token_program,
        seeds = [CUSTODY_SEED, escrow.key().as_ref()],
        bump
    )]
    pub custody: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn process_create_vesting(
    ctx: Context<CreateVesting>,
    recipient: Pubkey,
    total_amount: u64,
    start_time: i64,
    end_time: i64,
    unlock_interval: u64,
) -> Result<()> {
    let escrow_key = ctx.accounts.escrow.key();
    let sender_key = ctx.accounts.sender.key();
    let mint_key = ctx.accounts.mint.key();
    let custody_key = ctx.accounts.custody.key();
    let clock = Clock::get()?;

    let terms = VestingTerms {
        sender: sender_key,
        recipient,
        mint: mint_key,
        total_amount,
        start_time,
        end_time,
        unlock_interval,
    };
    let addresses = EscrowAddresses {
        custody: custody_key,
        bump: ctx.bumps.escrow,
        custody_bump: ctx.bumps.custody,
        authority_bump: ctx.bumps.custody_authority,
    };

    ctx.accounts
        .escrow
        .open(&terms, &addresses, clock.unix_timestamp)?;

    // Fund custody in the same transaction as the record write
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.sender_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.custody.to_account_info(),
                authority: ctx.accounts.sender.to_account_info(),
            },
        ),
        total_amount,
        ctx.accounts.mint.decimals,
    )?;

    // Transfer-fee mints would leave custody short of the recorded total
    ctx.accounts.custody.reload()?;
    require!(
        ctx.accounts.custody.amount >= total_amount,
        EscrowError::CustodyShortfall
    );

    emit!(crate::events::VestingCreated {
        escrow: escrow_key,
        sender: sender_key,
        recipient,
        mint: mint_key,
        custody: custody_key,
        total_amount,
        start_time,
        end_time,
        unlock_interval,
    });

    msg!(
        "Vesting {} created: {} -> {}, amount={}, schedule=[{}, {}] every {}s",
        escrow_key,
        sender_key,
        recipient,
        total_amount,
        start_time,
        end_time,
        unlock_interval
    );
    Ok(())
}
