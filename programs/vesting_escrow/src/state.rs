//! Program state definitions

use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::helpers;
use crate::pda;

/// Vesting record PDA - one per (sender, recipient) agreement
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct VestingEscrow {
    /// Depositor who funded the escrow
    pub sender: Pubkey,
    /// Sole party allowed to withdraw
    pub recipient: Pubkey,
    /// Token mint held in custody
    pub mint: Pubkey,
    /// Total amount deposited at creation
    pub total_amount: u64,
    /// Cumulative amount already delivered to the recipient
    pub withdrawn_amount: u64,
    /// Schedule start (Unix timestamp, may be in the past)
    pub start_time: i64,
    /// Schedule end (Unix timestamp, >= start_time)
    pub end_time: i64,
    /// Unlock granularity in seconds
    pub unlock_interval: u64,
    /// Custody token account holding the undelivered balance
    pub custody: Pubkey,
    /// Clock reading when the record was created
    pub created_at: i64,
    /// Bump seed for the record PDA
    pub bump: u8,
    /// Bump seed for the custody token account PDA
    pub custody_bump: u8,
    /// Bump seed for the custody authority PDA
    pub authority_bump: u8,
}

impl VestingEscrow {
    pub const SIZE: usize = 8  // discriminator
        + 32  // sender
        + 32  // recipient
        + 32  // mint
        + 8   // total_amount
        + 8   // withdrawn_amount
        + 8   // start_time
        + 8   // end_time
        + 8   // unlock_interval
        + 32  // custody
        + 8   // created_at
        + 1   // bump
        + 1   // custody_bump
        + 1;  // authority_bump
}

/// Parameters of a new vesting agreement
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingTerms {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub unlock_interval: u64,
}

/// PDA bumps and the custody address resolved for a new record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowAddresses {
    pub custody: Pubkey,
    pub bump: u8,
    pub custody_bump: u8,
    pub authority_bump: u8,
}

/// Read-only view returned by `query_record`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingQuote {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub withdrawn_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub unlock_interval: u64,
    pub custody: Pubkey,
    pub created_at: i64,
    /// Cumulative unlock as of the query
    pub unlocked_amount: u64,
    /// Amount a withdraw would deliver right now
    pub withdrawable_amount: u64,
    /// Token balance observed in the custody account
    pub custody_balance: u64,
    /// Next time the unlocked amount grows (None once matured)
    pub next_unlock_time: Option<i64>,
}

impl VestingEscrow {
    /// A live record always has a non-zero total.
    pub fn is_initialized(&self) -> bool {
        self.total_amount > 0
    }

    pub fn is_fully_withdrawn(&self) -> bool {
        helpers::is_fully_withdrawn(self.total_amount, self.withdrawn_amount)
    }

    /// Balance the custody account must hold while invariants hold.
    pub fn remaining_amount(&self) -> u64 {
        self.total_amount.saturating_sub(self.withdrawn_amount)
    }

    pub fn unlocked_at(&self, now: i64) -> std::result::Result<u64, EscrowError> {
        helpers::unlocked_amount(
            self.total_amount,
            self.start_time,
            self.end_time,
            self.unlock_interval,
            now,
        )
    }

    pub fn withdrawable_at(&self, now: i64) -> std::result::Result<u64, EscrowError> {
        helpers::deliverable_amount(self.unlocked_at(now)?, self.withdrawn_amount)
    }

    /// Write a fresh record. Parameters are validated before any field is
    /// touched; an already initialized record is never overwritten.
    pub fn open(
        &mut self,
        terms: &VestingTerms,
        addresses: &EscrowAddresses,
        now: i64,
    ) -> std::result::Result<(), EscrowError> {
        helpers::validate_schedule(
            terms.total_amount,
            terms.start_time,
            terms.end_time,
            terms.unlock_interval,
        )?;
        if self.is_initialized() {
            return Err(EscrowError::DuplicateRecord);
        }

        *self = Self {
            sender: terms.sender,
            recipient: terms.recipient,
            mint: terms.mint,
            total_amount: terms.total_amount,
            withdrawn_amount: 0,
            start_time: terms.start_time,
            end_time: terms.end_time,
            unlock_interval: terms.unlock_interval,
            custody: addresses.custody,
            created_at: now,
            bump: addresses.bump,
            custody_bump: addresses.custody_bump,
            authority_bump: addresses.authority_bump,
        };
        Ok(())
    }

    /// Caller must be the stored recipient, and `escrow` must be the address
    /// derived from this record's own `(sender, recipient)` pair.
    pub fn authorize_withdrawal(
        &self,
        program_id: &Pubkey,
        escrow: &Pubkey,
        caller: &Pubkey,
    ) -> std::result::Result<(), EscrowError> {
        if !self.is_initialized() || *caller != self.recipient {
            return Err(EscrowError::Unauthorized);
        }
        let expected =
            pda::vesting_address_with_bump(program_id, &self.sender, &self.recipient, self.bump)
                .ok_or(EscrowError::Unauthorized)?;
        if expected != *escrow {
            return Err(EscrowError::Unauthorized);
        }
        Ok(())
    }

    /// Custody account supplied to withdraw must be the one bound at creation.
    pub fn check_custody(
        &self,
        program_id: &Pubkey,
        escrow: &Pubkey,
        custody: &Pubkey,
    ) -> std::result::Result<(), EscrowError> {
        let expected = pda::custody_address_with_bump(program_id, escrow, self.custody_bump)
            .ok_or(EscrowError::InvalidCustodyAccount)?;
        if expected != *custody || self.custody != *custody {
            return Err(EscrowError::InvalidCustodyAccount);
        }
        Ok(())
    }

    /// Advance `withdrawn_amount` to the cumulative unlock at `now` and
    /// return the delta to pay out. Leaves the record untouched on error.
    pub fn settle(&mut self, now: i64) -> std::result::Result<u64, EscrowError> {
        let unlocked = self.unlocked_at(now)?;
        let deliverable = helpers::deliverable_amount(unlocked, self.withdrawn_amount)?;
        if deliverable == 0 {
            return Err(EscrowError::NothingUnlocked);
        }
        if unlocked > self.total_amount {
            return Err(EscrowError::ArithmeticOverflow);
        }
        self.withdrawn_amount = unlocked;
        Ok(deliverable)
    }

    pub fn quote(
        &self,
        now: i64,
        custody_balance: u64,
    ) -> std::result::Result<VestingQuote, EscrowError> {
        let unlocked_amount = self.unlocked_at(now)?;
        Ok(VestingQuote {
            sender: self.sender,
            recipient: self.recipient,
            mint: self.mint,
            total_amount: self.total_amount,
            withdrawn_amount: self.withdrawn_amount,
            start_time: self.start_time,
            end_time: self.end_time,
            unlock_interval: self.unlock_interval,
            custody: self.custody,
            created_at: self.created_at,
            unlocked_amount,
            withdrawable_amount: helpers::deliverable_amount(
                unlocked_amount,
                self.withdrawn_amount,
            )?,
            custody_balance,
            next_unlock_time: helpers::next_unlock_time(
                self.start_time,
                self.end_time,
                self.unlock_interval,
                now,
            ),
        })
    }
}
