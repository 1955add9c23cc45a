//! Keyless signing authority over a record's custody token account.
//!
//! A `CustodyAuthority` can only be built inside this crate from a vesting
//! record's own address and its stored authority bump. It is never persisted
//! and never handed to sender or recipient; `withdraw_unlocked` uses it to
//! sign the outbound transfer and drops it.

use anchor_lang::prelude::*;

use crate::constants::CUSTODY_AUTHORITY_SEED;
use crate::state::VestingEscrow;

pub(crate) struct CustodyAuthority {
    escrow: Pubkey,
    bump: [u8; 1],
}

impl CustodyAuthority {
    pub(crate) fn for_escrow(escrow: Pubkey, record: &VestingEscrow) -> Self {
        Self {
            escrow,
            bump: [record.authority_bump],
        }
    }

    /// Address this authority signs as.
    pub(crate) fn address(&self, program_id: &Pubkey) -> Option<Pubkey> {
        Pubkey::create_program_address(&self.seeds(), program_id).ok()
    }

    /// Signer seeds for `CpiContext::new_with_signer`.
    pub(crate) fn seeds(&self) -> [&[u8]; 3] {
        [CUSTODY_AUTHORITY_SEED, self.escrow.as_ref(), &self.bump]
    }
}
