//! Program Derived Address (PDA) helpers
//!
//! All escrow accounts hang off the vesting record, and the record itself is
//! keyed on the full `(sender, recipient)` pair:
//!
//! - vesting record:    `["vesting", sender, recipient]`
//! - custody account:   `["custody", escrow]`
//! - custody authority: `["custody-authority", escrow]`
//!
//! Keying the record on the recipient alone would let anyone who names
//! themselves as recipient reach a record created for someone else.

use anchor_lang::prelude::*;

use crate::constants::{CUSTODY_AUTHORITY_SEED, CUSTODY_SEED, VESTING_SEED};

pub fn find_vesting_address(
    program_id: &Pubkey,
    sender: &Pubkey,
    recipient: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VESTING_SEED, sender.as_ref(), recipient.as_ref()],
        program_id,
    )
}

pub fn find_custody_address(program_id: &Pubkey, escrow: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_SEED, escrow.as_ref()], program_id)
}

pub fn find_custody_authority(program_id: &Pubkey, escrow: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_AUTHORITY_SEED, escrow.as_ref()], program_id)
}

/// Re-derive the record address from its stored parties and bump.
///
/// Returns `None` when the seeds with this bump land on the curve.
pub fn vesting_address_with_bump(
    program_id: &Pubkey,
    sender: &Pubkey,
    recipient: &Pubkey,
    bump: u8,
) -> Option<Pubkey> {
    Pubkey::create_program_address(
        &[VESTING_SEED, sender.as_ref(), recipient.as_ref(), &[bump]],
        program_id,
    )
    .ok()
}

/// Re-derive the custody token account address from the record address and bump.
pub fn custody_address_with_bump(program_id: &Pubkey, escrow: &Pubkey, bump: u8) -> Option<Pubkey> {
    Pubkey::create_program_address(&[CUSTODY_SEED, escrow.as_ref(), &[bump]], program_id).ok()
}
