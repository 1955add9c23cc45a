//! Program deployment and clock helpers for vesting-escrow tests.

use litesvm::LiteSVM;
use solana_clock::Clock;
use solana_pubkey::Pubkey;

use super::pda::to_sdk;

/// Vesting escrow program ID (from `declare_id!`)
pub fn vesting_program_id() -> Pubkey {
    to_sdk(&vesting_escrow::ID)
}

/// Deploy the vesting escrow program
pub fn deploy_vesting_program(svm: &mut LiteSVM) -> Pubkey {
    let program_id = vesting_program_id();
    let program_data = include_bytes!("../../../../target/deploy/vesting_escrow.so");
    let _ = svm.add_program(program_id, program_data);
    program_id
}

/// Move the cluster clock to `unix_timestamp`
pub fn set_unix_timestamp(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar::<Clock>(&clock);
}
