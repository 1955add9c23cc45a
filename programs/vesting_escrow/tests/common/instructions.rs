//! Vesting escrow instruction helpers.
//!
//! Instruction data and account lists come from the program's own generated
//! `instruction` and `accounts` modules, so the tests follow any change to the
//! handler signatures.

use anchor_lang::prelude::AccountMeta as AnchorAccountMeta;
use anchor_lang::{InstructionData, ToAccountMetas};
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_instruction::{AccountMeta, Instruction};
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;
use vesting_escrow::error::EscrowError;

use super::pda::{
    spl_token_program_id, system_program_id, to_anchor, to_sdk, vesting_addresses,
    VestingAddresses,
};
use super::setup::vesting_program_id;

fn to_sdk_metas(metas: Vec<AnchorAccountMeta>) -> Vec<AccountMeta> {
    metas
        .into_iter()
        .map(|meta| AccountMeta {
            pubkey: to_sdk(&meta.pubkey),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect()
}

/// Vesting terms as passed to `create_vesting`
#[derive(Clone, Copy, Debug)]
pub struct Schedule {
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub unlock_interval: u64,
}

// ============================================================================
// create_vesting
// ============================================================================

pub fn create_vesting_ix(
    sender: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    sender_token_account: &Pubkey,
    schedule: Schedule,
) -> Instruction {
    let addresses = vesting_addresses(sender, recipient);
    let accounts = vesting_escrow::accounts::CreateVesting {
        sender: to_anchor(sender),
        mint: to_anchor(mint),
        sender_token_account: to_anchor(sender_token_account),
        escrow: to_anchor(&addresses.escrow),
        custody_authority: to_anchor(&addresses.custody_authority),
        custody: to_anchor(&addresses.custody),
        token_program: to_anchor(&spl_token_program_id()),
        system_program: to_anchor(&system_program_id()),
    };
    let data = vesting_escrow::instruction::CreateVesting {
        recipient: to_anchor(recipient),
        total_amount: schedule.total_amount,
        start_time: schedule.start_time,
        end_time: schedule.end_time,
        unlock_interval: schedule.unlock_interval,
    };

    Instruction {
        program_id: vesting_program_id(),
        accounts: to_sdk_metas(accounts.to_account_metas(None)),
        data: data.data(),
    }
}

/// Create a vesting record signed and paid for by `sender`.
pub fn create_vesting(
    svm: &mut LiteSVM,
    sender: &Keypair,
    recipient: &Pubkey,
    mint: &Pubkey,
    sender_token_account: &Pubkey,
    schedule: Schedule,
) -> TransactionResult {
    let ix = create_vesting_ix(
        &sender.pubkey(),
        recipient,
        mint,
        sender_token_account,
        schedule,
    );
    send(svm, ix, sender)
}

// ============================================================================
// withdraw_unlocked
// ============================================================================

/// Accounts a withdraw presents. Tests substitute individual fields to
/// simulate forged requests.
#[derive(Clone, Copy, Debug)]
pub struct WithdrawAccounts {
    pub escrow: Pubkey,
    pub custody: Pubkey,
    pub custody_authority: Pubkey,
    pub recipient_token_account: Pubkey,
    pub mint: Pubkey,
}

impl WithdrawAccounts {
    pub fn honest(
        addresses: VestingAddresses,
        recipient_token_account: Pubkey,
        mint: Pubkey,
    ) -> Self {
        Self {
            escrow: addresses.escrow,
            custody: addresses.custody,
            custody_authority: addresses.custody_authority,
            recipient_token_account,
            mint,
        }
    }
}

pub fn withdraw_unlocked_ix(recipient: &Pubkey, accounts: WithdrawAccounts) -> Instruction {
    let metas = vesting_escrow::accounts::WithdrawUnlocked {
        recipient: to_anchor(recipient),
        escrow: to_anchor(&accounts.escrow),
        custody: to_anchor(&accounts.custody),
        custody_authority: to_anchor(&accounts.custody_authority),
        recipient_token_account: to_anchor(&accounts.recipient_token_account),
        mint: to_anchor(&accounts.mint),
        token_program: to_anchor(&spl_token_program_id()),
    };

    Instruction {
        program_id: vesting_program_id(),
        accounts: to_sdk_metas(metas.to_account_metas(None)),
        data: vesting_escrow::instruction::WithdrawUnlocked {}.data(),
    }
}

/// Withdraw as `caller`, who also pays the fee.
pub fn withdraw_unlocked(
    svm: &mut LiteSVM,
    caller: &Keypair,
    accounts: WithdrawAccounts,
) -> TransactionResult {
    let ix = withdraw_unlocked_ix(&caller.pubkey(), accounts);
    send(svm, ix, caller)
}

/// Amount a successful withdraw reported through return data.
pub fn withdrawn_amount(result: &TransactionResult) -> u64 {
    let meta = result.as_ref().expect("withdraw should succeed");
    u64::from_le_bytes(meta.return_data.data[..8].try_into().unwrap())
}

// ============================================================================
// Transactions
// ============================================================================

fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    // Identical follow-up transactions must not be deduplicated
    svm.expire_blockhash();
    result
}

/// Assert that a transaction failed with the given program error.
pub fn assert_escrow_error(result: &TransactionResult, expected: EscrowError) {
    let code = u32::from(expected);
    match result {
        Ok(_) => panic!("expected {:?} ({}), transaction succeeded", expected, code),
        Err(failed) => {
            let rendered = format!("{:?}", failed.err);
            assert!(
                rendered.contains(&format!("Custom({})", code)),
                "expected {:?} ({}), got {}",
                expected,
                code,
                rendered
            );
        }
    }
}
