//! Instruction handlers

#![allow(ambiguous_glob_reexports)]

pub mod create_vesting;
pub mod query_record;
pub mod withdraw_unlocked;

pub use create_vesting::*;
pub use query_record::*;
pub use withdraw_unlocked::*;
