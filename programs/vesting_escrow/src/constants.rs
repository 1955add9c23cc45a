//! Program constants

/// Seed tag for the vesting record PDA: `["vesting", sender, recipient]`
pub const VESTING_SEED: &[u8] = b"vesting";

/// Seed tag for the custody token account PDA: `["custody", escrow]`
pub const CUSTODY_SEED: &[u8] = b"custody";

/// Seed tag for the custody signing authority PDA: `["custody-authority", escrow]`
pub const CUSTODY_AUTHORITY_SEED: &[u8] = b"custody-authority";

/// Smallest allowed unlock granularity (seconds)
pub const MIN_UNLOCK_INTERVAL: u64 = 1;
