//! Pure vesting arithmetic with no Anchor Context dependency.
//!
//! Every public function in this module is testable with `cargo test`.
//! Instruction handlers and the record transitions in `state.rs` delegate
//! schedule math here so that coverage reflects the actual unlock rules.

use crate::constants::MIN_UNLOCK_INTERVAL;
use crate::error::EscrowError;

// =========================================================================
// Schedule validation
// =========================================================================

/// Validate create parameters before any state is touched.
pub fn validate_schedule(
    total_amount: u64,
    start_time: i64,
    end_time: i64,
    unlock_interval: u64,
) -> Result<(), EscrowError> {
    if total_amount == 0 {
        return Err(EscrowError::InvalidSchedule);
    }
    if end_time < start_time {
        return Err(EscrowError::InvalidSchedule);
    }
    if unlock_interval < MIN_UNLOCK_INTERVAL {
        return Err(EscrowError::InvalidSchedule);
    }
    Ok(())
}

// =========================================================================
// Unlock curve
// =========================================================================

/// Cumulative amount unlocked as of `now`.
///
/// Linear between `start_time` and `end_time`, quantized down to whole
/// `unlock_interval` steps:
///
/// `floor(total * floor(elapsed / interval) * interval / duration)`
///
/// At or after `end_time` the full `total_amount` is unlocked, so nothing is
/// lost to rounding at maturity. The product is computed in `u64` and
/// overflow is reported, never wrapped.
///
/// Integrators: `total_amount * elapsed_seconds` must fit in `u64` for a
/// mid-schedule withdraw to succeed. 1M tokens at 9 decimals vested daily over
/// a year already exceeds it after the first day, and such a record can only be
/// withdrawn once `end_time` is reached.
pub fn unlocked_amount(
    total_amount: u64,
    start_time: i64,
    end_time: i64,
    unlock_interval: u64,
    now: i64,
) -> Result<u64, EscrowError> {
    if now < start_time {
        return Ok(0);
    }
    if now >= end_time {
        return Ok(total_amount);
    }
    if unlock_interval == 0 {
        return Err(EscrowError::InvalidSchedule);
    }

    // start_time <= now < end_time here, so both spans are positive.
    let elapsed = span(start_time, now)?;
    let duration = span(start_time, end_time)?;

    let quantized = (elapsed / unlock_interval)
        .checked_mul(unlock_interval)
        .ok_or(EscrowError::ArithmeticOverflow)?;

    total_amount
        .checked_mul(quantized)
        .ok_or(EscrowError::ArithmeticOverflow)?
        .checked_div(duration)
        .ok_or(EscrowError::ArithmeticOverflow)
}

/// Amount a withdraw may deliver given the cumulative unlock and what has
/// already left custody.
pub fn deliverable_amount(unlocked: u64, withdrawn: u64) -> Result<u64, EscrowError> {
    unlocked
        .checked_sub(withdrawn)
        .ok_or(EscrowError::ArithmeticOverflow)
}

/// Next timestamp strictly after `now` at which the unlocked amount can grow.
///
/// Returns `None` once the schedule has matured.
pub fn next_unlock_time(
    start_time: i64,
    end_time: i64,
    unlock_interval: u64,
    now: i64,
) -> Option<i64> {
    if now >= end_time {
        return None;
    }
    if now < start_time {
        return Some(start_time);
    }
    if unlock_interval == 0 {
        return None;
    }

    let elapsed = span(start_time, now).ok()?;
    let steps = (elapsed / unlock_interval).checked_add(1)?;
    let offset = steps.checked_mul(unlock_interval)?;
    let boundary = start_time.checked_add(i64::try_from(offset).ok()?)?;
    Some(boundary.min(end_time))
}

/// Whether every unit of the schedule has been paid out.
pub fn is_fully_withdrawn(total_amount: u64, withdrawn_amount: u64) -> bool {
    withdrawn_amount >= total_amount
}

/// Non-negative distance `to - from` as `u64`.
///
/// Any two `i64` values are at most `u64::MAX` apart, so only a negative
/// distance is rejected.
fn span(from: i64, to: i64) -> Result<u64, EscrowError> {
    let diff = i128::from(to) - i128::from(from);
    u64::try_from(diff).map_err(|_| EscrowError::ArithmeticOverflow)
}
