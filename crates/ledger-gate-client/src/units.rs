// crates/ledger-gate-client/src/units.rs
// ============================================================================
// Module: Amount Units
// Description: Tinybar and token base-unit conversions.
// Purpose: Keep scenario-facing whole amounts and wire amounts distinct.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Scenario text speaks in whole hbar and whole tokens; the SDK speaks in
//! tinybar and token base units. Conversions are checked; overflow is an
//! error rather than a wrap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::HarnessError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Tinybar per whole hbar.
pub const TINYBAR_PER_HBAR: i64 = 100_000_000;

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Converts a whole-token amount to base units for a token's decimals.
///
/// # Errors
///
/// Returns an error when the scaled amount overflows `u64`.
pub fn to_base_units(amount: u64, decimals: u32) -> Result<u64, HarnessError> {
    10u64
        .checked_pow(decimals)
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or(HarnessError::AmountOverflow(amount))
}

/// Converts a base-unit amount back to whole tokens, truncating dust.
#[must_use]
pub fn from_base_units(base_units: u64, decimals: u32) -> u64 {
    10u64.checked_pow(decimals).map_or(0, |scale| base_units / scale)
}

/// Converts a whole-hbar amount to tinybar.
///
/// # Errors
///
/// Returns an error when the amount overflows the tinybar range.
pub fn whole_hbar_to_tinybar(whole_hbar: u64) -> Result<i64, HarnessError> {
    i64::try_from(whole_hbar)
        .ok()
        .and_then(|value| value.checked_mul(TINYBAR_PER_HBAR))
        .ok_or(HarnessError::AmountOverflow(whole_hbar))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
