// crates/ledger-gate-client/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error type for acceptance-harness SDK call sequences.
// Purpose: Surface SDK, fixture, and postcondition failures distinctly.
// Dependencies: hedera, ledger-gate-config, thiserror
// ============================================================================

//! ## Overview
//! Harness operations return one error type. SDK transport and precheck
//! failures are wrapped; postcondition failures (unexpected receipt status,
//! missing receipt fields, balance mismatches) carry enough context for a
//! scenario failure message to stand on its own.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use hedera::AccountId;
use hedera::Status;
use ledger_gate_config::RosterError;
use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised by acceptance-harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A vendor SDK call failed (transport, precheck, or query error).
    #[error("ledger SDK call failed: {0}")]
    Sdk(#[from] hedera::Error),
    /// Fixture roster lookup or validation failed.
    #[error("fixture roster: {0}")]
    Roster(#[from] RosterError),
    /// A receipt lacked a field the scenario requires.
    #[error("receipt for {transaction} is missing the {field}")]
    MissingReceiptField {
        /// Transaction the receipt belongs to.
        transaction: &'static str,
        /// Field expected on the receipt.
        field: &'static str,
    },
    /// A transaction reached consensus with an unexpected status.
    #[error("{transaction} ended with status {status:?}")]
    UnexpectedStatus {
        /// Transaction label for diagnostics.
        transaction: &'static str,
        /// Consensus status returned in the receipt.
        status: Status,
    },
    /// The awaited topic message did not arrive before the deadline.
    #[error("timed out after {0:?} waiting for the topic message")]
    MessageTimeout(Duration),
    /// The mirror subscription ended before the expected message arrived.
    #[error("mirror stream closed before the expected message arrived")]
    StreamClosed,
    /// A token amount overflowed its base-unit representation.
    #[error("amount {0} overflows the token base-unit range")]
    AmountOverflow(u64),
    /// A reconciled balance did not settle at the target value.
    #[error("account {account} holds {actual} base units after reconciliation; expected {expected}")]
    BalanceMismatch {
        /// Account whose balance was reconciled.
        account: AccountId,
        /// Balance observed after reconciliation.
        actual: u64,
        /// Balance the scenario requires.
        expected: u64,
    },
}
