// crates/ledger-gate-client/src/lib.rs
// ============================================================================
// Module: Ledger Gate Client
// Description: Acceptance-harness layer over the vendor ledger SDK.
// Purpose: Provide shared call sequences for topic and token scenarios.
// Dependencies: hedera, ledger-gate-config, tokio, futures, time
// ============================================================================

//! ## Overview
//! This crate is the thin layer between the acceptance scenarios and the
//! vendor SDK. It owns no protocol logic: every function is a sequence of
//! SDK calls (build, freeze, sign, execute, fetch receipt) with the signing
//! order and receipt checks the scenarios depend on. Consensus, signing, and
//! wire formats remain vendor SDK responsibilities.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod operator;
pub mod receipt;
pub mod token;
pub mod topic;
pub mod units;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::HarnessError;
pub use operator::Operator;
pub use operator::client_for;
pub use operator::has_more_than_hbar;
pub use operator::hbar_balance;
pub use receipt::expect_success;
pub use receipt::receipt_without_validation;
