// system-tests/src/lib.rs
// ============================================================================
// Module: Ledger Gate System Tests Library
// Description: Shared configuration and helpers for acceptance scenarios.
// Purpose: Provide common utilities for Ledger Gate system-test binaries.
// Dependencies: ledger-gate-config
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the Ledger Gate acceptance
//! binaries in `system-tests/tests`. Network-touching binaries are gated
//! behind the `system-tests` cargo feature; environment inputs are untrusted
//! and parsed fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
