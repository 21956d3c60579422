// crates/ledger-gate-config/src/lib.rs
// ============================================================================
// Module: Ledger Gate Configuration
// Description: Fixture and network configuration for the acceptance suite.
// Purpose: Provide strict, fail-closed fixture loading for ledger tests.
// Dependencies: serde, toml, thiserror
// ============================================================================

//! ## Overview
//! This crate owns the configuration surface of the Ledger Gate acceptance
//! suite: the roster of funded test-network accounts the scenarios run
//! against, and the network profile the vendor SDK client is built for.
//! Roster files are untrusted input and are parsed with hard limits; invalid
//! configuration fails closed rather than falling back to defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod accounts;
pub mod network;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use accounts::AccountFixture;
pub use accounts::FixtureRoster;
pub use accounts::RosterError;
pub use network::NetworkProfile;
pub use network::NetworkProfileError;
