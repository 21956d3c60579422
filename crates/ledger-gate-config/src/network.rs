// crates/ledger-gate-config/src/network.rs
// ============================================================================
// Module: Network Profiles
// Description: Named ledger networks the acceptance suite can target.
// Purpose: Provide fail-closed selection of the SDK client network.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The suite targets the public testnet unless a profile override selects
//! another named network. Unknown names are rejected rather than silently
//! mapped to a default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Named ledger network a client can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkProfile {
    /// Public test network (default).
    #[default]
    Testnet,
    /// Public preview network.
    Previewnet,
    /// Production network.
    Mainnet,
}

impl NetworkProfile {
    /// Returns the canonical profile name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised for unrecognized network profile names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network profile {0:?}; expected testnet, previewnet, or mainnet")]
pub struct NetworkProfileError(pub String);

impl FromStr for NetworkProfile {
    type Err = NetworkProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "previewnet" => Ok(Self::Previewnet),
            "mainnet" => Ok(Self::Mainnet),
            _ => Err(NetworkProfileError(value.to_string())),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
