// crates/ledger-gate-config/src/accounts.rs
// ============================================================================
// Module: Account Fixtures
// Description: Funded test-network account roster for acceptance scenarios.
// Purpose: Provide validated fixture accounts with stable role positions.
// Dependencies: serde, toml, thiserror
// ============================================================================

//! ## Overview
//! Scenarios run against a roster of pre-funded test-network accounts. The
//! built-in roster targets the public testnet; an alternate roster can be
//! loaded from a TOML file. Role positions are fixed: index 0 is the
//! treasury, index 1 the second party, indexes 2 and 3 the third and fourth
//! parties, and index 4 the designated operator/sink account.
//!
//! Roster files are untrusted. Parsing enforces size, count, and shape
//! limits and fails closed on any violation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum roster file size in bytes.
pub const MAX_ROSTER_FILE_SIZE: u64 = 64 * 1024;
/// Maximum number of accounts accepted from a roster file.
pub const MAX_ROSTER_ACCOUNTS: usize = 32;
/// Minimum hex length of a DER-encoded private key.
pub const MIN_KEY_HEX_LENGTH: usize = 64;
/// Maximum hex length of a DER-encoded private key.
pub const MAX_KEY_HEX_LENGTH: usize = 256;

/// Roster positions required by the multi-account scenarios.
const REQUIRED_ROLES: usize = 5;

/// Built-in roster of funded public-testnet accounts.
///
/// Keys are DER-encoded hex; the roster mixes ED25519 and ECDSA secp256k1
/// keys, which the harness detects from the DER prefix at parse time.
const DEFAULT_ROSTER: [(&str, &str); 6] = [
    (
        "0.0.5852234",
        "302e020100300506032b657004220420d5ddd671887828efdab63e3bd8088aa51fb0f0aa38241d3ea242c67c5a5c1996",
    ),
    (
        "0.0.5852515",
        "3030020100300706052b8104000a04220420a4db8f65685cf4a5a9b6ca217dde2ee0ba37b4b8ee15b98ee088184eb5c4f4b5",
    ),
    (
        "0.0.4482933",
        "302e020100300506032b657004220420ddbcd2dd06b944a760866253bcac98a73e536e5c4447081dfa773971fe33ec18",
    ),
    (
        "0.0.4482934",
        "302e020100300506032b6570042204206be6a20416741195b268b2dd6fd5584d141b2bdd07b4126c31a1925d425631cc",
    ),
    (
        "0.0.4482935",
        "302e020100300506032b657004220420e6ea695940d0e2a2d747d0cff1ee65c0a48688c8c7381596ee738a0f8e891413",
    ),
    (
        "0.0.4482936",
        "302e020100300506032b6570042204200ad3d773e73089909b27a486db9a054402c96ad1ab413c49ef669ae9df509070",
    ),
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or validating a fixture roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file could not be read.
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    /// Roster file exceeds the size limit.
    #[error("roster file is {actual} bytes; limit is {limit}")]
    FileTooLarge {
        /// Observed file size in bytes.
        actual: u64,
        /// Maximum accepted size in bytes.
        limit: u64,
    },
    /// Roster file is not valid TOML.
    #[error("failed to parse roster file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Roster contains no accounts.
    #[error("roster must contain at least one account")]
    Empty,
    /// Roster contains more accounts than the limit.
    #[error("roster lists {actual} accounts; limit is {limit}")]
    TooManyAccounts {
        /// Observed account count.
        actual: usize,
        /// Maximum accepted count.
        limit: usize,
    },
    /// An account id is not of the `shard.realm.num` form.
    #[error("account id {0:?} is not of the form shard.realm.num")]
    InvalidAccountId(String),
    /// A private key is not plausible DER hex.
    #[error("private key for account {0} is not DER-encoded hex")]
    InvalidPrivateKey(String),
    /// A scenario role has no backing account at its roster position.
    #[error("roster has no account for the {role} role (index {index})")]
    MissingRole {
        /// Human-readable role name.
        role: &'static str,
        /// Roster index the role maps to.
        index: usize,
    },
}

// ============================================================================
// SECTION: Fixture Types
// ============================================================================

/// A single funded test-network account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFixture {
    /// Account id in `shard.realm.num` form.
    pub id: String,
    /// DER-encoded private key as hex.
    pub private_key: String,
}

/// On-disk roster file shape.
#[derive(Debug, Deserialize)]
struct RosterFile {
    /// Listed accounts, in role order.
    accounts: Vec<AccountFixture>,
}

/// Ordered roster of fixture accounts with fixed role positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRoster {
    /// Accounts in role order.
    accounts: Vec<AccountFixture>,
}

impl Default for FixtureRoster {
    fn default() -> Self {
        Self {
            accounts: DEFAULT_ROSTER
                .iter()
                .map(|(id, key)| AccountFixture {
                    id: (*id).to_string(),
                    private_key: (*key).to_string(),
                })
                .collect(),
        }
    }
}

impl FixtureRoster {
    /// Builds a roster from explicit fixtures, applying full validation.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty, oversized, or contains a
    /// malformed account id or private key.
    pub fn new(accounts: Vec<AccountFixture>) -> Result<Self, RosterError> {
        validate_accounts(&accounts)?;
        Ok(Self {
            accounts,
        })
    }

    /// Loads and validates a roster from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is unreadable, oversized, not valid
    /// TOML, or fails account validation.
    pub fn load_from_path(path: &Path) -> Result<Self, RosterError> {
        let size = fs::metadata(path)?.len();
        if size > MAX_ROSTER_FILE_SIZE {
            return Err(RosterError::FileTooLarge {
                actual: size,
                limit: MAX_ROSTER_FILE_SIZE,
            });
        }
        let contents = fs::read_to_string(path)?;
        let file: RosterFile = toml::from_str(&contents)?;
        Self::new(file.accounts)
    }

    /// Returns the account at a roster position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AccountFixture> {
        self.accounts.get(index)
    }

    /// Returns the number of accounts in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` when the roster holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Returns the treasury account (roster index 0).
    ///
    /// # Errors
    ///
    /// Returns an error when the roster has no account at the position.
    pub fn treasury(&self) -> Result<&AccountFixture, RosterError> {
        self.role("treasury", 0)
    }

    /// Returns the second party account (roster index 1).
    ///
    /// # Errors
    ///
    /// Returns an error when the roster has no account at the position.
    pub fn second(&self) -> Result<&AccountFixture, RosterError> {
        self.role("second", 1)
    }

    /// Returns the third party account (roster index 2).
    ///
    /// # Errors
    ///
    /// Returns an error when the roster has no account at the position.
    pub fn third(&self) -> Result<&AccountFixture, RosterError> {
        self.role("third", 2)
    }

    /// Returns the fourth party account (roster index 3).
    ///
    /// # Errors
    ///
    /// Returns an error when the roster has no account at the position.
    pub fn fourth(&self) -> Result<&AccountFixture, RosterError> {
        self.role("fourth", 3)
    }

    /// Returns the operator/sink account (roster index 4).
    ///
    /// # Errors
    ///
    /// Returns an error when the roster has no account at the position.
    pub fn operator(&self) -> Result<&AccountFixture, RosterError> {
        self.role("operator", 4)
    }

    /// Returns `true` when every scenario role has a backing account.
    #[must_use]
    pub fn covers_all_roles(&self) -> bool {
        self.accounts.len() >= REQUIRED_ROLES
    }

    /// Resolves a named role to its roster position.
    fn role(&self, role: &'static str, index: usize) -> Result<&AccountFixture, RosterError> {
        self.accounts.get(index).ok_or(RosterError::MissingRole {
            role,
            index,
        })
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates roster shape and every account entry.
fn validate_accounts(accounts: &[AccountFixture]) -> Result<(), RosterError> {
    if accounts.is_empty() {
        return Err(RosterError::Empty);
    }
    if accounts.len() > MAX_ROSTER_ACCOUNTS {
        return Err(RosterError::TooManyAccounts {
            actual: accounts.len(),
            limit: MAX_ROSTER_ACCOUNTS,
        });
    }
    for account in accounts {
        validate_account_id(&account.id)?;
        validate_private_key(account)?;
    }
    Ok(())
}

/// Checks that an account id parses as `shard.realm.num`.
fn validate_account_id(id: &str) -> Result<(), RosterError> {
    let mut parts = id.split('.');
    let shard = parts.next();
    let realm = parts.next();
    let num = parts.next();
    let extra = parts.next();
    let all_numeric = [shard, realm, num]
        .iter()
        .all(|part| part.is_some_and(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())));
    if extra.is_some() || !all_numeric {
        return Err(RosterError::InvalidAccountId(id.to_string()));
    }
    Ok(())
}

/// Checks that a private key is plausible DER hex within length bounds.
fn validate_private_key(account: &AccountFixture) -> Result<(), RosterError> {
    let key = account.private_key.as_str();
    let in_bounds = (MIN_KEY_HEX_LENGTH..=MAX_KEY_HEX_LENGTH).contains(&key.len());
    let hex = key.bytes().all(|b| b.is_ascii_hexdigit());
    if !in_bounds || !hex || key.len() % 2 != 0 {
        return Err(RosterError::InvalidPrivateKey(account.id.clone()));
    }
    Ok(())
}
