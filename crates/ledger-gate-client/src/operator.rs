// crates/ledger-gate-client/src/operator.rs
// ============================================================================
// Module: Operator Bootstrap
// Description: SDK client construction and operator account binding.
// Purpose: Turn fixture accounts into signing identities on a live client.
// Dependencies: hedera, ledger-gate-config
// ============================================================================

//! ## Overview
//! A scenario starts by binding a roster fixture as the client operator: the
//! account that pays for and signs submitted transactions by default. Key
//! material in the roster is DER hex; the SDK detects ED25519 versus ECDSA
//! from the DER prefix during parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use hedera::AccountBalanceQuery;
use hedera::AccountId;
use hedera::Client;
use hedera::PrivateKey;
use hedera::PublicKey;
use ledger_gate_config::AccountFixture;
use ledger_gate_config::NetworkProfile;

use crate::error::HarnessError;
use crate::units::whole_hbar_to_tinybar;

// ============================================================================
// SECTION: Client Construction
// ============================================================================

/// Builds an SDK client for a named network profile.
#[must_use]
pub fn client_for(profile: NetworkProfile) -> Client {
    match profile {
        NetworkProfile::Testnet => Client::for_testnet(),
        NetworkProfile::Previewnet => Client::for_previewnet(),
        NetworkProfile::Mainnet => Client::for_mainnet(),
    }
}

// ============================================================================
// SECTION: Operator Identity
// ============================================================================

/// A fixture account resolved into SDK identity and key material.
#[derive(Debug, Clone)]
pub struct Operator {
    /// Ledger account id.
    pub account_id: AccountId,
    /// Private key controlling the account.
    pub private_key: PrivateKey,
}

impl Operator {
    /// Resolves a roster fixture into a usable operator identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the account id or DER private key does not
    /// parse.
    pub fn from_fixture(fixture: &AccountFixture) -> Result<Self, HarnessError> {
        let account_id = fixture.id.parse::<AccountId>()?;
        let private_key = fixture.private_key.parse::<PrivateKey>()?;
        Ok(Self {
            account_id,
            private_key,
        })
    }

    /// Returns the public half of the operator key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    /// Binds this identity as the client operator (default payer/signer).
    pub fn bind(&self, client: &Client) {
        client.set_operator(self.account_id, self.private_key.clone());
    }
}

// ============================================================================
// SECTION: Balance Queries
// ============================================================================

/// Queries an account's hbar balance in tinybar.
///
/// # Errors
///
/// Returns an error when the balance query fails.
pub async fn hbar_balance(client: &Client, account_id: AccountId) -> Result<i64, HarnessError> {
    let balance = AccountBalanceQuery::new().account_id(account_id).execute(client).await?;
    Ok(balance.hbars.to_tinybars())
}

/// Returns `true` when the account holds strictly more than `whole_hbar`.
///
/// # Errors
///
/// Returns an error when the balance query fails or the threshold is out of
/// range.
pub async fn has_more_than_hbar(
    client: &Client,
    account_id: AccountId,
    whole_hbar: u64,
) -> Result<bool, HarnessError> {
    let threshold = whole_hbar_to_tinybar(whole_hbar)?;
    Ok(hbar_balance(client, account_id).await? > threshold)
}
