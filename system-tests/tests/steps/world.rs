// system-tests/tests/steps/world.rs
// ============================================================================
// Module: Scenario World
// Description: Shared mutable state threaded through acceptance steps.
// Purpose: Carry the client, roster identities, and in-flight artifacts.
// Dependencies: cucumber, hedera, ledger-gate-client, ledger-gate-config
// ============================================================================

//! ## Overview
//! Each scenario gets a fresh world. The world resolves roster fixtures into
//! signing identities on demand, lazily connects the SDK client for the
//! configured network profile, and holds the ids and pending transactions
//! that later steps assert against.

#![allow(
    clippy::expect_used,
    reason = "Steps fail a scenario by panicking; expect carries the step context."
)]

use std::fmt;

use cucumber::World;
use hedera::Client;
use hedera::KeyList;
use hedera::PrivateKey;
use hedera::TokenId;
use hedera::TopicId;
use hedera::TransactionId;
use hedera::TransferTransaction;
use ledger_gate_client::Operator;
use ledger_gate_client::client_for;
use ledger_gate_config::FixtureRoster;
use ledger_gate_config::NetworkProfile;
use system_tests::config::SystemTestConfig;

/// Decimal places used by the scenario token (`HTT`).
pub const TOKEN_DECIMALS: u32 = 2;

/// Per-scenario state shared between steps.
#[derive(World)]
#[world(init = Self::new)]
pub struct LedgerWorld {
    /// Network profile the scenario runs against.
    pub network: NetworkProfile,
    /// Fixture accounts backing the scenario roles.
    pub roster: FixtureRoster,
    /// Lazily connected SDK client.
    pub client: Option<Client>,
    /// First party (roster treasury), bound as the client operator.
    pub first: Option<Operator>,
    /// Second party.
    pub second: Option<Operator>,
    /// Third party.
    pub third: Option<Operator>,
    /// Fourth party.
    pub fourth: Option<Operator>,
    /// Threshold submit key built from the first and second party keys.
    pub submit_threshold: Option<KeyList>,
    /// Topic created by the scenario.
    pub topic_id: Option<TopicId>,
    /// Token created by the scenario.
    pub token_id: Option<TokenId>,
    /// Transfer built but not yet submitted.
    pub pending_transfer: Option<TransferTransaction>,
    /// Keys that must sign the pending transfer at submission.
    pub pending_signers: Vec<PrivateKey>,
    /// Id of the most recently submitted transfer.
    pub last_transaction_id: Option<TransactionId>,
}

impl LedgerWorld {
    /// Builds a fresh world from the environment configuration.
    ///
    /// # Panics
    ///
    /// Panics when the environment configuration or roster file is invalid;
    /// an acceptance run cannot proceed without valid fixtures.
    #[must_use]
    pub fn new() -> Self {
        let config = SystemTestConfig::load().expect("system test environment is valid");
        let roster = match config.accounts_file {
            Some(path) => FixtureRoster::load_from_path(&path).expect("roster file is valid"),
            None => FixtureRoster::default(),
        };
        Self {
            network: config.network.unwrap_or_default(),
            roster,
            client: None,
            first: None,
            second: None,
            third: None,
            fourth: None,
            submit_threshold: None,
            topic_id: None,
            token_id: None,
            pending_transfer: None,
            pending_signers: Vec::new(),
            last_transaction_id: None,
        }
    }

    /// Returns the SDK client, connecting on first use.
    pub fn client(&mut self) -> Client {
        if self.client.is_none() {
            self.client = Some(client_for(self.network));
        }
        self.client.clone().expect("client connected above")
    }

    /// Resolves the first party, binds it as the client operator, and caches
    /// it for later steps.
    pub fn bind_first(&mut self) -> Operator {
        let fixture = self.roster.treasury().expect("roster provides a first account").clone();
        let operator = Operator::from_fixture(&fixture).expect("first account fixture parses");
        let client = self.client();
        operator.bind(&client);
        self.first = Some(operator.clone());
        operator
    }

    /// Resolves and caches the second party.
    pub fn resolve_second(&mut self) -> Operator {
        let fixture = self.roster.second().expect("roster provides a second account").clone();
        let operator = Operator::from_fixture(&fixture).expect("second account fixture parses");
        self.second = Some(operator.clone());
        operator
    }

    /// Resolves and caches the third party.
    pub fn resolve_third(&mut self) -> Operator {
        let fixture = self.roster.third().expect("roster provides a third account").clone();
        let operator = Operator::from_fixture(&fixture).expect("third account fixture parses");
        self.third = Some(operator.clone());
        operator
    }

    /// Resolves and caches the fourth party.
    pub fn resolve_fourth(&mut self) -> Operator {
        let fixture = self.roster.fourth().expect("roster provides a fourth account").clone();
        let operator = Operator::from_fixture(&fixture).expect("fourth account fixture parses");
        self.fourth = Some(operator.clone());
        operator
    }

    /// Resolves the sink account used to park excess treasury supply.
    pub fn sink(&self) -> Operator {
        let fixture = self.roster.operator().expect("roster provides a sink account");
        Operator::from_fixture(fixture).expect("sink account fixture parses")
    }

    /// Returns the cached first party.
    pub fn first(&self) -> Operator {
        self.first.clone().expect("a first-account step ran earlier in the scenario")
    }

    /// Returns the cached second party.
    pub fn second(&self) -> Operator {
        self.second.clone().expect("a second-account step ran earlier in the scenario")
    }

    /// Returns the cached third party.
    pub fn third(&self) -> Operator {
        self.third.clone().expect("a third-account step ran earlier in the scenario")
    }

    /// Returns the cached fourth party.
    pub fn fourth(&self) -> Operator {
        self.fourth.clone().expect("a fourth-account step ran earlier in the scenario")
    }

    /// Returns the topic created earlier in the scenario.
    pub fn topic_id(&self) -> TopicId {
        self.topic_id.expect("a topic-creation step ran earlier in the scenario")
    }

    /// Returns the token created earlier in the scenario.
    pub fn token_id(&self) -> TokenId {
        self.token_id.expect("a token-creation step ran earlier in the scenario")
    }
}

impl Default for LedgerWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LedgerWorld {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LedgerWorld")
            .field("network", &self.network)
            .field("first", &self.first.as_ref().map(|operator| operator.account_id))
            .field("second", &self.second.as_ref().map(|operator| operator.account_id))
            .field("third", &self.third.as_ref().map(|operator| operator.account_id))
            .field("fourth", &self.fourth.as_ref().map(|operator| operator.account_id))
            .field("topic_id", &self.topic_id)
            .field("token_id", &self.token_id)
            .field("pending_transfer", &self.pending_transfer.is_some())
            .field("last_transaction_id", &self.last_transaction_id)
            .finish_non_exhaustive()
    }
}
