// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke System Tests
// Description: Connectivity and fixture checks against the live network.
// Purpose: Fail fast when the roster or network profile is unusable.
// Dependencies: system-tests helpers, ledger-gate-client, ledger-gate-config
// ============================================================================

//! ## Overview
//! Verifies the acceptance preconditions without running full scenarios: the
//! roster parses, every scenario role resolves to a reachable account, and
//! the first account is funded well enough to pay for a run.

use helpers::artifacts::TestReporter;
use ledger_gate_client::Operator;
use ledger_gate_client::client_for;
use ledger_gate_client::has_more_than_hbar;
use ledger_gate_client::hbar_balance;
use ledger_gate_config::FixtureRoster;
use ledger_gate_config::NetworkProfile;
use system_tests::config::SystemTestConfig;

use crate::helpers;

type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Minimum whole-hbar funding for the fee-paying first account.
const FIRST_ACCOUNT_FLOOR_HBAR: u64 = 10;

fn load_fixtures() -> Result<(NetworkProfile, FixtureRoster), DynError> {
    let config = SystemTestConfig::load()?;
    let roster = match config.accounts_file {
        Some(path) => FixtureRoster::load_from_path(&path)?,
        None => FixtureRoster::default(),
    };
    Ok((config.network.unwrap_or_default(), roster))
}

#[tokio::test(flavor = "multi_thread")]
async fn roster_roles_resolve_and_respond() -> Result<(), DynError> {
    let (network, roster) = load_fixtures()?;
    let mut reporter = TestReporter::new("roster_roles_resolve_and_respond", network.as_str())?;

    let client = client_for(network);
    let operator = Operator::from_fixture(roster.treasury()?)?;
    operator.bind(&client);

    let mut notes = Vec::new();
    for (role, fixture) in [
        ("treasury", roster.treasury()?),
        ("second", roster.second()?),
        ("third", roster.third()?),
        ("fourth", roster.fourth()?),
        ("operator", roster.operator()?),
    ] {
        let party = Operator::from_fixture(fixture)?;
        let balance = hbar_balance(&client, party.account_id).await?;
        notes.push(format!("{role} {} balance {balance} tinybar", party.account_id));
    }

    reporter.finish("pass", notes, Vec::new())?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn first_account_can_fund_a_run() -> Result<(), DynError> {
    let (network, roster) = load_fixtures()?;
    let mut reporter = TestReporter::new("first_account_can_fund_a_run", network.as_str())?;

    let client = client_for(network);
    let operator = Operator::from_fixture(roster.treasury()?)?;
    operator.bind(&client);

    let funded = has_more_than_hbar(&client, operator.account_id, FIRST_ACCOUNT_FLOOR_HBAR).await?;
    if !funded {
        reporter.finish(
            "fail",
            vec![format!(
                "first account {} holds {FIRST_ACCOUNT_FLOOR_HBAR} hbar or less",
                operator.account_id
            )],
            Vec::new(),
        )?;
        return Err("first account is underfunded for an acceptance run".into());
    }

    reporter.finish(
        "pass",
        vec![format!("first account {} exceeds {FIRST_ACCOUNT_FLOOR_HBAR} hbar", operator.account_id)],
        Vec::new(),
    )?;
    Ok(())
}
