// crates/ledger-gate-client/src/token.rs
// ============================================================================
// Module: Token Service Harness
// Description: Fungible-token call sequences for acceptance scenarios.
// Purpose: Create, mint, associate, transfer, and reconcile token state.
// Dependencies: hedera
// ============================================================================

//! ## Overview
//! Token scenarios follow the vendor SDK's multi-party signing order: build
//! the transaction, freeze it against the client, collect the required
//! signatures, execute, and confirm the receipt. All amounts at this layer
//! are token base units; scenario-facing whole amounts are scaled in
//! [`crate::units`].
//!
//! Reconciliation drives fixture accounts to exact balances before a
//! scenario's When steps run. On a shared, persistent test network accounts
//! keep state between runs, so Given steps reconcile rather than assert:
//! shortfalls are minted through the treasury's supply key and excess is
//! returned to the treasury (or parked with the sink account when the
//! treasury itself is reconciled).

// ============================================================================
// SECTION: Imports
// ============================================================================

use hedera::AccountBalanceQuery;
use hedera::AccountId;
use hedera::Client;
use hedera::Hbar;
use hedera::PrivateKey;
use hedera::Status;
use hedera::TokenAssociateTransaction;
use hedera::TokenCreateTransaction;
use hedera::TokenId;
use hedera::TokenInfo;
use hedera::TokenInfoQuery;
use hedera::TokenMintTransaction;
use hedera::TokenSupplyType;
use hedera::TokenType;
use hedera::TransactionId;
use hedera::TransactionRecordQuery;
use hedera::TransferTransaction;

use crate::error::HarnessError;
use crate::operator::Operator;
use crate::receipt::expect_success;
use crate::receipt::receipt_without_validation;

// ============================================================================
// SECTION: Token Creation
// ============================================================================

/// Creates a fungible token with an open supply and the treasury's key as
/// the supply key, returning the confirmed token id.
///
/// # Errors
///
/// Returns an error when the transaction fails, the receipt status is not
/// `SUCCESS`, or the receipt carries no token id.
pub async fn create_mintable_token(
    client: &Client,
    treasury: &Operator,
    name: &str,
    symbol: &str,
    decimals: u32,
    initial_supply: u64,
) -> Result<TokenId, HarnessError> {
    create_token(client, treasury, name, symbol, decimals, initial_supply, None).await
}

/// Creates a fixed-supply fungible token: the initial supply is also the
/// maximum, so any further mint must fail.
///
/// # Errors
///
/// Returns an error when the transaction fails, the receipt status is not
/// `SUCCESS`, or the receipt carries no token id.
pub async fn create_fixed_supply_token(
    client: &Client,
    treasury: &Operator,
    name: &str,
    symbol: &str,
    decimals: u32,
    supply: u64,
) -> Result<TokenId, HarnessError> {
    create_token(client, treasury, name, symbol, decimals, supply, Some(supply)).await
}

/// Shared create sequence: freeze, sign with the treasury key, execute,
/// confirm the receipt, extract the token id.
async fn create_token(
    client: &Client,
    treasury: &Operator,
    name: &str,
    symbol: &str,
    decimals: u32,
    initial_supply: u64,
    max_supply: Option<u64>,
) -> Result<TokenId, HarnessError> {
    let mut transaction = TokenCreateTransaction::new();
    transaction
        .name(name)
        .symbol(symbol)
        .decimals(decimals)
        .token_type(TokenType::FungibleCommon)
        .treasury_account_id(treasury.account_id)
        .supply_key(treasury.public_key())
        .initial_supply(initial_supply);
    if let Some(max) = max_supply {
        transaction.token_supply_type(TokenSupplyType::Finite).max_supply(max);
    }
    transaction.freeze_with(client)?;
    transaction.sign(treasury.private_key.clone());
    let response = transaction.execute(client).await?;
    let receipt = expect_success(client, &response, "token create").await?;
    receipt.token_id.ok_or(HarnessError::MissingReceiptField {
        transaction: "token create",
        field: "token id",
    })
}

// ============================================================================
// SECTION: Token Queries
// ============================================================================

/// Fetches the on-ledger info for a token.
///
/// # Errors
///
/// Returns an error when the info query fails.
pub async fn token_info(client: &Client, token_id: TokenId) -> Result<TokenInfo, HarnessError> {
    let info = TokenInfoQuery::new().token_id(token_id).execute(client).await?;
    Ok(info)
}

/// Queries an account's balance of a token in base units.
///
/// Accounts without a relationship to the token report zero.
///
/// # Errors
///
/// Returns an error when the balance query fails.
pub async fn token_balance(
    client: &Client,
    account_id: AccountId,
    token_id: TokenId,
) -> Result<u64, HarnessError> {
    let balance = AccountBalanceQuery::new().account_id(account_id).execute(client).await?;
    Ok(balance.tokens.get(&token_id).copied().unwrap_or(0))
}

// ============================================================================
// SECTION: Mint and Associate
// ============================================================================

/// Mints additional supply, signed by the supply key holder, and returns the
/// consensus status without validating it.
///
/// Callers assert `SUCCESS` or the expected failure status themselves; a
/// fixed-supply token reports the max-supply-reached status here rather than
/// an error.
///
/// # Errors
///
/// Returns an error when the transaction or receipt query itself fails.
pub async fn mint(
    client: &Client,
    supply_holder: &Operator,
    token_id: TokenId,
    amount: u64,
) -> Result<Status, HarnessError> {
    let mut transaction = TokenMintTransaction::new();
    transaction.token_id(token_id).amount(amount);
    transaction.freeze_with(client)?;
    transaction.sign(supply_holder.private_key.clone());
    let response = transaction.execute(client).await?;
    let receipt = receipt_without_validation(client, &response).await?;
    Ok(receipt.status)
}

/// Associates an account with a token, treating an existing association as
/// success so scenarios stay rerunnable on a persistent network.
///
/// # Errors
///
/// Returns an error when the transaction fails or the receipt reports any
/// status other than `SUCCESS` or already-associated.
pub async fn associate(
    client: &Client,
    account: &Operator,
    token_id: TokenId,
) -> Result<(), HarnessError> {
    let mut transaction = TokenAssociateTransaction::new();
    transaction.account_id(account.account_id).token_ids([token_id]);
    transaction.freeze_with(client)?;
    transaction.sign(account.private_key.clone());
    let response = transaction.execute(client).await?;
    let receipt = receipt_without_validation(client, &response).await?;
    match receipt.status {
        Status::Success | Status::TokenAlreadyAssociatedToAccount => Ok(()),
        status => Err(HarnessError::UnexpectedStatus {
            transaction: "token associate",
            status,
        }),
    }
}

// ============================================================================
// SECTION: Transfers
// ============================================================================

/// Builds an unfrozen debit/credit pair moving `amount` base units.
///
/// # Errors
///
/// Returns an error when the amount overflows the signed transfer range.
pub fn build_token_transfer(
    token_id: TokenId,
    from: AccountId,
    to: AccountId,
    amount: u64,
) -> Result<TransferTransaction, HarnessError> {
    build_multi_party_transfer(token_id, &[(from, amount)], &[(to, amount)])
}

/// Builds an unfrozen atomic transfer with several debits and credits.
///
/// The ledger requires the debit and credit legs to net to zero; callers
/// supply matching totals and every debited party signs before submission.
///
/// # Errors
///
/// Returns an error when any amount overflows the signed transfer range.
pub fn build_multi_party_transfer(
    token_id: TokenId,
    debits: &[(AccountId, u64)],
    credits: &[(AccountId, u64)],
) -> Result<TransferTransaction, HarnessError> {
    let mut transaction = TransferTransaction::new();
    for (account_id, amount) in debits {
        let signed = signed_amount(*amount)?;
        transaction.token_transfer(token_id, *account_id, -signed);
    }
    for (account_id, amount) in credits {
        let signed = signed_amount(*amount)?;
        transaction.token_transfer(token_id, *account_id, signed);
    }
    Ok(transaction)
}

/// Pins the transaction id to a payer account so that account funds the fee
/// regardless of who built the transfer.
pub fn assign_payer(transaction: &mut TransferTransaction, payer: AccountId) {
    transaction.transaction_id(TransactionId::generate(payer));
}

/// Freezes a built transfer, collects the given signatures, executes it, and
/// confirms the receipt. Returns the transaction id for fee assertions.
///
/// The client operator signs implicitly; a payer pinned with
/// [`assign_payer`] that is not the operator must have its key among the
/// signers.
///
/// # Errors
///
/// Returns an error when freezing or execution fails, or the receipt status
/// is not `SUCCESS`.
pub async fn sign_and_submit(
    client: &Client,
    mut transaction: TransferTransaction,
    signers: &[&PrivateKey],
    label: &'static str,
) -> Result<TransactionId, HarnessError> {
    transaction.freeze_with(client)?;
    for signer in signers {
        transaction.sign((*signer).clone());
    }
    let response = transaction.execute(client).await?;
    expect_success(client, &response, label).await?;
    Ok(response.transaction_id)
}

/// Moves `amount` base units between two accounts, signed by the sender.
///
/// # Errors
///
/// Returns an error when the transfer fails or is not receipt-confirmed as
/// `SUCCESS`.
pub async fn transfer_tokens(
    client: &Client,
    token_id: TokenId,
    from: &Operator,
    to: AccountId,
    amount: u64,
) -> Result<(), HarnessError> {
    let transaction = build_token_transfer(token_id, from.account_id, to, amount)?;
    sign_and_submit(client, transaction, &[&from.private_key], "token transfer").await?;
    Ok(())
}

/// Fetches the fee actually charged for a transaction from its record.
///
/// # Errors
///
/// Returns an error when the record query fails.
pub async fn transaction_fee(
    client: &Client,
    transaction_id: TransactionId,
) -> Result<Hbar, HarnessError> {
    let record = TransactionRecordQuery::new().transaction_id(transaction_id).execute(client).await?;
    Ok(record.transaction_fee)
}

// ============================================================================
// SECTION: Reconciliation
// ============================================================================

/// Drives a non-treasury holder to an exact base-unit balance.
///
/// Shortfalls are minted to the treasury and transferred over; excess is
/// returned to the treasury signed by the holder. The settled balance is
/// re-queried and must equal the target.
///
/// # Errors
///
/// Returns an error when any association, mint, transfer, or query fails,
/// or when the balance does not settle at the target.
pub async fn reconcile_holder_balance(
    client: &Client,
    treasury: &Operator,
    holder: &Operator,
    token_id: TokenId,
    target: u64,
) -> Result<(), HarnessError> {
    associate(client, holder, token_id).await?;
    let current = token_balance(client, holder.account_id, token_id).await?;
    if current < target {
        let shortfall = target - current;
        mint_for_reconciliation(client, treasury, token_id, shortfall).await?;
        transfer_tokens(client, token_id, treasury, holder.account_id, shortfall).await?;
    } else if current > target {
        transfer_tokens(client, token_id, holder, treasury.account_id, current - target).await?;
    }
    verify_settled(client, holder.account_id, token_id, target).await
}

/// Drives the treasury itself to an exact base-unit balance.
///
/// Excess is parked with the sink account; shortfalls are minted directly.
///
/// # Errors
///
/// Returns an error when any association, mint, transfer, or query fails,
/// or when the balance does not settle at the target.
pub async fn reconcile_treasury_balance(
    client: &Client,
    treasury: &Operator,
    sink: &Operator,
    token_id: TokenId,
    target: u64,
) -> Result<(), HarnessError> {
    let current = token_balance(client, treasury.account_id, token_id).await?;
    if current > target {
        associate(client, sink, token_id).await?;
        transfer_tokens(client, token_id, treasury, sink.account_id, current - target).await?;
    } else if current < target {
        mint_for_reconciliation(client, treasury, token_id, target - current).await?;
    }
    verify_settled(client, treasury.account_id, token_id, target).await
}

/// Mints reconciliation supply and requires the mint to succeed.
async fn mint_for_reconciliation(
    client: &Client,
    treasury: &Operator,
    token_id: TokenId,
    amount: u64,
) -> Result<(), HarnessError> {
    match mint(client, treasury, token_id, amount).await? {
        Status::Success => Ok(()),
        status => Err(HarnessError::UnexpectedStatus {
            transaction: "reconciliation mint",
            status,
        }),
    }
}

/// Re-queries a balance after reconciliation and requires the exact target.
async fn verify_settled(
    client: &Client,
    account_id: AccountId,
    token_id: TokenId,
    target: u64,
) -> Result<(), HarnessError> {
    let settled = token_balance(client, account_id, token_id).await?;
    if settled == target {
        Ok(())
    } else {
        Err(HarnessError::BalanceMismatch {
            account: account_id,
            actual: settled,
            expected: target,
        })
    }
}

/// Converts a base-unit amount to the signed range used by transfer legs.
fn signed_amount(amount: u64) -> Result<i64, HarnessError> {
    i64::try_from(amount).map_err(|_| HarnessError::AmountOverflow(amount))
}
