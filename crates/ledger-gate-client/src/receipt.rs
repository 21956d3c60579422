// crates/ledger-gate-client/src/receipt.rs
// ============================================================================
// Module: Receipt Confirmation
// Description: Receipt fetching with and without status validation.
// Purpose: Make every scenario step receipt-confirmed before it proceeds.
// Dependencies: hedera
// ============================================================================

//! ## Overview
//! Every submitted transaction is receipt-confirmed. Steps that expect
//! success assert `SUCCESS` as a typed status; steps that expect a specific
//! failure fetch the receipt without validation so the failing status itself
//! can be asserted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use hedera::Client;
use hedera::Status;
use hedera::TransactionReceipt;
use hedera::TransactionReceiptQuery;
use hedera::TransactionResponse;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Receipt Helpers
// ============================================================================

/// Fetches the consensus receipt for a response without status validation.
///
/// # Errors
///
/// Returns an error when the receipt query itself fails; a failed consensus
/// status is returned in the receipt, not as an error.
pub async fn receipt_without_validation(
    client: &Client,
    response: &TransactionResponse,
) -> Result<TransactionReceipt, HarnessError> {
    let receipt = TransactionReceiptQuery::new()
        .transaction_id(response.transaction_id)
        .validate_status(false)
        .execute(client)
        .await?;
    Ok(receipt)
}

/// Fetches the receipt for a response and requires a `SUCCESS` status.
///
/// # Errors
///
/// Returns an error when the receipt query fails or the transaction reached
/// consensus with any status other than `SUCCESS`.
pub async fn expect_success(
    client: &Client,
    response: &TransactionResponse,
    transaction: &'static str,
) -> Result<TransactionReceipt, HarnessError> {
    let receipt = receipt_without_validation(client, response).await?;
    if receipt.status != Status::Success {
        return Err(HarnessError::UnexpectedStatus {
            transaction,
            status: receipt.status,
        });
    }
    Ok(receipt)
}
