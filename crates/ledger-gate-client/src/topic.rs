// crates/ledger-gate-client/src/topic.rs
// ============================================================================
// Module: Topic Service Harness
// Description: Consensus-topic call sequences for acceptance scenarios.
// Purpose: Create topics, publish messages, and await mirror delivery.
// Dependencies: hedera, tokio, futures, time
// ============================================================================

//! ## Overview
//! Topic scenarios create a topic with a submit key (a single account key or
//! an N-of-M threshold key list), publish a message, and then wait for the
//! mirror node to deliver the same payload back. The wait races the mirror
//! subscription against a deadline; the first exact payload match resolves
//! it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use futures::StreamExt;
use futures::pin_mut;
use hedera::Client;
use hedera::Key;
use hedera::KeyList;
use hedera::PublicKey;
use hedera::TopicCreateTransaction;
use hedera::TopicId;
use hedera::TopicMessageQuery;
use hedera::TopicMessageSubmitTransaction;
use time::OffsetDateTime;

use crate::error::HarnessError;
use crate::receipt::expect_success;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default deadline for a published message to come back from the mirror.
pub const DEFAULT_MESSAGE_WAIT: Duration = Duration::from_secs(20);

// ============================================================================
// SECTION: Keys
// ============================================================================

/// Builds an N-of-M threshold key over the given public keys.
#[must_use]
pub fn threshold_key(keys: &[PublicKey], threshold: u32) -> KeyList {
    KeyList {
        keys: keys.iter().map(|key| Key::from(*key)).collect(),
        threshold: Some(threshold),
    }
}

// ============================================================================
// SECTION: Topic Operations
// ============================================================================

/// Creates a topic with a memo and submit key, returning its confirmed id.
///
/// # Errors
///
/// Returns an error when the transaction fails, the receipt status is not
/// `SUCCESS`, or the receipt carries no topic id.
pub async fn create_topic(
    client: &Client,
    memo: &str,
    submit_key: Key,
) -> Result<TopicId, HarnessError> {
    let mut transaction = TopicCreateTransaction::new();
    transaction.topic_memo(memo).submit_key(submit_key);
    let response = transaction.execute(client).await?;
    let receipt = expect_success(client, &response, "topic create").await?;
    receipt.topic_id.ok_or(HarnessError::MissingReceiptField {
        transaction: "topic create",
        field: "topic id",
    })
}

/// Publishes a message to a topic and confirms the receipt.
///
/// # Errors
///
/// Returns an error when the submit transaction fails or the receipt status
/// is not `SUCCESS`.
pub async fn publish_message(
    client: &Client,
    topic_id: TopicId,
    message: &str,
) -> Result<(), HarnessError> {
    let mut transaction = TopicMessageSubmitTransaction::new();
    transaction.topic_id(topic_id).message(message.as_bytes().to_vec());
    let response = transaction.execute(client).await?;
    expect_success(client, &response, "topic message submit").await?;
    Ok(())
}

/// Waits for the mirror node to deliver an exact message payload.
///
/// Subscribes from the epoch so a message published moments earlier is still
/// observed, then resolves on the first exact match.
///
/// # Errors
///
/// Returns an error when the subscription fails, the stream closes without a
/// match, or the deadline elapses first.
pub async fn await_message(
    client: &Client,
    topic_id: TopicId,
    expected: &str,
    wait: Duration,
) -> Result<(), HarnessError> {
    let mut query = TopicMessageQuery::new();
    query.topic_id(topic_id).start_time(OffsetDateTime::UNIX_EPOCH);
    let stream = query.subscribe(client);
    let matcher = async move {
        pin_mut!(stream);
        while let Some(message) = stream.next().await {
            let message = message?;
            if message.contents.as_slice() == expected.as_bytes() {
                return Ok(());
            }
        }
        Err(HarnessError::StreamClosed)
    };
    tokio::time::timeout(wait, matcher).await.map_err(|_| HarnessError::MessageTimeout(wait))?
}
