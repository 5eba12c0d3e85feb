//! Transaction domain entity.
//! Framework-agnostic representation of a financial transaction.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of monetary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Transfer,
    Deposit,
    Withdraw,
}

/// Processing state. Only `Processing` and `Failed` transactions may still be
/// modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Processing,
    Success,
    Failed,
}

/// Origination channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionChannel {
    MobileApp,
    WebPortal,
    Atm,
}

/// Domain entity representing a transaction.
///
/// Each record is uniquely and permanently identified by the store-assigned
/// `id`; the caller-supplied `order_id` links it to the originating order and
/// is unique across all live records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub order_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Currency ISO code for the amount.
    pub currency: String,
    pub amount: BigDecimal,
    /// Timestamp of transaction initiation, UTC.
    pub date: DateTime<Utc>,
    /// Source card identifier.
    pub card_id: String,
    /// Destination card identifier, for transfers.
    pub to_card_id: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub channel: TransactionChannel,
}

/// Creation payload: everything except the store-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub order_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub currency: String,
    pub amount: BigDecimal,
    pub date: DateTime<Utc>,
    pub card_id: String,
    pub to_card_id: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub channel: TransactionChannel,
}

impl NewTransaction {
    /// Materialize the full record under a store-assigned id.
    pub fn into_record(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            order_id: self.order_id,
            kind: self.kind,
            currency: self.currency,
            amount: self.amount,
            date: self.date,
            card_id: self.card_id,
            to_card_id: self.to_card_id,
            description: self.description,
            status: self.status,
            channel: self.channel,
        }
    }
}

/// Patch applied by modify. Only status and description are mutable; identity
/// fields never change after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    pub status: Option<TransactionStatus>,
    pub description: Option<String>,
}
