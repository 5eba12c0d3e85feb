//! Pure filter predicate over transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionChannel, TransactionStatus};

/// Criteria a listed record must satisfy. Absent fields impose no constraint;
/// date bounds are inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<TransactionChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    /// True iff `tx` satisfies every present criterion.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(card_id) = &self.card_id {
            if card_id != &tx.card_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if status != tx.status {
                return false;
            }
        }
        if let Some(channel) = self.channel {
            if channel != tx.channel {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if tx.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if tx.date > end {
                return false;
            }
        }
        true
    }
}
