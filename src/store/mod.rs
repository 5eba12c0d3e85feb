//! Record store: the authoritative transaction map plus the order-id
//! uniqueness index, behind a trait so the service layer stays decoupled
//! from the in-memory implementation.

pub mod filter;
pub mod memory;
pub mod query;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{NewTransaction, Transaction, TransactionPatch};

use self::filter::FilterCriteria;
use self::query::PageResult;

/// Failures surfaced by store mutations. Lookups never error; absence is a
/// normal result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("transaction with order id {0} already exists")]
    AlreadyExists(String),

    #[error("transaction {0} not found")]
    NotFound(Uuid),
}

/// Store contract consumed by the service layer.
///
/// Implementations must be safe under arbitrary concurrent invocation with no
/// external locking by callers. Two concurrent `create` calls carrying the
/// same order id must never both succeed.
pub trait TransactionStore: Send + Sync {
    /// Assign a fresh id and insert the record into both indices.
    fn create(&self, new: NewTransaction) -> Result<Transaction, StoreError>;

    /// Remove the record from both indices.
    fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Apply the mutable-field patch in place and return the updated record.
    fn modify(&self, id: Uuid, patch: TransactionPatch) -> Result<Transaction, StoreError>;

    fn get_by_id(&self, id: Uuid) -> Option<Transaction>;

    /// O(1) membership check against the secondary index.
    fn exists_by_order_id(&self, order_id: &str) -> bool;

    /// Number of live records.
    fn count(&self) -> usize;

    /// One page of matching records, in creation order, plus the total match
    /// count across all pages.
    fn list(&self, page: i64, page_size: i64, criteria: &FilterCriteria) -> PageResult<Transaction>;
}
