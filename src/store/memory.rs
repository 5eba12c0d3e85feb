//! DashMap-backed transaction store.
//!
//! Two maps are maintained together: the primary record map keyed by id and
//! the secondary `order_id -> id` index used for O(1) duplicate checks.
//! Every mutation touching an order id goes through the secondary index's
//! entry API, which holds that key's shard exclusively for the duration of
//! the operation, so a duplicate decision can never observe a half-applied
//! create or delete. Lock order is fixed: secondary entry first, then the
//! primary map.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{NewTransaction, Transaction, TransactionPatch};

use super::filter::FilterCriteria;
use super::query::{paginate, PageResult};
use super::{StoreError, TransactionStore};

/// Record plus the creation sequence number that fixes list ordering.
#[derive(Debug, Clone)]
struct StoredTransaction {
    seq: u64,
    record: Transaction,
}

/// Thread-safe in-memory store. Owned by whoever constructs it and shared via
/// `Arc`; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    records: DashMap<Uuid, StoredTransaction>,
    order_index: DashMap<String, Uuid>,
    next_seq: AtomicU64,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn create(&self, new: NewTransaction) -> Result<Transaction, StoreError> {
        match self.order_index.entry(new.order_id.clone()) {
            Entry::Occupied(_) => {
                tracing::warn!("transaction with order id {} already exists", new.order_id);
                Err(StoreError::AlreadyExists(new.order_id))
            }
            Entry::Vacant(slot) => {
                let id = Uuid::new_v4();
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                let record = new.into_record(id);
                self.records.insert(
                    id,
                    StoredTransaction {
                        seq,
                        record: record.clone(),
                    },
                );
                slot.insert(id);
                Ok(record)
            }
        }
    }

    fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let order_id = match self.records.get(&id) {
            Some(stored) => stored.record.order_id.clone(),
            None => {
                tracing::error!("transaction with id {} not found", id);
                return Err(StoreError::NotFound(id));
            }
        };
        // Same lock order as create: secondary entry first, then primary.
        match self.order_index.entry(order_id) {
            Entry::Occupied(slot) if *slot.get() == id => {
                self.records.remove(&id);
                slot.remove();
                Ok(())
            }
            // A concurrent delete won the race between the lookup above and
            // taking the entry.
            _ => Err(StoreError::NotFound(id)),
        }
    }

    fn modify(&self, id: Uuid, patch: TransactionPatch) -> Result<Transaction, StoreError> {
        match self.records.get_mut(&id) {
            Some(mut stored) => {
                if let Some(status) = patch.status {
                    stored.record.status = status;
                }
                if let Some(description) = patch.description {
                    stored.record.description = Some(description);
                }
                Ok(stored.record.clone())
            }
            None => {
                tracing::error!("transaction with id {} not found", id);
                Err(StoreError::NotFound(id))
            }
        }
    }

    fn get_by_id(&self, id: Uuid) -> Option<Transaction> {
        self.records.get(&id).map(|stored| stored.record.clone())
    }

    fn exists_by_order_id(&self, order_id: &str) -> bool {
        self.order_index.contains_key(order_id)
    }

    fn count(&self) -> usize {
        self.records.len()
    }

    fn list(&self, page: i64, page_size: i64, criteria: &FilterCriteria) -> PageResult<Transaction> {
        let mut matches: Vec<(u64, Transaction)> = self
            .records
            .iter()
            .filter(|stored| criteria.matches(&stored.record))
            .map(|stored| (stored.seq, stored.record.clone()))
            .collect();
        // Creation order keeps repeated queries deterministic.
        matches.sort_unstable_by_key(|(seq, _)| *seq);
        paginate(
            matches.into_iter().map(|(_, record)| record).collect(),
            page,
            page_size,
        )
    }
}
