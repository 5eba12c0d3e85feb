//! List-result cache boundary.
//!
//! The store/cache contract is the canonical key from [`key`]; storage policy
//! (eviction, TTL, size limits) belongs to the backing implementation. The
//! default backend is a concurrent map, which is enough for a single-process
//! deployment.

pub mod key;

use dashmap::DashMap;

use crate::domain::Transaction;
use crate::store::query::PageResult;

/// Cache collaborator consulted before a list query hits the store.
pub trait ListCache: Send + Sync {
    fn get(&self, key: &str) -> Option<PageResult<Transaction>>;
    fn put(&self, key: &str, page: &PageResult<Transaction>);
}

/// Concurrent-map cache backend with no eviction policy of its own.
#[derive(Debug, Default)]
pub struct InMemoryListCache {
    entries: DashMap<String, PageResult<Transaction>>,
}

impl InMemoryListCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListCache for InMemoryListCache {
    fn get(&self, key: &str) -> Option<PageResult<Transaction>> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    fn put(&self, key: &str, page: &PageResult<Transaction>) {
        self.entries.insert(key.to_owned(), page.clone());
    }
}
