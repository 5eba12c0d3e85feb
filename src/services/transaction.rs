//! Transaction service: business validation and the list caching policy over
//! the record store.

use std::sync::Arc;

use uuid::Uuid;

use crate::cache::key::{criteria_key_map, derive_cache_key, KeyPart};
use crate::cache::ListCache;
use crate::domain::{NewTransaction, Transaction, TransactionPatch, TransactionStatus};
use crate::error::AppError;
use crate::store::filter::FilterCriteria;
use crate::store::query::PageResult;
use crate::store::{StoreError, TransactionStore};
use crate::validation::{
    validate_currency_code, validate_distinct_cards, validate_not_future,
    validate_positive_amount, validate_required,
};

pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
    cache: Arc<dyn ListCache>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStore>, cache: Arc<dyn ListCache>) -> Self {
        Self { store, cache }
    }

    pub fn create(&self, new: NewTransaction) -> Result<Transaction, AppError> {
        validate_required("orderId", &new.order_id)?;
        validate_required("cardId", &new.card_id)?;
        validate_positive_amount(&new.amount)?;
        validate_currency_code(&new.currency)?;
        validate_not_future("date", new.date)?;
        validate_distinct_cards(&new.card_id, new.to_card_id.as_deref())?;

        Ok(self.store.create(new)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.store.delete(id)?)
    }

    /// Apply a mutable-field patch. Transactions that already settled as
    /// `SUCCESS` are immutable.
    pub fn modify(&self, id: Uuid, patch: TransactionPatch) -> Result<Transaction, AppError> {
        let existing = self.store.get_by_id(id).ok_or(StoreError::NotFound(id))?;

        if existing.status == TransactionStatus::Success {
            return Err(AppError::Validation(
                "cannot modify a successful transaction".to_string(),
            ));
        }

        Ok(self.store.modify(id, patch)?)
    }

    pub fn get(&self, id: Uuid) -> Option<Transaction> {
        self.store.get_by_id(id)
    }

    pub fn exists_by_order_id(&self, order_id: &str) -> bool {
        self.store.exists_by_order_id(order_id)
    }

    pub fn stored_count(&self) -> usize {
        self.store.count()
    }

    /// List a page of matching transactions, memoized under the canonical
    /// query key. Results with a zero total count are never cached, so a
    /// query that matched nothing is re-evaluated once records arrive.
    pub fn list(
        &self,
        page: i64,
        page_size: i64,
        criteria: &FilterCriteria,
    ) -> PageResult<Transaction> {
        let key = list_cache_key(page, page_size, criteria);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("list cache hit for key {}", key);
            return cached;
        }

        let result = self.store.list(page, page_size, criteria);
        if result.total_count > 0 {
            self.cache.put(&key, &result);
        }
        result
    }
}

/// Canonical cache key for a list invocation.
pub fn list_cache_key(page: i64, page_size: i64, criteria: &FilterCriteria) -> String {
    derive_cache_key(&[
        KeyPart::Int(page),
        KeyPart::Int(page_size),
        KeyPart::Map(criteria_key_map(criteria)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryListCache;
    use crate::domain::{TransactionChannel, TransactionType};
    use crate::store::memory::InMemoryTransactionStore;
    use bigdecimal::BigDecimal;
    use chrono::{Duration, TimeZone, Utc};

    fn service() -> TransactionService {
        TransactionService::new(
            Arc::new(InMemoryTransactionStore::new()),
            Arc::new(InMemoryListCache::new()),
        )
    }

    fn payload(order_id: &str) -> NewTransaction {
        NewTransaction {
            order_id: order_id.to_string(),
            kind: TransactionType::Transfer,
            currency: "USD".to_string(),
            amount: BigDecimal::from(100),
            date: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
            card_id: "card-1".to_string(),
            to_card_id: Some("card-2".to_string()),
            description: None,
            status: TransactionStatus::Processing,
            channel: TransactionChannel::MobileApp,
        }
    }

    #[test]
    fn create_rejects_blank_order_id() {
        let err = service()
            .create(NewTransaction {
                order_id: "  ".to_string(),
                ..payload("ignored")
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_non_positive_amount() {
        let err = service()
            .create(NewTransaction {
                amount: BigDecimal::from(0),
                ..payload("order-1")
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_malformed_currency() {
        let err = service()
            .create(NewTransaction {
                currency: "usd".to_string(),
                ..payload("order-1")
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_future_date() {
        let err = service()
            .create(NewTransaction {
                date: Utc::now() + Duration::days(1),
                ..payload("order-1")
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_rejects_transfer_to_the_same_card() {
        let err = service()
            .create(NewTransaction {
                to_card_id: Some("card-1".to_string()),
                ..payload("order-1")
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_surfaces_duplicate_order_id() {
        let service = service();
        service.create(payload("order-1")).unwrap();
        assert!(service.exists_by_order_id("order-1"));

        let err = service.create(payload("order-1")).unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::AlreadyExists(_))
        ));
    }

    #[test]
    fn modify_rejects_successful_transactions() {
        let service = service();
        let created = service
            .create(NewTransaction {
                status: TransactionStatus::Success,
                ..payload("order-1")
            })
            .unwrap();

        let err = service
            .modify(created.id, TransactionPatch::default())
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn modify_unknown_id_is_not_found() {
        let err = service()
            .modify(Uuid::new_v4(), TransactionPatch::default())
            .unwrap_err();

        assert!(matches!(err, AppError::Store(StoreError::NotFound(_))));
    }

    #[test]
    fn empty_list_results_are_not_cached() {
        let service = service();
        let criteria = FilterCriteria::default();

        assert_eq!(service.list(0, 10, &criteria).total_count, 0);

        service.create(payload("order-1")).unwrap();

        // The earlier empty result must not have been memoized.
        assert_eq!(service.list(0, 10, &criteria).total_count, 1);
    }

    #[test]
    fn non_empty_list_results_are_served_from_cache() {
        let service = service();
        let criteria = FilterCriteria::default();
        service.create(payload("order-1")).unwrap();

        let first = service.list(0, 10, &criteria);
        service.create(payload("order-2")).unwrap();

        // Identical query key: memoized page, staleness bounded by the
        // backend's policy.
        assert_eq!(service.list(0, 10, &criteria), first);
        // A different key bypasses the memoized entry.
        assert_eq!(service.list(0, 20, &criteria).total_count, 2);
    }

    #[test]
    fn list_cache_key_is_stable_for_equal_criteria() {
        let criteria = FilterCriteria {
            card_id: Some("card-1".to_string()),
            status: Some(TransactionStatus::Success),
            ..Default::default()
        };

        assert_eq!(
            list_cache_key(0, 10, &criteria),
            list_cache_key(0, 10, &criteria.clone()),
        );
        assert_ne!(
            list_cache_key(0, 10, &criteria),
            list_cache_key(1, 10, &criteria),
        );
    }
}
