//! In-memory transaction record service: a concurrent store with order-id
//! uniqueness, filtered and paginated listing, and canonical query
//! memoization.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod services;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::services::TransactionService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TransactionService>,
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        )
        .route(
            "/api/transactions/:id",
            get(handlers::transactions::get_transaction)
                .put(handlers::transactions::modify_transaction)
                .delete(handlers::transactions::delete_transaction),
        )
        .layer(cors)
        .with_state(state)
}
