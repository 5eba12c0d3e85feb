pub mod transactions;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Uniform response envelope shared by every endpoint. Errors produce the
/// same shape with `data: null` and the error message.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Success envelope around a possibly-absent result.
    pub fn of(data: Option<T>) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub stored_transactions: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stored_transactions: state.service.stored_count(),
    })
}
