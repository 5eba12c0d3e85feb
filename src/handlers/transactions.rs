use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{NewTransaction, TransactionChannel, TransactionPatch, TransactionStatus};
use crate::error::AppError;
use crate::store::filter::FilterCriteria;
use crate::AppState;

use super::ApiResponse;

const DEFAULT_PAGE: i64 = 0;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// List query parameters. Unrecognized parameters are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub card_id: Option<String>,
    pub status: Option<TransactionStatus>,
    pub channel: Option<TransactionChannel>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<NewTransaction>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.service.create(payload)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    // Absence is a normal result, not an error.
    Json(ApiResponse::of(state.service.get(id)))
}

pub async fn modify_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TransactionPatch>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.service.modify(id, patch)?;

    Ok(Json(ApiResponse::success(updated)))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(id)?;

    Ok(Json(ApiResponse::success(())))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let criteria = FilterCriteria {
        card_id: params.card_id,
        status: params.status,
        channel: params.channel,
        start_date: params.start_date,
        end_date: params.end_date,
    };
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);

    Json(ApiResponse::success(state.service.list(page, size, &criteria)))
}
