//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use caixa_core::ledger::LedgerError;
use serde_json::json;

use crate::AppState;

pub mod accounts;
pub mod customers;
pub mod health;
pub mod operations;
pub mod statement;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(customers::routes())
        .merge(accounts::routes())
        .merge(operations::routes())
        .merge(statement::routes())
}

/// Maps a ledger failure to its HTTP status and JSON error body.
pub(crate) fn error_response(error: &LedgerError) -> Response {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string()
        })),
    )
        .into_response()
}
