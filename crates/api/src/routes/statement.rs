//! Statement query routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use caixa_core::ledger::{LedgerError, parse_day};
use serde::Deserialize;
use tracing::warn;

use super::error_response;
use crate::{AppState, middleware::AccountHolder};

/// Query parameters for the by-date statement view.
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// Calendar day to filter on, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// GET `/statement` - Full statement of the account holder.
async fn get_statement(State(state): State<AppState>, holder: AccountHolder) -> impl IntoResponse {
    let store = state.store.read().await;
    match store.statement(holder.cpf()) {
        Ok(statement) => (StatusCode::OK, Json(statement)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// GET `/statement/date` - Statement entries recorded on one calendar day.
async fn get_statement_by_date(
    State(state): State<AppState>,
    holder: AccountHolder,
    Query(query): Query<StatementDateQuery>,
) -> impl IntoResponse {
    let Some(raw) = query.date else {
        return error_response(&LedgerError::MissingDate);
    };

    let day = match parse_day(&raw) {
        Ok(day) => day,
        Err(e) => {
            warn!(date = %raw, "Rejected unparseable statement date");
            return error_response(&e);
        }
    };

    let store = state.store.read().await;
    match store.statement_on(holder.cpf(), day) {
        Ok(statement) => (StatusCode::OK, Json(statement)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Creates the statement query routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
}
