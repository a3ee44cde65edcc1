//! Deposit and withdrawal routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use super::error_response;
use crate::{AppState, middleware::AccountHolder};

/// Request body for a deposit.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    /// Free-form description recorded on the operation.
    pub description: Option<String>,
    /// Amount to credit (non-negative).
    pub amount: Decimal,
}

/// Request body for a withdrawal.
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    /// Amount to debit (non-negative, at most the current balance).
    pub amount: Decimal,
}

/// POST `/deposit` - Credit the account holder's statement.
async fn deposit(
    State(state): State<AppState>,
    holder: AccountHolder,
    Json(payload): Json<DepositRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.deposit(holder.cpf(), payload.description, payload.amount) {
        Ok(operation) => {
            info!(cpf = %holder.cpf(), amount = %operation.amount, "Deposit recorded");
            (StatusCode::CREATED, Json(operation)).into_response()
        }
        Err(e) => {
            warn!(cpf = %holder.cpf(), error = %e, "Deposit rejected");
            error_response(&e)
        }
    }
}

/// POST `/withdraw` - Debit the account holder's statement.
async fn withdraw(
    State(state): State<AppState>,
    holder: AccountHolder,
    Json(payload): Json<WithdrawRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.withdraw(holder.cpf(), payload.amount) {
        Ok(operation) => {
            info!(cpf = %holder.cpf(), amount = %operation.amount, "Withdrawal recorded");
            (StatusCode::CREATED, Json(operation)).into_response()
        }
        Err(e) => {
            warn!(cpf = %holder.cpf(), error = %e, "Withdrawal rejected");
            error_response(&e)
        }
    }
}

/// Creates the deposit and withdrawal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}
