//! Account management routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post, put},
};
use caixa_shared::Cpf;
use serde::Deserialize;
use tracing::{info, warn};

use super::error_response;
use crate::{AppState, middleware::AccountHolder};

/// Request body for registering an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Customer key (must be unique across all customers).
    pub cpf: String,
    /// Customer display name.
    pub name: String,
}

/// Request body for updating an account.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    /// New display name.
    pub name: String,
}

/// POST `/account` - Register a customer.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.create(Cpf::from(payload.cpf), payload.name) {
        Ok(customer) => {
            info!(customer_id = %customer.id, "Account created");
            (StatusCode::CREATED, Json(customer)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Account registration rejected");
            error_response(&e)
        }
    }
}

/// PUT `/account` - Rename the account holder.
async fn update_account(
    State(state): State<AppState>,
    holder: AccountHolder,
    Json(payload): Json<UpdateAccountRequest>,
) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.rename(holder.cpf(), payload.name) {
        Ok(customer) => {
            info!(customer_id = %customer.id, "Account renamed");
            (StatusCode::CREATED, Json(customer)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// DELETE `/account` - Remove the account holder.
///
/// Responds with the customers that remain, which may be an empty array.
async fn delete_account(State(state): State<AppState>, holder: AccountHolder) -> impl IntoResponse {
    let mut store = state.store.write().await;
    match store.remove(holder.cpf()) {
        Ok(removed) => {
            info!(customer_id = %removed.id, "Account removed");
            (StatusCode::OK, Json(store.all())).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Creates the account management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/account", post(create_account))
        .route("/account", put(update_account))
        .route("/account", delete(delete_account))
}
