//! Customer listing routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use super::error_response;
use crate::AppState;

/// GET `/customers` - List all registered customers.
///
/// An empty registry is reported as 404, not as an empty list.
async fn list_customers(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    match store.list_all() {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => {
            warn!("Customer listing requested on empty registry");
            error_response(&e)
        }
    }
}

/// Creates the customer listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", get(list_customers))
}
