//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes over the ledger store
//! - The customer-lookup extractor for cpf-keyed routes
//! - Error-to-response mapping

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use caixa_core::ledger::LedgerStore;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide ledger store.
    pub store: Arc<RwLock<LedgerStore>>,
}

impl AppState {
    /// Creates state holding an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(LedgerStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
