//! Customer lookup for cpf-keyed routes.
//!
//! Routes that operate on an existing account identify the customer through
//! the `cpf` request header. The lookup runs before the handler body: a
//! missing header or an unregistered key is rejected with 404 and the
//! handler never sees the request.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Response,
};
use caixa_core::ledger::LedgerError;
use caixa_shared::Cpf;

use crate::AppState;
use crate::routes::error_response;

/// Header carrying the customer key.
const CPF_HEADER: &str = "cpf";

/// Extractor for the verified customer key.
///
/// Use this in handlers for routes keyed by the `cpf` header:
///
/// ```ignore
/// async fn handler(holder: AccountHolder) -> impl IntoResponse {
///     let cpf = holder.cpf();
///     // ...
/// }
/// ```
///
/// Extraction succeeds only if the header is present and a customer is
/// registered under that key at lookup time.
#[derive(Debug, Clone)]
pub struct AccountHolder(pub Cpf);

impl AccountHolder {
    /// Returns the verified customer key.
    #[must_use]
    pub fn cpf(&self) -> &Cpf {
        &self.0
    }

    /// Consumes the extractor, returning the key.
    #[must_use]
    pub fn into_cpf(self) -> Cpf {
        self.0
    }
}

impl FromRequestParts<AppState> for AccountHolder {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cpf = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Cpf::from)
            .ok_or_else(|| error_response(&LedgerError::CustomerNotFound))?;

        let store = state.store.read().await;
        if store.find_by_cpf(&cpf).is_none() {
            return Err(error_response(&LedgerError::CustomerNotFound));
        }

        Ok(Self(cpf))
    }
}
