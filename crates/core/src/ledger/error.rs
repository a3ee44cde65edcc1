//! Ledger error types.
//!
//! Every failure a ledger operation can produce, together with the HTTP
//! status and machine-readable code the API layer maps it to. All failures
//! are terminal for the request; nothing is retried.

use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Display strings are part of the wire contract, spelling included; do
/// not edit them.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No customer is registered under the given key or id.
    #[error("Customer not found!")]
    CustomerNotFound,

    /// A customer with this cpf is already registered.
    #[error("Customer already exists!")]
    CustomerAlreadyExists,

    /// The store holds no customers at all.
    #[error("There are no customers yet")]
    NoCustomers,

    /// Withdrawal amount exceeds the current balance.
    #[error("Insuficient funds!")]
    InsufficientFunds,

    /// Operation amounts are non-negative by definition.
    #[error("Amount must not be negative!")]
    NegativeAmount,

    /// The `date` query parameter is required.
    #[error("Date is required in query params!")]
    MissingDate,

    /// The supplied date string does not parse as a calendar day.
    #[error("Invalid date format!")]
    InvalidDate(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CustomerNotFound => "customer_not_found",
            Self::CustomerAlreadyExists => "customer_already_exists",
            Self::NoCustomers => "no_customers",
            Self::InsufficientFunds => "insufficient_funds",
            Self::NegativeAmount => "negative_amount",
            Self::MissingDate => "missing_date",
            Self::InvalidDate(_) => "invalid_date",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 404 Not Found
            Self::CustomerNotFound | Self::NoCustomers => 404,

            // 400 Bad Request - validation errors
            Self::CustomerAlreadyExists
            | Self::InsufficientFunds
            | Self::NegativeAmount
            | Self::MissingDate
            | Self::InvalidDate(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LedgerError::CustomerNotFound, 404, "customer_not_found")]
    #[case(LedgerError::CustomerAlreadyExists, 400, "customer_already_exists")]
    #[case(LedgerError::NoCustomers, 404, "no_customers")]
    #[case(LedgerError::InsufficientFunds, 400, "insufficient_funds")]
    #[case(LedgerError::NegativeAmount, 400, "negative_amount")]
    #[case(LedgerError::MissingDate, 400, "missing_date")]
    #[case(LedgerError::InvalidDate(String::new()), 400, "invalid_date")]
    fn test_status_and_code(
        #[case] error: LedgerError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(error.http_status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_contract_messages() {
        assert_eq!(LedgerError::CustomerNotFound.to_string(), "Customer not found!");
        assert_eq!(
            LedgerError::CustomerAlreadyExists.to_string(),
            "Customer already exists!"
        );
        assert_eq!(
            LedgerError::NoCustomers.to_string(),
            "There are no customers yet"
        );
        assert_eq!(LedgerError::InsufficientFunds.to_string(), "Insuficient funds!");
        assert_eq!(
            LedgerError::MissingDate.to_string(),
            "Date is required in query params!"
        );
        assert_eq!(
            LedgerError::InvalidDate("20-20-2020".into()).to_string(),
            "Invalid date format!"
        );
    }
}
