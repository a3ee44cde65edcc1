//! The in-memory customer ledger.
//!
//! This module implements the core ledger functionality:
//! - Statement operations (credits and debits)
//! - The customer registry and its CRUD operations
//! - Balance calculation
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod store_props;

pub use balance::compute_balance;
pub use error::LedgerError;
pub use store::{LedgerStore, parse_day};
pub use types::{Customer, Operation, OperationKind};
