//! Ledger domain types.
//!
//! A customer owns an ordered statement of operations; the balance is the
//! signed fold of that statement.

use caixa_shared::{Cpf, CustomerId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation kind: either Credit or Debit.
///
/// Credits increase the customer's balance, debits decrease it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Credit operation (deposit).
    Credit,
    /// Debit operation (withdrawal).
    Debit,
}

impl OperationKind {
    /// Returns the signed contribution of `amount` to a balance.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        }
    }
}

/// A single statement operation.
///
/// Immutable once appended; statement order is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Free-form description supplied by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The operation amount (non-negative).
    pub amount: Decimal,
    /// When the operation was recorded. Set at creation, never updated.
    pub created_at: DateTime<Utc>,
    /// Whether the operation credits or debits the balance.
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    /// Records a credit at the current instant.
    #[must_use]
    pub fn credit(description: Option<String>, amount: Decimal) -> Self {
        Self {
            description,
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Credit,
        }
    }

    /// Records a debit at the current instant.
    #[must_use]
    pub fn debit(amount: Decimal) -> Self {
        Self {
            description: None,
            amount,
            created_at: Utc::now(),
            kind: OperationKind::Debit,
        }
    }
}

/// A registered customer with an ordered statement.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    /// Opaque unique identifier, assigned at registration.
    pub id: CustomerId,
    /// Unique customer key.
    pub cpf: Cpf,
    /// Display name; mutable via rename.
    pub name: String,
    /// Current balance. Always equals the signed fold of `statement`.
    pub balance: Decimal,
    /// Ordered list of operations, oldest first.
    pub statement: Vec<Operation>,
}

impl Customer {
    /// Creates a customer with a fresh id, zero balance, and empty statement.
    #[must_use]
    pub fn register(cpf: Cpf, name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            cpf,
            name: name.into(),
            balance: Decimal::ZERO,
            statement: Vec::new(),
        }
    }
}
