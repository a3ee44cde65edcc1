//! The in-memory customer registry.
//!
//! `LedgerStore` owns all customer data for the lifetime of the process.
//! It is created empty at startup and discarded at exit; there is no
//! persistence. Lookups are linear scans, which is the intended behavior
//! for this service.

use caixa_shared::{Cpf, CustomerId};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use super::balance::compute_balance;
use super::error::LedgerError;
use super::types::{Customer, Operation};

/// Parses a `YYYY-MM-DD` query string into a calendar day.
pub fn parse_day(raw: &str) -> Result<NaiveDate, LedgerError> {
    raw.parse::<NaiveDate>()
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// True if the operation was recorded on `day`, in local time.
fn falls_on(operation: &Operation, day: NaiveDate) -> bool {
    operation.created_at.with_timezone(&Local).date_naive() == day
}

/// In-memory registry of customers, each owning an ordered statement.
///
/// Every mutation validates its preconditions before touching any data, so
/// a failed operation leaves the store exactly as it was.
#[derive(Debug, Default)]
pub struct LedgerStore {
    customers: Vec<Customer>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a customer by key. Absence is not an error here; the
    /// caller decides between not-found and creation-allowed.
    #[must_use]
    pub fn find_by_cpf(&self, cpf: &Cpf) -> Option<&Customer> {
        self.customers.iter().find(|customer| &customer.cpf == cpf)
    }

    /// Looks up a customer by its opaque identifier.
    #[must_use]
    pub fn find_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    fn find_mut(&mut self, cpf: &Cpf) -> Result<&mut Customer, LedgerError> {
        self.customers
            .iter_mut()
            .find(|customer| &customer.cpf == cpf)
            .ok_or(LedgerError::CustomerNotFound)
    }

    /// Registers a new customer with an empty statement and zero balance.
    ///
    /// Returns a snapshot of the newly registered customer.
    pub fn create(
        &mut self,
        cpf: Cpf,
        name: impl Into<String>,
    ) -> Result<Customer, LedgerError> {
        if self.find_by_cpf(&cpf).is_some() {
            return Err(LedgerError::CustomerAlreadyExists);
        }

        let customer = Customer::register(cpf, name);
        let snapshot = customer.clone();
        self.customers.push(customer);
        Ok(snapshot)
    }

    /// Returns all registered customers.
    ///
    /// An empty registry is an error state, not an empty success.
    pub fn list_all(&self) -> Result<&[Customer], LedgerError> {
        if self.customers.is_empty() {
            return Err(LedgerError::NoCustomers);
        }
        Ok(&self.customers)
    }

    /// Raw view of the registry, empty or not. The removal endpoint echoes
    /// the remaining customers through this; `list_all` keeps the
    /// empty-registry error the list endpoint preserves.
    #[must_use]
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns the customer's full statement in insertion order.
    pub fn statement(&self, cpf: &Cpf) -> Result<&[Operation], LedgerError> {
        self.find_by_cpf(cpf)
            .map(|customer| customer.statement.as_slice())
            .ok_or(LedgerError::CustomerNotFound)
    }

    /// Returns the operations recorded on `day` (local calendar day).
    pub fn statement_on(&self, cpf: &Cpf, day: NaiveDate) -> Result<Vec<Operation>, LedgerError> {
        let statement = self.statement(cpf)?;
        Ok(statement
            .iter()
            .filter(|operation| falls_on(operation, day))
            .cloned()
            .collect())
    }

    /// Appends a credit operation and increases the balance by `amount`.
    pub fn deposit(
        &mut self,
        cpf: &Cpf,
        description: Option<String>,
        amount: Decimal,
    ) -> Result<Operation, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }

        let customer = self.find_mut(cpf)?;
        let operation = Operation::credit(description, amount);
        customer.statement.push(operation.clone());
        customer.balance += amount;
        Ok(operation)
    }

    /// Appends a debit operation and decreases the balance by `amount`.
    ///
    /// The balance check runs against the statement fold before any
    /// mutation; an insufficient balance leaves the statement untouched.
    pub fn withdraw(&mut self, cpf: &Cpf, amount: Decimal) -> Result<Operation, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }

        let customer = self.find_mut(cpf)?;
        let balance = compute_balance(&customer.statement);
        if balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        let operation = Operation::debit(amount);
        customer.statement.push(operation.clone());
        customer.balance = balance - amount;
        Ok(operation)
    }

    /// Updates the customer's display name in place.
    pub fn rename(&mut self, cpf: &Cpf, name: impl Into<String>) -> Result<&Customer, LedgerError> {
        let customer = self.find_mut(cpf)?;
        customer.name = name.into();
        Ok(&*customer)
    }

    /// Removes the customer and returns it. All other customers keep
    /// their position and data.
    pub fn remove(&mut self, cpf: &Cpf) -> Result<Customer, LedgerError> {
        let index = self
            .customers
            .iter()
            .position(|customer| &customer.cpf == cpf)
            .ok_or(LedgerError::CustomerNotFound)?;
        Ok(self.customers.remove(index))
    }
}
