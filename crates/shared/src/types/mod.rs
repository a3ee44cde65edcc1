//! Common types used across the application.

pub mod cpf;
pub mod id;

pub use cpf::Cpf;
pub use id::CustomerId;
