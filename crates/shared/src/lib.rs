//! Shared types and configuration for Caixa.
//!
//! This crate provides common types used across all other crates:
//! - The `Cpf` customer key newtype
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Cpf, CustomerId};
