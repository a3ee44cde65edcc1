//! The customer key type.
//!
//! A `Cpf` is the unique identifying key of a customer. It is treated as an
//! opaque string: no checksum or format validation is performed.

use serde::{Deserialize, Serialize};

/// Customer's unique identifying key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Creates a key from any string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Cpf {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Cpf {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
