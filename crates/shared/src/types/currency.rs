//! Currency codes.
//!
//! Codes are kept verbatim as supplied: `"chf"` and `"CHF"` are different currencies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Identifier of the currency an amount is denominated in (e.g. "CHF", "USD").
///
/// Backed by `Arc<str>` so amounts can be cloned and shared across threads cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(Arc<str>);

impl CurrencyCode {
    /// Creates a currency code.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidOperand` if the code is empty or only whitespace.
    pub fn new(code: impl AsRef<str>) -> AppResult<Self> {
        let code = code.as_ref();
        if code.trim().is_empty() {
            return Err(AppError::InvalidOperand(
                "currency code must not be empty".to_string(),
            ));
        }
        Ok(Self(Arc::from(code)))
    }

    /// Returns the code as supplied at construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
