//! Single-currency amounts.

use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher};
use std::iter;

use moneybag_shared::{AppResult, CurrencyCode};

use super::normalize::collapse;
use super::value::MonetaryValue;

/// Hash shared by every zero-quantity amount, whatever its currency.
const ZERO_HASH: u64 = 0;

/// An integer quantity tagged with a currency code.
///
/// Equality is structural with one exception: any two zero amounts are equal,
/// whatever their currencies. `Hash` follows the same rule.
#[derive(Debug, Clone)]
pub struct SimpleAmount {
    quantity: i64,
    currency: CurrencyCode,
}

impl SimpleAmount {
    /// Creates an amount from a raw currency code.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidOperand` if the currency code is blank.
    pub fn new(quantity: i64, currency: &str) -> AppResult<Self> {
        Ok(Self::with_currency(quantity, CurrencyCode::new(currency)?))
    }

    /// Creates an amount from an already validated currency code.
    #[must_use]
    pub const fn with_currency(quantity: i64, currency: CurrencyCode) -> Self {
        Self { quantity, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::with_currency(0, currency)
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns true if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// Adds any monetary value to this amount.
    ///
    /// Same-currency amounts stay simple; anything else goes through normalization.
    #[must_use]
    pub fn add(&self, other: &MonetaryValue) -> MonetaryValue {
        if let MonetaryValue::Simple(other) = other
            && other.currency == self.currency
        {
            return MonetaryValue::Simple(
                self.with_quantity(self.quantity.wrapping_add(other.quantity)),
            );
        }
        collapse(
            &self.currency,
            iter::once(self).chain(other.entries()).cloned(),
        )
    }

    /// Subtracts any monetary value from this amount.
    #[must_use]
    pub fn subtract(&self, other: &MonetaryValue) -> MonetaryValue {
        self.add(&other.negate())
    }

    /// Returns the amount with its quantity negated.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_quantity(self.quantity.wrapping_neg())
    }

    /// Returns the amount scaled by `factor`.
    #[must_use]
    pub fn multiply(&self, factor: i64) -> Self {
        self.with_quantity(self.quantity.wrapping_mul(factor))
    }

    /// Hash value consistent with `==`.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        if self.is_zero() {
            return ZERO_HASH;
        }
        BuildHasherDefault::<DefaultHasher>::default()
            .hash_one((self.quantity, self.currency.as_str()))
    }

    pub(super) fn accumulate(&mut self, quantity: i64) {
        self.quantity = self.quantity.wrapping_add(quantity);
    }

    fn with_quantity(&self, quantity: i64) -> Self {
        Self::with_currency(quantity, self.currency.clone())
    }
}

impl PartialEq for SimpleAmount {
    fn eq(&self, other: &Self) -> bool {
        // Zero is currency-agnostic: [0 USD] == [0 CHF].
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.quantity == other.quantity && self.currency == other.currency
    }
}

impl Eq for SimpleAmount {}

impl Hash for SimpleAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for SimpleAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.quantity, self.currency)
    }
}
