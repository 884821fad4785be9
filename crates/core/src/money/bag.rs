//! Multi-currency bags.

use std::fmt;
use std::hash::{Hash, Hasher};

use moneybag_shared::CurrencyCode;

use super::amount::SimpleAmount;
use super::normalize::{collapse, normalize};
use super::value::MonetaryValue;

/// A sum of amounts in two or more currencies.
///
/// Every visible bag is normalized: one entry per currency, no zero entries, and at
/// least two entries. Bags cannot be built directly; [`AmountBag::create`] and the
/// arithmetic operations return a [`MonetaryValue`] that is only a bag when more
/// than one currency survives normalization.
///
/// Entry order is kept for display but ignored by `==` and `Hash`.
#[derive(Debug, Clone)]
pub struct AmountBag {
    entries: Vec<SimpleAmount>,
}

impl AmountBag {
    /// Normalizes the sum of two monetary values.
    ///
    /// # Example
    ///
    /// ```
    /// use moneybag_core::money::{AmountBag, SimpleAmount};
    ///
    /// let francs = SimpleAmount::new(12, "CHF").unwrap();
    /// let dollars = SimpleAmount::new(7, "USD").unwrap();
    /// assert_eq!(AmountBag::create(francs, dollars).to_string(), "{[12 CHF][7 USD]}");
    /// ```
    #[must_use]
    pub fn create(
        first: impl Into<MonetaryValue>,
        second: impl Into<MonetaryValue>,
    ) -> MonetaryValue {
        normalize(&first.into(), [&second.into()])
    }

    pub(super) fn from_normalized(entries: Vec<SimpleAmount>) -> Self {
        debug_assert!(entries.len() > 1, "a bag needs at least two currencies");
        debug_assert!(
            entries.iter().all(|entry| !entry.is_zero()),
            "a bag holds no zero entries"
        );
        Self { entries }
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[SimpleAmount] {
        &self.entries
    }

    /// Returns the number of distinct currencies held.
    #[must_use]
    pub fn currency_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the quantity held in `currency`, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, currency: &CurrencyCode) -> i64 {
        self.entries
            .iter()
            .find(|entry| entry.currency() == currency)
            .map_or(0, SimpleAmount::quantity)
    }

    /// Placeholder currency for results that cancel out entirely.
    pub(super) fn first_currency(&self) -> &CurrencyCode {
        self.entries[0].currency()
    }

    /// Adds any monetary value to this bag.
    #[must_use]
    pub fn add(&self, other: &MonetaryValue) -> MonetaryValue {
        collapse(
            self.first_currency(),
            self.entries.iter().chain(other.entries()).cloned(),
        )
    }

    /// Subtracts any monetary value from this bag.
    #[must_use]
    pub fn subtract(&self, other: &MonetaryValue) -> MonetaryValue {
        self.add(&other.negate())
    }

    /// Negates every entry.
    ///
    /// Negation cannot create zero entries or duplicate currencies, so the result is
    /// still normalized.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            entries: self.entries.iter().map(SimpleAmount::negate).collect(),
        }
    }

    /// Scales every entry by `factor` and renormalizes.
    ///
    /// A factor of zero collapses the bag to a zero `SimpleAmount`.
    #[must_use]
    pub fn multiply(&self, factor: i64) -> MonetaryValue {
        collapse(
            self.first_currency(),
            self.entries.iter().map(|entry| entry.multiply(factor)),
        )
    }

    /// Returns true if every entry is zero.
    ///
    /// Never true for a normalized bag.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(SimpleAmount::is_zero)
    }

    /// Hash value consistent with `==`: the wrapping sum of the entry hashes.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        self.entries
            .iter()
            .map(SimpleAmount::hash_code)
            .fold(0, u64::wrapping_add)
    }
}

impl PartialEq for AmountBag {
    fn eq(&self, other: &Self) -> bool {
        // Currencies are unique within a bag, so equal sizes plus containment is
        // multiset equality.
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|entry| other.entries.contains(entry))
    }
}

impl Eq for AmountBag {}

impl Hash for AmountBag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for AmountBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        f.write_str("}")
    }
}
