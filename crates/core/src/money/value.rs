//! The monetary value sum type and its arithmetic dispatch.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::slice;

use moneybag_shared::CurrencyCode;

use super::amount::SimpleAmount;
use super::bag::AmountBag;

/// Either a single-currency amount or a normalized multi-currency bag.
///
/// Which variant a result takes is decided by normalization alone: a sum that
/// touches a single currency is always `Simple`, so a bag is never equal to a
/// simple amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonetaryValue {
    /// A single-currency amount.
    Simple(SimpleAmount),
    /// Two or more currencies.
    Bag(AmountBag),
}

impl MonetaryValue {
    /// Adds two values, normalizing the result.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match self {
            Self::Simple(amount) => amount.add(other),
            Self::Bag(bag) => bag.add(other),
        }
    }

    /// Subtracts `other` from this value, normalizing the result.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Negates the value.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Simple(amount) => Self::Simple(amount.negate()),
            Self::Bag(bag) => Self::Bag(bag.negate()),
        }
    }

    /// Scales the value by an integer factor.
    #[must_use]
    pub fn multiply(&self, factor: i64) -> Self {
        match self {
            Self::Simple(amount) => Self::Simple(amount.multiply(factor)),
            Self::Bag(bag) => bag.multiply(factor),
        }
    }

    /// Returns true if the value is zero in every currency.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Simple(amount) => amount.is_zero(),
            Self::Bag(bag) => bag.is_zero(),
        }
    }

    /// Returns the per-currency entries; a simple amount is its own single entry.
    #[must_use]
    pub fn entries(&self) -> &[SimpleAmount] {
        match self {
            Self::Simple(amount) => slice::from_ref(amount),
            Self::Bag(bag) => bag.entries(),
        }
    }

    /// Returns the quantity held in `currency`, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, currency: &CurrencyCode) -> i64 {
        match self {
            Self::Simple(amount) if amount.currency() == currency => amount.quantity(),
            Self::Simple(_) => 0,
            Self::Bag(bag) => bag.quantity_of(currency),
        }
    }

    /// Returns the simple amount, if this is one.
    #[must_use]
    pub const fn as_simple(&self) -> Option<&SimpleAmount> {
        match self {
            Self::Simple(amount) => Some(amount),
            Self::Bag(_) => None,
        }
    }

    /// Returns the bag, if this is one.
    #[must_use]
    pub const fn as_bag(&self) -> Option<&AmountBag> {
        match self {
            Self::Simple(_) => None,
            Self::Bag(bag) => Some(bag),
        }
    }

    /// Hash value consistent with `==`.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        match self {
            Self::Simple(amount) => amount.hash_code(),
            Self::Bag(bag) => bag.hash_code(),
        }
    }

    pub(super) fn placeholder_currency(&self) -> &CurrencyCode {
        match self {
            Self::Simple(amount) => amount.currency(),
            Self::Bag(bag) => bag.first_currency(),
        }
    }
}

impl Hash for MonetaryValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<SimpleAmount> for MonetaryValue {
    fn from(amount: SimpleAmount) -> Self {
        Self::Simple(amount)
    }
}

impl From<AmountBag> for MonetaryValue {
    fn from(bag: AmountBag) -> Self {
        Self::Bag(bag)
    }
}

impl PartialEq<SimpleAmount> for MonetaryValue {
    fn eq(&self, other: &SimpleAmount) -> bool {
        self.as_simple() == Some(other)
    }
}

impl PartialEq<MonetaryValue> for SimpleAmount {
    fn eq(&self, other: &MonetaryValue) -> bool {
        other == self
    }
}

impl fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(amount) => amount.fmt(f),
            Self::Bag(bag) => bag.fmt(f),
        }
    }
}

impl Add<&MonetaryValue> for &MonetaryValue {
    type Output = MonetaryValue;

    fn add(self, rhs: &MonetaryValue) -> MonetaryValue {
        MonetaryValue::add(self, rhs)
    }
}

impl Sub<&MonetaryValue> for &MonetaryValue {
    type Output = MonetaryValue;

    fn sub(self, rhs: &MonetaryValue) -> MonetaryValue {
        self.subtract(rhs)
    }
}

impl Sub for MonetaryValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl Neg for &MonetaryValue {
    type Output = MonetaryValue;

    fn neg(self) -> MonetaryValue {
        self.negate()
    }
}

impl Neg for MonetaryValue {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<i64> for &MonetaryValue {
    type Output = MonetaryValue;

    fn mul(self, factor: i64) -> MonetaryValue {
        self.multiply(factor)
    }
}

impl Mul<i64> for MonetaryValue {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        self.multiply(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn amount(quantity: i64, currency: &str) -> SimpleAmount {
        SimpleAmount::new(quantity, currency).unwrap()
    }

    fn value(quantity: i64, currency: &str) -> MonetaryValue {
        amount(quantity, currency).into()
    }

    fn mb1() -> MonetaryValue {
        AmountBag::create(amount(12, "CHF"), amount(7, "USD"))
    }

    fn mb2() -> MonetaryValue {
        AmountBag::create(amount(14, "CHF"), amount(21, "USD"))
    }

    #[test]
    fn test_simple_plus_bag() {
        let sum = value(14, "CHF").add(&mb1());
        assert_eq!(sum, AmountBag::create(amount(26, "CHF"), amount(7, "USD")));
    }

    #[test]
    fn test_bag_plus_bag() {
        let sum = mb1().add(&mb2());
        assert_eq!(sum, AmountBag::create(amount(26, "CHF"), amount(28, "USD")));
    }

    #[test]
    fn test_simple_minus_bag_degenerates() {
        let ms1 = AmountBag::create(amount(12, "CHF"), amount(3, "USD"));
        assert_eq!(value(12, "CHF").subtract(&ms1), amount(-3, "USD"));
    }

    #[test]
    fn test_bag_minus_bag_degenerates() {
        let ms1 = AmountBag::create(amount(12, "CHF"), amount(3, "USD"));
        assert_eq!(mb1().subtract(&ms1), amount(4, "USD"));
    }

    #[test]
    fn test_bag_never_equals_simple() {
        assert_ne!(mb1(), value(12, "CHF"));
        assert_ne!(value(12, "CHF"), mb1());
        assert_ne!(amount(12, "CHF"), mb1());
    }

    #[test]
    fn test_cross_type_equality() {
        let collapsed = AmountBag::create(amount(26, "CHF"), amount(28, "CHF"));
        assert_eq!(collapsed, amount(54, "CHF"));
        assert_eq!(amount(54, "CHF"), collapsed);
        assert_eq!(collapsed.hash_code(), amount(54, "CHF").hash_code());
    }

    #[test]
    fn test_absent_value_is_not_equal() {
        let present = mb1();
        assert_ne!(Some(&present), None);
    }

    #[test]
    fn test_quantity_of() {
        let chf = CurrencyCode::new("CHF").unwrap();
        let usd = CurrencyCode::new("USD").unwrap();
        assert_eq!(mb1().quantity_of(&usd), 7);
        assert_eq!(value(12, "CHF").quantity_of(&chf), 12);
        assert_eq!(value(12, "CHF").quantity_of(&usd), 0);
    }

    #[test]
    fn test_entries_of_simple() {
        assert_eq!(value(12, "CHF").entries(), &[amount(12, "CHF")]);
        assert_eq!(mb1().entries().len(), 2);
    }

    #[test]
    fn test_operators() {
        let a = mb1();
        let b = mb2();
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, AmountBag::create(amount(-2, "CHF"), amount(-14, "USD")));
        assert_eq!(-&a, a.negate());
        assert_eq!(&a * 2, AmountBag::create(amount(24, "CHF"), amount(14, "USD")));
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(a.clone() - b.clone(), -(b - a.clone()));
    }

    #[test]
    fn test_hash_set_deduplicates_equal_values() {
        let set: HashSet<MonetaryValue> = [
            mb1(),
            AmountBag::create(amount(7, "USD"), amount(12, "CHF")),
            value(0, "USD"),
            value(0, "CHF"),
            AmountBag::create(amount(5, "CHF"), amount(-5, "CHF")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_dispatch() {
        assert_eq!(value(12, "CHF").to_string(), "[12 CHF]");
        assert_eq!(mb1().to_string(), "{[12 CHF][7 USD]}");
    }
}
