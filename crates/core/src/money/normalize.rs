//! Normalization of monetary sums.
//!
//! Every path that can produce a bag from arbitrary entries goes through [`collapse`]:
//!
//! 1. Entries of the same currency are merged, keeping first-seen currency order
//! 2. Entries that sum to exactly zero are dropped
//! 3. Nothing left becomes a zero amount in the placeholder currency
//! 4. A single survivor becomes a plain `SimpleAmount`, never a bag of one
//! 5. Two or more survivors become an `AmountBag`
//!
//! Rule 4 is what lets a bag-derived single-currency result compare equal to a
//! `SimpleAmount`.

use std::collections::HashMap;

use moneybag_shared::CurrencyCode;
use tracing::trace;

use super::amount::SimpleAmount;
use super::bag::AmountBag;
use super::value::MonetaryValue;

/// Normalizes the sum of `first` and every value in `rest`.
///
/// When everything cancels out, the result is a zero amount in the currency of
/// `first` (its first entry, for a bag).
///
/// # Example
///
/// ```
/// use moneybag_core::money::{normalize, MonetaryValue, SimpleAmount};
///
/// let francs: MonetaryValue = SimpleAmount::new(26, "CHF").unwrap().into();
/// let more_francs: MonetaryValue = SimpleAmount::new(28, "CHF").unwrap().into();
/// let sum = normalize(&francs, [&more_francs]);
/// assert_eq!(sum.to_string(), "[54 CHF]");
/// ```
#[must_use]
pub fn normalize<'a, I>(first: &'a MonetaryValue, rest: I) -> MonetaryValue
where
    I: IntoIterator<Item = &'a MonetaryValue>,
{
    let entries = first
        .entries()
        .iter()
        .chain(rest.into_iter().flat_map(MonetaryValue::entries))
        .cloned();
    collapse(first.placeholder_currency(), entries)
}

/// Merges, prunes and degenerates a flat sequence of entries.
pub(crate) fn collapse<I>(placeholder: &CurrencyCode, entries: I) -> MonetaryValue
where
    I: IntoIterator<Item = SimpleAmount>,
{
    let mut merged: Vec<SimpleAmount> = Vec::new();
    let mut slots: HashMap<CurrencyCode, usize> = HashMap::new();
    let mut inputs = 0usize;

    for entry in entries {
        inputs += 1;
        match slots.get(entry.currency()) {
            Some(&slot) => merged[slot].accumulate(entry.quantity()),
            None => {
                slots.insert(entry.currency().clone(), merged.len());
                merged.push(entry);
            }
        }
    }
    merged.retain(|entry| !entry.is_zero());

    trace!(inputs, currencies = merged.len(), "normalized monetary sum");

    if merged.len() > 1 {
        return MonetaryValue::Bag(AmountBag::from_normalized(merged));
    }
    let single = merged
        .pop()
        .unwrap_or_else(|| SimpleAmount::zero(placeholder.clone()));
    MonetaryValue::Simple(single)
}
