//! Property-based tests for monetary arithmetic.
//!
//! - Property 1: Addition is commutative and associative
//! - Property 2: Every value has an additive inverse
//! - Property 3: Multiplication by one and zero
//! - Property 4: Results are always normalized
//! - Property 5: Equal values hash equally

use proptest::prelude::*;

use super::amount::SimpleAmount;
use super::normalize::normalize;
use super::value::MonetaryValue;

/// Strategy to generate currency codes.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("CHF"), Just("USD"), Just("EUR"), Just("JPY")]
}

/// Strategy to generate simple amounts, zero included.
fn simple_amount() -> impl Strategy<Value = SimpleAmount> {
    (-1_000i64..1_000i64, currency_code())
        .prop_map(|(quantity, currency)| SimpleAmount::new(quantity, currency).unwrap())
}

/// Strategy to generate normalized values: simple amounts and bags alike.
fn monetary_value() -> impl Strategy<Value = MonetaryValue> {
    prop::collection::vec(simple_amount(), 1..6).prop_map(|amounts| {
        let values: Vec<MonetaryValue> = amounts.into_iter().map(MonetaryValue::from).collect();
        normalize(&values[0], &values[1..])
    })
}

/// Checks the bag invariant on any value.
fn is_normalized(value: &MonetaryValue) -> bool {
    match value {
        MonetaryValue::Simple(_) => true,
        MonetaryValue::Bag(bag) => {
            let entries = bag.entries();
            entries.len() > 1
                && entries.iter().all(|entry| !entry.is_zero())
                && entries.iter().enumerate().all(|(i, entry)| {
                    entries[i + 1..]
                        .iter()
                        .all(|other| other.currency() != entry.currency())
                })
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Addition is commutative and associative
    // =========================================================================

    /// *For any* a and b, a + b SHALL equal b + a.
    #[test]
    fn prop_add_is_commutative(a in monetary_value(), b in monetary_value()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    /// *For any* a, b and c, (a + b) + c SHALL equal a + (b + c).
    #[test]
    fn prop_add_is_associative(
        a in monetary_value(),
        b in monetary_value(),
        c in monetary_value(),
    ) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    // =========================================================================
    // Property 2: Additive inverse
    // =========================================================================

    /// *For any* a, a + (-a) SHALL be zero.
    #[test]
    fn prop_additive_inverse(a in monetary_value()) {
        prop_assert!(a.add(&a.negate()).is_zero());
        prop_assert!(a.subtract(&a).is_zero());
    }

    /// *For any* a and b, a - b SHALL equal a + (-b).
    #[test]
    fn prop_subtract_is_add_negated(a in monetary_value(), b in monetary_value()) {
        prop_assert_eq!(a.subtract(&b), a.add(&b.negate()));
    }

    // =========================================================================
    // Property 3: Multiplication by one and zero
    // =========================================================================

    /// *For any* a, a * 1 SHALL equal a and a * 0 SHALL be zero.
    #[test]
    fn prop_multiply_identity_and_zero(a in monetary_value()) {
        prop_assert_eq!(a.multiply(1), a.clone());
        prop_assert!(a.multiply(0).is_zero());
    }

    /// *For any* a and factor k, a * k SHALL equal k repeated additions of a.
    #[test]
    fn prop_multiply_is_repeated_add(a in monetary_value(), k in 1i64..6) {
        let mut expected = a.clone();
        for _ in 1..k {
            expected = expected.add(&a);
        }
        prop_assert_eq!(a.multiply(k), expected);
    }

    // =========================================================================
    // Property 4: Results are always normalized
    // =========================================================================

    /// *For any* arithmetic result, a bag SHALL hold at least two distinct,
    /// non-zero currencies.
    #[test]
    fn prop_results_are_normalized(
        a in monetary_value(),
        b in monetary_value(),
        k in -3i64..4,
    ) {
        prop_assert!(is_normalized(&a.add(&b)));
        prop_assert!(is_normalized(&a.subtract(&b)));
        prop_assert!(is_normalized(&a.negate()));
        prop_assert!(is_normalized(&a.multiply(k)));
    }

    /// *For any* value that is zero, the result SHALL be a simple amount.
    #[test]
    fn prop_zero_is_simple(a in monetary_value()) {
        prop_assert!(a.subtract(&a).as_simple().is_some());
    }

    // =========================================================================
    // Property 5: Equal values hash equally
    // =========================================================================

    /// *For any* a and b that compare equal, hash codes SHALL match.
    #[test]
    fn prop_equal_values_hash_equally(a in monetary_value(), b in monetary_value()) {
        let left = a.add(&b);
        let right = b.add(&a);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.hash_code(), right.hash_code());
    }

    /// *For any* two zero amounts, equality and hash SHALL ignore the currency.
    #[test]
    fn prop_zero_is_currency_agnostic(a in currency_code(), b in currency_code()) {
        let left = SimpleAmount::new(0, a).unwrap();
        let right = SimpleAmount::new(0, b).unwrap();
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.hash_code(), right.hash_code());
    }
}
