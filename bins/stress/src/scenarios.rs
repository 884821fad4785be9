//! Scenario catalogue exercised by the stress runner.
//!
//! Each scenario rebuilds its fixtures, runs one arithmetic check and reports a
//! mismatch as `AppError::Assertion`.

use std::fmt::Display;

use moneybag_core::{AmountBag, MonetaryValue, SimpleAmount};
use moneybag_shared::{AppError, AppResult};

/// Amounts every scenario starts from.
pub struct Fixtures {
    f12chf: SimpleAmount,
    f14chf: SimpleAmount,
    f7usd: SimpleAmount,
    mb1: MonetaryValue,
    mb2: MonetaryValue,
}

impl Fixtures {
    /// Builds 12 CHF, 14 CHF, 7 USD, {[12 CHF][7 USD]} and {[14 CHF][21 USD]}.
    pub fn set_up() -> AppResult<Self> {
        let f12chf = money(12, "CHF")?;
        let f14chf = money(14, "CHF")?;
        let f7usd = money(7, "USD")?;
        let f21usd = money(21, "USD")?;
        let mb1 = AmountBag::create(f12chf.clone(), f7usd.clone());
        let mb2 = AmountBag::create(f14chf.clone(), f21usd);
        Ok(Self {
            f12chf,
            f14chf,
            f7usd,
            mb1,
            mb2,
        })
    }
}

/// A named arithmetic check.
pub struct Scenario {
    /// Name used in logs and for requirement overrides.
    pub name: &'static str,
    body: fn(&Fixtures) -> AppResult<()>,
}

impl Scenario {
    /// Sets up fresh fixtures and runs the check once.
    pub fn run(&self) -> AppResult<()> {
        let fixtures = Fixtures::set_up()?;
        (self.body)(&fixtures)
    }
}

macro_rules! scenarios {
    ($($name:ident),* $(,)?) => {
        /// Every scenario, in execution order.
        pub const SCENARIOS: &[Scenario] = &[
            $(Scenario { name: stringify!($name), body: $name },)*
        ];
    };
}

scenarios![
    bag_multiply,
    bag_negate,
    bag_simple_add,
    bag_subtract,
    bag_sum_add,
    is_zero,
    mixed_simple_add,
    bag_not_equals,
    bag_equals,
    bag_hash,
    simple_equals,
    zero_is_currency_agnostic,
    simple_hash,
    simplify,
    normalize_bag_minus_simple,
    normalize_bag_minus_bag,
    normalize_simple_minus_bag,
    print,
    simple_add,
    simple_bag_add,
    simple_multiply,
    simple_negate,
    simple_subtract,
];

fn money(quantity: i64, currency: &str) -> AppResult<SimpleAmount> {
    SimpleAmount::new(quantity, currency)
}

fn bag(first: (i64, &str), second: (i64, &str)) -> AppResult<MonetaryValue> {
    Ok(AmountBag::create(
        money(first.0, first.1)?,
        money(second.0, second.1)?,
    ))
}

fn expect(what: &str, condition: bool) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::Assertion(what.to_string()))
    }
}

fn expect_eq<A, E>(what: &str, actual: &A, expected: &E) -> AppResult<()>
where
    A: PartialEq<E> + Display,
    E: Display,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AppError::Assertion(format!(
            "{what}: expected {expected}, got {actual}"
        )))
    }
}

fn expect_ne<A, E>(what: &str, actual: &A, unexpected: &E) -> AppResult<()>
where
    A: PartialEq<E> + Display,
    E: Display,
{
    if actual == unexpected {
        Err(AppError::Assertion(format!(
            "{what}: {actual} should differ from {unexpected}"
        )))
    } else {
        Ok(())
    }
}

fn bag_multiply(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((24, "CHF"), (14, "USD"))?;
    expect_eq("{[12 CHF][7 USD]} * 2", &fx.mb1.multiply(2), &expected)?;
    expect_eq("{[12 CHF][7 USD]} * 1", &fx.mb1.multiply(1), &fx.mb1)?;
    expect("{[12 CHF][7 USD]} * 0 is zero", fx.mb1.multiply(0).is_zero())
}

fn bag_negate(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((-12, "CHF"), (-7, "USD"))?;
    expect_eq("-{[12 CHF][7 USD]}", &fx.mb1.negate(), &expected)
}

fn bag_simple_add(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((26, "CHF"), (7, "USD"))?;
    let sum = fx.mb1.add(&fx.f14chf.clone().into());
    expect_eq("{[12 CHF][7 USD]} + [14 CHF]", &sum, &expected)
}

fn bag_subtract(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((-2, "CHF"), (-14, "USD"))?;
    expect_eq(
        "{[12 CHF][7 USD]} - {[14 CHF][21 USD]}",
        &fx.mb1.subtract(&fx.mb2),
        &expected,
    )
}

fn bag_sum_add(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((26, "CHF"), (28, "USD"))?;
    expect_eq(
        "{[12 CHF][7 USD]} + {[14 CHF][21 USD]}",
        &fx.mb1.add(&fx.mb2),
        &expected,
    )
}

fn is_zero(fx: &Fixtures) -> AppResult<()> {
    expect("mb1 - mb1 is zero", fx.mb1.subtract(&fx.mb1).is_zero())?;
    expect(
        "{[0 CHF][0 USD]} is zero",
        bag((0, "CHF"), (0, "USD"))?.is_zero(),
    )
}

fn mixed_simple_add(fx: &Fixtures) -> AppResult<()> {
    let expected = AmountBag::create(fx.f12chf.clone(), fx.f7usd.clone());
    let sum = fx.f12chf.add(&fx.f7usd.clone().into());
    expect_eq("[12 CHF] + [7 USD]", &sum, &expected)
}

fn bag_not_equals(fx: &Fixtures) -> AppResult<()> {
    let marks = money(12, "DEM")?.add(&fx.f7usd.clone().into());
    expect_ne("{[12 CHF][7 USD]} vs [12 DEM] + [7 USD]", &fx.mb1, &marks)
}

fn bag_equals(fx: &Fixtures) -> AppResult<()> {
    let equal = bag((12, "CHF"), (7, "USD"))?;
    expect_eq("mb1 == mb1", &fx.mb1, &fx.mb1)?;
    expect_eq("mb1 == {[12 CHF][7 USD]}", &fx.mb1, &equal)?;
    expect_ne("mb1 vs [12 CHF]", &fx.mb1, &fx.f12chf)?;
    expect_ne("[12 CHF] vs mb1", &fx.f12chf, &fx.mb1)?;
    expect_ne("mb1 vs mb2", &fx.mb1, &fx.mb2)
}

fn bag_hash(fx: &Fixtures) -> AppResult<()> {
    let equal = bag((12, "CHF"), (7, "USD"))?;
    expect_eq(
        "hash of equal bags",
        &fx.mb1.hash_code(),
        &equal.hash_code(),
    )
}

fn simple_equals(fx: &Fixtures) -> AppResult<()> {
    let equal = money(12, "CHF")?;
    expect_eq("[12 CHF] == [12 CHF]", &fx.f12chf, &equal)?;
    expect_eq(
        "hash of [12 CHF]",
        &fx.f12chf.hash_code(),
        &equal.hash_code(),
    )?;
    expect_ne("[12 CHF] vs [14 CHF]", &fx.f12chf, &fx.f14chf)
}

fn zero_is_currency_agnostic(_: &Fixtures) -> AppResult<()> {
    let zero_dollars = money(0, "USD")?;
    let zero_francs = money(0, "CHF")?;
    expect_eq("[0 USD] == [0 CHF]", &zero_dollars, &zero_francs)?;
    expect_eq(
        "hash of zero",
        &zero_dollars.hash_code(),
        &zero_francs.hash_code(),
    )
}

fn simple_hash(fx: &Fixtures) -> AppResult<()> {
    let equal = money(12, "CHF")?;
    expect_eq(
        "hash of [12 CHF]",
        &fx.f12chf.hash_code(),
        &equal.hash_code(),
    )
}

fn simplify(_: &Fixtures) -> AppResult<()> {
    let sum = bag((26, "CHF"), (28, "CHF"))?;
    expect_eq("{[26 CHF][28 CHF]}", &sum, &money(54, "CHF")?)
}

fn normalize_bag_minus_simple(fx: &Fixtures) -> AppResult<()> {
    let diff = fx.mb1.subtract(&fx.f12chf.clone().into());
    expect_eq("{[12 CHF][7 USD]} - [12 CHF]", &diff, &money(7, "USD")?)
}

fn normalize_bag_minus_bag(fx: &Fixtures) -> AppResult<()> {
    let ms1 = bag((12, "CHF"), (3, "USD"))?;
    expect_eq(
        "{[12 CHF][7 USD]} - {[12 CHF][3 USD]}",
        &fx.mb1.subtract(&ms1),
        &money(4, "USD")?,
    )
}

fn normalize_simple_minus_bag(fx: &Fixtures) -> AppResult<()> {
    let ms1 = bag((12, "CHF"), (3, "USD"))?;
    expect_eq(
        "[12 CHF] - {[12 CHF][3 USD]}",
        &fx.f12chf.subtract(&ms1),
        &money(-3, "USD")?,
    )
}

fn print(fx: &Fixtures) -> AppResult<()> {
    expect_eq("text of [12 CHF]", &fx.f12chf.to_string(), &"[12 CHF]")
}

fn simple_add(fx: &Fixtures) -> AppResult<()> {
    let sum = fx.f12chf.add(&fx.f14chf.clone().into());
    expect_eq("[12 CHF] + [14 CHF]", &sum, &money(26, "CHF")?)
}

fn simple_bag_add(fx: &Fixtures) -> AppResult<()> {
    let expected = bag((26, "CHF"), (7, "USD"))?;
    expect_eq(
        "[14 CHF] + {[12 CHF][7 USD]}",
        &fx.f14chf.add(&fx.mb1),
        &expected,
    )
}

fn simple_multiply(fx: &Fixtures) -> AppResult<()> {
    expect_eq("[14 CHF] * 2", &fx.f14chf.multiply(2), &money(28, "CHF")?)
}

fn simple_negate(fx: &Fixtures) -> AppResult<()> {
    expect_eq("-[14 CHF]", &fx.f14chf.negate(), &money(-14, "CHF")?)
}

fn simple_subtract(fx: &Fixtures) -> AppResult<()> {
    let diff = fx.f14chf.subtract(&fx.f12chf.clone().into());
    expect_eq("[14 CHF] - [12 CHF]", &diff, &money(2, "CHF")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_scenario_passes() {
        for scenario in SCENARIOS {
            assert_eq!(scenario.run(), Ok(()), "scenario {}", scenario.name);
        }
    }

    #[test]
    fn test_scenario_names_are_unique() {
        let names: HashSet<_> = SCENARIOS.iter().map(|scenario| scenario.name).collect();
        assert_eq!(names.len(), SCENARIOS.len());
        assert!(names.contains("bag_multiply"));
    }

    #[test]
    fn test_expect_eq_reports_mismatch() {
        let err = expect_eq("answer", &41, &42).unwrap_err();
        assert_eq!(
            err,
            AppError::Assertion("answer: expected 42, got 41".to_string())
        );
    }

    #[test]
    fn test_expect_ne_reports_match() {
        assert!(expect_ne("answer", &42, &42).is_err());
        assert!(expect_ne("answer", &41, &42).is_ok());
    }
}
