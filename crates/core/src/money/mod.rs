//! Monetary amounts and multi-currency bags.
//!
//! This module implements the value arithmetic:
//! - Single-currency amounts
//! - Normalized multi-currency bags
//! - The normalizing factory every sum goes through
//! - The `MonetaryValue` sum type dispatching add/subtract/negate/multiply
//!
//! Zero is currency-agnostic: `[0 USD] == [0 CHF]`, with matching hashes.

pub mod amount;
pub mod bag;
pub mod normalize;
pub mod value;

#[cfg(test)]
mod props;

pub use amount::SimpleAmount;
pub use bag::AmountBag;
pub use normalize::normalize;
pub use value::MonetaryValue;
