//! Core monetary arithmetic for Moneybag.
//!
//! This crate contains pure value arithmetic with ZERO I/O dependencies.
//! Every operation returns a fresh immutable value, so results can be shared
//! freely between threads.
//!
//! # Modules
//!
//! - `money` - Simple amounts, multi-currency bags and their normalization

pub mod money;

pub use money::{AmountBag, MonetaryValue, SimpleAmount, normalize};
pub use moneybag_shared::{AppError, AppResult, CurrencyCode};
