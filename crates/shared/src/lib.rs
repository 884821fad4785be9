//! Shared types, errors, and configuration for Moneybag.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, PerfRequirement, StressConfig};
pub use error::{AppError, AppResult};
pub use types::CurrencyCode;
