//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod money;
pub mod rate;

// Re-export main types for cleaner imports
pub use currency::Currency;
pub use error::MoneyError;
pub use money::{Money, MoneyValue};
pub use rate::{ExchangeRateProvider, Rates};
