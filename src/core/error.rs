//! Error taxonomy for money construction and conversion.

use thiserror::Error;

/// Errors returned by [`Money`](crate::core::money::Money) construction and conversion.
#[derive(Error, Debug)]
pub enum MoneyError {
    /// The currency code is not present in the registry.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A textual amount could not be parsed as a decimal number.
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// The construction input is of a type that cannot become an amount.
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// The rate request could not be sent or its body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The rate provider answered with something other than a rates document.
    #[error("Malformed rate response: {0}")]
    MalformedResponse(String),

    /// Rescaling the amount by the rate does not fit in a decimal.
    #[error("Amount overflow converting {amount} at rate {rate}")]
    AmountOverflow { amount: String, rate: String },
}

pub type Result<T, E = MoneyError> = std::result::Result<T, E>;
