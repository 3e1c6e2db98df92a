//! Money values: an exact decimal amount tagged with a registered currency.

use crate::core::currency::{self, Currency};
use crate::core::error::{MoneyError, Result};
use crate::core::rate::{ExchangeRateProvider, rate_for};
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Raw input accepted when constructing [`Money`].
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyValue {
    Text(String),
    Float32(f32),
    Float64(f64),
    Integer(i64),
}

impl From<&str> for MoneyValue {
    fn from(value: &str) -> Self {
        MoneyValue::Text(value.to_string())
    }
}

impl From<String> for MoneyValue {
    fn from(value: String) -> Self {
        MoneyValue::Text(value)
    }
}

impl From<f32> for MoneyValue {
    fn from(value: f32) -> Self {
        MoneyValue::Float32(value)
    }
}

impl From<f64> for MoneyValue {
    fn from(value: f64) -> Self {
        MoneyValue::Float64(value)
    }
}

impl From<i32> for MoneyValue {
    fn from(value: i32) -> Self {
        MoneyValue::Integer(value.into())
    }
}

impl From<u32> for MoneyValue {
    fn from(value: u32) -> Self {
        MoneyValue::Integer(value.into())
    }
}

impl From<i64> for MoneyValue {
    fn from(value: i64) -> Self {
        MoneyValue::Integer(value)
    }
}

/// Accepts JSON strings and numbers; every other JSON type is rejected.
impl TryFrom<Value> for MoneyValue {
    type Error = MoneyError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(MoneyValue::Text(text)),
            Value::Number(number) => number
                .as_i64()
                .map(MoneyValue::Integer)
                .or_else(|| number.as_f64().map(MoneyValue::Float64))
                .ok_or_else(|| MoneyError::UnsupportedValueType(format!("number {number}"))),
            Value::Null => Err(MoneyError::UnsupportedValueType("null".to_string())),
            Value::Bool(_) => Err(MoneyError::UnsupportedValueType("boolean".to_string())),
            Value::Array(_) => Err(MoneyError::UnsupportedValueType("array".to_string())),
            Value::Object(_) => Err(MoneyError::UnsupportedValueType("object".to_string())),
        }
    }
}

impl MoneyValue {
    fn to_decimal(&self) -> Result<Decimal> {
        match self {
            MoneyValue::Text(text) => parse_decimal(text),
            // Floats go through their shortest decimal text so 3.14 stays 3.14.
            // Digits past the decimal's 28 places of scale are rounded away.
            MoneyValue::Float32(value) => parse_float_text(&value.to_string()),
            MoneyValue::Float64(value) => parse_float_text(&value.to_string()),
            MoneyValue::Integer(value) => Ok(Decimal::from(*value)),
        }
    }
}

fn invalid_amount(text: &str, reason: impl ToString) -> MoneyError {
    MoneyError::InvalidAmount {
        value: text.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses a decimal literal exactly. Input that would lose digits is rejected.
fn parse_decimal(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.contains('_') {
        return Err(invalid_amount(text, "digit separators are not allowed"));
    }
    match trimmed.split_once(['e', 'E']) {
        Some((mantissa, _)) => {
            Decimal::from_str_exact(mantissa).map_err(|e| invalid_amount(text, e))?;
            Decimal::from_scientific(trimmed).map_err(|e| invalid_amount(text, e))
        }
        None => Decimal::from_str_exact(trimmed).map_err(|e| invalid_amount(text, e)),
    }
}

fn parse_float_text(text: &str) -> Result<Decimal> {
    Decimal::from_str(text).map_err(|e| invalid_amount(text, e))
}

fn lookup(code: &str) -> Result<Currency> {
    currency::lookup(code).ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
}

/// An immutable amount of money in a registered currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Builds a money value from raw input and a currency code.
    ///
    /// # Errors
    /// `UnknownCurrency` when `code` is not registered, `InvalidAmount` when
    /// the value has no exact decimal form.
    pub fn new(value: impl Into<MoneyValue>, code: &str) -> Result<Self> {
        let currency = lookup(code)?;
        let amount = value.into().to_decimal()?;
        Ok(Money { amount, currency })
    }

    /// Wraps an already exact decimal amount in the currency registered as `code`.
    ///
    /// # Errors
    /// `UnknownCurrency` when `code` is not registered.
    pub fn from_decimal(amount: Decimal, code: &str) -> Result<Self> {
        let currency = lookup(code)?;
        Ok(Money { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Converts into `target` at the provider's latest rate.
    ///
    /// The target code is validated before the provider is called. A rate the
    /// provider does not return is treated as zero, so a zero result for a
    /// non-zero amount should be read as a missing quote. The rate arrives as
    /// a float, which bounds the precision of the result.
    pub async fn convert(&self, target: &str, provider: &dyn ExchangeRateProvider) -> Result<Self> {
        let currency = lookup(target)?;
        let rates = provider
            .latest_rates(self.currency.code(), currency.code())
            .await?;

        let rate = rate_for(&rates, currency.code());
        // JSON numbers are finite, so a rate that does not parse is out of range.
        let factor =
            Decimal::from_str(&rate.to_string()).map_err(|_| MoneyError::AmountOverflow {
                amount: self.amount.to_string(),
                rate: rate.to_string(),
            })?;
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::AmountOverflow {
                amount: self.amount.to_string(),
                rate: factor.to_string(),
            })?;

        debug!(from = %self, %rate, "Converted to {}", currency);
        Ok(Money { amount, currency })
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount.normalize())
    }
}
