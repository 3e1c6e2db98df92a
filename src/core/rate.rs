//! Exchange rate abstractions

use crate::core::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Quotes from a single provider call, keyed by currency code. Each value is the
/// multiplier converting one unit of the requested base into that currency.
pub type Rates = HashMap<String, f64>;

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Fetches the latest quotes for `symbols` relative to `base`.
    async fn latest_rates(&self, base: &str, symbols: &str) -> Result<Rates>;
}

/// Rate for `code` in `rates`. A quote the provider left out counts as zero.
pub fn rate_for(rates: &Rates, code: &str) -> f64 {
    match rates.get(code) {
        Some(rate) => *rate,
        None => {
            debug!(code, "No rate returned, using zero");
            0.0
        }
    }
}
