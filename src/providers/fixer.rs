use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::error::{MoneyError, Result};
use crate::core::rate::{ExchangeRateProvider, Rates};

pub const DEFAULT_BASE_URL: &str = "https://api.fixer.io";

/// Fixer-style rate provider answering `GET {base_url}/latest?base=..&symbols=..`.
pub struct FixerProvider {
    base_url: String,
}

impl FixerProvider {
    pub fn new(base_url: &str) -> Self {
        FixerProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for FixerProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Decodes a `/latest` document into its `rates` map.
pub(crate) fn parse_rates(body: &str) -> Result<Rates> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| MoneyError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let rates = document
        .get("rates")
        .filter(|rates| !rates.is_null())
        .ok_or_else(|| MoneyError::MalformedResponse("missing 'rates' field".to_string()))?;

    Rates::deserialize(rates)
        .map_err(|e| MoneyError::MalformedResponse(format!("invalid 'rates' field: {e}")))
}

#[async_trait]
impl ExchangeRateProvider for FixerProvider {
    #[instrument(
        name = "FixerRatesFetch",
        skip(self),
        fields(base = %base, symbols = %symbols)
    )]
    async fn latest_rates(&self, base: &str, symbols: &str) -> Result<Rates> {
        let url = format!(
            "{}/latest?base={}&symbols={}",
            self.base_url, base, symbols
        );
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("fxm/1.0").build()?;
        let response = client.get(&url).send().await?;
        debug!(status = %response.status(), "Received rate provider response");

        // Error statuses still carry a body; decoding it decides the outcome.
        let text = response.text().await?;
        parse_rates(&text)
    }
}
