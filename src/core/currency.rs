//! Registry of supported currencies and their display symbols

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

/// A currency known to the registry. Identity is the three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    symbol: &'static str,
}

impl Currency {
    const fn new(code: &'static str, symbol: &'static str) -> Self {
        Currency { code, symbol }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

const CURRENCIES: [Currency; 32] = [
    Currency::new("AUD", "$"),
    Currency::new("BGN", "лв"),
    Currency::new("BRL", "R$"),
    Currency::new("CAD", "$"),
    Currency::new("CHF", "CHF"),
    Currency::new("CNY", "¥"),
    Currency::new("CZK", "Kč"),
    Currency::new("DKK", "kr"),
    Currency::new("EUR", "€"),
    Currency::new("GBP", "£"),
    Currency::new("HKD", "$"),
    Currency::new("HRK", "kn"),
    Currency::new("HUF", "Ft"),
    Currency::new("IDR", "Rp"),
    Currency::new("ILS", "₪"),
    Currency::new("INR", "₹"),
    Currency::new("JPY", "¥"),
    Currency::new("KRW", "₩"),
    Currency::new("MXN", "$"),
    Currency::new("MYR", "RM"),
    Currency::new("NOK", "kr"),
    Currency::new("NZD", "$"),
    Currency::new("PHP", "₱"),
    Currency::new("PLN", "zł"),
    Currency::new("RON", "lei"),
    Currency::new("RUB", "руб"),
    Currency::new("SEK", "kr"),
    Currency::new("SGD", "$"),
    Currency::new("THB", "฿"),
    Currency::new("TRY", "₺"),
    Currency::new("USD", "$"),
    Currency::new("ZAR", "R"),
];

static REGISTRY: OnceLock<HashMap<&'static str, Currency>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Currency> {
    REGISTRY.get_or_init(|| CURRENCIES.iter().map(|c| (c.code, *c)).collect())
}

/// Returns the currency registered under `code`, if any. Codes are case sensitive.
pub fn lookup(code: &str) -> Option<Currency> {
    registry().get(code).copied()
}

/// All registered currencies, ordered by code.
pub fn currencies() -> Vec<Currency> {
    let mut all: Vec<Currency> = registry().values().copied().collect();
    all.sort_by_key(|c| c.code);
    all
}
