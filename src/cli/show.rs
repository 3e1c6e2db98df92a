use super::ui;
use crate::core::Money;
use anyhow::{Context, Result};

/// Renders `value` in `code`, e.g. `€3.14`.
pub fn run(value: &str, code: &str) -> Result<String> {
    let money = Money::new(value, code)
        .with_context(|| format!("Failed to read amount '{value}' in {code}"))?;
    Ok(ui::style_text(&money.to_string(), ui::StyleType::Amount))
}
