use super::ui;
use crate::core::{ExchangeRateProvider, Money};
use anyhow::{Context, Result};
use comfy_table::Cell;

/// Source and result of a single conversion.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    pub from: Money,
    pub to: Money,
}

impl Conversion {
    /// A zero result for a non-zero amount means the provider had no quote.
    pub fn is_suspect(&self) -> bool {
        self.to.amount().is_zero() && !self.from.amount().is_zero()
    }

    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Amount"),
        ]);
        for money in [self.from, self.to] {
            table.add_row(vec![
                Cell::new(money.currency().code()),
                ui::amount_cell(&money.to_string()),
            ]);
        }

        let mut output = format!(
            "Conversion: {}\n\n{}",
            ui::style_text(
                &format!("{} → {}", self.from.currency(), self.to.currency()),
                ui::StyleType::Title
            ),
            table
        );
        if self.is_suspect() {
            output.push_str(&format!(
                "\n\n{}",
                ui::style_text(
                    &format!(
                        "No {} rate was returned for {}; the result assumes a rate of 0",
                        self.to.currency(),
                        self.from.currency()
                    ),
                    ui::StyleType::Warning
                )
            ));
        }
        output
    }
}

pub async fn convert(
    value: &str,
    from: &str,
    to: &str,
    provider: &dyn ExchangeRateProvider,
) -> Result<Conversion> {
    let source = Money::new(value, from)
        .with_context(|| format!("Failed to read amount '{value}' in {from}"))?;
    let target = source
        .convert(to, provider)
        .await
        .with_context(|| format!("Failed to convert {source} {from} to {to}"))?;
    Ok(Conversion {
        from: source,
        to: target,
    })
}
