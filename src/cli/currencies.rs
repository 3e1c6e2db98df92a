use super::ui;
use crate::core::currency;
use comfy_table::Cell;

/// Table of every registered currency code and symbol.
pub fn display_currencies() -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Symbol")]);

    for currency in currency::currencies() {
        table.add_row(vec![Cell::new(currency.code()), Cell::new(currency.symbol())]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Supported currencies", ui::StyleType::Title),
        table
    )
}
