//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use smartfmt::NumberFormat;

/// Number symbols of one locale.
#[derive(Debug, Serialize)]
pub struct LocaleRow {
    pub locale: String,
    pub decimal: String,
    pub group: String,
    pub minus: String,
    pub percent: String,
    pub currency: String,
    pub example: String,
}

impl LocaleRow {
    pub fn new(locale: &str, format: &NumberFormat, example: String) -> Self {
        Self {
            locale: locale.to_string(),
            decimal: format.decimal.clone(),
            group: visible(&format.group),
            minus: format.minus.clone(),
            percent: format.percent_pattern.clone(),
            currency: format.currency_pattern.replace('¤', &format.currency_symbol),
            example,
        }
    }
}

/// Spell out whitespace separators so they show up in a table.
fn visible(symbol: &str) -> String {
    match symbol {
        "\u{a0}" => "NBSP".to_string(),
        "\u{202f}" => "NNBSP".to_string(),
        " " => "space".to_string(),
        other => other.to_string(),
    }
}

/// Format locale rows as an ASCII table.
pub fn format_locales_table(rows: &[LocaleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Locale", "Decimal", "Group", "Minus", "Percent", "Currency", "Example",
    ]);

    for row in rows {
        table.add_row(vec![
            row.locale.clone(),
            row.decimal.clone(),
            row.group.clone(),
            row.minus.clone(),
            row.percent.clone(),
            row.currency.clone(),
            row.example.clone(),
        ]);
    }

    table
}
