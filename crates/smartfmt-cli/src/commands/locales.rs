//! Implementation of the `smartfmt locales` command.

use miette::{miette, IntoDiagnostic, Result};
use smartfmt::{CldrData, Formatter, LocaleData, LocaleId, Value};

use crate::output::table::{format_locales_table, LocaleRow};

/// Arguments for the locales command.
#[derive(Debug, clap::Args)]
pub struct LocalesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

const EXAMPLE_TEMPLATE: &str = "{0:,.2f}";
const EXAMPLE_VALUE: f64 = -1234567.891;

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> Result<i32> {
    let mut rows = Vec::new();
    for tag in CldrData::supported_locales() {
        let locale = LocaleId::parse(tag).map_err(|e| miette!("{e}"))?;
        let format = CldrData.number_format(&locale);
        let example = Formatter::builder()
            .locale(locale)
            .build()
            .format(EXAMPLE_TEMPLATE, &[Value::from(EXAMPLE_VALUE)])
            .map_err(|e| miette!("{tag}: {e}"))?;
        rows.push(LocaleRow::new(tag, &format, example));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else {
        println!("{}", format_locales_table(&rows));
    }
    Ok(exitcode::OK)
}
