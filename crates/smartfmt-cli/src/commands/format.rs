//! Implementation of the `smartfmt format` command.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Report, Result};
use serde::Serialize;
use serde_json::Value as Json;
use smartfmt::{Args, ErrorAction, FormatError, Formatter, FormatterConfig, Value};
use tracing::debug;

use crate::output::TemplateDiagnostic;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Template to format
    pub template: String,

    /// Positional arguments; JSON literals are decoded, anything else is text
    pub args: Vec<String>,

    /// Named argument in name=value form (repeatable)
    #[arg(short = 'n', long = "named", value_parser = parse_key_val)]
    pub named: Vec<(String, String)>,

    /// Locale for numbers and plural rules (e.g. en, de-CH, ru)
    #[arg(short, long, env = "SMARTFMT_LOCALE")]
    pub locale: Option<String>,

    /// What to do when a placeholder fails: strict, errmsg, ignore or skip
    #[arg(short, long)]
    pub errors: Option<ErrorAction>,

    /// JSON file with formatter settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FormatOutput {
    result: String,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Decode a command-line argument, falling back to plain text.
fn parse_value(text: &str) -> Value {
    serde_json::from_str::<Json>(text).map_or_else(|_| Value::from(text), from_json)
}

fn from_json(value: Json) -> Value {
    match value {
        Json::Null => Value::None,
        Json::Bool(b) => Value::from(b),
        Json::Number(n) => n
            .as_i64()
            .map(Value::from)
            .or_else(|| n.as_f64().map(Value::from))
            .unwrap_or(Value::None),
        Json::String(s) => Value::from(s),
        Json::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        Json::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

fn load_config(path: &Path) -> Result<FormatterConfig> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot read config file {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| miette!("Invalid config file {}: {}", path.display(), e))
}

fn print_error(json: bool, error: &FormatError) -> Result<()> {
    if json {
        let output = serde_json::json!({ "error": error.to_string() });
        eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        eprintln!("Format error: {error}");
    }
    Ok(())
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => FormatterConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(errors) = args.errors {
        config.errors = errors;
    }

    let formatter = match Formatter::from_config(&config) {
        Ok(formatter) => formatter,
        Err(e) => {
            print_error(args.json, &e)?;
            return Ok(exitcode::USAGE);
        }
    };

    let mut values = Args::new();
    for arg in &args.args {
        values = values.arg(parse_value(arg));
    }
    for (name, value) in &args.named {
        values = values.named(name.as_str(), parse_value(value));
    }
    debug!(locale = %formatter.locale(), errors = %formatter.error_action(), "formatting from command line");

    match formatter.format_args(&args.template, &values) {
        Ok(result) => {
            if args.json {
                let output = FormatOutput { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(FormatError::Parse(err)) if !args.json => {
            let diagnostic = TemplateDiagnostic::from_parse_error("template", &args.template, &err);
            eprintln!("{:?}", Report::new(diagnostic));
            Ok(exitcode::DATAERR)
        }
        Err(e) => {
            print_error(args.json, &e)?;
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_decode_json_literals() {
        assert_eq!(parse_value("3"), Value::from(3));
        assert_eq!(parse_value("2.5"), Value::from(2.5));
        assert_eq!(parse_value("true"), Value::from(true));
        assert_eq!(parse_value("null"), Value::None);
        assert_eq!(parse_value("[1, \"a\"]"), Value::List(vec![Value::from(1), Value::from("a")]));
        assert_eq!(parse_value("\"7\""), Value::from("7"));
    }

    #[test]
    fn values_fall_back_to_text() {
        assert_eq!(parse_value("Ann"), Value::from("Ann"));
        assert_eq!(parse_value("1,000"), Value::from("1,000"));
    }

    #[test]
    fn objects_become_maps() {
        let value = parse_value(r#"{"name": "Ann", "age": 30}"#);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("age"), Some(&Value::from(30)));
    }

    #[test]
    fn key_value_pairs() {
        assert_eq!(
            parse_key_val("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("name").is_err());
    }
}
