//! Implementation of the `smartfmt check` command.

use miette::{IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use smartfmt::parse_template;

use crate::output::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Templates to check
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    template: &'a str,
    placeholders: usize,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::new();
    for (position, template) in args.templates.iter().enumerate() {
        let result = match parse_template(template) {
            Ok(parsed) => CheckResult {
                template,
                placeholders: parsed.fields().count(),
                error: None,
            },
            Err(err) => {
                if !args.json {
                    let name = format!("template {}", position + 1);
                    let diagnostic = TemplateDiagnostic::from_parse_error(&name, template, &err);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                CheckResult {
                    template,
                    placeholders: 0,
                    error: Some(err.to_string()),
                }
            }
        };
        results.push(result);
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else if failed == 0 {
        let ok = "ok".if_supports_color(Stream::Stdout, |t| t.style(Style::new().green()));
        println!("{ok} {} template(s) valid", results.len());
    } else {
        let error = "error".if_supports_color(Stream::Stdout, |t| t.style(Style::new().red()));
        println!("{error} {failed} of {} template(s) invalid", results.len());
    }

    if failed == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
