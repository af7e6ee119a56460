//! smartfmt CLI entry point.
//!
//! - `smartfmt format` renders a template with the given arguments
//! - `smartfmt check` validates template syntax
//! - `smartfmt locales` lists the built-in number data

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_format, run_locales, CheckArgs, FormatArgs, LocalesArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Locale-aware template formatting.
#[derive(Debug, Parser)]
#[command(name = "smartfmt")]
#[command(about = "Locale-aware template formatting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log placeholder failures and extension dispatch
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a template
    Format(FormatArgs),
    /// Check template syntax
    Check(CheckArgs),
    /// List locales with built-in number data
    Locales(LocalesArgs),
}

fn setup_colors(color_when: ColorWhen) {
    match color_when {
        // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        ColorWhen::Auto => {}
        ColorWhen::Always => owo_colors::set_override(true),
        ColorWhen::Never => owo_colors::set_override(false),
    }
}

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "smartfmt=trace" } else { "smartfmt=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(stderr))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(args),
        Commands::Check(args) => run_check(args),
        Commands::Locales(args) => run_locales(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
