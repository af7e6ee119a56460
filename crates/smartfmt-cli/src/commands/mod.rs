//! CLI command implementations.

mod check;
mod format;
mod locales;

pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};
pub use locales::{run_locales, LocalesArgs};
