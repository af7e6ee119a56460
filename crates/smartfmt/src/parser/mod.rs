//! Template and format-spec parsers.
//!
//! `parse_template` splits a template string into literal text and
//! placeholders. The format-spec grammars (`parse_format_spec` for the
//! extension form and `NumericSpec::parse` for the numeric layout form) work
//! on the raw text captured after a placeholder's `:`.

pub mod ast;
pub mod error;
mod spec;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use spec::{Align, FormatSpec, NumericKind, NumericSpec, Sign, is_valid_name, parse_format_spec};
pub use template::parse_template;
