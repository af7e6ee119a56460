//! Miette diagnostic wrapper for template syntax errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use smartfmt::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into the template text.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(smartfmt::syntax))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a ParseError against the template it came from.
    pub fn from_parse_error(name: &str, template: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let help = match err {
            ParseError::UnexpectedEof { .. } => Some("close the placeholder with '}'".to_string()),
            ParseError::Syntax { message, .. } if message.contains("single '}'") => {
                Some("write '}}' for a literal brace".to_string())
            }
            ParseError::Syntax { .. } => None,
        };
        TemplateDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span: (byte_offset(template, line, column), 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Byte offset of a 1-based line and character column, clamped to the text.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    text[line_start.min(text.len())..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(text.len(), |(offset, _)| line_start + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_count_characters() {
        assert_eq!(byte_offset("ab}", 1, 3), 2);
        assert_eq!(byte_offset("é}", 1, 2), 2);
        assert_eq!(byte_offset("a\nb{", 2, 2), 3);
        assert_eq!(byte_offset("a{", 1, 3), 2);
    }
}
