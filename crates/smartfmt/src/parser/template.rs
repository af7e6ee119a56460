//! Template string tokenizer using winnow.
//!
//! Splits a template into literal text and placeholders. Handles:
//! - Escape sequences: `{{` and `}}`
//! - Placeholders `{field!conversion:spec}` with `.attr` and `[key]` accessors
//! - Format-specs containing balanced nested braces, captured verbatim

use super::ast::*;
use super::error::ParseError;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use smartfmt::parser::{ArgRef, Segment, parse_template};
///
/// let t = parse_template("{0:one|many} left").unwrap();
/// match &t.segments[0] {
///     Segment::Field(field) => {
///         assert_eq!(field.arg, ArgRef::Index(0));
///         assert_eq!(field.spec, "one|many");
///     }
///     Segment::Literal(_) => unreachable!(),
/// }
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    let parsed = template(&mut remaining);
    let (line, column) = calculate_position(input, remaining);
    match parsed {
        Ok(t) if remaining.is_empty() => Ok(t),
        Ok(_) if remaining.starts_with('{') => {
            let mut rest = &remaining[1..];
            if spec_text(&mut rest).is_err() {
                let (line, column) = calculate_position(input, "");
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: "invalid placeholder".to_string(),
                })
            }
        }
        Ok(_) => Err(ParseError::Syntax {
            line,
            column,
            message: "single '}' encountered in format string".to_string(),
        }),
        Err(e) => Err(ParseError::Syntax {
            line,
            column,
            message: format!("parse error: {e}"),
        }),
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            field @ Segment::Field(_) => result.push(field),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal run).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a run of literal text (no braces).
fn literal(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Placeholder contents before the source text is attached.
struct FieldParts {
    arg: ArgRef,
    accessors: Vec<Accessor>,
    conversion: Option<char>,
    spec: String,
}

/// Parse a placeholder: { arg accessors* [!conversion] [:spec] }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    let (parts, source) = delimited('{', field_parts, '}')
        .with_taken()
        .parse_next(input)?;
    Ok(Segment::Field(Field {
        arg: parts.arg,
        accessors: parts.accessors,
        conversion: parts.conversion,
        spec: parts.spec,
        source: source.to_string(),
    }))
}

fn field_parts(input: &mut &str) -> ModalResult<FieldParts> {
    let arg = arg_ref(input)?;
    let accessors: Vec<Accessor> = repeat(0.., accessor).parse_next(input)?;
    let conversion = opt(preceded('!', any)).parse_next(input)?;
    let spec = opt(preceded(':', spec_text)).parse_next(input)?;
    Ok(FieldParts {
        arg,
        accessors,
        conversion,
        spec: spec.unwrap_or_default().to_string(),
    })
}

/// Parse the argument part of a field name: empty, an index, or a name.
fn arg_ref(input: &mut &str) -> ModalResult<ArgRef> {
    take_while(0.., is_name_char)
        .map(|name: &str| {
            if name.is_empty() {
                ArgRef::Auto
            } else if name.bytes().all(|b| b.is_ascii_digit()) {
                name.parse()
                    .map_or_else(|_| ArgRef::Name(name.to_string()), ArgRef::Index)
            } else {
                ArgRef::Name(name.to_string())
            }
        })
        .parse_next(input)
}

/// Parse an accessor: .name or [key]
fn accessor(input: &mut &str) -> ModalResult<Accessor> {
    alt((
        preceded('.', take_while(1.., is_name_char))
            .map(|name: &str| Accessor::Attribute(name.to_string())),
        delimited('[', take_while(1.., |c: char| c != ']'), ']')
            .map(|key: &str| Accessor::Key(key.to_string())),
    ))
    .parse_next(input)
}

/// Capture a format-spec up to the `}` that closes the placeholder.
///
/// Braces inside the spec must balance; they are kept as written.
fn spec_text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let text = *input;
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => {
                let (spec, rest) = text.split_at(i);
                *input = rest;
                return Ok(spec);
            }
            '}' => depth -= 1,
            _ => {}
        }
    }
    Err(ErrMode::Backtrack(ContextError::new()))
}

/// Check if a character can appear in an argument or attribute name.
fn is_name_char(c: char) -> bool {
    !matches!(c, '.' | '[' | ']' | '!' | ':' | '{' | '}')
}
