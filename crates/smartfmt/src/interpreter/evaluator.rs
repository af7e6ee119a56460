//! Template evaluation engine.
//!
//! Each placeholder goes through the same pipeline:
//! 1. Resolve the argument and apply accessors and the `!` conversion
//! 2. Offer the placeholder to the extension chain named by its spec
//! 3. Fall back to the numeric layout renderer
//! 4. Fall back to the standard single-letter specifiers
//! 5. Fall back to plain stringification
//!
//! A failure anywhere in the pipeline is handed to the formatter's error
//! action, which either aborts or substitutes text for that placeholder.

use crate::interpreter::FormatError;
use crate::interpreter::context::EvalContext;
use crate::interpreter::error::compute_suggestions;
use crate::interpreter::extension::FormatterContext;
use crate::interpreter::formatter::Formatter;
use crate::number::{check_field_size, pad, render_numeric, standard_format};
use crate::parser::{Accessor, Align, ArgRef, Field, NumericSpec, Segment, Template, parse_format_spec};
use crate::types::{Args, Value};

/// Name of the ambient list index.
const INDEX_NAME: &str = "index";

/// Evaluate a template AST, producing a formatted string.
///
/// Literal segments are copied directly to output. Placeholders that fail
/// are passed to the formatter's error action.
pub(crate) fn eval_template(
    template: &Template,
    args: &Args,
    ctx: &mut EvalContext,
    formatter: &Formatter,
) -> Result<String, FormatError> {
    let mut output = String::new();
    let mut next_auto = 0;
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Field(field) => {
                let rendered = match eval_field(field, args, &mut next_auto, ctx, formatter) {
                    Ok(text) => text,
                    Err(error) => formatter.error_action().recover(error, field)?,
                };
                output.push_str(&rendered);
            }
        }
    }
    Ok(output)
}

fn eval_field(
    field: &Field,
    args: &Args,
    next_auto: &mut usize,
    ctx: &mut EvalContext,
    formatter: &Formatter,
) -> Result<String, FormatError> {
    let value = resolve_argument(&field.arg, args, next_auto, ctx)?;
    let value = field
        .accessors
        .iter()
        .try_fold(value, access)?;
    let value = match field.conversion {
        None => value,
        Some('s') => Value::String(value.to_string()),
        Some('r') => Value::String(value.repr()),
        Some(conversion) => return Err(FormatError::Conversion { conversion }),
    };
    format_value(&value, &field.spec, ctx, formatter)
}

/// Render one value with a raw format-spec.
pub(crate) fn format_value(
    value: &Value,
    raw_spec: &str,
    ctx: &mut EvalContext,
    formatter: &Formatter,
) -> Result<String, FormatError> {
    let spec = parse_format_spec(raw_spec);
    let mut cx = FormatterContext::new(formatter, ctx);
    if let Some(text) = formatter.registry().dispatch(&mut cx, value, &spec)? {
        return Ok(text);
    }

    let number_format = formatter.number_format();
    if let Some(numeric) = NumericSpec::parse(raw_spec)
        && let Some(text) = render_numeric(value, &numeric, number_format)?
    {
        return Ok(text);
    }
    if let Some(text) = standard_format(value, raw_spec, number_format)? {
        return Ok(text);
    }
    stringify(value, raw_spec)
}

/// Resolve the argument a placeholder refers to.
///
/// Resolution order for names:
/// 1. Named arguments
/// 2. The ambient list index, for `index`
fn resolve_argument(
    arg: &ArgRef,
    args: &Args,
    next_auto: &mut usize,
    ctx: &EvalContext,
) -> Result<Value, FormatError> {
    let index = match arg {
        ArgRef::Auto => {
            let index = *next_auto;
            *next_auto += 1;
            index
        }
        ArgRef::Index(index) => *index,
        ArgRef::Name(name) => {
            if let Some(value) = args.get(name) {
                return Ok(value.clone());
            }
            if name == INDEX_NAME {
                return ctx
                    .current_index()
                    .map(Value::from)
                    .ok_or_else(|| FormatError::Context { name: name.clone() });
            }
            let available: Vec<String> = args.names().into_iter().map(str::to_string).collect();
            return Err(FormatError::Lookup {
                key: name.clone(),
                suggestions: compute_suggestions(name, &available),
            });
        }
    };
    args.positional(index)
        .cloned()
        .ok_or_else(|| FormatError::Lookup {
            key: index.to_string(),
            suggestions: Vec::new(),
        })
}

/// Apply an attribute or key lookup.
///
/// Maps answer both forms; lists answer numeric keys; symbols expose their
/// `name`.
fn access(value: Value, accessor: &Accessor) -> Result<Value, FormatError> {
    let (Accessor::Attribute(key) | Accessor::Key(key)) = accessor;
    let found = match (&value, accessor) {
        (Value::Map(entries), _) => entries.get(key).cloned(),
        (Value::List(items), Accessor::Key(_)) => {
            key.parse::<usize>().ok().and_then(|i| items.get(i)).cloned()
        }
        (Value::Symbol(name), Accessor::Attribute(_)) if key == "name" => {
            Some(Value::String(name.clone()))
        }
        _ => None,
    };
    found.ok_or_else(|| {
        let available: Vec<String> = value
            .as_map()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        FormatError::Lookup {
            key: key.clone(),
            suggestions: compute_suggestions(key, &available),
        }
    })
}

/// Plain rendering for values no renderer claimed.
///
/// Pure layout specs such as `<10`, `*^9` or `>5s` pad the text; text aligns
/// left and numbers right by default. Any other spec is ignored.
fn stringify(value: &Value, raw_spec: &str) -> Result<String, FormatError> {
    let text = value.to_string();
    let layout = raw_spec.strip_suffix('s').unwrap_or(raw_spec);
    match NumericSpec::parse(layout) {
        Some(spec)
            if spec.has_layout() && !spec.is_numeric() && spec.sign.is_none() && !spec.alternate =>
        {
            let default_align = if value.is_finite_number() {
                Align::Right
            } else {
                Align::Left
            };
            let fill = spec.fill.unwrap_or(if spec.zero { '0' } else { ' ' });
            let width = check_field_size("width", spec.width.unwrap_or(0))?;
            Ok(pad(&text, fill, spec.align.unwrap_or(default_align), width))
        }
        _ => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_pads_layout_specs() {
        assert_eq!(stringify(&Value::from("ab"), "<5").unwrap(), "ab   ");
        assert_eq!(stringify(&Value::from("ab"), "5").unwrap(), "ab   ");
        assert_eq!(stringify(&Value::from("ab"), "*^6s").unwrap(), "**ab**");
        assert_eq!(stringify(&Value::from(true), ">6").unwrap(), "  true");
    }

    #[test]
    fn stringify_ignores_other_specs() {
        assert_eq!(stringify(&Value::from("ab"), "one|two|three").unwrap(), "ab");
        assert_eq!(stringify(&Value::from("ab"), "+5").unwrap(), "ab");
    }

    #[test]
    fn symbol_name_attribute() {
        let value = access(Value::symbol("Red"), &Accessor::Attribute("name".into())).unwrap();
        assert_eq!(value, Value::from("Red"));
    }

    #[test]
    fn list_key_out_of_range() {
        let list = Value::from(vec![1, 2]);
        let err = access(list, &Accessor::Key("5".into())).unwrap_err();
        assert!(matches!(err, FormatError::Lookup { key, .. } if key == "5"));
    }
}
