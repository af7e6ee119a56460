//! Built-in extensions: `plural`, `choose`, `list` and the retired
//! `conditional`.

use crate::interpreter::FormatError;
use crate::interpreter::extension::{Extension, FormatterContext, Handler};
use crate::locale::{LocaleId, plural_category_position, plural_operands};
use crate::parser::FormatSpec;
use crate::types::Value;

/// The extensions every formatter starts with, in priority order.
///
/// `plural` and `list` both answer to the empty name; `plural` is tried
/// first.
pub fn default_extensions() -> Vec<Extension> {
    vec![
        Extension::builtin(&["plural", "p", ""], Handler::Contextual(plural)),
        Extension::builtin(&["conditional", "cond"], Handler::Plain(conditional)),
        Extension::builtin(&["choose", "c"], Handler::Contextual(choose)),
        Extension::builtin(&["list", "l", ""], Handler::Contextual(list)),
    ]
}

/// Pick a branch by the value's CLDR plural category.
///
/// `{n:plural(ru):файл|файла|файлов}` chooses among the categories Russian
/// uses (one, few, many, other), in that order.
fn plural(
    cx: &mut FormatterContext<'_>,
    value: &Value,
    spec: &FormatSpec<'_>,
) -> Result<Option<String>, FormatError> {
    let branches: Vec<&str> = spec.template.split('|').collect();
    if spec.name.is_empty() && branches.len() < 2 {
        return Ok(None);
    }
    let Some(operands) = plural_operands(value) else {
        return Ok(None);
    };
    let locale = match spec.option.filter(|option| !option.is_empty()) {
        Some(option) => LocaleId::parse(option)?,
        None => cx.locale().clone(),
    };
    let position = plural_category_position(cx.locale_data(), &locale, operands)?;
    let Some(branch) = branches.get(position) else {
        return Err(FormatError::MissingPluralBranch {
            position,
            branches: branches.len(),
        });
    };
    cx.format(branch, value).map(Some)
}

/// Pick a branch by matching the value against `|`-separated choices.
///
/// One branch more than there are choices acts as the default.
fn choose(
    cx: &mut FormatterContext<'_>,
    value: &Value,
    spec: &FormatSpec<'_>,
) -> Result<Option<String>, FormatError> {
    let Some(option) = spec.option.filter(|option| !option.is_empty()) else {
        return Ok(None);
    };
    let branches: Vec<&str> = spec.template.split('|').collect();
    if branches.len() < 2 {
        return Ok(None);
    }
    let choices: Vec<&str> = option.split('|').collect();
    if branches.len() != choices.len() && branches.len() != choices.len() + 1 {
        return Err(FormatError::ChoiceCount {
            expected: choices.len(),
        });
    }

    let key = choice_key(value);
    let index = match choices.iter().position(|choice| *choice == key) {
        Some(index) => index,
        None if branches.len() == choices.len() => return Err(FormatError::NoDefaultChoice),
        None => branches.len() - 1,
    };
    cx.format(branches[index], value).map(Some)
}

/// The text a value is matched as by `choose`.
///
/// Floats keep a fraction digit, so `1.0` matches `1.0` but not `1`.
fn choice_key(value: &Value) -> String {
    match value {
        Value::None => "null".to_string(),
        Value::Float(f) => format!("{f:?}"),
        other => other
            .name()
            .map_or_else(|| other.to_string(), ToString::to_string),
    }
}

fn conditional(_value: &Value, _spec: &FormatSpec<'_>) -> Result<Option<String>, FormatError> {
    Err(FormatError::NotImplemented {
        feature: "the 'conditional' extension is obsolete, use 'choose'".to_string(),
    })
}

/// Join list items: `item|spacer[|final_spacer[|two_item_spacer]]`.
fn list(
    cx: &mut FormatterContext<'_>,
    value: &Value,
    spec: &FormatSpec<'_>,
) -> Result<Option<String>, FormatError> {
    let Some(items) = value.as_list() else {
        return Ok(None);
    };
    let branches: Vec<&str> = spec.template.split('|').collect();
    let [item_template, spacer, rest @ ..] = branches.as_slice() else {
        return Ok(None);
    };
    let final_spacer = rest.first().unwrap_or(spacer);
    let two_item_spacer = rest.get(1).unwrap_or(final_spacer);

    let count = items.len();
    let mut output = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            output.push_str(if index < count - 1 {
                spacer
            } else if count == 2 {
                two_item_spacer
            } else {
                final_spacer
            });
        }
        output.push_str(&cx.format_item(item_template, item, index)?);
    }
    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_keys() {
        assert_eq!(choice_key(&Value::None), "null");
        assert_eq!(choice_key(&Value::symbol("Red")), "Red");
        assert_eq!(choice_key(&Value::from(true)), "true");
        assert_eq!(choice_key(&Value::from(2)), "2");
        assert_eq!(choice_key(&Value::from(2.0)), "2.0");
        assert_eq!(choice_key(&Value::from(0.5)), "0.5");
    }

    #[test]
    fn plural_and_list_share_the_empty_name() {
        let names: Vec<String> = default_extensions()
            .iter()
            .flat_map(|e| e.names().to_vec())
            .collect();
        assert!(names.contains(&String::new()));
        assert!(names.contains(&"choose".to_string()));
    }
}
