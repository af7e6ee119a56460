//! Single-letter standard numeric specifiers: `c`, `d`, `f`, `n`, `p`,
//! each optionally followed by a digit count.

use super::pattern::Number;
use super::render::{
    check_field_size, format_currency, format_number, format_percent, remove_group_symbols,
};
use crate::interpreter::FormatError;
use crate::locale::NumberFormat;
use crate::types::Value;

/// Fraction digits for `f`, `n` and `p` when no count is given.
const DEFAULT_DIGITS: usize = 2;

/// Render a value with a standard specifier such as `n2` or `c`.
///
/// Returns `Ok(None)` when `raw` is not a standard specifier. The letter is
/// case-insensitive. `e`, `g`, `r` and `x` are recognized but not
/// implemented.
///
/// # Example
///
/// ```
/// use smartfmt::number::standard_format;
/// use smartfmt::{NumberFormat, Value};
///
/// let en = NumberFormat::default();
/// let text = standard_format(&Value::from(1234.567), "n", &en).unwrap();
/// assert_eq!(text.as_deref(), Some("1,234.57"));
/// assert_eq!(standard_format(&Value::from(1), ">5", &en).unwrap(), None);
/// ```
pub fn standard_format(
    value: &Value,
    raw: &str,
    format: &NumberFormat,
) -> Result<Option<String>, FormatError> {
    let mut chars = raw.chars();
    let Some(letter) = chars.next() else {
        return Ok(None);
    };
    let rest = chars.as_str();
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    let code = letter.to_ascii_lowercase();
    if !matches!(code, 'c' | 'd' | 'e' | 'f' | 'g' | 'n' | 'p' | 'r' | 'x') {
        return Ok(None);
    }
    if matches!(code, 'e' | 'g' | 'r' | 'x') {
        return Err(FormatError::NotImplemented {
            feature: format!("numeric format specifier '{letter}'"),
        });
    }

    let digits = if rest.is_empty() {
        None
    } else {
        let count = rest.parse::<usize>().map_err(|_| FormatError::Spec {
            message: format!("invalid digit count in format specifier '{raw}'"),
        })?;
        Some(check_field_size("digit count", count)?)
    };
    let Some(number) = Number::from_value(value) else {
        return Err(FormatError::Type {
            code: letter,
            type_name: value.type_name(),
        });
    };
    let sign = ("", format.minus.as_str());

    let text = match code {
        'c' => format_currency(number, digits, format),
        'd' => {
            let Number::Int(n) = number else {
                return Err(FormatError::Type {
                    code: letter,
                    type_name: value.type_name(),
                });
            };
            let magnitude = n.unsigned_abs().to_string();
            let width = digits.unwrap_or(0);
            let zeros = "0".repeat(width.saturating_sub(magnitude.len()));
            let minus = if n < 0 { sign.1 } else { "" };
            format!("{minus}{zeros}{magnitude}")
        }
        'f' => remove_group_symbols(
            &format_number(number, digits.unwrap_or(DEFAULT_DIGITS), sign, format),
            &format.group,
        ),
        'n' => format_number(number, digits.unwrap_or(DEFAULT_DIGITS), sign, format),
        _ => format_percent(number, digits.unwrap_or(DEFAULT_DIGITS), sign, format),
    };
    Ok(Some(text))
}
