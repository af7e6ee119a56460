use std::iter;

use super::pattern::{Digits, Number, NumberPattern};
use crate::interpreter::FormatError;
use crate::locale::NumberFormat;
use crate::parser::{Align, NumericKind, NumericSpec, Sign};
use crate::types::Value;

/// Fraction digits used by `f` and `%` when no precision is given.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest width, precision or digit count a placeholder may request.
pub const MAX_FIELD_SIZE: usize = 1 << 16;

/// Reject a width, precision or digit count above [`MAX_FIELD_SIZE`].
///
/// # Example
///
/// ```
/// use smartfmt::number::check_field_size;
///
/// assert_eq!(check_field_size("width", 20).unwrap(), 20);
/// assert!(check_field_size("width", usize::MAX).is_err());
/// ```
pub fn check_field_size(what: &str, size: usize) -> Result<usize, FormatError> {
    if size > MAX_FIELD_SIZE {
        return Err(FormatError::Spec {
            message: format!("{what} {size} is too large, the limit is {MAX_FIELD_SIZE}"),
        });
    }
    Ok(size)
}

/// Format a number with the locale's decimal pattern and grouping.
///
/// # Example
///
/// ```
/// use smartfmt::number::{Number, format_number};
/// use smartfmt::NumberFormat;
///
/// let en = NumberFormat::default();
/// assert_eq!(format_number(Number::Int(-1234), 2, ("", "-"), &en), "-1,234.00");
/// ```
pub fn format_number(
    number: Number,
    precision: usize,
    sign: (&str, &str),
    format: &NumberFormat,
) -> String {
    NumberPattern::parse(&format.decimal_pattern).apply(
        &Digits::new(number, precision, 0),
        format,
        sign,
    )
}

/// Format a number as a percentage of 1.
///
/// Any space CLDR puts before the percent sign is dropped.
pub fn format_percent(
    number: Number,
    precision: usize,
    sign: (&str, &str),
    format: &NumberFormat,
) -> String {
    let mut pattern = NumberPattern::parse(&format.percent_pattern);
    pattern.suffix = pattern.suffix.trim_start().to_string();
    pattern.apply(&Digits::new(number, precision, 2), format, sign)
}

/// Format a number with the locale's currency pattern and symbol.
///
/// `precision` defaults to the currency's own fraction digits.
pub fn format_currency(number: Number, precision: Option<usize>, format: &NumberFormat) -> String {
    let precision = precision.unwrap_or(format.currency_digits);
    NumberPattern::parse(&format.currency_pattern).apply(
        &Digits::new(number, precision, 0),
        format,
        ("", format.minus.as_str()),
    )
}

/// Strip group separators from the digit part of a rendered number.
///
/// Everything after the last ASCII digit is kept verbatim, so a suffix
/// containing the group symbol survives.
///
/// # Example
///
/// ```
/// use smartfmt::number::remove_group_symbols;
///
/// assert_eq!(remove_group_symbols("1\u{a0}234,5\u{a0}€", "\u{a0}"), "1234,5\u{a0}€");
/// ```
pub fn remove_group_symbols(text: &str, group: &str) -> String {
    if group.is_empty() {
        return text.to_string();
    }
    let end = text
        .rfind(|c: char| c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let (digits, suffix) = text.split_at(end);
    format!("{}{suffix}", digits.replace(group, ""))
}

/// The `(positive, negative)` sign prefixes for a sign option.
pub fn sign_prefixes(sign: Option<Sign>, format: &NumberFormat) -> (String, String) {
    let positive = match sign {
        None | Some(Sign::Negative) => "",
        Some(Sign::Space) => " ",
        Some(Sign::Always) => format.plus.as_str(),
    };
    (positive.to_string(), format.minus.clone())
}

/// Pad `text` to `width` characters.
///
/// `AfterSign` behaves like `Right` here; sign-aware padding is done by
/// [`render_numeric`].
pub fn pad(text: &str, fill: char, align: Align, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let (left, right) = match align {
        Align::Left => (0, padding),
        Align::Center => {
            let left = padding.div_euclid(2);
            (left, padding - left)
        }
        Align::Right | Align::AfterSign => (padding, 0),
    };
    let mut out = String::with_capacity(text.len() + padding);
    out.extend(iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(iter::repeat_n(fill, right));
    out
}

/// Render a value with a locale-aware numeric layout spec.
///
/// Returns `Ok(None)` when the value is not a finite number or the spec
/// requests no numeric presentation.
///
/// # Example
///
/// ```
/// use smartfmt::number::render_numeric;
/// use smartfmt::parser::NumericSpec;
/// use smartfmt::{NumberFormat, Value};
///
/// let spec = NumericSpec::parse(",.2f").unwrap();
/// let text = render_numeric(&Value::from(1234.5), &spec, &NumberFormat::default()).unwrap();
/// assert_eq!(text.as_deref(), Some("1,234.50"));
/// ```
pub fn render_numeric(
    value: &Value,
    spec: &NumericSpec,
    format: &NumberFormat,
) -> Result<Option<String>, FormatError> {
    let Some(number) = Number::from_value(value) else {
        return Ok(None);
    };
    if !spec.is_numeric() {
        return Ok(None);
    }

    let kind = spec.kind.unwrap_or(match number {
        Number::Int(_) => NumericKind::Decimal,
        Number::Float(_) => NumericKind::Fixed,
    });
    let precision = match kind {
        NumericKind::Decimal => {
            if spec.precision.is_some() {
                return Err(FormatError::Spec {
                    message: "precision not allowed in integer format specifier".to_string(),
                });
            }
            if let Number::Float(_) = number {
                return Err(FormatError::Type {
                    code: 'd',
                    type_name: value.type_name(),
                });
            }
            0
        }
        NumericKind::Fixed | NumericKind::Percent => {
            check_field_size("precision", spec.precision.unwrap_or(DEFAULT_PRECISION))?
        }
    };
    let width = check_field_size("width", spec.width.unwrap_or(0))?;

    let (positive, negative) = sign_prefixes(spec.sign, format);
    let after_sign = spec.align == Some(Align::AfterSign);
    let sign = if after_sign {
        ("", "")
    } else {
        (positive.as_str(), negative.as_str())
    };
    let mut text = match kind {
        NumericKind::Percent => format_percent(number, precision, sign, format),
        NumericKind::Decimal | NumericKind::Fixed => {
            format_number(number, precision, sign, format)
        }
    };
    if !spec.grouping {
        text = remove_group_symbols(&text, &format.group);
    }
    if !spec.has_layout() {
        return Ok(Some(text));
    }

    let fill = spec.fill.unwrap_or(if spec.zero { '0' } else { ' ' });
    if !after_sign {
        let align = spec.align.unwrap_or(Align::Right);
        return Ok(Some(pad(&text, fill, align, width)));
    }

    // The sign overwrites the leading fill characters when there are any.
    let padded = pad(&text, fill, Align::Right, width);
    let prefix = if number.is_negative() {
        negative
    } else {
        positive
    };
    let added = padded.chars().count() - text.chars().count();
    let body: String = padded
        .chars()
        .skip(added.min(prefix.chars().count()))
        .collect();
    Ok(Some(format!("{prefix}{body}")))
}
