use crate::locale::NumberFormat;
use crate::types::Value;

/// A finite number accepted by the renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The number held by `value`, if it is a finite integer or float.
    pub fn from_value(value: &Value) -> Option<Number> {
        match value {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) if f.is_finite() => Some(Number::Float(*f)),
            _ => None,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(n) => n < 0,
            Number::Float(f) => f < 0.0,
        }
    }
}

/// Unsigned decimal digits of a number rounded to a fixed scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    pub negative: bool,
    /// Integer digits without leading zeros; empty for zero.
    pub integer: String,
    pub fraction: String,
}

impl Digits {
    /// Round `number * 10^shift` to `fraction_digits` places.
    ///
    /// Integers are exact. Floats are rounded from their exact binary value,
    /// ties to even.
    pub fn new(number: Number, fraction_digits: usize, shift: u32) -> Digits {
        let negative = number.is_negative();
        let (integer, fraction) = match number {
            Number::Int(n) => {
                let scaled = u128::from(n.unsigned_abs()) * 10u128.pow(shift);
                (scaled.to_string(), "0".repeat(fraction_digits))
            }
            Number::Float(f) => {
                let shift = shift as usize;
                let text = format!("{:.*}", fraction_digits.saturating_add(shift), f.abs());
                let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
                let (moved, fraction) = frac_part.split_at(shift.min(frac_part.len()));
                (format!("{int_part}{moved}"), fraction.to_string())
            }
        };
        Digits {
            negative,
            integer: integer.trim_start_matches('0').to_string(),
            fraction,
        }
    }
}

/// The positive subpattern of a CLDR number pattern.
///
/// # Example
///
/// ```
/// use smartfmt::number::NumberPattern;
///
/// let pattern = NumberPattern::parse("#,##,##0.00\u{a0}¤");
/// assert_eq!(pattern.primary_group, Some(3));
/// assert_eq!(pattern.secondary_group, Some(2));
/// assert_eq!(pattern.suffix, "\u{a0}¤");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub prefix: String,
    pub suffix: String,
    pub min_integer: usize,
    pub primary_group: Option<usize>,
    pub secondary_group: Option<usize>,
}

impl NumberPattern {
    pub fn parse(pattern: &str) -> NumberPattern {
        let positive = pattern.split(';').next().unwrap_or_default();
        let is_number_char = |c: char| matches!(c, '#' | '0' | ',' | '.' | '@');
        let start = positive.find(is_number_char).unwrap_or(positive.len());
        let (prefix, rest) = positive.split_at(start);
        let end = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        let (number, suffix) = rest.split_at(end);

        let integer = number.split('.').next().unwrap_or_default();
        let groups: Vec<&str> = integer.split(',').collect();
        let (primary_group, secondary_group) = match groups.as_slice() {
            [_, primary] => (Some(primary.len()), Some(primary.len())),
            [.., secondary, primary] => (Some(primary.len()), Some(secondary.len())),
            _ => (None, None),
        };

        NumberPattern {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            min_integer: integer.chars().filter(|c| *c == '0').count(),
            primary_group,
            secondary_group,
        }
    }

    /// Render `digits` with the pattern's grouping and affixes.
    ///
    /// `sign` is the `(positive, negative)` prefix pair placed before the
    /// pattern prefix.
    pub fn apply(&self, digits: &Digits, format: &NumberFormat, sign: (&str, &str)) -> String {
        let mut integer = digits.integer.clone();
        if integer.len() < self.min_integer {
            integer.insert_str(0, &"0".repeat(self.min_integer - integer.len()));
        }

        let mut out = String::new();
        out.push_str(if digits.negative { sign.1 } else { sign.0 });
        out.push_str(&localize_affix(&self.prefix, format));
        out.push_str(&self.group(&integer, &format.group, format.min_grouping));
        if !digits.fraction.is_empty() {
            out.push_str(&format.decimal);
            out.push_str(&digits.fraction);
        }
        out.push_str(&localize_affix(&self.suffix, format));
        out
    }

    fn group(&self, integer: &str, separator: &str, min_grouping: usize) -> String {
        let Some(primary) = self.primary_group.filter(|p| *p > 0) else {
            return integer.to_string();
        };
        if integer.len() < primary + min_grouping {
            return integer.to_string();
        }
        let secondary = self.secondary_group.filter(|s| *s > 0).unwrap_or(primary);

        let (mut rest, last) = integer.split_at(integer.len() - primary);
        let mut groups = vec![last];
        while rest.len() > secondary {
            let (head, tail) = rest.split_at(rest.len() - secondary);
            groups.push(tail);
            rest = head;
        }
        if !rest.is_empty() {
            groups.push(rest);
        }
        groups.reverse();
        groups.join(separator)
    }
}

fn localize_affix(affix: &str, format: &NumberFormat) -> String {
    affix
        .replace('¤', &format.currency_symbol)
        .replace('%', &format.percent)
}
