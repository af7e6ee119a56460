//! CLDR plural category resolution.
//!
//! Different languages use different subsets of the six CLDR categories.
//! English has "one" and "other", Russian has "one", "few", "many" and
//! "other", and Japanese only has "other". The `plural` extension picks a
//! branch by the position of the value's category among the categories the
//! locale actually uses, walked in [`CATEGORY_ORDER`].
//!
//! Plural rules are cached per thread per locale to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralRuleType, PluralRules};

pub use icu_plurals::{PluralCategory, PluralOperands};

use super::data::LocaleData;
use super::id::LocaleId;
use crate::interpreter::FormatError;
use crate::types::Value;

/// Fixed order in which categories map to plural branches.
pub const CATEGORY_ORDER: [PluralCategory; 6] = [
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale.
    static PLURAL_RULES_CACHE: RefCell<Vec<(Locale, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

fn with_rules<T>(locale: &LocaleId, f: impl FnOnce(&PluralRules) -> T) -> Result<T, FormatError> {
    let key = locale.as_icu();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(cached, _)| cached == key) {
            return Ok(f(rules));
        }
        let rules = PluralRules::try_new(key.clone().into(), PluralRuleType::Cardinal.into())
            .map_err(|_| FormatError::PluralData {
                locale: locale.to_string(),
            })?;
        let result = f(&rules);
        cache.push((key.clone(), rules));
        Ok(result)
    })
}

/// Translate a `PluralCategory` to its CLDR keyword.
pub fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category of a number in a given locale.
///
/// # Examples
///
/// ```
/// use smartfmt::{LocaleId, PluralCategory, plural_category};
///
/// let ru = LocaleId::parse("ru").unwrap();
/// assert_eq!(plural_category(&ru, 1.into()).unwrap(), PluralCategory::One);
/// assert_eq!(plural_category(&ru, 2.into()).unwrap(), PluralCategory::Few);
/// assert_eq!(plural_category(&ru, 5.into()).unwrap(), PluralCategory::Many);
/// ```
pub fn plural_category(
    locale: &LocaleId,
    operands: PluralOperands,
) -> Result<PluralCategory, FormatError> {
    with_rules(locale, |rules| rules.category_for(operands))
}

/// The categories a locale uses, in [`CATEGORY_ORDER`].
///
/// "other" is always included.
pub fn plural_categories(locale: &LocaleId) -> Result<Vec<PluralCategory>, FormatError> {
    let used: Vec<PluralCategory> = with_rules(locale, |rules| rules.categories().collect())?;
    Ok(CATEGORY_ORDER
        .into_iter()
        .filter(|c| *c == PluralCategory::Other || used.contains(c))
        .collect())
}

/// Position of the value's category among the categories used by `locale`.
///
/// # Examples
///
/// ```
/// use smartfmt::{CldrData, LocaleId, plural_category_position};
///
/// let en = LocaleId::parse("en").unwrap();
/// assert_eq!(plural_category_position(&CldrData, &en, 1.into()).unwrap(), 0);
/// assert_eq!(plural_category_position(&CldrData, &en, 7.into()).unwrap(), 1);
/// ```
pub fn plural_category_position(
    data: &dyn LocaleData,
    locale: &LocaleId,
    operands: PluralOperands,
) -> Result<usize, FormatError> {
    let category = data.plural_category(locale, operands)?;
    let used = data.plural_categories(locale)?;
    Ok(CATEGORY_ORDER
        .iter()
        .take_while(|c| **c != category)
        .filter(|c| used.contains(c))
        .count())
}

/// Plural operands of a value, or `None` when it is not a decimal number.
///
/// Booleans count as 0 and 1. Strings are accepted when they spell a plain
/// decimal, and keep their visible fraction digits. Signs are dropped.
pub fn plural_operands(value: &Value) -> Option<PluralOperands> {
    match value {
        Value::Int(n) => Some(PluralOperands::from(*n)),
        Value::Bool(b) => Some(PluralOperands::from(i64::from(*b))),
        Value::Float(f) if f.is_finite() => decimal_operands(&f.abs().to_string()),
        Value::String(s) => {
            let s = s.trim();
            decimal_operands(s.strip_prefix(['-', '+']).unwrap_or(s))
        }
        _ => None,
    }
}

fn decimal_operands(text: &str) -> Option<PluralOperands> {
    Decimal::try_from_str(text)
        .ok()
        .map(|decimal| PluralOperands::from(&decimal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_always_used() {
        let ja = LocaleId::parse("ja").unwrap();
        assert_eq!(plural_categories(&ja).unwrap(), vec![PluralCategory::Other]);
    }

    #[test]
    fn fractional_strings_are_operands() {
        let en = LocaleId::parse("en").unwrap();
        let operands = plural_operands(&Value::from("1.0")).unwrap();
        // Visible fraction digits make "1.0" plural in English.
        assert_eq!(plural_category(&en, operands).unwrap(), PluralCategory::Other);
        assert!(plural_operands(&Value::from("abc")).is_none());
        assert!(plural_operands(&Value::from("")).is_none());
    }

    #[test]
    fn float_operands_keep_their_fraction() {
        let en = LocaleId::parse("en").unwrap();
        let one_and_a_half = plural_operands(&Value::from(1.5)).unwrap();
        assert_eq!(plural_category(&en, one_and_a_half).unwrap(), PluralCategory::Other);
        let one = plural_operands(&Value::from(-1.0)).unwrap();
        assert_eq!(plural_category(&en, one).unwrap(), PluralCategory::One);
    }

    #[test]
    fn booleans_count_as_zero_and_one() {
        let en = LocaleId::parse("en").unwrap();
        let operands = plural_operands(&Value::from(true)).unwrap();
        assert_eq!(plural_category(&en, operands).unwrap(), PluralCategory::One);
    }
}
