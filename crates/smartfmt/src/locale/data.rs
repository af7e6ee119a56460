use bon::Builder;

use super::cldr;
use super::id::LocaleId;
use super::plural::{self, PluralCategory, PluralOperands};
use crate::interpreter::FormatError;

/// Provider of the locale data consumed while formatting.
///
/// Implementations must be shareable across threads since a single
/// [`Formatter`](crate::Formatter) may be used concurrently.
pub trait LocaleData: Send + Sync {
    /// Number symbols and patterns for `locale`.
    fn number_format(&self, locale: &LocaleId) -> NumberFormat;

    /// Plural category of a number.
    fn plural_category(
        &self,
        locale: &LocaleId,
        operands: PluralOperands,
    ) -> Result<PluralCategory, FormatError>;

    /// Categories used by `locale`, in fixed category order.
    fn plural_categories(&self, locale: &LocaleId) -> Result<Vec<PluralCategory>, FormatError>;
}

/// Number symbols and CLDR patterns for one locale.
///
/// Patterns use CLDR syntax: `#,##0.###` for decimals, `%` and `¤` as the
/// percent and currency placeholders. Only the positive subpattern is read.
///
/// # Example
///
/// ```
/// use smartfmt::NumberFormat;
///
/// let format = NumberFormat::builder()
///     .group("'")
///     .currency_symbol("CHF")
///     .currency_pattern("¤ #,##0.00")
///     .build();
/// assert_eq!(format.decimal, ".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct NumberFormat {
    #[builder(default = "#,##0.###".to_string())]
    pub decimal_pattern: String,
    #[builder(default = "#,##0%".to_string())]
    pub percent_pattern: String,
    #[builder(default = "¤#,##0.00".to_string())]
    pub currency_pattern: String,
    /// Grouping separator.
    #[builder(default = ",".to_string())]
    pub group: String,
    /// Decimal separator.
    #[builder(default = ".".to_string())]
    pub decimal: String,
    #[builder(default = "+".to_string())]
    pub plus: String,
    #[builder(default = "-".to_string())]
    pub minus: String,
    #[builder(default = "%".to_string())]
    pub percent: String,
    #[builder(default = "$".to_string())]
    pub currency_symbol: String,
    /// Fraction digits of the locale's default currency.
    #[builder(default = 2)]
    pub currency_digits: usize,
    /// Digits required above the first group before grouping kicks in.
    #[builder(default = 1)]
    pub min_grouping: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Built-in provider backed by ICU plural rules and a compiled table of
/// CLDR number data.
///
/// Unknown regions fall back to the language entry, unknown languages to
/// English.
#[derive(Debug, Default, Clone, Copy)]
pub struct CldrData;

impl CldrData {
    /// Locale tags with dedicated number data.
    pub fn supported_locales() -> Vec<&'static str> {
        cldr::NUMBER_DATA.iter().map(|entry| entry.tag).collect()
    }
}

impl LocaleData for CldrData {
    fn number_format(&self, locale: &LocaleId) -> NumberFormat {
        let entry = cldr::lookup(locale.language(), locale.region());
        NumberFormat {
            decimal_pattern: entry.decimal_pattern.to_string(),
            percent_pattern: entry.percent_pattern.to_string(),
            currency_pattern: entry.currency_pattern.to_string(),
            group: entry.group.to_string(),
            decimal: entry.decimal.to_string(),
            plus: "+".to_string(),
            minus: entry.minus.to_string(),
            percent: "%".to_string(),
            currency_symbol: entry.currency_symbol.to_string(),
            currency_digits: entry.currency_digits,
            min_grouping: entry.min_grouping,
        }
    }

    fn plural_category(
        &self,
        locale: &LocaleId,
        operands: PluralOperands,
    ) -> Result<PluralCategory, FormatError> {
        plural::plural_category(locale, operands)
    }

    fn plural_categories(&self, locale: &LocaleId) -> Result<Vec<PluralCategory>, FormatError> {
        plural::plural_categories(locale)
    }
}
