use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::{Locale, locale};
use icu_locale_core::subtags::Region;

use crate::interpreter::FormatError;

/// A parsed locale identifier such as `en`, `en-US` or `ru_RU`.
///
/// Both `-` and `_` are accepted as subtag separators.
///
/// # Example
///
/// ```
/// use smartfmt::LocaleId;
///
/// let locale = LocaleId::parse("pt_BR").unwrap();
/// assert_eq!(locale.language(), "pt");
/// assert_eq!(locale.region(), Some("BR"));
/// assert_eq!(locale.to_string(), "pt-BR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleId {
    locale: Locale,
}

impl LocaleId {
    /// Parse a locale identifier.
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let normalized = tag.trim().replace('_', "-");
        normalized
            .parse::<Locale>()
            .map(|locale| Self { locale })
            .map_err(|_| FormatError::Locale {
                locale: tag.to_string(),
            })
    }

    /// The language subtag (e.g. "en").
    pub fn language(&self) -> &str {
        self.locale.id.language.as_str()
    }

    /// The region subtag (e.g. "US"), if any.
    pub fn region(&self) -> Option<&str> {
        self.locale.id.region.as_ref().map(Region::as_str)
    }

    /// The underlying ICU locale.
    pub fn as_icu(&self) -> &Locale {
        &self.locale
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self {
            locale: locale!("en"),
        }
    }
}

impl FromStr for LocaleId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for LocaleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.locale)
    }
}
