//! Locale identifiers and the locale data consumed by the formatter.
//!
//! The formatter never reads CLDR data directly: it asks a [`LocaleData`]
//! provider for number formats and plural rules. [`CldrData`] is the
//! built-in provider.

mod cldr;
mod data;
mod id;
mod plural;

pub use data::{CldrData, LocaleData, NumberFormat};
pub use id::LocaleId;
pub use plural::{
    CATEGORY_ORDER, PluralCategory, PluralOperands, category_str, plural_categories,
    plural_category, plural_category_position, plural_operands,
};
