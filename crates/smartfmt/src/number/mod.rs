//! Locale-aware number rendering.
//!
//! [`render_numeric`] handles the `[[fill]align][sign][0][width][,][.prec][type]`
//! layout specs, [`standard_format`] the single-letter `c`/`d`/`f`/`n`/`p`
//! specifiers. Both read symbols and patterns from a [`NumberFormat`].
//!
//! [`NumberFormat`]: crate::NumberFormat

mod pattern;
mod render;
mod standard;

pub use pattern::{Digits, Number, NumberPattern};
pub use render::{
    DEFAULT_PRECISION, MAX_FIELD_SIZE, check_field_size, format_currency, format_number,
    format_percent, pad, remove_group_symbols, render_numeric, sign_prefixes,
};
pub use standard::standard_format;
