//! Locale-aware string formatting with pluralization, choice and list
//! extensions.
//!
//! ```
//! use smartfmt::{Formatter, Value};
//!
//! let formatter = Formatter::default();
//! let names = Value::from(vec!["Ann", "Bob", "Cy"]);
//! let text = formatter
//!     .format("{0} {0:is|are} here: {1:{}|, |, and }", &[Value::from(3), names])
//!     .unwrap();
//! assert_eq!(text, "3 are here: Ann, Bob, and Cy");
//! ```

pub mod interpreter;
pub mod locale;
pub mod number;
pub mod parser;
pub mod types;

pub use interpreter::{
    ErrorAction, EvalContext, Extension, ExtensionRegistry, FormatError, Formatter,
    FormatterConfig, FormatterContext, GrammarError, Handler, compute_suggestions,
    default_extensions,
};
pub use locale::{
    CldrData, LocaleData, LocaleId, NumberFormat, PluralCategory, plural_category,
    plural_category_position,
};
pub use parser::{FormatSpec, ParseError, parse_format_spec, parse_template};
pub use types::{Args, Value};

/// Creates an [`Args`] from positional values and `name => value` pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or lists directly. Positional values come
/// first, separated from named ones by `;`.
///
/// # Example
///
/// ```
/// use smartfmt::{args, Value};
///
/// let a = args![1, "two"; "count" => 3, "name" => "Alice"];
/// assert_eq!(a.positional(1), Some(&Value::from("two")));
/// assert_eq!(a.get("count"), Some(&Value::Int(3)));
///
/// let named_only = args!["name" => "Bob"];
/// assert_eq!(named_only.positional(0), None);
/// assert_eq!(named_only.get("name"), Some(&Value::from("Bob")));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::Args::new()$(.named($key, ::std::convert::Into::<$crate::Value>::into($value)))+
    };
    ($($value:expr),+ $(; $($key:literal => $named:expr),* $(,)?)?) => {
        $crate::Args::new()
            $(.arg(::std::convert::Into::<$crate::Value>::into($value)))+
            $($(.named($key, ::std::convert::Into::<$crate::Value>::into($named)))*)?
    };
}
