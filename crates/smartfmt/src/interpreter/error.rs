//! Error types for the formatter.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// An extension could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Extension aliases must match `[A-Za-z_]*`.
    #[error("invalid extension name '{name}': names may only contain ASCII letters and '_'")]
    InvalidName { name: String },
}

/// An error raised while formatting a template.
///
/// Errors raised by a single placeholder are routed through the formatter's
/// [`ErrorAction`](crate::ErrorAction); only [`FormatError::Parse`] always
/// propagates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The template itself is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Malformed numeric format-spec.
    #[error("{message}")]
    Spec { message: String },

    /// Value incompatible with the requested presentation type.
    #[error("unknown format code '{code}' for value of type '{type_name}'")]
    Type {
        code: char,
        type_name: &'static str,
    },

    /// `choose` got a branch count that fits neither with nor without a default.
    #[error("specify {expected} or {} choices", expected + 1)]
    ChoiceCount { expected: usize },

    /// `choose` found no matching choice and has no default branch.
    #[error("no default choice supplied")]
    NoDefaultChoice,

    /// The value's plural category has no branch.
    #[error("no branch for plural position {position}: only {branches} given")]
    MissingPluralBranch { position: usize, branches: usize },

    /// An ambient value was referenced outside of the scope providing it.
    #[error("'{name}' is only available while formatting list items")]
    Context { name: String },

    /// A placeholder names an argument that was not supplied.
    #[error("argument not found: '{key}'{}", format_suggestions(suggestions))]
    Lookup {
        key: String,
        suggestions: Vec<String>,
    },

    /// A recognized feature that is not supported.
    #[error("not implemented: {feature}")]
    NotImplemented { feature: String },

    /// A locale identifier could not be parsed.
    #[error("unknown locale '{locale}'")]
    Locale { locale: String },

    /// Plural rules are unavailable for a locale.
    #[error("no plural rules available for locale '{locale}'")]
    PluralData { locale: String },

    /// Unknown `!` conversion in a placeholder.
    #[error("unknown conversion specifier '{conversion}'")]
    Conversion { conversion: char },

    /// Nested formatting went deeper than the formatter allows.
    #[error("maximum recursion depth exceeded")]
    MaxDepthExceeded,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Find the names in `available` closest to `key`.
///
/// Names within edit distance 1 (2 for keys longer than three characters)
/// are returned, closest first, at most three.
///
/// # Example
///
/// ```
/// use smartfmt::compute_suggestions;
///
/// let names = vec!["count".to_string(), "name".to_string()];
/// assert_eq!(compute_suggestions("cont", &names), vec!["count"]);
/// ```
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|name| (levenshtein(key, name), name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
