use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::interpreter::FormatError;
use crate::parser::Field;

/// What to do when a placeholder fails to format.
///
/// # Example
///
/// ```
/// use smartfmt::{ErrorAction, Formatter};
///
/// let formatter = Formatter::builder().error_action(ErrorAction::Skip).build();
/// assert_eq!(formatter.format("a{missing:>4}b", &[]).unwrap(), "a{missing:>4}b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorAction {
    /// Abort the whole `format` call.
    #[default]
    Strict,
    /// Replace the placeholder with the error message.
    #[serde(rename = "errmsg", alias = "error_message")]
    ErrorMessage,
    /// Replace the placeholder with nothing.
    Ignore,
    /// Leave the placeholder as written.
    Skip,
}

/// An error action name was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error action '{name}', expected one of: strict, errmsg, ignore, skip")]
pub struct UnknownErrorAction {
    pub name: String,
}

impl ErrorAction {
    pub const ALL: [ErrorAction; 4] = [
        ErrorAction::Strict,
        ErrorAction::ErrorMessage,
        ErrorAction::Ignore,
        ErrorAction::Skip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ErrorAction::Strict => "strict",
            ErrorAction::ErrorMessage => "errmsg",
            ErrorAction::Ignore => "ignore",
            ErrorAction::Skip => "skip",
        }
    }

    /// Turn a placeholder failure into replacement text, or re-raise it.
    pub fn recover(self, error: FormatError, field: &Field) -> Result<String, FormatError> {
        if self == ErrorAction::Strict {
            return Err(error);
        }
        debug!(action = self.name(), field = %field.source, %error, "placeholder failed");
        Ok(match self {
            ErrorAction::ErrorMessage => error.to_string(),
            ErrorAction::Skip => field.source.clone(),
            ErrorAction::Strict | ErrorAction::Ignore => String::new(),
        })
    }
}

impl FromStr for ErrorAction {
    type Err = UnknownErrorAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorAction::Strict),
            "errmsg" | "error_message" => Ok(ErrorAction::ErrorMessage),
            "ignore" => Ok(ErrorAction::Ignore),
            "skip" => Ok(ErrorAction::Skip),
            _ => Err(UnknownErrorAction {
                name: s.to_string(),
            }),
        }
    }
}

impl Display for ErrorAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
