//! Formatter runtime: extension dispatch and template evaluation.
//!
//! This module provides the evaluation engine that takes parsed templates
//! and produces formatted strings. Each placeholder is offered to the
//! extension chain its spec names, then to the numeric renderers, and any
//! failure is settled by the formatter's [`ErrorAction`].

mod builtins;
mod context;
mod error;
mod error_action;
mod evaluator;
mod extension;
mod formatter;
mod registry;

pub use builtins::default_extensions;
pub use context::{DEFAULT_MAX_DEPTH, EvalContext};
pub use error::{FormatError, GrammarError, compute_suggestions};
pub use error_action::{ErrorAction, UnknownErrorAction};
pub use extension::{ContextualHandler, Extension, FormatterContext, Handler, PlainHandler};
pub use formatter::{Formatter, FormatterConfig};
pub use registry::ExtensionRegistry;
