//! The user-facing formatter.

use std::sync::{Arc, OnceLock};

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::interpreter::FormatError;
use crate::interpreter::context::{DEFAULT_MAX_DEPTH, EvalContext};
use crate::interpreter::error_action::ErrorAction;
use crate::interpreter::evaluator::{eval_template, format_value};
use crate::interpreter::extension::Extension;
use crate::interpreter::registry::ExtensionRegistry;
use crate::locale::{CldrData, LocaleData, LocaleId, NumberFormat};
use crate::parser::parse_template;
use crate::types::{Args, Value};

/// Formats templates with locale-aware numbers and pluggable extensions.
///
/// A formatter is immutable while formatting and can be shared across
/// threads.
///
/// # Example
///
/// ```
/// use smartfmt::{Formatter, LocaleId, Value};
///
/// let formatter = Formatter::builder()
///     .locale(LocaleId::parse("ru").unwrap())
///     .build();
///
/// let text = formatter
///     .format("{0} {0:файл|файла|файлов}, {1:,.1f}", &[Value::from(3), Value::from(1234.5)])
///     .unwrap();
/// assert_eq!(text, "3 файла, 1\u{a0}234,5");
/// ```
#[derive(Builder, Clone)]
pub struct Formatter {
    /// Locale for numbers and plural rules.
    #[builder(default)]
    locale: LocaleId,

    #[builder(default)]
    error_action: ErrorAction,

    /// Extension chains; the built-ins unless replaced.
    #[builder(default = ExtensionRegistry::with_defaults())]
    registry: ExtensionRegistry,

    #[builder(default = default_locale_data())]
    locale_data: Arc<dyn LocaleData>,

    /// Bound on nested branch formatting.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Number format of `locale`, fetched on first use.
    #[builder(skip)]
    number_format: OnceLock<NumberFormat>,
}

fn default_locale_data() -> Arc<dyn LocaleData> {
    Arc::new(CldrData)
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::builder().build()
    }
}

/// Serializable formatter settings.
///
/// # Example
///
/// ```
/// use smartfmt::{ErrorAction, FormatterConfig};
///
/// let config: FormatterConfig =
///     serde_json::from_str(r#"{ "locale": "de", "errors": "errmsg" }"#).unwrap();
/// assert_eq!(config.errors, ErrorAction::ErrorMessage);
/// assert!(config.builtin_extensions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub locale: String,
    pub errors: ErrorAction,
    /// Start from the built-in extensions.
    pub builtin_extensions: bool,
    pub max_depth: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            errors: ErrorAction::Strict,
            builtin_extensions: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Formatter {
    /// Create a formatter with the built-in extensions plus `extensions`,
    /// which take priority over them.
    pub fn new(locale: LocaleId, error_action: ErrorAction, extensions: Vec<Extension>) -> Self {
        let mut formatter = Formatter::builder()
            .locale(locale)
            .error_action(error_action)
            .build();
        formatter.register(extensions);
        formatter
    }

    /// Create a formatter from serializable settings.
    pub fn from_config(config: &FormatterConfig) -> Result<Self, FormatError> {
        let registry = if config.builtin_extensions {
            ExtensionRegistry::with_defaults()
        } else {
            ExtensionRegistry::new()
        };
        Ok(Formatter::builder()
            .locale(LocaleId::parse(&config.locale)?)
            .error_action(config.errors)
            .registry(registry)
            .max_depth(config.max_depth)
            .build())
    }

    /// Register extensions ahead of all existing ones.
    ///
    /// Within `extensions`, earlier entries win over later ones.
    pub fn register(&mut self, extensions: Vec<Extension>) {
        self.registry.register(extensions);
    }

    /// Format a template with positional arguments.
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String, FormatError> {
        self.format_args(template, &Args::from_values(args))
    }

    /// Format a template with positional and named arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use smartfmt::{Formatter, args};
    ///
    /// let formatter = Formatter::default();
    /// let text = formatter
    ///     .format_args("{name} has {0} {0:apple|apples}", &args![2; "name" => "Ann"])
    ///     .unwrap();
    /// assert_eq!(text, "Ann has 2 apples");
    /// ```
    pub fn format_args(&self, template: &str, args: &Args) -> Result<String, FormatError> {
        trace!(template, locale = %self.locale, "formatting");
        let template = parse_template(template)?;
        let mut ctx = EvalContext::with_max_depth(self.max_depth);
        eval_template(&template, args, &mut ctx, self)
    }

    /// Format a single value with a format-spec, as `{0:spec}` would.
    ///
    /// Errors are returned as is; the error action only applies to
    /// placeholders inside templates.
    pub fn format_value(&self, value: &Value, spec: &str) -> Result<String, FormatError> {
        let mut ctx = EvalContext::with_max_depth(self.max_depth);
        format_value(value, spec, &mut ctx, self)
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn error_action(&self) -> ErrorAction {
        self.error_action
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn locale_data(&self) -> &dyn LocaleData {
        self.locale_data.as_ref()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number symbols and patterns of the formatter's locale.
    pub fn number_format(&self) -> &NumberFormat {
        self.number_format
            .get_or_init(|| self.locale_data.number_format(&self.locale))
    }
}
