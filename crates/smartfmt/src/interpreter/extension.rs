//! Pluggable extensions that may take over the rendering of a placeholder.
//!
//! An extension is a handler plus the aliases it answers to. Handlers
//! return `Ok(None)` to decline, letting the next extension in the chain
//! (and eventually the numeric renderers) try.

use crate::interpreter::context::EvalContext;
use crate::interpreter::evaluator::eval_template;
use crate::interpreter::formatter::Formatter;
use crate::interpreter::{FormatError, GrammarError};
use crate::locale::{LocaleData, LocaleId, NumberFormat};
use crate::parser::{FormatSpec, is_valid_name, parse_template};
use crate::types::{Args, Value};

/// Handler that only needs the value and the format-spec.
pub type PlainHandler = fn(&Value, &FormatSpec<'_>) -> Result<Option<String>, FormatError>;

/// Handler that can format nested templates through the formatter.
pub type ContextualHandler =
    fn(&mut FormatterContext<'_>, &Value, &FormatSpec<'_>) -> Result<Option<String>, FormatError>;

/// The callable behind an extension.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Plain(PlainHandler),
    Contextual(ContextualHandler),
}

/// A named placeholder handler.
///
/// # Example
///
/// ```
/// use smartfmt::{ErrorAction, Extension, Formatter, LocaleId, Value};
///
/// let shout = Extension::plain(["shout"], |value, _spec| {
///     Ok(Some(value.to_string().to_uppercase()))
/// })
/// .unwrap();
/// let formatter = Formatter::new(LocaleId::default(), ErrorAction::Strict, vec![shout]);
/// assert_eq!(formatter.format("{0:shout:}", &[Value::from("hey")]).unwrap(), "HEY");
/// ```
#[derive(Debug, Clone)]
pub struct Extension {
    names: Vec<String>,
    handler: Handler,
}

impl Extension {
    /// Create an extension answering to each of `names`.
    ///
    /// The empty name makes the extension a candidate for placeholders with
    /// no explicit extension name.
    pub fn new<I, S>(names: I, handler: Handler) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(bad) = names.iter().find(|name| !is_valid_name(name)) {
            return Err(GrammarError::InvalidName { name: bad.clone() });
        }
        Ok(Self { names, handler })
    }

    /// Create an extension from aliases known to be valid.
    pub(crate) fn builtin(names: &[&str], handler: Handler) -> Self {
        Self {
            names: names.iter().map(ToString::to_string).collect(),
            handler,
        }
    }

    pub fn plain<I, S>(names: I, handler: PlainHandler) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, Handler::Plain(handler))
    }

    pub fn contextual<I, S>(names: I, handler: ContextualHandler) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, Handler::Contextual(handler))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Run the handler.
    pub fn invoke(
        &self,
        cx: &mut FormatterContext<'_>,
        value: &Value,
        spec: &FormatSpec<'_>,
    ) -> Result<Option<String>, FormatError> {
        match self.handler {
            Handler::Plain(handler) => handler(value, spec),
            Handler::Contextual(handler) => handler(cx, value, spec),
        }
    }
}

/// Access to the formatter from inside a contextual handler.
pub struct FormatterContext<'a> {
    formatter: &'a Formatter,
    ctx: &'a mut EvalContext,
}

impl<'a> FormatterContext<'a> {
    pub(crate) fn new(formatter: &'a Formatter, ctx: &'a mut EvalContext) -> Self {
        Self { formatter, ctx }
    }

    /// The formatter's locale.
    pub fn locale(&self) -> &LocaleId {
        self.formatter.locale()
    }

    pub fn locale_data(&self) -> &dyn LocaleData {
        self.formatter.locale_data()
    }

    pub fn number_format(&self) -> &NumberFormat {
        self.formatter.number_format()
    }

    /// Current nesting depth; 0 while evaluating the top-level template.
    pub fn depth(&self) -> usize {
        self.ctx.depth()
    }

    /// Format a branch template with `value` as its only positional argument.
    pub fn format(&mut self, template: &str, value: &Value) -> Result<String, FormatError> {
        let template = parse_template(template)?;
        self.ctx.enter()?;
        let result = eval_template(
            &template,
            &Args::single(value.clone()),
            self.ctx,
            self.formatter,
        );
        self.ctx.leave();
        result
    }

    /// Format a branch template for one list item.
    ///
    /// `{index}` resolves to `index` inside the branch, including any
    /// templates it formats in turn.
    pub fn format_item(
        &mut self,
        template: &str,
        item: &Value,
        index: usize,
    ) -> Result<String, FormatError> {
        self.ctx.push_index(index);
        let result = self.format(template, item);
        self.ctx.pop_index();
        result
    }
}
