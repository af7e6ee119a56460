//! Public AST types for parsed templates.
//!
//! These types are public to enable external tooling (linters, editors, etc.).

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// The placeholders of the template, in order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `{{` and `}}` already unescaped.
    Literal(String),
    /// A placeholder: `{field!conversion:spec}`.
    Field(Field),
}

/// A placeholder in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Which argument the placeholder refers to.
    pub arg: ArgRef,
    /// Attribute and key lookups applied to the argument, in order.
    pub accessors: Vec<Accessor>,
    /// Conversion character after `!`, if any.
    pub conversion: Option<char>,
    /// Raw format-spec after `:`. Nested braces are kept verbatim.
    pub spec: String,
    /// The placeholder exactly as written, braces included.
    pub source: String,
}

/// The argument named by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgRef {
    /// `{}`: the next positional argument.
    Auto,
    /// `{0}`: a positional argument by index.
    Index(usize),
    /// `{name}`: a named argument.
    Name(String),
}

/// A lookup into a compound argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// `.name`
    Attribute(String),
    /// `[key]`; an all-digit key also indexes lists.
    Key(String),
}
