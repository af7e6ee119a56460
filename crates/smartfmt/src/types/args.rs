use std::collections::HashMap;

use super::Value;

/// Positional and named arguments for one `format` call.
///
/// # Example
///
/// ```
/// use smartfmt::{Args, Value};
///
/// let args = Args::new().arg(3).named("name", "Alice");
/// assert_eq!(args.positional(0), Some(&Value::Int(3)));
/// assert_eq!(args.get("name").and_then(Value::as_str), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: HashMap<String, Value>,
}

impl Args {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an argument set holding only positional values.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            positional: values.to_vec(),
            named: HashMap::new(),
        }
    }

    /// Create an argument set with a single positional value.
    pub fn single(value: Value) -> Self {
        Self {
            positional: vec![value],
            named: HashMap::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add (or replace) a named argument.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Get a positional argument.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Get a named argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Number of positional arguments.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// True when there are neither positional nor named arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Names of all named arguments, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.named.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            named: HashMap::new(),
        }
    }
}
