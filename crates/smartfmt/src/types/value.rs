use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value that can be passed as an argument to a template.
///
/// The `Value` enum is the dynamic type system of the formatter: extensions
/// and numeric renderers inspect it to decide whether they apply.
///
/// # Example
///
/// ```
/// use smartfmt::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// let fruits: Value = vec!["apple", "banana"].into();
///
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.as_str(), Some("Alice"));
/// assert_eq!(fruits.as_list().map(<[Value]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value. Displays as an empty string, chooses as `null`.
    None,

    /// A boolean.
    Bool(bool),

    /// An integer number.
    Int(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A finite sequence of values.
    List(Vec<Value>),

    /// A record whose entries are reachable with `{0.key}` or `{0[key]}`.
    Map(BTreeMap<String, Value>),

    /// An enum-like value identified by its name.
    Symbol(String),
}

impl Value {
    /// Create an enum-like value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Get this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// True for integers and finite floats.
    pub fn is_finite_number(&self) -> bool {
        match self {
            Value::Int(_) => true,
            Value::Float(f) => f.is_finite(),
            _ => false,
        }
    }

    /// The name identifying an enum-like value.
    ///
    /// Symbols are their own name; maps expose a string `name` entry.
    pub fn name(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            Value::Map(entries) => entries.get("name").and_then(Value::as_str),
            _ => None,
        }
    }

    /// A short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Symbol(_) => "symbol",
        }
    }

    /// The quoted representation used by the `!r` conversion.
    pub fn repr(&self) -> String {
        match self {
            Value::String(s) => format!("{s:?}"),
            Value::Symbol(name) => format!(":{name}"),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::repr).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Map(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key:?}: {}", value.repr()))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Value::None => "none".to_string(),
            other => other.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(_) => f.write_str(&self.repr()),
            Value::Symbol(name) => write!(f, "{name}"),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_saturates_at_i64_max() {
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(usize::MAX), Value::Int(i64::MAX));
    }
}
