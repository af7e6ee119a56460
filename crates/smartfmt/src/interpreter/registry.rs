//! Extension registry: ordered handler chains keyed by alias.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::interpreter::FormatError;
use crate::interpreter::builtins::default_extensions;
use crate::interpreter::extension::{Extension, FormatterContext};
use crate::parser::FormatSpec;
use crate::types::Value;

/// A registry mapping each alias to the extensions answering to it.
///
/// Extensions registered later are tried first. Within one
/// [`register`](Self::register) call the given order is kept.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    chains: HashMap<String, Vec<Arc<Extension>>>,
}

impl ExtensionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in extensions.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(default_extensions());
        registry
    }

    /// Register extensions ahead of everything already registered.
    pub fn register(&mut self, extensions: impl IntoIterator<Item = Extension>) {
        let extensions: Vec<Arc<Extension>> = extensions.into_iter().map(Arc::new).collect();
        for extension in extensions.iter().rev() {
            for name in extension.names() {
                self.chains
                    .entry(name.clone())
                    .or_default()
                    .insert(0, Arc::clone(extension));
            }
        }
    }

    /// The extensions tried for `name`, in priority order.
    pub fn chain(&self, name: &str) -> &[Arc<Extension>] {
        self.chains.get(name).map_or(&[], Vec::as_slice)
    }

    /// All registered aliases, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.chains.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Offer the placeholder to each extension of the spec's chain until one
    /// accepts it.
    ///
    /// An alias nobody registered has an empty chain and simply declines.
    pub fn dispatch(
        &self,
        cx: &mut FormatterContext<'_>,
        value: &Value,
        spec: &FormatSpec<'_>,
    ) -> Result<Option<String>, FormatError> {
        for (position, extension) in self.chain(spec.name).iter().enumerate() {
            if let Some(text) = extension.invoke(cx, value, spec)? {
                trace!(name = spec.name, position, "extension accepted placeholder");
                return Ok(Some(text));
            }
        }
        Ok(None)
    }
}
