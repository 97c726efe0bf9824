//! Registry mapping illustration keys to renderers

use indexmap::IndexMap;
use thiserror::Error;

use crate::palette::Palette;
use crate::renderer::SvgBuilder;

/// Signature shared by every catalog entry
pub type RenderFn = fn(&Palette) -> SvgBuilder;

/// Errors that can occur during registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Illustration key not found in registry
    #[error("unknown illustration: {key}")]
    NotFound { key: String },

    /// Duplicate illustration key
    #[error("duplicate illustration key: {key}")]
    Duplicate { key: String },
}

/// Registry for illustration renderers, in registration order
#[derive(Default, Clone)]
pub struct IllustrationRegistry {
    entries: IndexMap<String, RenderFn>,
}

impl std::fmt::Debug for IllustrationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IllustrationRegistry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IllustrationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer under a key
    pub fn register(&mut self, key: impl Into<String>, render: RenderFn) -> Result<(), RegistryError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Duplicate { key });
        }
        self.entries.insert(key, render);
        Ok(())
    }

    /// Get a renderer by key
    pub fn get(&self, key: &str) -> Option<RenderFn> {
        self.entries.get(key).copied()
    }

    /// Get a renderer by key or a `NotFound` error
    pub fn require(&self, key: &str) -> Result<RenderFn, RegistryError> {
        self.get(key).ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
        })
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Number of registered illustrations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
