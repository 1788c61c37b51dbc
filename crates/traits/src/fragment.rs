//! FragmentSource trait for abstracting where icon fragments come from.
//!
//! The resolver only needs "give me the inner markup for this lookup name".
//! Whether that markup is compiled into the binary, read from a directory
//! or pre-populated in memory is the provider's business.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for fragment loading operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Icon not found: {0}")]
    NotFound(String),

    #[error("Failed to load icon '{name}': {message}")]
    LoadFailed { name: String, message: String },

    #[error("Icon '{0}' is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

impl SourceError {
    /// Returns `true` for the "no such icon" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}

/// Shared fragment markup (reference-counted, immutable).
pub type SharedFragment = Arc<str>;

/// A trait for loading icon fragments by lookup name.
///
/// A lookup name is the kebab-case file stem of the original SVG, e.g.
/// `chevron-right`. Implementations must be deterministic: a name that is
/// not found now is not found later.
///
/// # Implementations
///
/// - `InMemoryFragmentSource`: pre-populated map (always available)
/// - `DirectoryFragmentSource`: `<dir>/<name>.svg` on the local filesystem
/// - `EmbeddedFragmentSource`: files compiled into the binary
pub trait FragmentSource: Send + Sync + Debug {
    /// Load the fragment for `name`.
    ///
    /// Returns `SourceError::NotFound` when the provider has no such icon.
    fn load(&self, name: &str) -> Result<SharedFragment, SourceError>;

    /// Check if a fragment exists.
    fn exists(&self, name: &str) -> bool;

    /// Sorted lookup names this provider can serve.
    ///
    /// Providers that cannot enumerate return an empty list.
    fn names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<S: FragmentSource + ?Sized> FragmentSource for Arc<S> {
    fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
        (**self).load(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn names(&self) -> Vec<String> {
        (**self).names()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// An in-memory fragment source.
///
/// Fragments must be added before use. Handy for tests and for hosts that
/// ship their icon set in some other container format.
#[derive(Debug, Default)]
pub struct InMemoryFragmentSource {
    fragments: RwLock<HashMap<String, SharedFragment>>,
}

impl InMemoryFragmentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from `(name, fragment)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SharedFragment>,
    {
        let fragments = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            fragments: RwLock::new(fragments),
        }
    }

    /// Add a fragment, replacing any previous one under the same name.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(
        &self,
        name: impl Into<String>,
        fragment: impl Into<SharedFragment>,
    ) -> Result<(), SourceError> {
        let name = name.into();
        let mut fragments = self.fragments.write().map_err(|_| SourceError::LoadFailed {
            name: name.clone(),
            message: "fragment store lock poisoned".to_string(),
        })?;
        fragments.insert(name, fragment.into());
        Ok(())
    }

    /// Remove a fragment from the store.
    ///
    /// Returns `None` if the lock is poisoned or the fragment doesn't exist.
    pub fn remove(&self, name: &str) -> Option<SharedFragment> {
        self.fragments.write().ok()?.remove(name)
    }

    /// Does nothing if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut fragments) = self.fragments.write() {
            fragments.clear();
        }
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.fragments.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FragmentSource for InMemoryFragmentSource {
    fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
        let fragments = self.fragments.read().map_err(|_| SourceError::LoadFailed {
            name: name.to_string(),
            message: "fragment store lock poisoned".to_string(),
        })?;
        fragments
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.fragments
            .read()
            .map(|f| f.contains_key(name))
            .unwrap_or(false)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .fragments
            .read()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn name(&self) -> &'static str {
        "InMemoryFragmentSource"
    }
}
