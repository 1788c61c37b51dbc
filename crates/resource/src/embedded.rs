//! Fragment source backed by files compiled into the binary.
//!
//! Any `#[derive(RustEmbed)]` folder of generated `<name>.svg` fragments can
//! be served through this type. In release builds the bytes are part of the
//! executable, so a load is a map lookup plus a UTF-8 check.

use iconforge_traits::{FragmentSource, SharedFragment, SourceError};
use rust_embed::RustEmbed;
use std::fmt;
use std::marker::PhantomData;

const FRAGMENT_EXTENSION: &str = ".svg";

/// Serves fragments from the embedded folder `E`.
pub struct EmbeddedFragmentSource<E: RustEmbed> {
    _embed: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedFragmentSource<E> {
    pub fn new() -> Self {
        Self {
            _embed: PhantomData,
        }
    }

    fn file_name(name: &str) -> Option<String> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return None;
        }
        Some(format!("{}{}", name, FRAGMENT_EXTENSION))
    }
}

impl<E: RustEmbed> Default for EmbeddedFragmentSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RustEmbed> fmt::Debug for EmbeddedFragmentSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFragmentSource")
            .field("embed", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: RustEmbed> FragmentSource for EmbeddedFragmentSource<E> {
    fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
        let file = Self::file_name(name)
            .and_then(|file_name| E::get(&file_name))
            .ok_or_else(|| SourceError::NotFound(name.to_string()))?;

        std::str::from_utf8(&file.data)
            .map(SharedFragment::from)
            .map_err(|_| SourceError::InvalidEncoding(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        Self::file_name(name)
            .map(|file_name| E::get(&file_name).is_some())
            .unwrap_or(false)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = E::iter()
            .filter_map(|path| {
                path.strip_suffix(FRAGMENT_EXTENSION)
                    .filter(|stem| !stem.contains('/'))
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        names
    }

    fn name(&self) -> &'static str {
        "EmbeddedFragmentSource"
    }
}
