//! Filesystem-backed fragment source.
//!
//! Serves `<dir>/<name>.svg` files written by the generator. Lookup names
//! are plain file stems, so anything that looks like a path is refused
//! before touching the filesystem.

use iconforge_traits::{FragmentSource, SharedFragment, SourceError};
use std::path::{Component, Path, PathBuf};

/// A fragment source that reads generated fragment files from a directory.
///
/// # Security
///
/// Names containing separators, `..` or absolute paths resolve to
/// `NotFound`, so a caller-controlled icon name can never escape the
/// fragment directory.
#[derive(Debug)]
pub struct DirectoryFragmentSource {
    base_path: PathBuf,
    extension: String,
}

impl DirectoryFragmentSource {
    /// Creates a source rooted at `base_path` serving `.svg` files.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            extension: "svg".to_string(),
        }
    }

    /// Serve files with a different extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the base path for this source.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a lookup name to a file path.
    ///
    /// Returns `None` if the name is not a single normal path component.
    fn resolve_path_safe(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return None;
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return None,
        }

        Some(self.base_path.join(format!("{}.{}", name, self.extension)))
    }
}

impl FragmentSource for DirectoryFragmentSource {
    fn load(&self, name: &str) -> Result<SharedFragment, SourceError> {
        let full_path = self
            .resolve_path_safe(name)
            .ok_or_else(|| SourceError::NotFound(name.to_string()))?;

        let bytes = std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(name.to_string())
            } else {
                SourceError::LoadFailed {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        log::debug!("Loaded fragment '{}' from {}", name, full_path.display());
        String::from_utf8(bytes)
            .map(SharedFragment::from)
            .map_err(|_| SourceError::InvalidEncoding(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve_path_safe(name)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn names(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.base_path) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str())
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    fn name(&self) -> &'static str {
        "DirectoryFragmentSource"
    }
}
