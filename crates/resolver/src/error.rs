use iconforge_traits::SourceError;
use thiserror::Error;

/// Errors returned when resolving an icon at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("icon {0} not found")]
    NotFound(String),

    #[error("icon {name} could not be loaded: {source}")]
    Source {
        name: String,
        #[source]
        source: SourceError,
    },

    #[error("fragment cache lock poisoned")]
    CachePoisoned,
}

impl ResolveError {
    /// Maps a provider error for `name`, folding its not-found case into ours.
    pub fn from_source(name: &str, err: SourceError) -> Self {
        match err {
            SourceError::NotFound(_) => ResolveError::NotFound(name.to_string()),
            source => ResolveError::Source {
                name: name.to_string(),
                source,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound(_))
    }
}
