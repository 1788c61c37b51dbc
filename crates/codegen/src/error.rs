use std::path::PathBuf;
use thiserror::Error;

/// Why an SVG document could not be unwrapped in strict mode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no '>' ending an opening <svg> tag")]
    MissingOpenTag,

    #[error("no closing </svg> tag")]
    MissingCloseTag,

    #[error("closing </svg> tag appears before the opening tag ends")]
    ClosedBeforeOpened,
}

/// Errors that abort a generation batch.
///
/// Every variant is fatal: the batch is deterministic and re-runnable, so
/// nothing is retried or partially committed on purpose.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid generator configuration: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed SVG {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
