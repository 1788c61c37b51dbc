//! Unwrapping icon markup from its `<svg>` envelope.
//!
//! Icon sets ship every icon as a complete SVG document whose outer element
//! only carries presentation attributes. Those attributes are re-applied at
//! render time, so only the inner markup is worth storing.

use crate::error::ExtractError;

const CLOSE_TAG: &str = "</svg>";

/// How the generator treats documents it cannot unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Malformed input yields an empty fragment.
    #[default]
    Lenient,
    /// Malformed input is an error.
    Strict,
}

impl ExtractMode {
    pub fn extract<'a>(&self, svg: &'a str) -> Result<&'a str, ExtractError> {
        match self {
            ExtractMode::Lenient => Ok(extract_fragment(svg)),
            ExtractMode::Strict => extract_fragment_strict(svg),
        }
    }
}

/// Returns the trimmed markup between the end of the first tag and the last
/// `</svg>`.
///
/// Never fails: input missing either delimiter (or with the closing tag
/// before the first `>`) produces an empty fragment.
pub fn extract_fragment(svg: &str) -> &str {
    extract_fragment_strict(svg).unwrap_or("")
}

/// Like [`extract_fragment`] but reports why malformed input was rejected.
pub fn extract_fragment_strict(svg: &str) -> Result<&str, ExtractError> {
    let start = svg.find('>').ok_or(ExtractError::MissingOpenTag)? + 1;
    let end = svg.rfind(CLOSE_TAG).ok_or(ExtractError::MissingCloseTag)?;
    if end < start {
        return Err(ExtractError::ClosedBeforeOpened);
    }
    Ok(svg[start..end].trim())
}
