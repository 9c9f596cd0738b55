use thiserror::Error;

/// Everything that can go wrong while answering a lookup.
///
/// A key that resolves to nothing is not an error; it yields `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The scanner descriptor, its settings or the content source is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Raised by the scanner itself. Display and source are the scanner's own, and the
    /// original error can be recovered with `downcast_ref`.
    #[error(transparent)]
    Scanner(anyhow::Error),

    #[error("lookup key `{key}` is not a valid pattern: {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },

    #[error("lookup key must not be empty")]
    EmptyKey,
}

impl LookupError {
    /// The scanner's error, if this is one.
    pub fn scanner_error(&self) -> Option<&anyhow::Error> {
        match self {
            LookupError::Scanner(err) => Some(err),
            _ => None,
        }
    }
}
