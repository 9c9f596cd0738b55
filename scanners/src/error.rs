use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("line {line}: missing `{separator}` separator")]
    MissingSeparator { line: usize, separator: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}
