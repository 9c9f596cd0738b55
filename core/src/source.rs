//! Where the text handed to a scanner comes from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

/// Supplies the raw text a scanner parses. Called at most once per successful parse.
pub trait ContentSource: Send + Sync {
    fn content_for_scanner(&self) -> anyhow::Result<String>;
}

impl ContentSource for String {
    fn content_for_scanner(&self) -> anyhow::Result<String> {
        Ok(self.clone())
    }
}

impl ContentSource for &'static str {
    fn content_for_scanner(&self) -> anyhow::Result<String> {
        Ok((*self).to_string())
    }
}

impl ContentSource for Arc<str> {
    fn content_for_scanner(&self) -> anyhow::Result<String> {
        Ok(self.to_string())
    }
}

/// Reads a file when the facade first needs it, not when the source is created.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for FileSource {
    fn content_for_scanner(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))
    }
}
