//! # Key Resolution
//!
//! Maps a caller's key onto a key actually present in a [`ResultMap`].
//!
//! The default [`PatternResolver`] tries an exact, case-sensitive match first. Failing that,
//! the lower-cased key is compiled as a regular expression and the first key (in insertion
//! order) whose lower-cased form contains a match wins, as long as that key is shorter than
//! [`MAX_KEY_LENGTH`] characters.
//!
//! Because the key is a pattern, regex metacharacters in it are live: `"a.b"` matches
//! `"axb"`, and `"("` is rejected with [`LookupError::Pattern`]. The pattern is only compiled
//! when the exact lookup misses.

use std::fmt;

use astview_common::ResultMap;
use regex::Regex;
use tracing::trace;

use crate::error::LookupError;

/// Keys this long or longer are never picked by a fuzzy match.
pub const MAX_KEY_LENGTH: usize = 100;

/// Strategy for picking the map key a lookup refers to.
pub trait KeyResolver: Send + Sync + fmt::Debug {
    fn resolve<'m>(&self, ast: &'m ResultMap, key: &str) -> Result<Option<&'m str>, LookupError>;
}

/// Exact match, then first case-insensitive pattern match.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternResolver;

/// Exact, case-sensitive match only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactResolver;

impl KeyResolver for PatternResolver {
    fn resolve<'m>(&self, ast: &'m ResultMap, key: &str) -> Result<Option<&'m str>, LookupError> {
        resolve_key(ast, key)
    }
}

impl KeyResolver for ExactResolver {
    fn resolve<'m>(&self, ast: &'m ResultMap, key: &str) -> Result<Option<&'m str>, LookupError> {
        Ok(ast.get_key_value(key).map(|(k, _)| k))
    }
}

pub fn resolve_key<'m>(ast: &'m ResultMap, key: &str) -> Result<Option<&'m str>, LookupError> {
    if let Some((exact, _)) = ast.get_key_value(key) {
        return Ok(Some(exact));
    }

    let pattern: Regex = Regex::new(&key.to_lowercase()).map_err(|source| LookupError::Pattern {
        key: key.to_string(),
        source,
    })?;

    let found: Option<&str> = ast.keys().find(|candidate| {
        candidate.chars().count() < MAX_KEY_LENGTH
            && pattern.is_match(&candidate.to_lowercase())
    });

    if let Some(candidate) = found {
        trace!(key, candidate, "fuzzy key match");
    }
    Ok(found)
}
