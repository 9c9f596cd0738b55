//! # Lookup Facade
//!
//! [`Scannable`] wraps a scanner descriptor and a content source and answers key lookups
//! against the scanner's output. The scanner runs on the first lookup and never again for
//! the same instance.
//!
//! ```rust,ignore
//! let whois = Scannable::new(ScannerDescriptor::new(KeyValueFactory), response_text);
//!
//! whois.node("created_on")?;             // Some(&Value::Str("2009-12-12"))
//! whois.node_with("updated", Value::len)?; // Some(10)
//! whois.node_exists("created_on")?;      // true
//! whois.node_exists("created_at")?;      // false
//! ```

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use astview_common::{ResultMap, Value};
use tracing::{debug, trace};

use crate::error::LookupError;
use crate::resolver::{KeyResolver, PatternResolver};
use crate::scanner::ScannerDescriptor;
use crate::source::ContentSource;

/// The two states of a facade. There is no way back to `Unparsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Unparsed,
    Parsed,
}

/// Memoized, fuzzy-tolerant read access to a scanner's output.
pub struct Scannable {
    scanner: Option<ScannerDescriptor>,
    source: Option<Box<dyn ContentSource>>,
    resolver: Box<dyn KeyResolver>,
    ast: OnceLock<ResultMap>,
    parse_lock: Mutex<()>,
}

impl Scannable {
    pub fn new(scanner: ScannerDescriptor, source: impl ContentSource + 'static) -> Self {
        Self::builder().scanner(scanner).source(source).build()
    }

    pub fn builder() -> ScannableBuilder {
        ScannableBuilder::default()
    }

    pub fn state(&self) -> ParseState {
        if self.ast.get().is_some() {
            ParseState::Parsed
        } else {
            ParseState::Unparsed
        }
    }

    pub fn scanner(&self) -> Option<&ScannerDescriptor> {
        self.scanner.as_ref()
    }

    /// Returns the scanner output, running the scanner first if needed.
    ///
    /// Concurrent first callers are serialized so the scanner runs once. A failed parse
    /// leaves the instance `Unparsed` and the next call tries again.
    pub fn ensure_parsed(&self) -> Result<&ResultMap, LookupError> {
        if let Some(ast) = self.ast.get() {
            return Ok(ast);
        }

        let _guard = self.parse_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ast) = self.ast.get() {
            return Ok(ast);
        }

        let ast: ResultMap = self.parse()?;
        Ok(self.ast.get_or_init(|| ast))
    }

    fn parse(&self) -> Result<ResultMap, LookupError> {
        let descriptor: &ScannerDescriptor = self
            .scanner
            .as_ref()
            .ok_or_else(|| LookupError::Configuration("no scanner configured".to_string()))?;
        let source: &dyn ContentSource = self
            .source
            .as_deref()
            .ok_or_else(|| LookupError::Configuration("no content source configured".to_string()))?;

        let name: &str = descriptor.factory().name();
        let scanner = descriptor
            .factory()
            .build(&descriptor.settings())
            .map_err(|e| LookupError::Configuration(format!("scanner `{name}`: {e}")))?;

        let content: String = source
            .content_for_scanner()
            .map_err(|e| LookupError::Configuration(format!("content source: {e:#}")))?;

        debug!(scanner = name, bytes = content.len(), "scanning content");
        let ast: ResultMap = scanner.parse(&content).map_err(LookupError::Scanner)?;
        debug!(scanner = name, keys = ast.len(), "scan complete");

        Ok(ast)
    }

    /// Looks up `key`, exactly first and then fuzzily.
    ///
    /// Returns `None` when nothing matches, when the value is null, and when the value is the
    /// bare `true` presence marker.
    pub fn node(&self, key: &str) -> Result<Option<&Value>, LookupError> {
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }
        let ast: &ResultMap = self.ensure_parsed()?;

        let Some(matched) = self.resolver.resolve(ast, key)? else {
            trace!(key, "no matching key");
            return Ok(None);
        };

        Ok(ast.get(matched).filter(|value| has_payload(value)))
    }

    /// Like [`node`](Self::node), then applies `transform` to a present value.
    ///
    /// `transform` is not called when the lookup yields nothing.
    pub fn node_with<T, F>(&self, key: &str, transform: F) -> Result<Option<T>, LookupError>
    where
        F: FnOnce(&Value) -> T,
    {
        Ok(self.node(key)?.map(transform))
    }

    /// Exact-key existence check. No fuzzy fallback, unlike [`node`](Self::node).
    pub fn node_exists(&self, key: &str) -> Result<bool, LookupError> {
        let ast: &ResultMap = self.ensure_parsed()?;
        Ok(ast.get(key).is_some_and(has_payload))
    }
}

fn has_payload(value: &Value) -> bool {
    !value.is_null() && !value.is_presence_marker()
}

impl fmt::Debug for Scannable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scannable")
            .field("scanner", &self.scanner)
            .field("resolver", &self.resolver)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Assembles a [`Scannable`]. Missing parts are reported on the first lookup, not here.
#[derive(Default)]
pub struct ScannableBuilder {
    scanner: Option<ScannerDescriptor>,
    source: Option<Box<dyn ContentSource>>,
    resolver: Option<Box<dyn KeyResolver>>,
}

impl ScannableBuilder {
    pub fn scanner(mut self, scanner: impl Into<ScannerDescriptor>) -> Self {
        self.scanner = Some(scanner.into());
        self
    }

    pub fn source(mut self, source: impl ContentSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Replaces the default [`PatternResolver`].
    pub fn resolver(mut self, resolver: impl KeyResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn build(self) -> Scannable {
        Scannable {
            scanner: self.scanner,
            source: self.source,
            resolver: self.resolver.unwrap_or_else(|| Box::new(PatternResolver)),
            ast: OnceLock::new(),
            parse_lock: Mutex::new(()),
        }
    }
}
