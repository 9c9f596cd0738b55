//! The central **abstraction** for turning raw text into a [`ResultMap`].
//!
//! A [`ScannerFactory`] is the scanner implementation identifier: it has a name and knows how
//! to build a [`Scanner`] from [`Settings`]. A [`ScannerDescriptor`] pairs a factory with
//! optional settings and is what a [`Scannable`](crate::Scannable) is constructed with.
//!
//! **Architectural Note:**
//! The lookup layer depends only on these traits. Concrete scanners live in their own crate
//! and are never named here.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use astview_common::{ResultMap, Settings, SettingsError};

/// Parses one document into a flat key/value map.
pub trait Scanner {
    fn parse(&self, content: &str) -> anyhow::Result<ResultMap>;
}

/// Builds configured [`Scanner`]s.
pub trait ScannerFactory: Send + Sync {
    /// Identifier used in logs and by registries.
    fn name(&self) -> &str;

    /// Creates a scanner for the given settings.
    ///
    /// Settings the scanner does not understand are ignored. Settings it does understand but
    /// cannot use are rejected here, before any content is read.
    fn build(&self, settings: &Settings) -> Result<Box<dyn Scanner>, SettingsError>;
}

/// Either a bare scanner factory or a `(factory, settings)` pair.
#[derive(Clone)]
pub enum ScannerDescriptor {
    Bare(Arc<dyn ScannerFactory>),
    WithSettings(Arc<dyn ScannerFactory>, Settings),
}

impl ScannerDescriptor {
    pub fn new(factory: impl ScannerFactory + 'static) -> Self {
        ScannerDescriptor::Bare(Arc::new(factory))
    }

    pub fn with_settings(factory: impl ScannerFactory + 'static, settings: Settings) -> Self {
        ScannerDescriptor::WithSettings(Arc::new(factory), settings)
    }

    pub fn factory(&self) -> &dyn ScannerFactory {
        match self {
            ScannerDescriptor::Bare(factory) | ScannerDescriptor::WithSettings(factory, _) => {
                factory.as_ref()
            }
        }
    }

    /// Settings to build with. A bare descriptor yields empty settings.
    pub fn settings(&self) -> Cow<'_, Settings> {
        match self {
            ScannerDescriptor::Bare(_) => Cow::Owned(Settings::default()),
            ScannerDescriptor::WithSettings(_, settings) => Cow::Borrowed(settings),
        }
    }
}

impl From<Arc<dyn ScannerFactory>> for ScannerDescriptor {
    fn from(factory: Arc<dyn ScannerFactory>) -> Self {
        ScannerDescriptor::Bare(factory)
    }
}

impl From<(Arc<dyn ScannerFactory>, Settings)> for ScannerDescriptor {
    fn from((factory, settings): (Arc<dyn ScannerFactory>, Settings)) -> Self {
        ScannerDescriptor::WithSettings(factory, settings)
    }
}

impl fmt::Debug for ScannerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScannerDescriptor::Bare(factory) => {
                f.debug_tuple("Bare").field(&factory.name()).finish()
            }
            ScannerDescriptor::WithSettings(factory, settings) => f
                .debug_tuple("WithSettings")
                .field(&factory.name())
                .field(settings)
                .finish(),
        }
    }
}

/// Wraps a parse function as a settings-less scanner factory.
pub fn from_fn<F>(name: &'static str, parse: F) -> FnScannerFactory<F>
where
    F: Fn(&str) -> anyhow::Result<ResultMap> + Send + Sync + 'static,
{
    FnScannerFactory {
        name,
        parse: Arc::new(parse),
    }
}

pub struct FnScannerFactory<F> {
    name: &'static str,
    parse: Arc<F>,
}

struct FnScanner<F> {
    parse: Arc<F>,
}

impl<F> ScannerFactory for FnScannerFactory<F>
where
    F: Fn(&str) -> anyhow::Result<ResultMap> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn build(&self, _settings: &Settings) -> Result<Box<dyn Scanner>, SettingsError> {
        Ok(Box::new(FnScanner {
            parse: Arc::clone(&self.parse),
        }))
    }
}

impl<F> Scanner for FnScanner<F>
where
    F: Fn(&str) -> anyhow::Result<ResultMap>,
{
    fn parse(&self, content: &str) -> anyhow::Result<ResultMap> {
        (self.parse)(content)
    }
}
