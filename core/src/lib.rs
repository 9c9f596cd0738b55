//! # astview-core
//!
//! A thin query layer over the flat key/value output ("AST") of a text scanner.
//!
//! * [`scannable`]: the [`Scannable`] facade. Parses lazily, once, then answers lookups.
//! * [`resolver`]: how a caller's key is matched against the keys a scanner produced.
//! * [`scanner`]: the [`Scanner`] / [`ScannerFactory`] seam concrete scanners plug into.
//! * [`source`]: where the raw text comes from.

pub mod error;
pub mod resolver;
pub mod scannable;
pub mod scanner;
pub mod source;

pub use error::LookupError;
pub use resolver::{ExactResolver, KeyResolver, MAX_KEY_LENGTH, PatternResolver, resolve_key};
pub use scannable::{ParseState, Scannable, ScannableBuilder};
pub use scanner::{Scanner, ScannerDescriptor, ScannerFactory};
pub use source::{ContentSource, FileSource};

pub use astview_common::{ResultMap, Settings, SettingsError, Value};
