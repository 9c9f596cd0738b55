//! # astview-scanners
//!
//! Built-in scanners and the name registry the command line resolves `--scanner` against.
//!
//! * [`keyvalue`]: line-oriented `Key: Value` records, the common shape of registry responses.
//! * [`json`]: a JSON object document.
//! * [`registry`]: identifier to factory lookup.

pub mod error;
pub mod json;
pub mod keyvalue;
pub mod registry;

pub use error::ScanError;
pub use json::{JsonFactory, JsonScanner};
pub use keyvalue::{AVAILABLE_KEY, KeyValueFactory, KeyValueScanner};
