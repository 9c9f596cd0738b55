//! Resolves scanner identifiers to factories.

use std::sync::Arc;

use astview_common::Settings;
use astview_core::{LookupError, ScannerDescriptor, ScannerFactory};

use crate::json::JsonFactory;
use crate::keyvalue::KeyValueFactory;

/// Identifiers accepted by [`factory`].
pub const SCANNERS: &[&str] = &["keyvalue", "json"];

pub fn factory(name: &str) -> Option<Arc<dyn ScannerFactory>> {
    match name.to_ascii_lowercase().as_str() {
        "keyvalue" | "kv" => Some(Arc::new(KeyValueFactory)),
        "json" => Some(Arc::new(JsonFactory)),
        _ => None,
    }
}

/// Builds a descriptor for `name`. Empty settings give a bare descriptor.
pub fn descriptor(name: &str, settings: Settings) -> Result<ScannerDescriptor, LookupError> {
    let factory: Arc<dyn ScannerFactory> = factory(name).ok_or_else(|| {
        LookupError::Configuration(format!(
            "unknown scanner `{name}`, expected one of: {}",
            SCANNERS.join(", ")
        ))
    })?;

    if settings.is_empty() {
        Ok(ScannerDescriptor::Bare(factory))
    } else {
        Ok(ScannerDescriptor::WithSettings(factory, settings))
    }
}
