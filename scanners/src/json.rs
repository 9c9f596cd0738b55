//! # JSON Scanner
//!
//! Maps a JSON object onto a [`ResultMap`], for registries that already answer in JSON
//! (RDAP and friends). Objects nest as maps, arrays become lists, numbers are kept as their
//! textual form. Keys keep document order, so fuzzy lookups prefer earlier members.

use astview_common::{ResultMap, Settings, SettingsError, Value};
use astview_core::{Scanner, ScannerFactory};
use serde_json::Value as Json;

use crate::error::ScanError;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonScanner;

impl JsonScanner {
    pub fn scan(&self, content: &str) -> Result<ResultMap, ScanError> {
        match serde_json::from_str::<Json>(content)? {
            Json::Object(object) => Ok(object_to_map(object)),
            other => Err(ScanError::NotAnObject(kind(&other))),
        }
    }
}

fn object_to_map(object: serde_json::Map<String, Json>) -> ResultMap {
    object
        .into_iter()
        .map(|(key, value)| (key, convert(value)))
        .collect()
}

fn convert(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => Value::Str(n.to_string()),
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::List(items.into_iter().map(convert).collect()),
        Json::Object(object) => Value::Map(object_to_map(object)),
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

impl Scanner for JsonScanner {
    fn parse(&self, content: &str) -> anyhow::Result<ResultMap> {
        Ok(self.scan(content)?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFactory;

impl ScannerFactory for JsonFactory {
    fn name(&self) -> &str {
        "json"
    }

    fn build(&self, _settings: &Settings) -> Result<Box<dyn Scanner>, SettingsError> {
        Ok(Box::new(JsonScanner))
    }
}
