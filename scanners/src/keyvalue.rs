//! # Key/Value Scanner
//!
//! Reads records of the form
//!
//! ```text
//! % comment
//! Domain Name: example.com
//! Name Server: ns1.example.com
//! Name Server: ns2.example.com
//! ```
//!
//! Repeated keys collect into a list in the order they appear. Keys and values are trimmed
//! and an empty value is stored as null.
//!
//! Settings:
//! * `separator`: splits key from value, default `:`.
//! * `comment`: characters that start a comment line, default `%#`.
//! * `available`: regex; a line matching it records [`AVAILABLE_KEY`] as `true`.
//! * `strict`: when true, a line without a separator or with an empty key is an error.

use astview_common::{ResultMap, Settings, SettingsError, Value};
use astview_core::{Scanner, ScannerFactory};
use regex::Regex;
use tracing::{trace, warn};

use crate::error::ScanError;

pub const AVAILABLE_KEY: &str = "status:available";

const DEFAULT_SEPARATOR: &str = ":";
const DEFAULT_COMMENT: &str = "%#";

#[derive(Debug, Clone)]
pub struct KeyValueScanner {
    separator: String,
    comment: String,
    available: Option<Regex>,
    strict: bool,
}

impl Default for KeyValueScanner {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            comment: DEFAULT_COMMENT.to_string(),
            available: None,
            strict: false,
        }
    }
}

impl KeyValueScanner {
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let mut scanner = Self::default();

        if let Some(separator) = settings.get("separator") {
            if separator.is_empty() {
                return Err(SettingsError::InvalidValue {
                    key: "separator".to_string(),
                    value: separator.to_string(),
                    reason: "separator must not be empty".to_string(),
                });
            }
            scanner.separator = separator.to_string();
        }

        if let Some(comment) = settings.get("comment") {
            scanner.comment = comment.to_string();
        }

        if let Some(pattern) = settings.get("available") {
            let regex: Regex = Regex::new(pattern).map_err(|e| SettingsError::InvalidValue {
                key: "available".to_string(),
                value: pattern.to_string(),
                reason: e.to_string(),
            })?;
            scanner.available = Some(regex);
        }

        scanner.strict = settings.get_bool("strict")?.unwrap_or(false);
        Ok(scanner)
    }

    pub fn scan(&self, content: &str) -> Result<ResultMap, ScanError> {
        let mut ast: ResultMap = ResultMap::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no: usize = idx + 1;
            let line: &str = raw_line.trim();

            if line.is_empty() || self.is_comment(line) {
                continue;
            }

            if let Some(available) = &self.available
                && available.is_match(line)
            {
                ast.insert(AVAILABLE_KEY, true);
                continue;
            }

            let Some((key, value)) = line.split_once(self.separator.as_str()) else {
                if self.strict {
                    return Err(ScanError::MissingSeparator {
                        line: line_no,
                        separator: self.separator.clone(),
                    });
                }
                trace!(line = line_no, "skipping line without separator");
                continue;
            };

            let key: &str = key.trim();
            if key.is_empty() {
                if self.strict {
                    return Err(ScanError::EmptyKey { line: line_no });
                }
                warn!(line = line_no, "skipping line with empty key");
                continue;
            }

            let value: &str = value.trim();
            if value.is_empty() {
                if !ast.contains_key(key) {
                    ast.insert(key, Value::Null);
                }
            } else {
                ast.append(key, value);
            }
        }

        Ok(ast)
    }

    fn is_comment(&self, line: &str) -> bool {
        line.starts_with(|c: char| self.comment.contains(c))
    }
}

impl Scanner for KeyValueScanner {
    fn parse(&self, content: &str) -> anyhow::Result<ResultMap> {
        Ok(self.scan(content)?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeyValueFactory;

impl ScannerFactory for KeyValueFactory {
    fn name(&self) -> &str {
        "keyvalue"
    }

    fn build(&self, settings: &Settings) -> Result<Box<dyn Scanner>, SettingsError> {
        Ok(Box::new(KeyValueScanner::from_settings(settings)?))
    }
}
