use crate::settings::Settings;

/// Scanner used when none is named on the command line.
pub const DEFAULT_SCANNER: &str = "keyvalue";

#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier of the scanner that turns the input into a [`crate::ResultMap`].
    pub scanner: String,
    /// Forwarded to the scanner factory without inspection.
    pub settings: Settings,
    /// `0` prints headers and aligned `key: value` lines, anything higher prints bare values.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: DEFAULT_SCANNER.to_string(),
            settings: Settings::default(),
            quiet: 0,
        }
    }
}
