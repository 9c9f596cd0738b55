pub mod dump;
pub mod exists;
pub mod get;

use std::path::{Path, PathBuf};

use astview_common::config::DEFAULT_SCANNER;
use astview_common::{Config, Settings, SettingsError};
use astview_core::{FileSource, Scannable, ScannerDescriptor};
use astview_scanners::registry;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "astview")]
#[command(about = "Fuzzy key lookups over scanned text records.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Scanner used to parse the input
    #[arg(short, long, global = true, default_value = DEFAULT_SCANNER)]
    pub scanner: String,

    /// Scanner setting, may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE", global = true, value_parser = parse_setting)]
    pub settings: Vec<(String, String)>,

    /// Print bare values only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show scanner diagnostics (-vv for key resolution traces)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one or more keys, exactly or fuzzily
    #[command(alias = "g")]
    Get {
        file: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the length of each value instead of the value
        #[arg(long)]
        length: bool,
    },
    /// Check whether a key exists verbatim
    #[command(alias = "e")]
    Exists { file: PathBuf, key: String },
    /// Print everything the scanner produced as JSON
    #[command(alias = "d")]
    Dump { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            scanner: self.scanner.clone(),
            settings: self.settings.iter().cloned().collect(),
            quiet: self.quiet,
        }
    }
}

fn parse_setting(s: &str) -> Result<(String, String), SettingsError> {
    Settings::parse_pair(s)
}

/// Wraps `file` in a facade using the configured scanner. Nothing is read yet.
pub fn open(file: &Path, cfg: &Config) -> anyhow::Result<Scannable> {
    let scanner: ScannerDescriptor = registry::descriptor(&cfg.scanner, cfg.settings.clone())?;
    Ok(Scannable::new(scanner, FileSource::new(file)))
}
