use std::path::Path;

use astview_common::{Config, Value};
use astview_core::{LookupError, Scannable};
use colored::*;
use rayon::prelude::*;
use tracing::debug;

use crate::commands;
use crate::terminal::print;

type Lookup<'a> = (&'a str, Result<Option<String>, LookupError>);

pub fn get(file: &Path, keys: &[String], length: bool, cfg: &Config) -> anyhow::Result<()> {
    let whois: Scannable = commands::open(file, cfg)?;
    let keys_found: usize = whois.ensure_parsed()?.len();
    debug!("{keys_found} keys available in {}", file.display());

    let lookups: Vec<Lookup<'_>> = keys
        .par_iter()
        .map(|key| {
            let value = if length {
                whois.node_with(key, |v| v.len().to_string())
            } else {
                whois.node_with(key, Value::to_string)
            };
            (key.as_str(), value)
        })
        .collect();

    let width: usize = keys.iter().map(|k| k.chars().count()).max().unwrap_or(0);
    print::set_key_width(width);

    let mut missing: usize = 0;
    for (key, result) in lookups {
        match result? {
            Some(value) => print_value(key, value, cfg),
            None => {
                missing += 1;
                print_missing(key, cfg);
            }
        }
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        let resolved: ColoredString = format!("{}", keys.len() - missing).green().bold();
        let total: ColoredString = format!("{}", keys.len()).bold();
        print::print_status(format!("Resolved {resolved} of {total} keys"));
    }
    Ok(())
}

fn print_value(key: &str, value: String, cfg: &Config) {
    match cfg.quiet {
        0 => print::aligned_line(key, value),
        _ => print::print(&value),
    }
}

fn print_missing(key: &str, cfg: &Config) {
    match cfg.quiet {
        0 => print::aligned_line(key, "not found".red()),
        _ => print::print(""),
    }
}
