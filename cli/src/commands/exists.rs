use std::path::Path;

use astview_common::Config;
use colored::*;

use crate::commands;
use crate::terminal::print;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_MISSING: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// Exit status for an existence check. Errors get their own code so scripts can tell
/// "absent" from "could not look".
pub fn status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => EXIT_FOUND,
        Ok(false) => EXIT_MISSING,
        Err(_) => EXIT_ERROR,
    }
}

/// Prints whether `key` exists verbatim and returns the answer.
pub fn exists(file: &Path, key: &str, cfg: &Config) -> anyhow::Result<bool> {
    let whois = commands::open(file, cfg)?;
    let found: bool = whois.node_exists(key)?;

    match cfg.quiet {
        0 => {
            print::set_key_width(key.chars().count());
            let answer: ColoredString = if found { "yes".green() } else { "no".red() };
            print::aligned_line(key, answer);
        }
        _ => print::print(if found { "yes" } else { "no" }),
    }
    Ok(found)
}
