use std::path::Path;

use anyhow::Context;
use astview_common::{Config, ResultMap};
use colored::*;

use crate::commands;
use crate::terminal::print;

pub fn dump(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let whois = commands::open(file, cfg)?;
    let ast: &ResultMap = whois.ensure_parsed()?;
    let json: String = serde_json::to_string_pretty(ast).context("serializing scanner output")?;

    print::print(&json);

    if cfg.quiet == 0 {
        print::fat_separator();
        let count: ColoredString = format!("{} keys", ast.len()).green().bold();
        let scanner: &str = whois
            .scanner()
            .map(|descriptor| descriptor.factory().name())
            .unwrap_or(cfg.scanner.as_str());
        print::print_status(format!("Scanned {count} with `{scanner}`"));
    }
    Ok(())
}
