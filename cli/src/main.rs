mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, dump, exists, get};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();

    match commands.command {
        Commands::Get { file, keys, length } => {
            print::header("key lookup", cfg.quiet);
            get::get(&file, &keys, length, &cfg)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exists { file, key } => {
            print::header("existence check", cfg.quiet);
            let result = exists::exists(&file, &key, &cfg);
            if let Err(e) = &result {
                tracing::error!("{e:#}");
            }
            Ok(ExitCode::from(exists::status(&result)))
        }
        Commands::Dump { file } => {
            print::header("scanner output", cfg.quiet);
            dump::dump(&file, &cfg)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
