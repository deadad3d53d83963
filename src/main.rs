use clap::Parser;
use colored::Colorize;

use pomogo::cli::args::{Cli, Commands, TimerArgs};
use pomogo::cli::commands;
use pomogo::config::Config;
use pomogo::error::PomogoError;
use pomogo::timer::JsonHistoryStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomogoError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        None => commands::timer(TimerArgs::default(), &config)?,
        Some(Commands::Timer(args)) => commands::timer(args, &config)?,
        Some(Commands::History { limit }) => {
            let store = JsonHistoryStore::new()?;
            commands::history(&store, limit, format)?
        }
        Some(Commands::Export { output_file }) => {
            let store = JsonHistoryStore::new()?;
            commands::export(&store, output_file, format)?
        }
        Some(Commands::Clear { force }) => {
            let store = JsonHistoryStore::new()?;
            commands::clear(&store, force)?
        }
        Some(Commands::Social { platform }) => commands::social(&platform, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
