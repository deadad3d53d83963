use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Theme;

#[derive(Parser)]
#[command(name = "pomogo")]
#[command(about = "A Pomodoro session timer for the terminal")]
#[command(long_about = "pomogo - A Pomodoro session timer for the terminal

Run a 25-minute topic-labeled countdown, record every completed session
to an append-only history, and export the history for use elsewhere.

QUICK START:
  pomogo                    Open the interactive timer
  pomogo history            Show recorded sessions
  pomogo export             Write the history to pomogo-history.json

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomogo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive timer
    ///
    /// Opens the full-screen countdown. Type a topic, press Enter to
    /// start; a session is recorded only when the countdown runs all the
    /// way to zero.
    ///
    /// # Keys
    ///
    ///   Enter     start, or resume while paused
    ///   p         pause (while running)
    ///   x         stop and reset while running or paused (nothing is recorded)
    ///   q/Esc     quit
    ///
    /// # Examples
    ///
    ///   pomogo timer
    ///   pomogo timer --theme light
    ///   pomogo timer --minutes 50
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Show recorded sessions
    ///
    /// Lists completed sessions, oldest first, with date, start time,
    /// duration, and topic.
    ///
    /// # Examples
    ///
    ///   pomogo history
    ///   pomogo history --limit 10
    ///   pomogo history -o json
    #[command(alias = "h")]
    History {
        /// Maximum number of sessions to show (most recent)
        #[arg(long, short = 'l')]
        limit: Option<usize>,
    },

    /// Export the session history to a file
    ///
    /// Writes the history as JSON, byte-for-byte identical to the stored
    /// layout, so the exported file can stand in for the history file.
    ///
    /// # Examples
    ///
    ///   pomogo export
    ///   pomogo export --output-file sessions.json
    #[command(alias = "e")]
    Export {
        /// Destination path (default: pomogo-history.json)
        #[arg(long, short = 'f', value_name = "PATH")]
        output_file: Option<std::path::PathBuf>,
    },

    /// Delete all recorded sessions
    ///
    /// Requires --force; there is no undo.
    Clear {
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },

    /// Open a social profile in the browser
    ///
    /// # Examples
    ///
    ///   pomogo social github
    ///   pomogo social x
    Social {
        /// Platform name (github, x, discord, threads, email)
        platform: String,
    },
}

/// Arguments for the interactive timer.
#[derive(clap::Args, Default)]
pub struct TimerArgs {
    /// Countdown length in minutes (overrides config)
    #[arg(long, short = 'm', value_parser = clap::value_parser!(u32).range(1..=1440))]
    pub minutes: Option<u32>,

    /// Color theme (overrides config)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_timer() {
        let cli = Cli::try_parse_from(["pomogo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_history_with_limit() {
        let cli = Cli::try_parse_from(["pomogo", "history", "--limit", "5"]).unwrap();
        match cli.command {
            Some(Commands::History { limit }) => assert_eq!(limit, Some(5)),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_timer_alias_and_flags() {
        let cli = Cli::try_parse_from(["pomogo", "t", "--minutes", "50", "--theme", "light"]).unwrap();
        match cli.command {
            Some(Commands::Timer(args)) => {
                assert_eq!(args.minutes, Some(50));
                assert_eq!(args.theme, Some(Theme::Light));
            }
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_timer_minutes_range() {
        assert!(Cli::try_parse_from(["pomogo", "timer", "--minutes", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomogo", "timer", "--minutes", "1441"]).is_err());
        assert!(Cli::try_parse_from(["pomogo", "timer", "--minutes", "1"]).is_ok());
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["pomogo", "history", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_export_path() {
        let cli = Cli::try_parse_from(["pomogo", "export", "-f", "out.json"]).unwrap();
        match cli.command {
            Some(Commands::Export { output_file }) => {
                assert_eq!(output_file, Some(std::path::PathBuf::from("out.json")));
            }
            _ => panic!("Expected Export command"),
        }
    }
}
