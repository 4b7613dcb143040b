//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use rewind_games::ScriptEvent;
use std::path::PathBuf;

/// Default location of the optional config file.
pub const DEFAULT_CONFIG: &str = "rewind_games.toml";

/// Rewind Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with a browsable, rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Hide the 1-9 key hints in empty cells
        #[arg(long)]
        no_hints: bool,
    },

    /// Replay a script of events without a terminal UI
    ///
    /// Each token is a cell index (0-8) to play, or @STEP to select a
    /// history entry, e.g. `replay 0 3 1 @1 8`.
    Replay {
        /// Events to apply, in order
        events: Vec<ScriptEvent>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// The command run when none is given.
    pub fn default_play() -> Self {
        Command::Play {
            config: PathBuf::from(DEFAULT_CONFIG),
            no_hints: false,
        }
    }
}
