//! Rewind Games - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{ScriptEvent, UiConfig, replay, tui};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(Command::default_play) {
        Command::Play { config, no_hints } => run_play(config, no_hints),
        Command::Replay { events, json } => run_replay(events, json),
    }
}

/// Run the terminal UI
fn run_play(config_path: PathBuf, no_hints: bool) -> Result<()> {
    let mut config = UiConfig::load_or_default(&config_path)?;
    if no_hints {
        config = config.with_cell_hints(false);
    }
    tui::run_tui(config)
}

/// Run a headless replay and print the report
#[instrument(skip(events), fields(event_count = events.len()))]
fn run_replay(events: Vec<ScriptEvent>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying scripted events");

    let events: Vec<_> = events.into_iter().map(|ScriptEvent(event)| event).collect();
    let report = replay(&events);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
