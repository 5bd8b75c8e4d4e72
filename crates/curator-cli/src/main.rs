//! Curator
//!
//! Turns a batch of dated art-world signals into a Curatorial Opportunity Memo.
//!
//! # Usage
//!
//! ```bash
//! curator memo signals.json memo.md [--today 2024-06-30] [--json sections.json]
//! curator topics signals.json [--horizon 1y] [--limit 10]
//! curator settings
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/curator-memo/config.toml)
//! 3. ./curator.toml (or .yaml / .json)
//! 4. --config file
//! 5. Environment variables (CURATOR__*)
//! 6. CLI flags

use anyhow::Result;
use clap::Parser;

use curator_cli::{
    generate_memo, init_tracing, load_settings, resolve_preferences, show_settings, show_topics,
    Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref(), cli.log_level.as_deref())?;
    init_tracing(&settings.log_level)?;

    match cli.command {
        Commands::Memo {
            signals,
            output,
            today,
            json,
            geography,
            medium,
        } => {
            let preferences = resolve_preferences(&settings, geography, medium);
            generate_memo(&signals, &output, today, json.as_deref(), &preferences)?;
            println!("Memo written to {}", output.display());
        }
        Commands::Topics {
            signals,
            today,
            horizon,
            limit,
        } => {
            show_topics(&signals, today, horizon, limit)?;
        }
        Commands::Settings => {
            show_settings(&settings)?;
        }
    }

    Ok(())
}
