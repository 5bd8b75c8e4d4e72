//! CLI argument parsing for the curator binary.
//!
//! CLI flags override all other config sources.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use curator_topics::Horizon;

/// Curatorial Opportunity Memo generator
///
/// Ranks topics in a batch of dated signals by recency-weighted momentum and
/// turns them into niche cards and scaled project recommendations.
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ~/.config/curator-memo/config.toml and ./curator.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Curator commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the Markdown memo from a signals file
    Memo {
        /// JSON file containing an array of signals
        signals: PathBuf,

        /// Where to write the Markdown memo
        output: PathBuf,

        /// Override today's date (ISO format)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<NaiveDate>,

        /// Also write the structured sections as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Override the configured geography
        #[arg(long)]
        geography: Option<String>,

        /// Override the configured medium focus (repeatable)
        #[arg(long = "medium")]
        medium: Vec<String>,
    },

    /// Print the ranked topics of one horizon
    Topics {
        /// JSON file containing an array of signals
        signals: PathBuf,

        /// Override today's date (ISO format)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<NaiveDate>,

        /// Horizon to rank: 90d, 1y or 3y
        #[arg(long, default_value = "1y", value_parser = parse_horizon)]
        horizon: Horizon,

        /// Maximum topics to print
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Print the effective settings as TOML
    Settings,
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {value:?}: {e}"))
}

fn parse_horizon(value: &str) -> Result<Horizon, String> {
    Horizon::from_label(value).ok_or_else(|| format!("unknown horizon {value:?} (use 90d, 1y or 3y)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memo_command() {
        let cli = Cli::parse_from([
            "curator",
            "memo",
            "signals.json",
            "memo.md",
            "--today",
            "2024-06-30",
            "--medium",
            "Sound",
            "--medium",
            "XR",
        ]);
        match cli.command {
            Commands::Memo {
                signals,
                output,
                today,
                medium,
                json,
                geography,
            } => {
                assert_eq!(signals, PathBuf::from("signals.json"));
                assert_eq!(output, PathBuf::from("memo.md"));
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 6, 30));
                assert_eq!(medium, vec!["Sound", "XR"]);
                assert!(json.is_none());
                assert!(geography.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_topics_defaults() {
        let cli = Cli::parse_from(["curator", "topics", "signals.json"]);
        match cli.command {
            Commands::Topics { horizon, limit, today, .. } => {
                assert_eq!(horizon, Horizon::Year);
                assert_eq!(limit, 10);
                assert!(today.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["curator", "settings", "--config", "x.toml", "-l", "debug"]);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_bad_date_and_horizon() {
        assert!(Cli::try_parse_from(["curator", "topics", "s.json", "--today", "30/06/2024"]).is_err());
        assert!(Cli::try_parse_from(["curator", "topics", "s.json", "--horizon", "5y"]).is_err());
    }
}
