//! Command implementations.
//!
//! File and clock access lives here; everything handed to the memo
//! pipeline is already loaded, validated and resolved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use curator_memo::{build_sections, finalize_document, render_memo, MemoSections};
use curator_topics::{horizon_split, select_top_topics, Horizon};
use curator_types::{parse_signals, Preferences, Settings, Signal};
use tracing::info;

/// Load settings and apply CLI overrides (highest precedence).
pub fn load_settings(config_path: Option<&str>, log_level: Option<&str>) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(level) = log_level {
        settings.log_level = level.to_string();
    }
    Ok(settings)
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Read and validate a signals file.
pub fn load_signals(path: &Path) -> Result<Vec<Signal>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading signals from {}", path.display()))?;
    let signals =
        parse_signals(&text).with_context(|| format!("invalid signals in {}", path.display()))?;
    info!(count = signals.len(), path = %path.display(), "loaded signals");
    Ok(signals)
}

/// Reference date: the override if given, otherwise today's local date.
pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Preferences from settings with `--geography` / `--medium` applied.
pub fn resolve_preferences(
    settings: &Settings,
    geography: Option<String>,
    medium: Vec<String>,
) -> Preferences {
    let mut preferences = settings.preferences.clone();
    if geography.is_some() {
        preferences.geography = geography;
    }
    if !medium.is_empty() {
        preferences.medium_focus = medium;
    }
    preferences
}

/// Write a document, trimming trailing whitespace and ending with one newline.
pub fn save_memo(memo: &str, output: &Path) -> Result<()> {
    fs::write(output, finalize_document(memo))
        .with_context(|| format!("writing memo to {}", output.display()))
}

/// Generate the memo and write it (and optionally the JSON sections) to disk.
pub fn generate_memo(
    signals_path: &Path,
    output: &Path,
    today: Option<NaiveDate>,
    json_output: Option<&Path>,
    preferences: &Preferences,
) -> Result<MemoSections> {
    preferences
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid preferences")?;

    let signals = load_signals(signals_path)?;
    let reference_date = resolve_today(today);
    let sections = build_sections(&signals, reference_date, preferences);

    save_memo(&render_memo(&sections), output)?;
    info!(path = %output.display(), "wrote memo");

    if let Some(json_path) = json_output {
        let json = serde_json::to_string_pretty(&sections).context("serializing sections")?;
        fs::write(json_path, json + "\n")
            .with_context(|| format!("writing sections to {}", json_path.display()))?;
        info!(path = %json_path.display(), "wrote sections json");
    }

    Ok(sections)
}

/// Ranked topics of one horizon as printable lines.
pub fn topic_report(
    signals: &[Signal],
    reference_date: NaiveDate,
    horizon: Horizon,
    limit: usize,
) -> Vec<String> {
    let split = horizon_split(signals, reference_date);
    let window = split.window(horizon);
    let mut lines = vec![format!(
        "Top topics ({}, {} signals, as of {}):",
        horizon.label(),
        window.len(),
        reference_date
    )];
    for (rank, topic) in select_top_topics(window, reference_date, limit)
        .iter()
        .enumerate()
    {
        lines.push(format!(
            "{:>3}. {} (momentum {}, {} signals)",
            rank + 1,
            topic.name,
            topic.display_weight(),
            topic.signals.len()
        ));
    }
    lines
}

/// Print the ranked topics of one horizon to stdout.
pub fn show_topics(
    signals_path: &Path,
    today: Option<NaiveDate>,
    horizon: Horizon,
    limit: usize,
) -> Result<()> {
    let signals = load_signals(signals_path)?;
    for line in topic_report(&signals, resolve_today(today), horizon, limit) {
        println!("{line}");
    }
    Ok(())
}

/// Print the effective settings as TOML.
pub fn show_settings(settings: &Settings) -> Result<()> {
    let text = toml::to_string_pretty(settings).context("serializing settings")?;
    print!("{text}");
    Ok(())
}
