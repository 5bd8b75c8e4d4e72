//! Configuration loading for the curator.
//!
//! Layered config: defaults -> user config dir -> working directory ->
//! `--config` file -> `CURATOR__*` env vars -> CLI flags (applied by caller).
//!
//! Only `preferences.medium_focus`, `preferences.geography` and `log_level`
//! are read; any other key in a config file is ignored.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CuratorError;

/// Medium focus used when no preference is configured.
pub const DEFAULT_MEDIUM_FOCUS: &str = "performance + audiovisual + archive sampling";

/// Geography used when no preference is configured.
pub const DEFAULT_GEOGRAPHY: &str = "global";

/// Curatorial preferences that shape project recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred media, e.g. `["Performance", "Sound"]`
    #[serde(default)]
    pub medium_focus: Vec<String>,

    /// Region the projects should play in
    #[serde(default)]
    pub geography: Option<String>,
}

impl Preferences {
    /// Medium focus as prose: configured media lower-cased and joined with
    /// `" / "`, or [`DEFAULT_MEDIUM_FOCUS`] when none are set.
    pub fn medium_focus_label(&self) -> String {
        if self.medium_focus.is_empty() {
            return DEFAULT_MEDIUM_FOCUS.to_string();
        }
        self.medium_focus
            .iter()
            .map(|m| m.to_lowercase())
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Geography as prose, or [`DEFAULT_GEOGRAPHY`] when unset or blank.
    pub fn geography_label(&self) -> String {
        match self.geography.as_deref().map(str::trim) {
            Some(geo) if !geo.is_empty() => geo.to_string(),
            _ => DEFAULT_GEOGRAPHY.to_string(),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.medium_focus.iter().any(|m| m.trim().is_empty()) {
            return Err("medium_focus entries must not be blank".to_string());
        }
        Ok(())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Preferences consulted by the project recommender
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            preferences: Preferences::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. User config file (e.g. ~/.config/curator-memo/config.toml)
    /// 3. `curator.{toml,yaml,json}` in the working directory
    /// 4. CLI-specified config file (optional, must exist when given)
    /// 5. Environment variables (`CURATOR__PREFERENCES__GEOGRAPHY`, ...)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CuratorError> {
        let config_dir = ProjectDirs::from("", "", "curator-memo")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| CuratorError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false))
            .add_source(File::with_name("curator").required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("CURATOR")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("preferences.medium_focus")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| CuratorError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| CuratorError::Config(e.to_string()))?;

        settings.preferences.validate().map_err(CuratorError::Config)?;

        tracing::debug!(
            config = cli_config_path.unwrap_or("<none>"),
            "settings loaded"
        );
        Ok(settings)
    }
}
