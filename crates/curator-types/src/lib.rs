//! # curator-types
//!
//! Shared domain types for the curatorial memo pipeline.
//!
//! This crate defines the core data structures used throughout the system:
//! - Signals: Validated, immutable input items
//! - Memo records: Topic momentum, niche cards and project ideas
//! - Settings: Layered configuration and curatorial preferences
//!
//! ## Usage
//!
//! ```rust
//! use curator_types::parse_signals;
//!
//! let json = r#"[{"title": "Sound walk premiere", "source": "Festival",
//!                 "published_at": "2024-05-01", "summary": "Coastal listening"}]"#;
//! let signals = parse_signals(json).unwrap();
//! assert_eq!(signals[0].source, "Festival");
//! ```

pub mod config;
pub mod error;
pub mod memo;
pub mod signal;

pub use config::{Preferences, Settings, DEFAULT_GEOGRAPHY, DEFAULT_MEDIUM_FOCUS};
pub use error::CuratorError;
pub use memo::{format_weight, round2, NicheCard, ProjectIdea, Scale, TopicMomentum};
pub use signal::{parse_date, parse_signals, signals_from_value, Signal, REQUIRED_FIELDS};
