//! Curator CLI library exports.
//!
//! This crate provides the `curator` binary.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (memo, topics, settings)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    generate_memo, init_tracing, load_settings, load_signals, resolve_preferences, show_settings,
    show_topics,
};
