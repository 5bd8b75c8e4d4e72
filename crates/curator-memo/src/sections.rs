//! Memo assembly.
//!
//! Runs the whole pipeline over one batch of signals and collects the
//! structured result that the renderer consumes.

use chrono::NaiveDate;
use curator_topics::{horizon_split, select_top_topics};
use curator_types::{NicheCard, Preferences, ProjectIdea, Signal, TopicMomentum};
use serde::Serialize;
use tracing::info;

use crate::niche::{build_niche_cards, DEFAULT_NICHE_LIMIT};
use crate::projects::recommend_projects;

/// Topics ranked for the 90-day window.
pub const HOT_TOPIC_LIMIT: usize = 10;

/// Topics ranked for the 1-year window.
pub const THEME_LIMIT: usize = 8;

/// Topics ranked for the 3-year window.
pub const MACRO_SHIFT_LIMIT: usize = 6;

/// Structured result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoSections {
    /// Date all ages were measured against
    pub reference_date: NaiveDate,
    /// Signals no older than 90 days, in input order
    pub hot_signals: Vec<Signal>,
    /// Top topics of the 90-day window
    pub hot_topics: Vec<TopicMomentum>,
    /// Top topics of the 1-year window
    pub themes: Vec<TopicMomentum>,
    /// Top topics of the 3-year window
    pub macro_shifts: Vec<TopicMomentum>,
    /// Exactly five niche cards from the 1-year window
    pub niche_cards: Vec<NicheCard>,
    /// Micro, Mid and Large project ideas
    pub projects: Vec<ProjectIdea>,
}

impl MemoSections {
    /// The project the pitch is written for.
    pub fn lead_project(&self) -> Option<&ProjectIdea> {
        self.projects.first()
    }
}

/// Build every memo section from validated signals.
///
/// Projects are drawn from the themes, falling back to macro shifts and then
/// hot topics when a window has no topics.
pub fn build_sections(
    signals: &[Signal],
    reference_date: NaiveDate,
    preferences: &Preferences,
) -> MemoSections {
    let horizons = horizon_split(signals, reference_date);

    let hot_topics = select_top_topics(&horizons.recent, reference_date, HOT_TOPIC_LIMIT);
    let themes = select_top_topics(&horizons.year, reference_date, THEME_LIMIT);
    let macro_shifts = select_top_topics(&horizons.long, reference_date, MACRO_SHIFT_LIMIT);
    let niche_cards = build_niche_cards(&horizons.year, reference_date, DEFAULT_NICHE_LIMIT);

    let project_topics = [&themes, &macro_shifts, &hot_topics]
        .into_iter()
        .find(|topics| !topics.is_empty())
        .map(Vec::as_slice)
        .unwrap_or_default();
    let projects = recommend_projects(project_topics, preferences);

    info!(
        signals = signals.len(),
        %reference_date,
        themes = themes.len(),
        macro_shifts = macro_shifts.len(),
        "assembled memo sections"
    );

    MemoSections {
        reference_date,
        hot_signals: horizons.recent,
        hot_topics,
        themes,
        macro_shifts,
        niche_cards,
        projects,
    }
}
