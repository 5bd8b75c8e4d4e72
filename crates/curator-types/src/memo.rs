//! Derived memo records.
//!
//! Everything here is computed fresh for each pipeline run from
//! (signals, reference date, preferences) and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::signal::Signal;

/// A topic with its recency-weighted momentum and supporting signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicMomentum {
    /// Normalized topic name (tag or token)
    pub name: String,
    /// Momentum, rounded to 2 decimal places
    pub weight: f64,
    /// Signals mentioning the topic, in input order
    pub signals: Vec<Signal>,
}

impl TopicMomentum {
    /// Create a topic record, rounding `weight` to 2 decimal places.
    pub fn new(name: impl Into<String>, weight: f64, signals: Vec<Signal>) -> Self {
        Self {
            name: name.into(),
            weight: round2(weight),
            signals,
        }
    }

    /// Weight formatted for prose, always with a fractional part (`1.0`, `2.33`).
    pub fn display_weight(&self) -> String {
        format_weight(self.weight)
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a weight the way it appears in memo prose.
///
/// Whole numbers keep one fractional digit so `2` reads as `2.0`.
pub fn format_weight(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// An opportunity brief for a moderately weighted topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheCard {
    /// Topic name, or `open-niche-{n}` for placeholders
    pub niche: String,
    pub why_now: String,
    pub audience: String,
    pub venues: Vec<String>,
    pub competition_keywords: Vec<String>,
    pub differentiation: String,
    pub commissioning_angle: String,
    pub risks: String,
    pub mitigation: String,
}

impl NicheCard {
    /// True for cards padded in when real candidates ran out.
    pub fn is_placeholder(&self) -> bool {
        self.niche.starts_with("open-niche-")
    }
}

/// Production scale of a project idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    Micro,
    Mid,
    Large,
}

impl Scale {
    /// All scales in recommendation order.
    pub const ALL: [Scale; 3] = [Scale::Micro, Scale::Mid, Scale::Large];
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Micro => write!(f, "Micro"),
            Scale::Mid => write!(f, "Mid"),
            Scale::Large => write!(f, "Large"),
        }
    }
}

/// A scored production concept at one scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub scale: Scale,
    pub title: String,
    pub hook: String,
    pub medium_format: String,
    pub duration_footprint: String,
    pub why_now: String,
    pub production_needs: String,
    pub target_venues: Vec<String>,
    pub promo_angle: String,
    /// Composite score in `0..=100`
    pub score: u8,
    /// Always four bullet strings
    pub score_rationale: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_momentum_rounds_weight() {
        let topic = TopicMomentum::new("opera", 2.0 / 3.0, Vec::new());
        assert!((topic.weight - 0.67).abs() < 1e-9);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(2.0), "2.0");
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(2.33), "2.33");
        assert_eq!(format_weight(0.0), "0.0");
    }

    #[test]
    fn test_scale_display_and_order() {
        let names: Vec<String> = Scale::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["Micro", "Mid", "Large"]);
    }

    #[test]
    fn test_placeholder_card_detection() {
        let card = NicheCard {
            niche: "open-niche-3".to_string(),
            why_now: String::new(),
            audience: String::new(),
            venues: Vec::new(),
            competition_keywords: Vec::new(),
            differentiation: String::new(),
            commissioning_angle: String::new(),
            risks: String::new(),
            mitigation: String::new(),
        };
        assert!(card.is_placeholder());
    }
}
