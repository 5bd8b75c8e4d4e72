//! Niche opportunity cards.
//!
//! A niche is a topic with some traction but not yet crowded: its weight
//! must fall strictly between [`NICHE_MIN_WEIGHT`] and [`NICHE_MAX_WEIGHT`].
//! The selector always returns exactly `limit` cards, padding with
//! `open-niche-{n}` placeholders when real candidates run out.

use chrono::NaiveDate;
use curator_topics::{supporting_signals, topic_weights};
use curator_types::NicheCard;
use curator_types::Signal;
use tracing::debug;

/// Default number of niche cards in a memo.
pub const DEFAULT_NICHE_LIMIT: usize = 5;

/// Exclusive lower weight bound for a niche candidate.
pub const NICHE_MIN_WEIGHT: f64 = 0.6;

/// Exclusive upper weight bound for a niche candidate.
pub const NICHE_MAX_WEIGHT: f64 = 3.0;

/// True when a topic weight falls inside the niche band.
pub fn is_niche_weight(weight: f64) -> bool {
    weight > NICHE_MIN_WEIGHT && weight < NICHE_MAX_WEIGHT
}

/// Build exactly `limit` niche cards from the given signals.
pub fn build_niche_cards(
    signals: &[Signal],
    reference_date: NaiveDate,
    limit: usize,
) -> Vec<NicheCard> {
    let weights = topic_weights(signals, reference_date);
    let mut cards: Vec<NicheCard> = weights
        .ranked()
        .into_iter()
        .filter(|(_, weight)| is_niche_weight(*weight))
        .take(limit)
        .map(|(topic, weight)| {
            let support = supporting_signals(signals, topic);
            niche_card(topic, weight, support.first())
        })
        .collect();

    let real = cards.len();
    while cards.len() < limit {
        cards.push(placeholder_card(cards.len() + 1));
    }
    cards.truncate(limit);

    debug!(
        real,
        placeholders = cards.len().saturating_sub(real),
        "built niche cards"
    );
    cards
}

fn niche_card(topic: &str, weight: f64, sample: Option<&Signal>) -> NicheCard {
    let why_now = match sample {
        Some(_) => format!(
            "Signals show fast uptick over the last quarter (weight {weight:.2}); low competition keywords."
        ),
        None => String::new(),
    };
    let lead_venue = sample
        .map(|s| s.source.clone())
        .unwrap_or_else(|| "Specialized biennales".to_string());

    NicheCard {
        niche: topic.to_string(),
        why_now,
        audience: "Curious publics + curators tracking AI/culture intersections".to_string(),
        venues: vec![
            lead_venue,
            "digital arts labs".to_string(),
            "research-led residencies".to_string(),
        ],
        competition_keywords: vec![topic.to_string(), "emerging format".to_string()],
        differentiation: "Hybrid research-performance with transparency on process".to_string(),
        commissioning_angle: "Links to policy/ethics and community co-creation".to_string(),
        risks: "Signal volatility; shallow evidence".to_string(),
        mitigation: "Prototype quickly; validate with two venue partners".to_string(),
    }
}

fn placeholder_card(position: usize) -> NicheCard {
    NicheCard {
        niche: format!("open-niche-{position}"),
        why_now: "Fill with curator observations".to_string(),
        audience: "TBD".to_string(),
        venues: vec!["open call platforms".to_string()],
        competition_keywords: vec!["experimental".to_string()],
        differentiation: "Sharper framing vs typical lab residencies".to_string(),
        commissioning_angle: "Pairs with civic tech / cultural policy".to_string(),
        risks: "Need stronger evidence".to_string(),
        mitigation: "Collect 2–3 more signals".to_string(),
    }
}
