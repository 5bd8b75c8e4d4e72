//! Top-N topic selection.

use chrono::NaiveDate;
use curator_types::{Signal, TopicMomentum};
use tracing::debug;

use crate::tokenize::mentions;
use crate::weights::topic_weights;

/// Signals that mention `topic`, in input order.
pub fn supporting_signals(signals: &[Signal], topic: &str) -> Vec<Signal> {
    signals
        .iter()
        .filter(|s| mentions(s, topic))
        .cloned()
        .collect()
}

/// Rank topics by momentum and return at most `limit` of them.
///
/// Ranking uses the unrounded weights; equal weights keep first-seen order.
/// The returned weights are rounded to 2 decimal places.
pub fn select_top_topics(
    signals: &[Signal],
    reference_date: NaiveDate,
    limit: usize,
) -> Vec<TopicMomentum> {
    let weights = topic_weights(signals, reference_date);
    let top: Vec<TopicMomentum> = weights
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(name, weight)| {
            TopicMomentum::new(name, weight, supporting_signals(signals, name))
        })
        .collect();
    debug!(
        candidates = weights.len(),
        selected = top.len(),
        limit,
        "selected top topics"
    );
    top
}
