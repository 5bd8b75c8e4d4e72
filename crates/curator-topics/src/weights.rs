//! Recency-decayed topic weighting.
//!
//! Every signal contributes a recency factor to each of its topics:
//!
//! ```text
//! recency_factor = 1 / (1 + age_days / 30)
//! ```
//!
//! A 30-day-old signal counts half as much as one published on the
//! reference date. Future-dated signals count more than 1. The formula has a
//! pole at `age_days = -30` and turns negative beyond it, so for
//! `age_days <= -30` the factor is capped at [`MAX_RECENCY_FACTOR`], the
//! value reached at -29 days.

use std::collections::HashMap;

use chrono::NaiveDate;
use curator_types::Signal;
use tracing::{debug, warn};

use crate::tokenize::signal_topics;

/// Days over which a signal's influence halves.
pub const RECENCY_HALF_DAYS: f64 = 30.0;

/// Upper bound on a single signal's recency factor.
pub const MAX_RECENCY_FACTOR: f64 = 30.0;

/// Recency factor for a signal of the given age.
pub fn recency_factor(age_days: i64) -> f64 {
    let denominator = 1.0 + age_days as f64 / RECENCY_HALF_DAYS;
    if denominator <= 0.0 {
        return MAX_RECENCY_FACTOR;
    }
    (1.0 / denominator).min(MAX_RECENCY_FACTOR)
}

/// Accumulated topic weights in first-seen order.
///
/// Iteration and ranking ties follow the order in which each topic was
/// first encountered while walking the signals.
#[derive(Debug, Clone, Default)]
pub struct TopicWeights {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl TopicWeights {
    /// Create an empty weight table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `topic`, registering it on first sight.
    pub fn add(&mut self, topic: &str, amount: f64) {
        match self.index.get(topic) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(topic.to_string(), self.entries.len());
                self.entries.push((topic.to_string(), amount));
            }
        }
    }

    /// Weight of a topic, if it has been seen.
    pub fn get(&self, topic: &str) -> Option<f64> {
        self.index.get(topic).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct topics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no topic has been seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Topics and weights in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, w)| (name.as_str(), *w))
    }

    /// Topics sorted by descending weight; equal weights keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut items: Vec<(&str, f64)> = self.iter().collect();
        items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        items
    }
}

/// Compute recency-decayed weights for every topic across `signals`.
pub fn topic_weights(signals: &[Signal], reference_date: NaiveDate) -> TopicWeights {
    let mut weights = TopicWeights::new();
    for signal in signals {
        let age = signal.age_days(reference_date);
        if age <= -(RECENCY_HALF_DAYS as i64) {
            warn!(
                title = %signal.title,
                age_days = age,
                "signal dated far in the future; recency factor capped"
            );
        }
        let factor = recency_factor(age);
        for topic in signal_topics(signal) {
            weights.add(&topic, factor);
        }
    }
    debug!(
        signals = signals.len(),
        topics = weights.len(),
        "computed topic weights"
    );
    weights
}
