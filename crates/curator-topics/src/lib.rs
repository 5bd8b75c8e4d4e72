//! # curator-topics
//!
//! Topic momentum for the curatorial memo pipeline.
//!
//! Free text is tokenized into topics, topics accumulate a recency-decayed
//! weight across signals, signals are split into nested time horizons, and
//! each horizon's topics are ranked by momentum.
//!
//! ## Features
//! - Stop-word filtered tokenization of titles and summaries
//! - Explicit tags take precedence over mined tokens
//! - Recency decay `1 / (1 + age/30)`, capped for far-future dates
//! - 90-day / 1-year / 3-year horizons
//! - Deterministic first-seen tie-breaking

pub mod horizon;
pub mod ranking;
pub mod tokenize;
pub mod weights;

pub use horizon::{horizon_split, Horizon, HorizonSplit};
pub use ranking::{select_top_topics, supporting_signals};
pub use tokenize::{is_stop_word, mentions, signal_topics, tokenize};
pub use weights::{recency_factor, topic_weights, TopicWeights, MAX_RECENCY_FACTOR};
