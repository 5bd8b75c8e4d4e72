//! Signal records and their validation.
//!
//! A signal is one dated input item (a news story, open call or programme
//! announcement). Signals are validated once when the input document is
//! loaded and are never mutated afterwards.
//!
//! ## Input shape
//!
//! ```text
//! [
//!   {
//!     "title": "...",          required
//!     "source": "...",         required
//!     "published_at": "...",   required, ISO-8601 date or datetime
//!     "summary": "...",        required
//!     "url": "...",            optional
//!     "tags": ["...", ...]     optional, lower-cased and trimmed on load
//!   }
//! ]
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CuratorError;

/// Fields every signal record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["published_at", "source", "summary", "title"];

/// A validated, immutable input signal.
///
/// Signals are serialized into the sections dump but never read back;
/// [`parse_signals`] is the only way in from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signal {
    /// Headline of the item
    pub title: String,
    /// Publisher or institution
    pub source: String,
    /// Publication date
    pub published_at: NaiveDate,
    /// Short free-text summary
    pub summary: String,
    /// Link to the original item
    pub url: Option<String>,
    /// Explicit topic tags (lower-case, never empty strings)
    pub tags: Vec<String>,
}

impl Signal {
    /// Create a signal without url or tags.
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        published_at: NaiveDate,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            published_at,
            summary: summary.into(),
            url: None,
            tags: Vec::new(),
        }
    }

    /// Attach explicit tags, normalized the same way as on load.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .filter_map(|t| normalize_tag(t.as_ref()))
            .collect();
        self
    }

    /// Attach a url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Title and summary joined by a single space, the text topics are mined from.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }

    /// Whole days between publication and `reference_date`.
    ///
    /// Negative when the signal is dated after the reference date.
    pub fn age_days(&self, reference_date: NaiveDate) -> i64 {
        (reference_date - self.published_at).num_days()
    }
}

/// Parse and validate a JSON document holding an array of signal objects.
pub fn parse_signals(json: &str) -> Result<Vec<Signal>, CuratorError> {
    let document: Value = serde_json::from_str(json)?;
    signals_from_value(document)
}

/// Validate an already-parsed JSON document.
///
/// Fails on the first malformed record; no partial result is returned.
pub fn signals_from_value(document: Value) -> Result<Vec<Signal>, CuratorError> {
    let Value::Array(items) = document else {
        return Err(CuratorError::InvalidInput(
            "signals document must contain a JSON array of signal objects".to_string(),
        ));
    };

    let mut signals = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(record) = item else {
            return Err(CuratorError::malformed(index, "is not an object"));
        };
        signals.push(signal_from_record(index, record)?);
    }

    tracing::debug!(count = signals.len(), "validated signals");
    Ok(signals)
}

fn signal_from_record(index: usize, record: &Map<String, Value>) -> Result<Signal, CuratorError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| record.get(*field).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(CuratorError::malformed(
            index,
            format!("missing required fields: {}", missing.join(", ")),
        ));
    }

    let title = required_text(index, record, "title")?;
    let source = required_text(index, record, "source")?;
    let summary = required_text(index, record, "summary")?;
    let raw_date = required_text(index, record, "published_at")?;
    let published_at = parse_date(&raw_date)
        .ok_or_else(|| CuratorError::malformed(index, format!("has invalid ISO date: {raw_date}")))?;

    let url = match record.get("url") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let text = scalar_text(value)
                .ok_or_else(|| CuratorError::malformed(index, "field `url` must be a string"))?;
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
    };

    let tags = match record.get("tags") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => {
            let mut tags = Vec::with_capacity(values.len());
            for value in values {
                let text = scalar_text(value).ok_or_else(|| {
                    CuratorError::malformed(index, "field `tags` must only hold strings")
                })?;
                tags.extend(normalize_tag(&text));
            }
            tags
        }
        Some(_) => {
            return Err(CuratorError::malformed(
                index,
                "field `tags` must be an array",
            ))
        }
    };

    Ok(Signal {
        title,
        source,
        published_at,
        summary,
        url,
        tags,
    })
}

fn required_text(
    index: usize,
    record: &Map<String, Value>,
    field: &str,
) -> Result<String, CuratorError> {
    let value = record
        .get(field)
        .and_then(scalar_text)
        .ok_or_else(|| CuratorError::malformed(index, format!("field `{field}` must be a string")))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CuratorError::malformed(index, format!("has blank `{field}`")));
    }
    Ok(trimmed.to_string())
}

/// Strings pass through; numbers and booleans are rendered as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

/// Parse an ISO-8601 date, or the date part of an ISO-8601 datetime.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
