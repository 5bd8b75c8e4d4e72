//! Horizon segmentation.
//!
//! Signals are bucketed into three nested windows by age relative to the
//! reference date. A signal can sit in several windows; future-dated
//! signals (negative age) sit in all three.

use chrono::NaiveDate;
use curator_types::Signal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum age in days of the "hot signals" window.
pub const RECENT_DAYS: i64 = 90;

/// Maximum age in days of the "themes" window.
pub const YEAR_DAYS: i64 = 365;

/// Maximum age in days of the "macro shifts" window.
pub const LONG_DAYS: i64 = 365 * 3;

/// One of the three analysis windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    /// Last 90 days
    Recent,
    /// Last year
    Year,
    /// Last three years
    Long,
}

impl Horizon {
    /// Inclusive upper bound on signal age for this window.
    pub fn max_age_days(&self) -> i64 {
        match self {
            Horizon::Recent => RECENT_DAYS,
            Horizon::Year => YEAR_DAYS,
            Horizon::Long => LONG_DAYS,
        }
    }

    /// Parse a short label (`90d`, `1y`, `3y`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "90d" | "recent" => Some(Horizon::Recent),
            "1y" | "year" => Some(Horizon::Year),
            "3y" | "long" => Some(Horizon::Long),
            _ => None,
        }
    }

    /// Short label used on the command line and in headings.
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Recent => "90d",
            Horizon::Year => "1y",
            Horizon::Long => "3y",
        }
    }
}

/// Signals partitioned into the three nested windows, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HorizonSplit {
    /// Age <= 90 days
    pub recent: Vec<Signal>,
    /// Age <= 365 days
    pub year: Vec<Signal>,
    /// Age <= 1095 days
    pub long: Vec<Signal>,
}

impl HorizonSplit {
    /// Signals of one window.
    pub fn window(&self, horizon: Horizon) -> &[Signal] {
        match horizon {
            Horizon::Recent => &self.recent,
            Horizon::Year => &self.year,
            Horizon::Long => &self.long,
        }
    }
}

/// Partition signals into the 90-day, 1-year and 3-year windows.
pub fn horizon_split(signals: &[Signal], reference_date: NaiveDate) -> HorizonSplit {
    let mut split = HorizonSplit::default();
    for signal in signals {
        let age = signal.age_days(reference_date);
        if age <= RECENT_DAYS {
            split.recent.push(signal.clone());
        }
        if age <= YEAR_DAYS {
            split.year.push(signal.clone());
        }
        if age <= LONG_DAYS {
            split.long.push(signal.clone());
        }
    }
    debug!(
        recent = split.recent.len(),
        year = split.year.len(),
        long = split.long.len(),
        "split signals into horizons"
    );
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn aged(reference: NaiveDate, age: i64) -> Signal {
        Signal::new(
            format!("age {age}"),
            "Source",
            reference - Duration::days(age),
            "summary",
        )
    }

    fn titles(signals: &[Signal]) -> Vec<&str> {
        signals.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let today = day("2024-06-30");
        let signals: Vec<Signal> = [90, 91, 365, 366, 1095, 1096]
            .into_iter()
            .map(|age| aged(today, age))
            .collect();

        let split = horizon_split(&signals, today);
        assert_eq!(titles(&split.recent), vec!["age 90"]);
        assert_eq!(titles(&split.year), vec!["age 90", "age 91", "age 365"]);
        assert_eq!(
            titles(&split.long),
            vec!["age 90", "age 91", "age 365", "age 366", "age 1095"]
        );
    }

    #[test]
    fn test_future_signals_in_every_window() {
        let today = day("2024-06-30");
        let split = horizon_split(&[aged(today, -45)], today);
        assert_eq!(split.recent.len(), 1);
        assert_eq!(split.year.len(), 1);
        assert_eq!(split.long.len(), 1);
    }

    #[test]
    fn test_windows_are_nested_and_ordered() {
        let today = day("2024-06-30");
        let signals: Vec<Signal> = [400, 10, 2000, 200, 0]
            .into_iter()
            .map(|age| aged(today, age))
            .collect();

        let split = horizon_split(&signals, today);
        assert_eq!(titles(&split.recent), vec!["age 10", "age 0"]);
        assert_eq!(titles(&split.year), vec!["age 10", "age 200", "age 0"]);
        for s in &split.recent {
            assert!(split.year.contains(s));
        }
        for s in &split.year {
            assert!(split.long.contains(s));
        }
    }

    #[test]
    fn test_horizon_labels() {
        assert_eq!(Horizon::from_label("90D"), Some(Horizon::Recent));
        assert_eq!(Horizon::from_label("1y"), Some(Horizon::Year));
        assert_eq!(Horizon::from_label("long"), Some(Horizon::Long));
        assert_eq!(Horizon::from_label("5y"), None);
        assert_eq!(Horizon::Long.label(), "3y");
        assert_eq!(Horizon::Year.max_age_days(), 365);
    }

    #[test]
    fn test_window_accessor() {
        let today = day("2024-06-30");
        let split = horizon_split(&[aged(today, 100)], today);
        assert!(split.window(Horizon::Recent).is_empty());
        assert_eq!(split.window(Horizon::Year).len(), 1);
    }
}
