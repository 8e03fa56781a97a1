//! Cooking duration extraction

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

const NUMBER: &str = r"([0-9]+(?:\.[0-9]+)?)";
const UNIT: &str = r"(hours?|minutes?|mins?|hrs?)";

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){NUMBER}\s*(?:to|-)\s*{NUMBER}\s*{UNIT}"))
        .expect("time range pattern is valid")
});

static SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){NUMBER}\s*{UNIT}")).expect("time pattern is valid")
});

static APPROXIMATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:about|around|approximately|roughly)\s*{NUMBER}\s*{UNIT}"
    ))
    .expect("approximate time pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    /// `h`-prefixed tokens are hours, everything else minutes
    pub fn from_token(token: &str) -> Self {
        if token.starts_with(['h', 'H']) {
            Self::Hours
        } else {
            Self::Minutes
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        }
    }
}

/// A duration as it was spoken; amounts keep their original spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSpan {
    Single { amount: String, unit: TimeUnit },
    Range { from: String, to: String, unit: TimeUnit },
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { amount, unit } => write!(f, "{} {}", amount, unit.as_str()),
            Self::Range { from, to, unit } => write!(f, "{}-{} {}", from, to, unit.as_str()),
        }
    }
}

fn range_span(caps: &Captures) -> TimeSpan {
    TimeSpan::Range {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        unit: TimeUnit::from_token(&caps[3]),
    }
}

fn single_span(caps: &Captures) -> TimeSpan {
    TimeSpan::Single {
        amount: caps[1].to_string(),
        unit: TimeUnit::from_token(&caps[2]),
    }
}

/// All spans found by the range, single and approximate patterns, in that
/// order and without deduplication.
pub fn time_spans(text: &str) -> Vec<TimeSpan> {
    let families: [(&Regex, fn(&Captures) -> TimeSpan); 3] = [
        (&*RANGE_PATTERN, range_span),
        (&*SINGLE_PATTERN, single_span),
        (&*APPROXIMATE_PATTERN, single_span),
    ];

    families
        .into_iter()
        .flat_map(|(regex, build)| regex.captures_iter(text).map(move |caps| build(&caps)))
        .collect()
}

/// Distinct formatted durations in first-seen order.
///
/// Spans are compared by their formatted text, so "60 minutes" and
/// "1 hours" are both kept.
pub fn extract_times(text: &str) -> Vec<String> {
    let mut times: Vec<String> = Vec::new();
    for span in time_spans(text) {
        let formatted = span.to_string();
        if !times.contains(&formatted) {
            times.push(formatted);
        }
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_come_before_singles() {
        let times = extract_times("Cook for 3 to 4 hours at 250 degrees.");
        assert_eq!(times, vec!["3-4 hours", "4 hours"]);
    }

    #[test]
    fn units_are_normalized() {
        let times = extract_times("1.5 hrs then 90 mins then 2 Hour");
        assert_eq!(times, vec!["1.5 hours", "90 minutes", "2 hours"]);
    }

    #[test]
    fn equivalent_durations_are_not_merged() {
        let times = extract_times("60 minutes, or 1 hour");
        assert_eq!(times, vec!["60 minutes", "1 hours"]);
    }

    #[test]
    fn approximate_durations_are_deduplicated() {
        let times = extract_times("rest it for about 45 minutes");
        assert_eq!(times, vec!["45 minutes"]);
    }

    #[test]
    fn span_display() {
        let span = TimeSpan::Range {
            from: "6".to_string(),
            to: "8".to_string(),
            unit: TimeUnit::Hours,
        };
        assert_eq!(span.to_string(), "6-8 hours");
        assert_eq!(TimeUnit::from_token("MIN"), TimeUnit::Minutes);
    }
}
