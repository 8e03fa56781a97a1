//! Smoker and internal temperature extraction
//!
//! Each pattern family is a [`TemperatureMatcher`] that yields raw readings.
//! [`reduce`] range-filters the readings of a matcher set and returns them
//! deduplicated and sorted.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

/// Plausible smoker/grill air temperatures in °F
pub const AMBIENT_RANGE: RangeInclusive<u16> = 150..=700;

/// Plausible internal meat temperatures in °F
pub const INTERNAL_RANGE: RangeInclusive<u16> = 125..=212;

/// A single pattern family producing temperature readings
pub struct TemperatureMatcher {
    name: &'static str,
    regex: Regex,
    reject_trailing_digit: bool,
}

impl TemperatureMatcher {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("temperature pattern is valid"),
            reject_trailing_digit: false,
        }
    }

    /// Drop matches whose number runs straight into another digit.
    fn reject_trailing_digit(mut self) -> Self {
        self.reject_trailing_digit = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every number captured by this matcher, in text order.
    ///
    /// Range patterns capture both endpoints, so one match can yield two
    /// readings.
    pub fn candidates(&self, text: &str) -> Vec<u16> {
        let mut readings = Vec::new();
        let mut at = 0;

        while let Some(caps) = self.regex.captures_at(text, at) {
            let Some(whole) = caps.get(0) else { break };

            if self.reject_trailing_digit
                && text[whole.end()..].starts_with(|c: char| c.is_ascii_digit())
            {
                at = next_char_boundary(text, whole.start());
                continue;
            }

            readings.extend(
                caps.iter()
                    .skip(1)
                    .flatten()
                    .filter_map(|m| m.as_str().parse::<u16>().ok()),
            );
            at = whole.end().max(next_char_boundary(text, whole.start()));
        }

        readings
    }
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len(), |c| index + c.len_utf8())
}

static AMBIENT_MATCHERS: LazyLock<Vec<TemperatureMatcher>> = LazyLock::new(|| {
    vec![
        TemperatureMatcher::new("fahrenheit", r"([0-9]{2,3})\s*°?\s*[fF](?:ahrenheit)?"),
        TemperatureMatcher::new("degrees", r"([0-9]{2,3})\s*degrees?\s*[fF]?(?:ahrenheit)?"),
        TemperatureMatcher::new("range", r"([0-9]{2,3})\s*[-–to]+\s*([0-9]{2,3})\s*°?\s*[fF]?"),
        TemperatureMatcher::new(
            "context",
            r"(?i)(?:at|to|around|about|set.*?to|running.*?at|hold.*?at|maintain)\s*([0-9]{2,3})",
        )
        .reject_trailing_digit(),
    ]
});

static INTERNAL_MATCHERS: LazyLock<Vec<TemperatureMatcher>> = LazyLock::new(|| {
    vec![
        TemperatureMatcher::new(
            "internal",
            r"(?i)internal\s*(?:temp(?:erature)?)?[^0-9]*([0-9]{2,3})",
        ),
        TemperatureMatcher::new(
            "probe",
            r"(?i)(?:probe|meat)\s*(?:temp(?:erature)?)?[^0-9]*([0-9]{2,3})",
        ),
        TemperatureMatcher::new("pull", r"(?i)(?:pull|pulling)\s*(?:at|when)[^0-9]*([0-9]{2,3})"),
        TemperatureMatcher::new(
            "done",
            r"(?i)(?:done|finished|ready)\s*(?:at|when)[^0-9]*([0-9]{2,3})",
        ),
        TemperatureMatcher::new("trailing", r"(?i)([0-9]{2,3})\s*(?:internal|inside)"),
        TemperatureMatcher::new("reaches", r"(?i)(?:hits?|reaches?|gets? to)\s*([0-9]{2,3})"),
    ]
});

/// Matchers for smoker/grill temperatures
pub fn ambient_matchers() -> &'static [TemperatureMatcher] {
    &AMBIENT_MATCHERS
}

/// Matchers for internal meat temperatures
pub fn internal_matchers() -> &'static [TemperatureMatcher] {
    &INTERNAL_MATCHERS
}

/// Run every matcher over `text` and keep the distinct readings inside
/// `range`, sorted ascending.
pub fn reduce(matchers: &[TemperatureMatcher], text: &str, range: &RangeInclusive<u16>) -> Vec<u16> {
    matchers
        .iter()
        .flat_map(|matcher| matcher.candidates(text))
        .filter(|reading| range.contains(reading))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smoker/grill temperatures mentioned in the transcript
pub fn extract_temperatures(text: &str) -> Vec<u16> {
    reduce(ambient_matchers(), text, &AMBIENT_RANGE)
}

/// Internal meat temperatures mentioned in the transcript
pub fn extract_internal_temps(text: &str) -> Vec<u16> {
    reduce(internal_matchers(), text, &INTERNAL_RANGE)
}
