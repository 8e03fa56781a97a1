//! Topic-based selection of quotable transcript sentences

use serde::Serialize;

/// Cap applied when a caller does not ask for a smaller one
pub const DEFAULT_SENTENCE_LIMIT: usize = 15;

/// Sentences with this many characters or fewer are never selected
const MIN_SENTENCE_CHARS: usize = 10;

/// Quote sections of the report, each driven by its own trigger words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceTopic {
    TemperatureNotes,
    TimingNotes,
    WrappingInstructions,
    RestingInstructions,
    ProTips,
}

impl SentenceTopic {
    /// Report order
    pub const ALL: [SentenceTopic; 5] = [
        Self::TemperatureNotes,
        Self::TimingNotes,
        Self::WrappingInstructions,
        Self::RestingInstructions,
        Self::ProTips,
    ];

    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::TemperatureNotes => &["degree", "°", "temperature", "temp"],
            Self::TimingNotes => &["hour", "minute", "until"],
            Self::WrappingInstructions => &["wrap", "foil", "paper", "crutch"],
            Self::RestingInstructions => &["rest", "resting", "cool", "sit"],
            Self::ProTips => &[
                "tip",
                "trick",
                "secret",
                "important",
                "key",
                "make sure",
                "don't forget",
                "mistake",
                "always",
                "never",
                "best",
                "recommend",
            ],
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::TemperatureNotes => "Temperature Notes",
            Self::TimingNotes => "Timing Notes",
            Self::WrappingInstructions => "Wrapping Instructions",
            Self::RestingInstructions => "Resting Instructions",
            Self::ProTips => "Pro Tips",
        }
    }
}

/// Split on runs of `.`, `!` and `?`, trimming each piece.
///
/// The minimum length is counted in Unicode scalar values.
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
}

/// Select up to `limit` distinct sentences that mention any trigger word.
///
/// Sentences keep transcript order and are compared after trimming, so a
/// sentence repeated verbatim is only quoted once.
pub fn find_relevant_sentences(text: &str, triggers: &[&str], limit: usize) -> Vec<String> {
    let triggers: Vec<String> = triggers.iter().map(|t| t.to_lowercase()).collect();
    let mut relevant: Vec<String> = Vec::new();

    for sentence in sentences(text) {
        if relevant.len() >= limit {
            break;
        }

        let lower = sentence.to_lowercase();
        if triggers.iter().any(|t| lower.contains(t.as_str()))
            && !relevant.iter().any(|r| r == sentence)
        {
            relevant.push(sentence.to_string());
        }
    }

    relevant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_sentences_with_triggers_in_order() {
        let text = "Set the temperature high. Nothing here at all! Wait an hour or so? Temp check done.";
        let found = find_relevant_sentences(text, &["temp", "hour"], DEFAULT_SENTENCE_LIMIT);
        assert_eq!(
            found,
            vec!["Set the temperature high", "Wait an hour or so", "Temp check done"]
        );
    }

    #[test]
    fn short_sentences_are_skipped() {
        let found = find_relevant_sentences("Temp ok. Temp is fine now.", &["temp"], 5);
        assert_eq!(found, vec!["Temp is fine now"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 9 chars, 21 bytes
        let found = find_relevant_sentences("temp 😀😀😀😀. temp ééééééé", &["temp"], 5);
        assert_eq!(found, vec!["temp ééééééé"]);
    }

    #[test]
    fn repeated_sentences_are_quoted_once() {
        let text = "Always trim the fat. Always trim the fat!  Always trim the fat?";
        let found = find_relevant_sentences(text, SentenceTopic::ProTips.triggers(), 8);
        assert_eq!(found, vec!["Always trim the fat"]);
    }

    #[test]
    fn respects_limit() {
        let text = "Rest number one here. Rest number two here. Rest number three here.";
        let found = find_relevant_sentences(text, &["rest"], 2);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn consecutive_delimiters_count_once() {
        let found = find_relevant_sentences("Wrap it tight in foil!!! Done?!", &["foil"], 5);
        assert_eq!(found, vec!["Wrap it tight in foil"]);
    }
}
