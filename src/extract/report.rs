//! Markdown recipe report assembly

use serde::Serialize;

use crate::extract::sentences::{find_relevant_sentences, SentenceTopic, DEFAULT_SENTENCE_LIMIT};
use crate::extract::temperature::{extract_internal_temps, extract_temperatures};
use crate::extract::time::extract_times;
use crate::extract::vocabulary::Vocabulary;

/// Title used when the video title is missing or blank
pub const DEFAULT_TITLE: &str = "BBQ Recipe";

const LIMITED_DATA_NOTE: &str = "*Note: Limited cooking data was found in this transcript. \
The video may discuss techniques more than specific temperatures, or the captions may not \
have captured the details.*";

/// Keyword sections rendered between the quick reference and the quotes
const KEYWORD_SECTIONS: [Vocabulary; 4] = [
    Vocabulary::Meats,
    Vocabulary::Woods,
    Vocabulary::Seasonings,
    Vocabulary::Techniques,
];

/// How many quotes each sentence section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub temperature_notes: usize,
    pub timing_notes: usize,
    pub wrapping_instructions: usize,
    pub resting_instructions: usize,
    pub pro_tips: usize,
}

impl ReportLimits {
    pub fn for_topic(&self, topic: SentenceTopic) -> usize {
        match topic {
            SentenceTopic::TemperatureNotes => self.temperature_notes,
            SentenceTopic::TimingNotes => self.timing_notes,
            SentenceTopic::WrappingInstructions => self.wrapping_instructions,
            SentenceTopic::RestingInstructions => self.resting_instructions,
            SentenceTopic::ProTips => self.pro_tips,
        }
    }
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            temperature_notes: 8,
            timing_notes: 8,
            wrapping_instructions: 5,
            resting_instructions: 3,
            pro_tips: 8,
        }
    }
}

/// Everything the rule-based pass found in one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeFacts {
    pub smoker_temps: Vec<u16>,
    pub internal_temps: Vec<u16>,
    pub cooking_times: Vec<String>,
    pub meats: Vec<&'static str>,
    pub woods: Vec<&'static str>,
    pub techniques: Vec<&'static str>,
    pub seasonings: Vec<&'static str>,
    pub equipment: Vec<&'static str>,
    pub temperature_notes: Vec<String>,
    pub timing_notes: Vec<String>,
    pub wrapping_instructions: Vec<String>,
    pub resting_instructions: Vec<String>,
    pub pro_tips: Vec<String>,
}

impl RecipeFacts {
    /// Run every extractor over the transcript
    pub fn extract(transcript: &str) -> Self {
        let quotes = |topic: SentenceTopic| {
            find_relevant_sentences(transcript, topic.triggers(), DEFAULT_SENTENCE_LIMIT)
        };

        Self {
            smoker_temps: extract_temperatures(transcript),
            internal_temps: extract_internal_temps(transcript),
            cooking_times: extract_times(transcript),
            meats: Vocabulary::Meats.find_in(transcript),
            woods: Vocabulary::Woods.find_in(transcript),
            techniques: Vocabulary::Techniques.find_in(transcript),
            seasonings: Vocabulary::Seasonings.find_in(transcript),
            equipment: Vocabulary::Equipment.find_in(transcript),
            temperature_notes: quotes(SentenceTopic::TemperatureNotes),
            timing_notes: quotes(SentenceTopic::TimingNotes),
            wrapping_instructions: quotes(SentenceTopic::WrappingInstructions),
            resting_instructions: quotes(SentenceTopic::RestingInstructions),
            pro_tips: quotes(SentenceTopic::ProTips),
        }
    }

    pub fn keywords(&self, vocabulary: Vocabulary) -> &[&'static str] {
        match vocabulary {
            Vocabulary::Meats => &self.meats,
            Vocabulary::Woods => &self.woods,
            Vocabulary::Techniques => &self.techniques,
            Vocabulary::Seasonings => &self.seasonings,
            Vocabulary::Equipment => &self.equipment,
        }
    }

    pub fn sentences(&self, topic: SentenceTopic) -> &[String] {
        match topic {
            SentenceTopic::TemperatureNotes => &self.temperature_notes,
            SentenceTopic::TimingNotes => &self.timing_notes,
            SentenceTopic::WrappingInstructions => &self.wrapping_instructions,
            SentenceTopic::RestingInstructions => &self.resting_instructions,
            SentenceTopic::ProTips => &self.pro_tips,
        }
    }

    /// True when no temperature or time at all was found
    pub fn lacks_cooking_data(&self) -> bool {
        self.smoker_temps.is_empty() && self.internal_temps.is_empty() && self.cooking_times.is_empty()
    }

    /// Assemble the Markdown report.
    ///
    /// Sections with nothing to show are left out entirely. When no numbers
    /// were found the quick reference is replaced by a closing note.
    pub fn render(&self, title: &str, limits: &ReportLimits) -> String {
        let mut report = format!("# {}\n\n", title);

        if !self.lacks_cooking_data() {
            report.push_str("## Quick Reference\n\n");
            if !self.smoker_temps.is_empty() {
                report.push_str(&format!(
                    "**Smoker/Grill Temp:** {}\n\n",
                    format_temps(&self.smoker_temps)
                ));
            }
            if !self.internal_temps.is_empty() {
                report.push_str(&format!(
                    "**Target Internal Temp:** {}\n\n",
                    format_temps(&self.internal_temps)
                ));
            }
            if !self.cooking_times.is_empty() {
                report.push_str(&format!("**Cooking Time:** {}\n\n", self.cooking_times.join(", ")));
            }
        }

        for vocabulary in KEYWORD_SECTIONS {
            push_keyword_section(&mut report, vocabulary.heading(), self.keywords(vocabulary));
        }

        for topic in SentenceTopic::ALL {
            let sentences = self.sentences(topic);
            if sentences.is_empty() {
                continue;
            }
            report.push_str(&format!("## {}\n", topic.heading()));
            for sentence in sentences.iter().take(limits.for_topic(topic)) {
                report.push_str(&format!("- \"{}\"\n", sentence));
            }
            report.push('\n');
        }

        push_keyword_section(
            &mut report,
            Vocabulary::Equipment.heading(),
            self.keywords(Vocabulary::Equipment),
        );

        if self.lacks_cooking_data() {
            report.push_str("\n---\n\n");
            report.push_str(LIMITED_DATA_NOTE);
            report.push('\n');
        }

        report
    }
}

fn push_keyword_section(report: &mut String, heading: &str, phrases: &[&str]) {
    if phrases.is_empty() {
        return;
    }
    report.push_str(&format!("## {}\n", heading));
    for phrase in phrases {
        report.push_str(&format!("- {}\n", capitalize_first(phrase)));
    }
    report.push('\n');
}

fn format_temps(temps: &[u16]) -> String {
    temps
        .iter()
        .map(|t| format!("{}°F", t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Uppercase the first character only; "low and slow" becomes "Low and slow"
fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rule-based transcript-to-report pipeline with its display settings
#[derive(Debug, Clone)]
pub struct RecipeExtractor {
    limits: ReportLimits,
    default_title: String,
}

impl Default for RecipeExtractor {
    fn default() -> Self {
        Self::new(ReportLimits::default(), DEFAULT_TITLE)
    }
}

impl RecipeExtractor {
    pub fn new(limits: ReportLimits, default_title: impl Into<String>) -> Self {
        Self {
            limits,
            default_title: default_title.into(),
        }
    }

    /// Build the Markdown report for a transcript
    pub fn extract(&self, transcript: &str, title: Option<&str>) -> String {
        let facts = RecipeFacts::extract(transcript);
        tracing::debug!(
            smoker_temps = facts.smoker_temps.len(),
            internal_temps = facts.internal_temps.len(),
            cooking_times = facts.cooking_times.len(),
            "Extracted recipe facts"
        );
        self.render(&facts, title)
    }

    /// Render already extracted facts with these limits
    pub fn render(&self, facts: &RecipeFacts, title: Option<&str>) -> String {
        facts.render(self.resolve_title(title), &self.limits)
    }

    /// The given title with surrounding whitespace trimmed, or the configured
    /// default when it is missing or blank
    pub fn resolve_title<'a>(&'a self, title: Option<&'a str>) -> &'a str {
        title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.default_title.as_str())
    }
}

/// Build a report with the default limits and title
pub fn extract_recipe(transcript: &str, title: Option<&str>) -> String {
    RecipeExtractor::default().extract(transcript, title)
}
