//! Rule-based recipe extraction
//!
//! Pulls temperatures, durations, vocabulary matches and quotable sentences
//! out of a transcript and assembles them into a Markdown recipe card. Every
//! function here is pure: the same transcript and title always produce the
//! same report.

mod report;
mod sentences;
mod temperature;
mod time;
mod vocabulary;

pub use report::{extract_recipe, RecipeExtractor, RecipeFacts, ReportLimits, DEFAULT_TITLE};
pub use sentences::{find_relevant_sentences, SentenceTopic, DEFAULT_SENTENCE_LIMIT};
pub use temperature::{
    ambient_matchers, extract_internal_temps, extract_temperatures, internal_matchers, reduce,
    TemperatureMatcher, AMBIENT_RANGE, INTERNAL_RANGE,
};
pub use time::{extract_times, time_spans, TimeSpan, TimeUnit};
pub use vocabulary::{find_mentioned, Vocabulary};
