//! smokenotes - Turn BBQ and smoking video transcripts into Markdown recipe cards
//!
//! The rule-based extractor lives in [`extract`]; everything else fetches
//! transcripts, keeps a local recipe history and exports saved recipes.

pub mod cli;
pub mod config;
pub mod export;
pub mod extract;
pub mod storage;
pub mod youtube;

use thiserror::Error;

/// Main error type for smokenotes
#[derive(Error, Debug)]
pub enum SmokenotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}. Please enter a valid YouTube video link.")]
    InvalidVideoUrl(String),

    #[error("Could not fetch transcript for video {0}. The video may not have captions enabled. Try --transcript-file with a pasted transcript instead.")]
    TranscriptUnavailable(String),

    #[error("Transcript is empty. Please paste a transcript first.")]
    EmptyTranscript,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous id '{0}': more than one recipe matches. Use more characters.")]
    AmbiguousId(String),
}

pub type Result<T> = std::result::Result<T, SmokenotesError>;

/// Application name
pub const APP_NAME: &str = "smokenotes";
