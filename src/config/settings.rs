//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::extract::{RecipeExtractor, ReportLimits, DEFAULT_SENTENCE_LIMIT, DEFAULT_TITLE};
use crate::{SmokenotesError, APP_NAME};

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Transcript and title lookup settings
    #[serde(default)]
    pub fetch: FetchSettings,

    /// Report rendering settings
    #[serde(default)]
    pub extraction: ExtractionSettings,

    /// Saved recipe history
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for the recipe database
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Primary transcript API (returns a list of caption segments)
    #[serde(default = "default_transcript_url")]
    pub transcript_url: String,

    /// Fallback transcript API (returns the transcript as one string)
    #[serde(default = "default_fallback_transcript_url")]
    pub fallback_transcript_url: String,

    /// oEmbed endpoint used to look up video titles
    #[serde(default = "default_title_url")]
    pub title_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Per-section quote limits may not exceed the number of sentences
/// collected per topic (15).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Heading used when the video has no title
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Quotes shown under "Temperature Notes"
    #[serde(default = "default_note_limit")]
    pub temperature_notes: usize,

    /// Quotes shown under "Timing Notes"
    #[serde(default = "default_note_limit")]
    pub timing_notes: usize,

    /// Quotes shown under "Wrapping Instructions"
    #[serde(default = "default_wrapping_limit")]
    pub wrapping_instructions: usize,

    /// Quotes shown under "Resting Instructions"
    #[serde(default = "default_resting_limit")]
    pub resting_instructions: usize,

    /// Quotes shown under "Pro Tips"
    #[serde(default = "default_note_limit")]
    pub pro_tips: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Save every extracted recipe automatically
    #[serde(default = "default_true")]
    pub auto_save: bool,

    /// Number of recipes kept; older ones are pruned
    #[serde(default = "default_max_saved")]
    pub max_saved: usize,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", APP_NAME, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/smokenotes"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_transcript_url() -> String {
    "https://yt-transcript-api.vercel.app/api/transcript".to_string()
}

fn default_fallback_transcript_url() -> String {
    "https://api.kome.ai/api/tools/youtube-transcripts".to_string()
}

fn default_title_url() -> String {
    "https://noembed.com/embed".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_note_limit() -> usize {
    ReportLimits::default().temperature_notes
}

fn default_wrapping_limit() -> usize {
    ReportLimits::default().wrapping_instructions
}

fn default_resting_limit() -> usize {
    ReportLimits::default().resting_instructions
}

fn default_true() -> bool {
    true
}

fn default_max_saved() -> usize {
    20
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            transcript_url: default_transcript_url(),
            fallback_transcript_url: default_fallback_transcript_url(),
            title_url: default_title_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        let limits = ReportLimits::default();
        Self {
            default_title: default_title(),
            temperature_notes: limits.temperature_notes,
            timing_notes: limits.timing_notes,
            wrapping_instructions: limits.wrapping_instructions,
            resting_instructions: limits.resting_instructions,
            pro_tips: limits.pro_tips,
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            max_saved: default_max_saved(),
        }
    }
}

impl ExtractionSettings {
    pub fn report_limits(&self) -> ReportLimits {
        ReportLimits {
            temperature_notes: self.temperature_notes,
            timing_notes: self.timing_notes,
            wrapping_instructions: self.wrapping_instructions,
            resting_instructions: self.resting_instructions,
            pro_tips: self.pro_tips,
        }
    }

    fn section_limits(&self) -> [(&'static str, usize); 5] {
        [
            ("temperature_notes", self.temperature_notes),
            ("timing_notes", self.timing_notes),
            ("wrapping_instructions", self.wrapping_instructions),
            ("resting_instructions", self.resting_instructions),
            ("pro_tips", self.pro_tips),
        ]
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(SmokenotesError::Config(
                "fetch.timeout_secs must be greater than zero".to_string(),
            ));
        }
        for (name, limit) in self.extraction.section_limits() {
            if limit > DEFAULT_SENTENCE_LIMIT {
                return Err(SmokenotesError::Config(format!(
                    "extraction.{} must be at most {}",
                    name, DEFAULT_SENTENCE_LIMIT
                )));
            }
        }
        if self.history.max_saved == 0 {
            return Err(SmokenotesError::Config(
                "history.max_saved must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("SMOKENOTES_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.general.data_dir = PathBuf::from(dir);
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the database path
    pub fn database_path(&self) -> PathBuf {
        self.general.data_dir.join("smokenotes.db")
    }

    /// Build the recipe extractor described by these settings
    pub fn extractor(&self) -> RecipeExtractor {
        RecipeExtractor::new(
            self.extraction.report_limits(),
            self.extraction.default_title.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_report_limits() {
        let settings = Settings::default();
        assert_eq!(settings.extraction.report_limits(), ReportLimits::default());
        assert_eq!(settings.extraction.default_title, "BBQ Recipe");
        assert_eq!(settings.history.max_saved, 20);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings = Settings::from_toml(
            r#"
            [extraction]
            pro_tips = 3

            [fetch]
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.extraction.pro_tips, 3);
        assert_eq!(settings.extraction.resting_instructions, 3);
        assert_eq!(settings.extraction.wrapping_instructions, 5);
        assert_eq!(settings.fetch.timeout_secs, 5);
        assert!(settings.fetch.transcript_url.starts_with("https://"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Settings::from_toml("[fetch]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn section_limit_above_collection_cap_is_rejected() {
        let err = Settings::from_toml("[extraction]\npro_tips = 20\n").unwrap_err();
        assert!(err.to_string().contains("extraction.pro_tips must be at most 15"));

        let settings = Settings::from_toml("[extraction]\npro_tips = 15\n").unwrap();
        assert_eq!(settings.extraction.pro_tips, 15);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let content = toml::to_string_pretty(&Settings::default()).unwrap();
        let parsed = Settings::from_toml(&content).unwrap();
        assert_eq!(parsed.history.max_saved, 20);
        assert_eq!(parsed.extraction.timing_notes, 8);
    }
}
