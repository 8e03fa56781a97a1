//! Data models for storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::extract::DEFAULT_TITLE;

/// Where the transcript of a saved recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// Fetched from a YouTube video
    Youtube,
    /// Pasted or read from a file
    Manual,
}

impl RecipeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Manual => "manual",
        }
    }
}

impl FromStr for RecipeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(Self::Youtube),
            "manual" => Ok(Self::Manual),
            other => Err(format!("unknown recipe source '{}'", other)),
        }
    }
}

/// A generated recipe report kept in the local history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// Unique identifier (UUID)
    pub id: String,

    /// Video the transcript came from, if any
    pub video_url: Option<String>,

    /// Video title; may be empty
    pub video_title: String,

    /// How the transcript was obtained
    pub source: RecipeSource,

    /// The Markdown report
    pub recipe: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Create a new saved recipe stamped with the current time
    pub fn new(
        video_url: Option<String>,
        video_title: String,
        source: RecipeSource,
        recipe: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            video_url,
            video_title,
            source,
            recipe,
            created_at: Utc::now(),
        }
    }

    /// Title for listings, falling back to the report default
    pub fn display_title(&self) -> &str {
        let title = self.video_title.trim();
        if title.is_empty() {
            DEFAULT_TITLE
        } else {
            title
        }
    }

    /// First eight characters of the id
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_round_trips_through_str() {
        for source in [RecipeSource::Youtube, RecipeSource::Manual] {
            assert_eq!(source.as_str().parse::<RecipeSource>(), Ok(source));
        }
        assert!("podcast".parse::<RecipeSource>().is_err());
    }

    #[test]
    fn blank_title_displays_default() {
        let recipe = SavedRecipe::new(None, " ".to_string(), RecipeSource::Manual, String::new());
        assert_eq!(recipe.display_title(), "BBQ Recipe");
        assert_eq!(recipe.short_id().len(), 8);
    }
}
