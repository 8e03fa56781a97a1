//! Export formats for saved recipes

mod paprika;

pub use paprika::PaprikaRecipe;

use anyhow::Result;
use std::str::FromStr;

use crate::storage::SavedRecipe;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text with a title and source header
    Txt,
    /// The Markdown report as saved
    Md,
    /// Paprika recipe manager JSON
    Paprika,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
            Self::Paprika => "paprikarecipe",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "md" | "markdown" => Ok(Self::Md),
            "paprika" => Ok(Self::Paprika),
            other => anyhow::bail!("Unsupported format: {}. Supported: txt, md, paprika", other),
        }
    }
}

/// Render a saved recipe in the requested format
pub fn render(recipe: &SavedRecipe, format: ExportFormat) -> Result<String> {
    let content = match format {
        ExportFormat::Txt => export_as_txt(recipe),
        ExportFormat::Md => recipe.recipe.clone(),
        ExportFormat::Paprika => serde_json::to_string(&PaprikaRecipe::from_saved(recipe))?,
    };
    Ok(content)
}

/// Suggested file name: the title with every non-alphanumeric character
/// replaced by `-`, lowercased
pub fn file_name(title: &str, format: ExportFormat) -> String {
    let base = if title.is_empty() { "bbq-recipe" } else { title };
    let slug: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{}.{}", slug, format.extension())
}

fn export_as_txt(recipe: &SavedRecipe) -> String {
    format!(
        "# {}\n\nSource: {}\n\n{}",
        recipe.display_title(),
        recipe.video_url.as_deref().unwrap_or_default(),
        recipe.recipe
    )
}
