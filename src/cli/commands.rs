//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::export::{self, ExportFormat};
use crate::extract::RecipeFacts;
use crate::storage::{RecipeSource, Repository, SavedRecipe};
use crate::youtube::{build_sources, extract_video_id, fetch_transcript, TitleClient};
use crate::SmokenotesError;

/// Inputs of the `extract` command
#[derive(Debug, Default)]
pub struct ExtractOptions {
    pub url: Option<String>,
    pub transcript_file: Option<PathBuf>,
    pub title: Option<String>,
    pub json: bool,
    pub no_save: bool,
}

/// A transcript together with where it came from
struct TranscriptInput {
    text: String,
    video_url: Option<String>,
    title: String,
    source: RecipeSource,
}

/// Extract a recipe and print it
pub async fn extract_recipe(settings: &Settings, options: ExtractOptions) -> Result<()> {
    let input = match options.transcript_file {
        Some(path) => {
            let text = read_transcript(&path)?;
            if text.trim().is_empty() {
                return Err(SmokenotesError::EmptyTranscript.into());
            }
            TranscriptInput {
                text,
                video_url: options.url,
                title: options.title.unwrap_or_default(),
                source: RecipeSource::Manual,
            }
        }
        None => {
            let url = options
                .url
                .context("A YouTube URL or --transcript-file is required")?;
            fetch_input(settings, url, options.title).await?
        }
    };

    let facts = RecipeFacts::extract(&input.text);
    let report = settings
        .extractor()
        .render(&facts, Some(input.title.as_str()));

    if options.json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
    } else {
        print!("{}", report);
    }

    if settings.history.auto_save && !options.no_save {
        let repo = Repository::new(settings)?;
        let saved = SavedRecipe::new(input.video_url, input.title, input.source, report);
        repo.save(&saved)?;
    }

    Ok(())
}

async fn fetch_input(settings: &Settings, url: String, title: Option<String>) -> Result<TranscriptInput> {
    let video_id =
        extract_video_id(&url).ok_or_else(|| SmokenotesError::InvalidVideoUrl(url.clone()))?;

    let title = match title {
        Some(title) => title,
        None => TitleClient::from_settings(settings)?.fetch(&video_id).await,
    };

    tracing::info!("Fetching transcript for {}", video_id);
    let sources = build_sources(settings)?;
    let text = fetch_transcript(&sources, &video_id).await?;

    Ok(TranscriptInput {
        text,
        video_url: Some(url),
        title,
        source: RecipeSource::Youtube,
    })
}

fn read_transcript(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read transcript from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))
}

/// List saved recipes
pub fn list_recipes(settings: &Settings, limit: usize, search: Option<String>) -> Result<()> {
    let repo = Repository::new(settings)?;

    let recipes = if let Some(query) = search {
        repo.search_titles(&query, limit)?
    } else {
        repo.recent(limit)?
    };

    if recipes.is_empty() {
        println!("No recipes found");
        return Ok(());
    }

    print_recipe_table(&recipes);
    Ok(())
}

/// Show a saved recipe
pub fn view_recipe(settings: &Settings, id: &str) -> Result<()> {
    let repo = Repository::new(settings)?;
    let recipe = find_recipe(&repo, id)?;

    println!("Title: {}", recipe.display_title());
    println!("Date: {}", recipe.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(url) = recipe.video_url.as_deref() {
        println!("Source: {}", url);
    }
    println!();
    print!("{}", recipe.recipe);

    Ok(())
}

/// Full-text search through saved recipes
pub fn search_recipes(settings: &Settings, query: &str) -> Result<()> {
    let repo = Repository::new(settings)?;
    let results = repo.search(query, 20)?;

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} results for: {}", results.len(), query);
    println!();
    print_recipe_table(&results);

    Ok(())
}

/// Delete a saved recipe
pub fn delete_recipe(settings: &Settings, id: &str) -> Result<()> {
    let repo = Repository::new(settings)?;
    let recipe = find_recipe(&repo, id)?;

    repo.delete(&recipe.id)?;
    println!("Deleted: {} ({})", recipe.display_title(), recipe.short_id());

    Ok(())
}

/// Export a saved recipe to a file or stdout
pub fn export_recipe(
    settings: &Settings,
    id: &str,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let repo = Repository::new(settings)?;
    let recipe = find_recipe(&repo, id)?;

    let content = export::render(&recipe, format)?;

    if let Some(path) = output {
        let path = if path.is_dir() {
            path.join(export::file_name(recipe.video_title.trim(), format))
        } else {
            path
        };
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Exported to: {}", path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn find_recipe(repo: &Repository, id: &str) -> Result<SavedRecipe> {
    let recipe = repo
        .find(id)?
        .ok_or_else(|| SmokenotesError::NotFound(format!("recipe '{}'", id)))?;
    Ok(recipe)
}

fn print_recipe_table(recipes: &[SavedRecipe]) {
    println!(
        "{:<10} {:<40} {:<12} {:<8}",
        "ID", "Title", "Date", "Source"
    );
    println!("{}", "-".repeat(72));

    for recipe in recipes {
        println!(
            "{:<10} {:<40} {:<12} {:<8}",
            recipe.short_id(),
            truncate(recipe.display_title(), 38),
            recipe.created_at.format("%Y-%m-%d"),
            recipe.source.as_str()
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("Brisket", 10), "Brisket");
        assert_eq!(truncate("Smoked brisket über alles", 10), "Smoked ...");
        assert_eq!(truncate("ééééééééééééé", 6), "ééé...");
    }
}
