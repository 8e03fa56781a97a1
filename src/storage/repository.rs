//! Repository pattern wrapper for database operations
//!
//! Provides the recipe history operations the CLI uses, including the
//! cap on how many recipes are kept.

use anyhow::Result;

use crate::config::Settings;
use crate::storage::{Database, SavedRecipe};

/// Recipe history backed by the local database
pub struct Repository {
    db: Database,
    max_saved: usize,
}

impl Repository {
    /// Open the history configured in `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        let db = Database::open(settings)?;
        Ok(Self::with_database(db, settings.history.max_saved))
    }

    /// Wrap an already opened database
    pub fn with_database(db: Database, max_saved: usize) -> Self {
        Self { db, max_saved }
    }

    /// Save a recipe and drop the oldest ones beyond the cap
    pub fn save(&self, recipe: &SavedRecipe) -> Result<()> {
        self.db.insert_recipe(recipe)?;
        let pruned = self.db.prune_to(self.max_saved)?;
        if pruned > 0 {
            tracing::debug!("Pruned {} old recipe(s) from history", pruned);
        }
        tracing::info!("Saved recipe {}", recipe.short_id());
        Ok(())
    }

    /// Find recipe by ID prefix
    pub fn find(&self, prefix: &str) -> Result<Option<SavedRecipe>> {
        self.db.find_recipe_by_prefix(prefix)
    }

    /// List recent recipes
    pub fn recent(&self, limit: usize) -> Result<Vec<SavedRecipe>> {
        self.db.list_recipes(limit)
    }

    /// Recipes whose title contains `query`
    pub fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<SavedRecipe>> {
        self.db.search_recipes(query, limit)
    }

    /// Full-text search across saved reports
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SavedRecipe>> {
        self.db.search_recipe_text(query, limit)
    }

    /// Delete a recipe by its full ID
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.db.delete_recipe(id)
    }
}
