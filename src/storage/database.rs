//! SQLite database management with FTS5 support

use anyhow::{Context, Result};
use chrono::DateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::config::Settings;
use crate::storage::models::{RecipeSource, SavedRecipe};
use crate::SmokenotesError;

/// Database wrapper for smokenotes
pub struct Database {
    conn: Connection,
}

const CURRENT_SCHEMA_VERSION: i64 = 1;

const RECIPE_COLUMNS: &str = "id, video_url, video_title, source, recipe, created_at";

/// Escape LIKE wildcards for use with `ESCAPE '\'`
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Database {
    /// Open or create the database
    pub fn open(settings: &Settings) -> Result<Self> {
        let db_path = settings.database_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open_path(&db_path)
    }

    /// Open database at a specific path (useful for testing)
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize(&self) -> Result<()> {
        let current_version = self.schema_version()?;
        if current_version > CURRENT_SCHEMA_VERSION {
            anyhow::bail!(
                "Database schema version {} is newer than supported version {}",
                current_version,
                CURRENT_SCHEMA_VERSION
            );
        }

        if current_version < 1 {
            self.migrate_to_v1()?;
            self.set_schema_version(1)?;
        }

        Ok(())
    }

    /// Current schema version tracked in PRAGMA user_version.
    pub fn schema_version(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?)
    }

    fn set_schema_version(&self, version: i64) -> Result<()> {
        self.conn
            .execute(&format!("PRAGMA user_version = {}", version), [])?;
        Ok(())
    }

    fn migrate_to_v1(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                video_url TEXT,
                video_title TEXT NOT NULL DEFAULT '',
                source TEXT NOT NULL DEFAULT 'manual',
                recipe TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_recipes_created_at
                ON recipes(created_at DESC);
            "#,
        )?;

        // Full-text index over titles and report bodies
        self.conn.execute_batch(
            r#"
            CREATE VIRTUAL TABLE IF NOT EXISTS recipes_fts USING fts5(
                video_title,
                recipe,
                content='recipes',
                content_rowid='rowid',
                tokenize='porter unicode61'
            );

            CREATE TRIGGER IF NOT EXISTS recipes_ai AFTER INSERT ON recipes BEGIN
                INSERT INTO recipes_fts(rowid, video_title, recipe)
                VALUES (new.rowid, new.video_title, new.recipe);
            END;

            CREATE TRIGGER IF NOT EXISTS recipes_ad AFTER DELETE ON recipes BEGIN
                INSERT INTO recipes_fts(recipes_fts, rowid, video_title, recipe)
                VALUES ('delete', old.rowid, old.video_title, old.recipe);
            END;

            CREATE TRIGGER IF NOT EXISTS recipes_au AFTER UPDATE ON recipes BEGIN
                INSERT INTO recipes_fts(recipes_fts, rowid, video_title, recipe)
                VALUES ('delete', old.rowid, old.video_title, old.recipe);
                INSERT INTO recipes_fts(rowid, video_title, recipe)
                VALUES (new.rowid, new.video_title, new.recipe);
            END;
            "#,
        )?;

        Ok(())
    }

    /// Insert a new recipe
    pub fn insert_recipe(&self, recipe: &SavedRecipe) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO recipes (id, video_url, video_title, source, recipe, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                recipe.id,
                recipe.video_url,
                recipe.video_title,
                recipe.source.as_str(),
                recipe.recipe,
                recipe.created_at.timestamp(),
            ],
        )?;

        Ok(())
    }

    /// Get a recipe by ID
    pub fn get_recipe(&self, id: &str) -> Result<Option<SavedRecipe>> {
        let recipe = self
            .conn
            .query_row(
                &format!("SELECT {} FROM recipes WHERE id = ?1", RECIPE_COLUMNS),
                params![id],
                Self::row_to_recipe,
            )
            .optional()?;

        Ok(recipe)
    }

    /// Find a recipe by ID prefix.
    ///
    /// A blank prefix matches nothing. `%`, `_` and `\` are taken literally.
    /// More than one match is an [`SmokenotesError::AmbiguousId`] error.
    pub fn find_recipe_by_prefix(&self, prefix: &str) -> Result<Option<SavedRecipe>> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Ok(None);
        }
        let pattern = format!("{}%", escape_like(prefix));

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM recipes WHERE id LIKE ?1 ESCAPE '\\' LIMIT 2",
            RECIPE_COLUMNS
        ))?;
        let mut matches = stmt
            .query_map(params![pattern], Self::row_to_recipe)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if matches.len() > 1 {
            return Err(SmokenotesError::AmbiguousId(prefix.to_string()).into());
        }
        Ok(matches.pop())
    }

    /// List recipes, newest first
    pub fn list_recipes(&self, limit: usize) -> Result<Vec<SavedRecipe>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {}
             FROM recipes
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
            RECIPE_COLUMNS
        ))?;

        let recipes = stmt
            .query_map(params![limit], Self::row_to_recipe)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(recipes)
    }

    /// Search recipes by title
    pub fn search_recipes(&self, query: &str, limit: usize) -> Result<Vec<SavedRecipe>> {
        let pattern = format!("%{}%", query);

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {}
             FROM recipes
             WHERE video_title LIKE ?1
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2",
            RECIPE_COLUMNS
        ))?;

        let recipes = stmt
            .query_map(params![pattern, limit], Self::row_to_recipe)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(recipes)
    }

    /// Full-text search across titles and report bodies.
    ///
    /// The query is matched as a single phrase so FTS5 operators in user
    /// input are treated as plain text.
    pub fn search_recipe_text(&self, query: &str, limit: usize) -> Result<Vec<SavedRecipe>> {
        let phrase = format!("\"{}\"", query.replace('"', "\"\""));

        let mut stmt = self.conn.prepare(
            r#"
            SELECT r.id, r.video_url, r.video_title, r.source, r.recipe, r.created_at
            FROM recipes_fts f
            JOIN recipes r ON f.rowid = r.rowid
            WHERE recipes_fts MATCH ?1
            ORDER BY rank
            LIMIT ?2
            "#,
        )?;

        let recipes = stmt
            .query_map(params![phrase, limit], Self::row_to_recipe)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(recipes)
    }

    /// Delete a recipe
    pub fn delete_recipe(&self, id: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Keep only the `keep` newest recipes; returns how many were removed
    pub fn prune_to(&self, keep: usize) -> Result<usize> {
        let removed = self.conn.execute(
            r#"
            DELETE FROM recipes WHERE rowid NOT IN (
                SELECT rowid FROM recipes
                ORDER BY created_at DESC, rowid DESC
                LIMIT ?1
            )
            "#,
            params![keep],
        )?;
        Ok(removed)
    }

    /// Number of saved recipes
    pub fn count_recipes(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_recipe(row: &rusqlite::Row) -> rusqlite::Result<SavedRecipe> {
        let source: String = row.get(3)?;
        let created_timestamp: i64 = row.get(5)?;

        Ok(SavedRecipe {
            id: row.get(0)?,
            video_url: row.get(1)?,
            video_title: row.get(2)?,
            source: source.parse().unwrap_or(RecipeSource::Manual),
            recipe: row.get(4)?,
            created_at: DateTime::from_timestamp(created_timestamp, 0).unwrap_or_default(),
        })
    }
}
