//! Storage module for smokenotes
//!
//! Keeps the recipe history in SQLite with FTS5 for full-text search.

mod database;
mod models;
mod repository;

pub use database::Database;
pub use models::{RecipeSource, SavedRecipe};
pub use repository::Repository;
