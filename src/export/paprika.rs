//! Paprika recipe manager envelope

use chrono::SecondsFormat;
use serde::Serialize;

use crate::storage::SavedRecipe;

const DEFAULT_NAME: &str = "BBQ Recipe from YouTube";
const CATEGORIES: [&str; 3] = ["BBQ", "Smoking", "Grilling"];

/// Fields Paprika reads when importing a `.paprikarecipe` file
#[derive(Debug, Serialize)]
pub struct PaprikaRecipe {
    pub name: String,
    pub source: String,
    pub source_url: String,
    pub servings: String,
    pub difficulty: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub categories: Vec<String>,
    pub notes: String,
    pub nutritional_info: String,
    pub directions: String,
    pub ingredients: String,
    pub photo_data: Option<String>,
    pub photo: Option<String>,
    pub uid: String,
    pub created: String,
    pub hash: String,
}

impl PaprikaRecipe {
    /// Wrap a saved report; the report becomes the directions and notes
    pub fn from_saved(recipe: &SavedRecipe) -> Self {
        let url = recipe.video_url.clone().unwrap_or_default();
        let title = recipe.video_title.trim();
        let name = if title.is_empty() { DEFAULT_NAME } else { title };
        let hash = uuid::Uuid::new_v4().simple().to_string();

        Self {
            name: name.to_string(),
            source: url.clone(),
            source_url: url.clone(),
            servings: String::new(),
            difficulty: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            total_time: String::new(),
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            notes: format!("Extracted from YouTube video: {}\n\n{}", url, recipe.recipe),
            nutritional_info: String::new(),
            directions: recipe.recipe.clone(),
            ingredients: String::new(),
            photo_data: None,
            photo: None,
            uid: uuid::Uuid::new_v4().to_string(),
            created: recipe.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            hash: hash[..13].to_string(),
        }
    }
}
