use anyhow::Result;
use tempfile::tempdir;

use smokenotes::storage::{Database, RecipeSource, Repository, SavedRecipe};

fn recipe(title: &str, body: &str) -> SavedRecipe {
    SavedRecipe::new(
        Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        title.to_string(),
        RecipeSource::Youtube,
        body.to_string(),
    )
}

#[test]
fn database_supports_core_recipe_workflow() -> Result<()> {
    let tmp = tempdir()?;
    let db_path = tmp.path().join("smokenotes.db");
    let db = Database::open_path(&db_path)?;

    let brisket = recipe("Texas Brisket", "# Texas Brisket\n\n## Wood Type\n- Post oak\n");
    db.insert_recipe(&brisket)?;

    let loaded = db
        .get_recipe(&brisket.id)?
        .expect("recipe should exist after insert");
    assert_eq!(loaded.video_title, "Texas Brisket");
    assert_eq!(loaded.source, RecipeSource::Youtube);
    assert_eq!(loaded.recipe, brisket.recipe);

    let by_prefix = db
        .find_recipe_by_prefix(brisket.short_id())?
        .expect("prefix lookup should find the recipe");
    assert_eq!(by_prefix.id, brisket.id);

    assert_eq!(db.search_recipes("brisket", 10)?.len(), 1);
    assert_eq!(db.search_recipe_text("post oak", 10)?.len(), 1);
    assert!(db.search_recipe_text("mesquite", 10)?.is_empty());

    assert!(db.delete_recipe(&brisket.id)?);
    assert!(db.get_recipe(&brisket.id)?.is_none());
    assert!(db.search_recipe_text("post oak", 10)?.is_empty());

    Ok(())
}

#[test]
fn repository_keeps_only_newest_recipes() -> Result<()> {
    let tmp = tempdir()?;
    let db = Database::open_path(&tmp.path().join("smokenotes.db"))?;
    let repo = Repository::with_database(db, 3);

    let mut ids = Vec::new();
    for n in 0..5 {
        let saved = recipe(&format!("Cook {}", n), "# Cook\n");
        ids.push(saved.id.clone());
        repo.save(&saved)?;
    }

    let recent = repo.recent(10)?;
    let recent_ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(recent_ids, vec![ids[4].as_str(), ids[3].as_str(), ids[2].as_str()]);
    assert!(repo.find(&ids[0])?.is_none());

    Ok(())
}

#[test]
fn history_survives_reopening() -> Result<()> {
    let tmp = tempdir()?;
    let db_path = tmp.path().join("smokenotes.db");

    let saved = recipe("Smoked Wings", "# Smoked Wings\n");
    {
        let repo = Repository::with_database(Database::open_path(&db_path)?, 20);
        repo.save(&saved)?;
    }

    let repo = Repository::with_database(Database::open_path(&db_path)?, 20);
    let found = repo.search_titles("wings", 10)?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, saved.id);

    Ok(())
}
