use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use crate::recipe_model::Recipe;

/// Parses the bundled recipes document: a top-level JSON array of recipe records.
pub fn parse_recipes_json(content: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(content)
        .context("Recipes data must be a JSON array of recipe objects")?;
    Ok(recipes)
}

pub async fn load_recipes_json(json_path: &Path) -> Result<Vec<Recipe>> {
    if !json_path.exists() {
        return Err(anyhow::anyhow!("Recipes JSON file not found at: {:?}", json_path));
    }

    let content = tokio::fs::read_to_string(json_path)
        .await
        .with_context(|| format!("Failed to read recipes JSON file at {:?}", json_path))?;

    let recipes = parse_recipes_json(&content)
        .with_context(|| format!("Failed to parse recipes JSON file at {:?}", json_path))?;

    info!("Loaded {} recipes from {:?}", recipes.len(), json_path);
    Ok(recipes)
}
