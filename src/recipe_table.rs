use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use crate::recipe_aggregator::RecipeCostProfile;
use crate::recipe_model::Ingredient;
use crate::search::RecipeView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table, one line per ingredient
    #[default]
    Table,
    /// Same rows as the table, as CSV
    Csv,
    /// One grouped record per recipe
    Json,
}

/// One grouped record per recipe, the shape used for JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRow<'a> {
    pub name: &'a str,
    pub ingredients: &'a [Ingredient],
    pub servings: Option<u32>,
    #[serde(flatten)]
    pub costs: RecipeCostProfile,
    pub weight: Option<f64>,
    pub image_url: Option<&'a str>,
    pub video_url: Option<&'a str>,
    pub registered_at: Option<&'a str>,
}

impl<'a> From<&RecipeView<'a>> for RecipeRow<'a> {
    fn from(view: &RecipeView<'a>) -> Self {
        let recipe = view.recipe;
        RecipeRow {
            name: &recipe.name,
            ingredients: &recipe.ingredients,
            servings: recipe.servings,
            costs: view.costs,
            weight: recipe.weight,
            image_url: recipe.image_url.as_deref(),
            video_url: recipe.video_url.as_deref(),
            registered_at: recipe.registered_at.as_deref(),
        }
    }
}

/// Recipe-level cells, present only on the first display row of a recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCells {
    pub image: String,
    pub name: String,
    pub servings: String,
    pub total_cost: String,
    pub cost_per_serving: String,
    pub weight: String,
    pub video: String,
    pub registered_at: String,
}

/// A single line of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub recipe: Option<RecipeCells>,
    pub item: String,
    pub amount: String,
    pub cost: String,
}

const HEADERS: [&str; 11] = [
    "Image",
    "Name",
    "Ingredient",
    "Amount",
    "Cost",
    "Servings",
    "Total cost",
    "Cost per serving",
    "Weight (g)",
    "Video",
    "Registered at",
];

fn format_number(value: f64) -> String {
    // Whole numbers print without a fractional part, like the source data
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn recipe_cells(row: &RecipeRow<'_>) -> RecipeCells {
    RecipeCells {
        image: row.image_url.unwrap_or_default().to_string(),
        name: row.name.to_string(),
        servings: row.servings.map(|s| s.to_string()).unwrap_or_default(),
        total_cost: format_number(row.costs.total_cost),
        cost_per_serving: row.costs.formatted_cost_per_serving(),
        weight: row.weight.map(format_number).unwrap_or_default(),
        video: row.video_url.unwrap_or_default().to_string(),
        registered_at: row.registered_at.unwrap_or_default().to_string(),
    }
}

/// Expands grouped recipes into display rows. The first row of each recipe carries
/// the recipe-level cells; a recipe without ingredients still gets one row.
pub fn expand_rows(views: &[RecipeView<'_>]) -> Vec<IngredientRow> {
    let mut rows = Vec::new();
    for view in views {
        let grouped = RecipeRow::from(view);
        let mut cells = Some(recipe_cells(&grouped));

        if grouped.ingredients.is_empty() {
            rows.push(IngredientRow {
                recipe: cells.take(),
                item: String::new(),
                amount: String::new(),
                cost: String::new(),
            });
            continue;
        }

        for ing in grouped.ingredients {
            rows.push(IngredientRow {
                recipe: cells.take(),
                item: ing.item.clone(),
                amount: ing.amount.clone(),
                cost: format_number(ing.cost),
            });
        }
    }
    rows
}

fn row_fields(row: &IngredientRow) -> [String; 11] {
    let cells = row.recipe.clone().unwrap_or_default();
    [
        cells.image,
        cells.name,
        row.item.clone(),
        row.amount.clone(),
        row.cost.clone(),
        cells.servings,
        cells.total_cost,
        cells.cost_per_serving,
        cells.weight,
        cells.video,
        cells.registered_at,
    ]
}

pub fn render_table(views: &[RecipeView<'_>]) -> String {
    let rows: Vec<[String; 11]> = expand_rows(views).iter().map(row_fields).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for fields in &rows {
        for (width, field) in widths.iter_mut().zip(fields.iter()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |fields: &[&str]| {
        let line: Vec<String> = fields
            .iter()
            .zip(widths.iter())
            .map(|(field, width)| format!("{:<width$}", field, width = *width))
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());
    };

    push_line(&HEADERS[..]);
    for fields in &rows {
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        push_line(&refs);
    }
    out
}

pub fn render_csv(views: &[RecipeView<'_>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS).context("Failed to write CSV header")?;
    for row in expand_rows(views) {
        writer
            .write_record(row_fields(&row))
            .context("Failed to write CSV row")?;
    }
    let bytes = writer.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

pub fn render_json(views: &[RecipeView<'_>]) -> Result<String> {
    let rows: Vec<RecipeRow<'_>> = views.iter().map(RecipeRow::from).collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize recipes to JSON")
}

pub fn render(views: &[RecipeView<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(views)),
        OutputFormat::Csv => render_csv(views),
        OutputFormat::Json => render_json(views),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Recipe;
    use crate::search::{FilterCriteria, RecipeFilterEngine};

    fn engine() -> RecipeFilterEngine {
        let mut curry = Recipe::new(
            "Curry",
            vec![
                Ingredient::new("Potato", "2", 50.0),
                Ingredient::new("Curry powder", "2 tbsp", 30.0),
            ],
            Some(2),
        );
        curry.weight = Some(600.0);
        curry.video_url = Some("https://example.com/curry".to_string());
        RecipeFilterEngine::new(vec![curry, Recipe::new("Air", vec![], None)])
    }

    #[test]
    fn test_expand_rows_first_row_carries_recipe_cells() {
        let engine = engine();
        let rows = expand_rows(&engine.filter(&FilterCriteria::new()));
        assert_eq!(rows.len(), 3);

        let first = rows[0].recipe.as_ref().unwrap();
        assert_eq!(first.name, "Curry");
        assert_eq!(first.total_cost, "80");
        assert_eq!(first.cost_per_serving, "40.00");
        assert_eq!(first.weight, "600");
        assert_eq!(rows[0].item, "Potato");

        assert!(rows[1].recipe.is_none());
        assert_eq!(rows[1].item, "Curry powder");
        assert_eq!(rows[1].cost, "30");
    }

    #[test]
    fn test_expand_rows_recipe_without_ingredients() {
        let engine = engine();
        let rows = expand_rows(&engine.filter(&FilterCriteria::new().with_name("Air")));
        assert_eq!(rows.len(), 1);
        let cells = rows[0].recipe.as_ref().unwrap();
        assert_eq!(cells.total_cost, "0");
        assert_eq!(cells.cost_per_serving, "0.00");
        assert_eq!(cells.servings, "");
        assert!(rows[0].item.is_empty());
    }

    #[test]
    fn test_render_table_has_header_and_rows() {
        let engine = engine();
        let table = render_table(&engine.filter(&FilterCriteria::new().with_name("Cur")));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Image"));
        assert!(lines[1].contains("Curry"));
        assert!(lines[1].contains("40.00"));
        assert!(lines[2].contains("Curry powder"));
    }

    #[test]
    fn test_render_csv() -> Result<()> {
        let engine = engine();
        let csv_out = render_csv(&engine.filter(&FilterCriteria::new().with_name("Cur")))?;
        let lines: Vec<&str> = csv_out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Image,Name,Ingredient"));
        assert_eq!(lines[1], ",Curry,Potato,2,50,2,80,40.00,600,https://example.com/curry,");
        assert_eq!(lines[2], ",,Curry powder,2 tbsp,30,,,,,,");
        Ok(())
    }

    #[test]
    fn test_render_json_includes_derived_costs() -> Result<()> {
        let engine = engine();
        let json = render_json(&engine.filter(&FilterCriteria::new().with_name("Cur")))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value[0]["name"], "Curry");
        assert_eq!(value[0]["totalCost"], 80.0);
        assert_eq!(value[0]["costPerServing"], 40.0);
        assert_eq!(value[0]["ingredients"][1]["item"], "Curry powder");
        Ok(())
    }

    #[test]
    fn test_render_empty_result() -> Result<()> {
        assert_eq!(render(&[], OutputFormat::Json)?.trim(), "[]");
        assert_eq!(render(&[], OutputFormat::Table)?.lines().count(), 1);
        Ok(())
    }
}
