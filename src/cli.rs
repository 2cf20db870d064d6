use clap::Parser;
use std::path::PathBuf;

use crate::recipe_table::OutputFormat;
use crate::search::{CostBound, FilterCriteria, IngredientMode};

/// Environment variable consulted when `--recipes-file` is not given
pub const RECIPES_PATH_ENV_VAR: &str = "RECIPES_JSON_PATH";
pub const DEFAULT_RECIPES_PATH: &str = "data/recipes.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Search recipes by name, ingredients and cost", long_about = None)]
pub struct Cli {
    /// Path to the recipes JSON file
    #[arg(short, long)]
    pub recipes_file: Option<PathBuf>,

    /// Substring of the recipe name (case-sensitive)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Space-separated ingredient keywords
    #[arg(short, long, default_value = "")]
    pub ingredients: String,

    /// How ingredient keywords combine
    #[arg(short, long, value_enum, ignore_case = true, default_value = "or")]
    pub mode: IngredientMode,

    /// Minimum total cost (inclusive); non-numeric values are ignored
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub min_total_cost: String,

    /// Maximum total cost (inclusive); non-numeric values are ignored
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub max_total_cost: String,

    /// Minimum cost per serving (inclusive); non-numeric values are ignored
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub min_cost_per_serving: String,

    /// Maximum cost per serving (inclusive); non-numeric values are ignored
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub max_cost_per_serving: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Read filter commands from stdin and re-filter after each one
    #[arg(long)]
    pub interactive: bool,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name_query: self.name.clone(),
            ingredient_query: self.ingredients.clone(),
            ingredient_mode: self.mode,
            min_total_cost: CostBound::parse(&self.min_total_cost),
            max_total_cost: CostBound::parse(&self.max_total_cost),
            min_cost_per_serving: CostBound::parse(&self.min_cost_per_serving),
            max_cost_per_serving: CostBound::parse(&self.max_cost_per_serving),
        }
    }

    /// Flag first, then the environment, then the bundled default.
    pub fn resolve_recipes_path(&self, env_value: Option<String>) -> PathBuf {
        self.recipes_file
            .clone()
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPES_PATH))
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
