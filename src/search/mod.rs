pub mod criteria;
pub mod data_loader;
pub mod filter_engine;

pub use criteria::{CostBound, FilterCriteria, IngredientMode};
pub use data_loader::{load_recipes_json, parse_recipes_json};
pub use filter_engine::{filter_recipes, RecipeFilterEngine, RecipeView};
