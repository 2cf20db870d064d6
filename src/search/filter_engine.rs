use log::debug;
use serde::Serialize;

use crate::recipe_aggregator::{calculate_cost_profile, RecipeCostProfile};
use crate::recipe_model::Recipe;
use crate::search::criteria::{CostBound, FilterCriteria, IngredientMode};

/// A retained recipe together with its derived costs.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView<'a> {
    pub recipe: &'a Recipe,
    pub costs: RecipeCostProfile,
}

impl FilterCriteria {
    /// Evaluates every criterion against one recipe. All of them must hold.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_with_costs(recipe, &calculate_cost_profile(recipe))
    }

    fn matches_with_costs(&self, recipe: &Recipe, costs: &RecipeCostProfile) -> bool {
        if !self.name_query.is_empty() && !recipe.name.contains(self.name_query.as_str()) {
            return false;
        }

        if !self.matches_ingredients(recipe) {
            return false;
        }

        within_bounds(costs.total_cost, &self.min_total_cost, &self.max_total_cost)
            && within_bounds(costs.cost_per_serving, &self.min_cost_per_serving, &self.max_cost_per_serving)
    }

    fn matches_ingredients(&self, recipe: &Recipe) -> bool {
        let keywords = self.ingredient_keywords();
        if keywords.is_empty() {
            return true;
        }

        let has_keyword = |keyword: &&str| recipe.ingredients.iter().any(|ing| ing.item.contains(*keyword));
        match self.ingredient_mode {
            IngredientMode::Or => keywords.iter().any(has_keyword),
            IngredientMode::And => keywords.iter().all(has_keyword),
        }
    }
}

fn within_bounds(value: f64, min: &CostBound, max: &CostBound) -> bool {
    if let Some(lower) = min.value() {
        if value < lower {
            return false;
        }
    }
    if let Some(upper) = max.value() {
        if value > upper {
            return false;
        }
    }
    true
}

/// Returns the recipes matching `criteria`, in their original order.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|recipe| criteria.matches(recipe)).collect()
}

/// Owns the recipe collection loaded at startup and answers filter queries over it.
/// The collection is never modified after construction.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilterEngine {
    recipes: Vec<Recipe>,
}

impl RecipeFilterEngine {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<RecipeView<'_>> {
        let views: Vec<RecipeView<'_>> = self
            .recipes
            .iter()
            .filter_map(|recipe| {
                let costs = calculate_cost_profile(recipe);
                criteria
                    .matches_with_costs(recipe, &costs)
                    .then_some(RecipeView { recipe, costs })
            })
            .collect();
        debug!("Filter retained {}/{} recipes", views.len(), self.recipes.len());
        views
    }
}
