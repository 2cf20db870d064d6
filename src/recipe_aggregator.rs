use serde::{Deserialize, Serialize};
use crate::recipe_model::Recipe;

// Derived per-recipe values; computed on demand, never stored on the recipe itself
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCostProfile {
    pub total_cost: f64,
    pub cost_per_serving: f64,
}

impl RecipeCostProfile {
    /// Cost per serving rounded to two decimals, as shown in the recipe table.
    pub fn formatted_cost_per_serving(&self) -> String {
        format!("{:.2}", self.cost_per_serving)
    }
}

/// Sum of every ingredient cost. An empty ingredient list costs 0.
pub fn total_cost(recipe: &Recipe) -> f64 {
    recipe.ingredients.iter().map(|ing| ing.cost).sum()
}

/// Total cost divided by servings, or 0 when servings is absent or zero.
pub fn cost_per_serving(recipe: &Recipe) -> f64 {
    per_serving(total_cost(recipe), recipe.servings)
}

fn per_serving(total: f64, servings: Option<u32>) -> f64 {
    match servings {
        Some(n) if n > 0 => total / n as f64,
        _ => 0.0,
    }
}

pub fn calculate_cost_profile(recipe: &Recipe) -> RecipeCostProfile {
    let total = total_cost(recipe);
    RecipeCostProfile {
        total_cost: total,
        cost_per_serving: per_serving(total, recipe.servings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Ingredient;

    fn curry() -> Recipe {
        Recipe::new(
            "Curry",
            vec![
                Ingredient::new("Potato", "2", 50.0),
                Ingredient::new("Curry powder", "2 tbsp", 30.0),
            ],
            Some(2),
        )
    }

    #[test]
    fn test_total_cost_sums_ingredients() {
        assert_eq!(total_cost(&curry()), 80.0);
    }

    #[test]
    fn test_total_cost_empty_ingredients_is_zero() {
        let recipe = Recipe::new("Nothing", vec![], Some(4));
        assert_eq!(total_cost(&recipe), 0.0);
        assert_eq!(cost_per_serving(&recipe), 0.0);
    }

    #[test]
    fn test_cost_per_serving_divides_by_servings() {
        let profile = calculate_cost_profile(&curry());
        assert_eq!(profile.total_cost, 80.0);
        assert_eq!(profile.cost_per_serving, 40.0);
        assert_eq!(profile.formatted_cost_per_serving(), "40.00");
    }

    #[test]
    fn test_cost_per_serving_zero_or_missing_servings() {
        let mut recipe = curry();
        recipe.servings = Some(0);
        assert_eq!(cost_per_serving(&recipe), 0.0);
        recipe.servings = None;
        assert_eq!(cost_per_serving(&recipe), 0.0);
        assert_eq!(calculate_cost_profile(&recipe).total_cost, 80.0);
    }

    #[test]
    fn test_formatted_cost_per_serving_rounds() {
        let recipe = Recipe::new("Thirds", vec![Ingredient::new("Rice", "1 cup", 100.0)], Some(3));
        assert_eq!(calculate_cost_profile(&recipe).formatted_cost_per_serving(), "33.33");
    }
}
