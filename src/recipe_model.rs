use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub item: String,
    #[serde(default)]
    pub amount: String, // free text, e.g. "2個" or "200g"
    pub cost: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub servings: Option<u32>,
    // Display-only attributes below, never consulted by the filter.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub registered_at: Option<String>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: impl Into<String>, cost: f64) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
            cost,
        }
    }
}

impl Recipe {
    /// Builds a recipe with only the fields the filter looks at; display attributes are left empty.
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>, servings: Option<u32>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            servings,
            weight: None,
            image_url: None,
            video_url: None,
            registered_at: None,
        }
    }
}
