use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How multiple ingredient keywords combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientMode {
    /// At least one keyword must match some ingredient
    #[default]
    Or,
    /// Every keyword must match some ingredient (not necessarily the same one)
    And,
}

impl fmt::Display for IngredientMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientMode::Or => write!(f, "OR"),
            IngredientMode::And => write!(f, "AND"),
        }
    }
}

impl FromStr for IngredientMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OR" => Ok(IngredientMode::Or),
            "AND" => Ok(IngredientMode::And),
            other => Err(anyhow::anyhow!("Unknown ingredient mode '{}', expected OR or AND", other)),
        }
    }
}

/// An inclusive numeric bound entered as text.
///
/// Text that does not parse to a number (including the empty string and `NaN`)
/// is unset and imposes no constraint. Zero and negative values are kept as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostBound {
    raw: String,
    value: Option<f64>,
}

impl CostBound {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: parse_optional_f64(raw),
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Current search inputs. A default value matches every recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub name_query: String,
    pub ingredient_query: String,
    pub ingredient_mode: IngredientMode,
    pub min_total_cost: CostBound,
    pub max_total_cost: CostBound,
    pub min_cost_per_serving: CostBound,
    pub max_cost_per_serving: CostBound,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    pub fn with_ingredients(mut self, query: impl Into<String>, mode: IngredientMode) -> Self {
        self.ingredient_query = query.into();
        self.ingredient_mode = mode;
        self
    }

    pub fn with_total_cost(mut self, min: &str, max: &str) -> Self {
        self.min_total_cost = CostBound::parse(min);
        self.max_total_cost = CostBound::parse(max);
        self
    }

    pub fn with_cost_per_serving(mut self, min: &str, max: &str) -> Self {
        self.min_cost_per_serving = CostBound::parse(min);
        self.max_cost_per_serving = CostBound::parse(max);
        self
    }

    /// Keywords of the ingredient query, split on whitespace. Matching stays literal:
    /// case and punctuation are preserved.
    pub fn ingredient_keywords(&self) -> Vec<&str> {
        self.ingredient_query.split_whitespace().collect()
    }

    /// True when no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty()
            && self.ingredient_keywords().is_empty()
            && !self.min_total_cost.is_set()
            && !self.max_total_cost.is_set()
            && !self.min_cost_per_serving.is_set()
            && !self.max_cost_per_serving.is_set()
    }
}
