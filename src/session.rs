//! Interactive filtering over a loaded recipe collection.
//!
//! Each command changes at most one search input and then recomputes the filtered
//! view from scratch. Nothing is cached between commands.

use anyhow::Result;
use log::debug;

use crate::search::{CostBound, FilterCriteria, IngredientMode, RecipeFilterEngine, RecipeView};

/// A single search input that can be edited on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaField {
    Name(String),
    Ingredients(String),
    Mode(IngredientMode),
    MinTotalCost(String),
    MaxTotalCost(String),
    MinCostPerServing(String),
    MaxCostPerServing(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set(CriteriaField),
    Clear,
    Show,
    Quit,
}

#[derive(Debug)]
pub enum SessionOutcome<'a> {
    Updated(Vec<RecipeView<'a>>),
    Finished,
}

pub const COMMAND_HELP: &str = "\
Commands:
  name <text>          filter by recipe name
  ingredients <words>  filter by ingredient keywords
  mode or|and          how ingredient keywords combine
  min-total <n>        minimum total cost
  max-total <n>        maximum total cost
  min-serving <n>      minimum cost per serving
  max-serving <n>      maximum cost per serving
  clear                reset every filter
  show                 print the current result
  quit                 leave
A field command without a value clears that field.";

/// Parses one input line. Field values are taken verbatim after the first space.
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim_start();
    let (keyword, value) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (line.trim_end(), ""),
    };

    let command = match keyword {
        "name" => SessionCommand::Set(CriteriaField::Name(value.to_string())),
        "ingredients" => SessionCommand::Set(CriteriaField::Ingredients(value.to_string())),
        "mode" => {
            let mode = if value.trim().is_empty() {
                IngredientMode::default()
            } else {
                value.parse()?
            };
            SessionCommand::Set(CriteriaField::Mode(mode))
        }
        "min-total" => SessionCommand::Set(CriteriaField::MinTotalCost(value.to_string())),
        "max-total" => SessionCommand::Set(CriteriaField::MaxTotalCost(value.to_string())),
        "min-serving" => SessionCommand::Set(CriteriaField::MinCostPerServing(value.to_string())),
        "max-serving" => SessionCommand::Set(CriteriaField::MaxCostPerServing(value.to_string())),
        "clear" => SessionCommand::Clear,
        "show" | "" => SessionCommand::Show,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(anyhow::anyhow!("Unknown command '{}'", other)),
    };
    Ok(command)
}

pub struct FilterSession {
    engine: RecipeFilterEngine,
    criteria: FilterCriteria,
}

impl FilterSession {
    pub fn new(engine: RecipeFilterEngine) -> Self {
        Self::with_criteria(engine, FilterCriteria::default())
    }

    pub fn with_criteria(engine: RecipeFilterEngine, criteria: FilterCriteria) -> Self {
        Self { engine, criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn engine(&self) -> &RecipeFilterEngine {
        &self.engine
    }

    pub fn current_view(&self) -> Vec<RecipeView<'_>> {
        self.engine.filter(&self.criteria)
    }

    pub fn apply(&mut self, command: SessionCommand) -> SessionOutcome<'_> {
        match command {
            SessionCommand::Set(field) => self.set_field(field),
            SessionCommand::Clear => self.criteria = FilterCriteria::default(),
            SessionCommand::Show => {}
            SessionCommand::Quit => return SessionOutcome::Finished,
        }
        debug!("Criteria now {:?}", self.criteria);
        SessionOutcome::Updated(self.current_view())
    }

    fn set_field(&mut self, field: CriteriaField) {
        let criteria = &mut self.criteria;
        match field {
            CriteriaField::Name(query) => criteria.name_query = query,
            CriteriaField::Ingredients(query) => criteria.ingredient_query = query,
            CriteriaField::Mode(mode) => criteria.ingredient_mode = mode,
            CriteriaField::MinTotalCost(raw) => criteria.min_total_cost = CostBound::parse(&raw),
            CriteriaField::MaxTotalCost(raw) => criteria.max_total_cost = CostBound::parse(&raw),
            CriteriaField::MinCostPerServing(raw) => criteria.min_cost_per_serving = CostBound::parse(&raw),
            CriteriaField::MaxCostPerServing(raw) => criteria.max_cost_per_serving = CostBound::parse(&raw),
        }
    }
}
