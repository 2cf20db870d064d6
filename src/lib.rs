pub mod cli;
pub mod recipe_aggregator;
pub mod recipe_model;
pub mod recipe_table;
pub mod search;
pub mod session;
