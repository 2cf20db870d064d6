use anyhow::{Context, Result};
use log::{info, warn};
use recipe_cost_filter::cli::{parse_args, RECIPES_PATH_ENV_VAR};
use recipe_cost_filter::recipe_table::{render, OutputFormat};
use recipe_cost_filter::search::{load_recipes_json, RecipeFilterEngine};
use recipe_cost_filter::session::{parse_command, FilterSession, SessionOutcome, COMMAND_HELP};
use tokio::io::{AsyncBufReadExt, BufReader};

async fn run_interactive(mut session: FilterSession, format: OutputFormat) -> Result<()> {
    eprintln!("{}", COMMAND_HELP);
    println!("{}", render(&session.current_view(), format)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.apply(command) {
            SessionOutcome::Updated(views) => {
                println!("{}", render(&views, format)?);
                eprintln!("{} recipe(s) match", views.len());
            }
            SessionOutcome::Finished => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli_args = parse_args();
    let recipes_path = cli_args.resolve_recipes_path(std::env::var(RECIPES_PATH_ENV_VAR).ok());
    info!("Reading recipes from {:?}", recipes_path);

    let recipes = load_recipes_json(&recipes_path)
        .await
        .with_context(|| format!("Failed to load recipes from '{}'", recipes_path.display()))?;
    if recipes.is_empty() {
        warn!("Recipe collection at {:?} is empty", recipes_path);
    }

    let engine = RecipeFilterEngine::new(recipes);
    let session = FilterSession::with_criteria(engine, cli_args.criteria());

    if cli_args.interactive {
        return run_interactive(session, cli_args.format).await;
    }

    let output = render(&session.current_view(), cli_args.format)?;
    print!("{}", output);
    Ok(())
}
