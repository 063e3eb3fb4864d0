use std::path::Path;

use clap::Parser;
use tracing::debug;

use wellness_hub_rs::cli::{Cli, Command};
use wellness_hub_rs::error::{Result, WellnessError};
use wellness_hub_rs::interface::{
    display_daily_totals, display_insights, display_log, display_log_outcome, display_recipes,
    prompt_food_entry, prompt_yes_no, select_entry,
};
use wellness_hub_rs::logging::LoggingConfig;
use wellness_hub_rs::models::{MealType, Recipe};
use wellness_hub_rs::recipes::{all_recipes, find_recipe, recipes_for};
use wellness_hub_rs::state::{LocalStore, NutritionTracker, write_log_csv};
use wellness_hub_rs::usda::{FoodResolver, RelayClient, ResolverConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = LoggingConfig::from_env("warn").init() {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let store = LocalStore::open(&cli.file)?;
    debug!(path = %store.path().display(), "opened local store");
    let mut tracker = NutritionTracker::load(store);

    match command {
        Command::Show => cmd_show(&tracker),
        Command::Log { text } => {
            let config = ResolverConfig::from(&cli.resolver);
            cmd_log(&mut tracker, &config, text).await
        }
        Command::Remove { entry } => cmd_remove(&mut tracker, entry.as_deref()),
        Command::Insights => cmd_insights(&tracker),
        Command::Recipes { meal, favorites } => cmd_recipes(&tracker, meal, favorites),
        Command::Favorite { recipe_id } => cmd_favorite(&mut tracker, recipe_id),
        Command::AddRecipe { recipe_id } => cmd_add_recipe(&mut tracker, recipe_id),
        Command::Export { path } => cmd_export(&tracker, &path),
        Command::Reset => cmd_reset(&mut tracker),
    }
}

/// Show the log and today's totals.
fn cmd_show(tracker: &NutritionTracker) -> Result<()> {
    display_log(tracker.entries());
    display_daily_totals(&tracker.daily_total());
    Ok(())
}

/// Resolve free text against the food database and log the matches.
async fn cmd_log(
    tracker: &mut NutritionTracker,
    config: &ResolverConfig,
    text: Option<String>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => prompt_food_entry()?,
    };

    let resolver = FoodResolver::new(RelayClient::new(config)?).with_concurrency(config.concurrency);

    println!("Looking up foods...");
    match tracker.log_foods(&resolver, &text).await {
        Ok(outcome) => {
            display_log_outcome(&outcome);
            display_daily_totals(&tracker.daily_total());
            Ok(())
        }
        // Reported, not fatal.
        Err(WellnessError::NoFoodsFound) => {
            println!("{}", WellnessError::NoFoodsFound);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Remove an entry by id, by name, or interactively.
fn cmd_remove(tracker: &mut NutritionTracker, query: Option<&str>) -> Result<()> {
    if tracker.entries().is_empty() {
        println!("Nothing logged today.");
        return Ok(());
    }

    let id = match query {
        Some(query) => match tracker.find_by_id(query) {
            Some(entry) => Some(entry.id.clone()),
            None => {
                let matches = tracker.find_by_name(query);
                match matches.as_slice() {
                    [] => return Err(WellnessError::EntryNotFound(query.to_string())),
                    [only] => {
                        let prompt = format!("Remove '{}'?", only.name);
                        prompt_yes_no(&prompt, true)?.then(|| only.id.clone())
                    }
                    many => select_entry("Which entry?", many)?.map(|e| e.id.clone()),
                }
            }
        },
        None => {
            let all: Vec<_> = tracker.entries().iter().collect();
            select_entry("Remove which entry?", &all)?.map(|e| e.id.clone())
        }
    };

    let Some(id) = id else {
        println!("Nothing removed.");
        return Ok(());
    };

    if let Some(removed) = tracker.remove_entry(&id)? {
        println!("Removed: {}", removed.name);
        display_daily_totals(&tracker.daily_total());
    }
    Ok(())
}

fn cmd_insights(tracker: &NutritionTracker) -> Result<()> {
    display_daily_totals(&tracker.daily_total());
    display_insights(&tracker.insights());
    Ok(())
}

fn cmd_recipes(tracker: &NutritionTracker, meal: Option<MealType>, favorites: bool) -> Result<()> {
    let mut recipes: Vec<&Recipe> = match meal {
        Some(meal) => recipes_for(meal),
        None => all_recipes().iter().collect(),
    };
    if favorites {
        recipes.retain(|r| tracker.is_favorite(r.id));
    }

    display_recipes(&recipes, tracker.favorites());
    Ok(())
}

fn cmd_favorite(tracker: &mut NutritionTracker, recipe_id: u32) -> Result<()> {
    let recipe = find_recipe(recipe_id).ok_or(WellnessError::RecipeNotFound(recipe_id))?;
    if tracker.toggle_favorite(recipe_id)? {
        println!("Added '{}' to favorites.", recipe.label);
    } else {
        println!("Removed '{}' from favorites.", recipe.label);
    }
    Ok(())
}

fn cmd_add_recipe(tracker: &mut NutritionTracker, recipe_id: u32) -> Result<()> {
    let recipe = find_recipe(recipe_id).ok_or(WellnessError::RecipeNotFound(recipe_id))?;
    let entry = tracker.add_recipe(recipe)?;
    println!(
        "Added: {} ({}, {:.0} kcal)",
        entry.name, entry.serving, entry.nutrients.calories
    );
    display_daily_totals(&tracker.daily_total());
    Ok(())
}

fn cmd_export(tracker: &NutritionTracker, path: &Path) -> Result<()> {
    write_log_csv(tracker.entries(), path)?;
    println!(
        "Exported {} entries to {}",
        tracker.entries().len(),
        path.display()
    );
    Ok(())
}

fn cmd_reset(tracker: &mut NutritionTracker) -> Result<()> {
    if tracker.entries().is_empty() {
        println!("Nothing logged today.");
        return Ok(());
    }
    if prompt_yes_no("Clear today's log?", false)? {
        tracker.reset_day()?;
        println!("Today's log cleared.");
    }
    Ok(())
}
