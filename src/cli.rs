use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::models::MealType;
use crate::usda::ResolverConfig;
use crate::usda::config::{DEFAULT_DETAIL_URL, DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT_SECS};

/// Wellness Hub: log what you eat and check it against daily recommendations.
#[derive(Parser, Debug)]
#[command(name = "wellness_hub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the local state file.
    #[arg(short, long, env = "WELLNESS_STATE_FILE", default_value = "wellness_state.json")]
    pub file: PathBuf,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ResolverArgs {
    /// Relay endpoint for food search.
    #[arg(long, env = "WELLNESS_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Relay endpoint for food details.
    #[arg(long, env = "WELLNESS_DETAIL_URL", default_value = DEFAULT_DETAIL_URL)]
    pub detail_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "WELLNESS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Food names resolved at once (1 = one after another).
    #[arg(long, env = "WELLNESS_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,
}

impl From<&ResolverArgs> for ResolverConfig {
    fn from(args: &ResolverArgs) -> Self {
        ResolverConfig {
            search_url: args.search_url.clone(),
            detail_url: args.detail_url.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
            concurrency: args.concurrency.max(1),
        }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show today's log and nutrition totals.
    #[default]
    Show,

    /// Log foods from free text, e.g. "egg, toast and coffee".
    Log {
        /// Foods eaten. Prompts when omitted.
        text: Option<String>,
    },

    /// Remove a logged entry by id, id prefix or name.
    Remove {
        /// Entry to remove. Prompts with a list when omitted.
        entry: Option<String>,
    },

    /// Check today's totals against recommended ranges.
    Insights,

    /// List recipes.
    Recipes {
        /// Only show one meal type.
        #[arg(long, value_enum)]
        meal: Option<MealType>,

        /// Only show favorites.
        #[arg(long)]
        favorites: bool,
    },

    /// Toggle a recipe as favorite.
    Favorite {
        /// Recipe id.
        recipe_id: u32,
    },

    /// Add one serving of a recipe to today's log.
    AddRecipe {
        /// Recipe id.
        recipe_id: u32,
    },

    /// Export today's log as CSV.
    Export {
        /// Output file.
        #[arg(default_value = "food_log.csv")]
        path: PathBuf,
    },

    /// Clear today's log.
    Reset,
}
