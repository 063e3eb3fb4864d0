use serde::de::DeserializeOwned;
use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::error::{Result, WellnessError};
use crate::models::{FoodSource, LoggedFoodEntry, NutrientSet, Recipe, ResolvedFood};
use crate::nutrition::{
    DAILY_TOTALS_KEY, DailyLog, FAVORITES_KEY, FOOD_LOG_KEY, HealthInsights, NAME_MATCH_THRESHOLD,
    evaluate, parse_food_input,
};
use crate::state::persistence::LocalStore;
use crate::usda::{FoodDataSource, FoodResolver};

/// What a logging action produced.
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub entries: Vec<LoggedFoodEntry>,
    /// Names that resolved to nothing.
    pub skipped: Vec<String>,
    pub batch_total: NutrientSet,
}

/// Session state: today's log and favorite recipes, backed by local storage.
pub struct NutritionTracker {
    log: DailyLog,
    favorites: Vec<u32>,
    store: LocalStore,
}

fn load_or_default<T: DeserializeOwned + Default>(store: &LocalStore, key: &str) -> T {
    match store.get(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(key, error = %e, "ignoring unreadable stored value");
            T::default()
        }
    }
}

impl NutritionTracker {
    /// Restore the session from `store`. Unreadable keys start empty.
    pub fn load(store: LocalStore) -> Self {
        let entries: Vec<LoggedFoodEntry> = load_or_default(&store, FOOD_LOG_KEY);
        let favorites: Vec<u32> = load_or_default(&store, FAVORITES_KEY);

        Self {
            log: DailyLog::from_entries(entries),
            favorites,
            store,
        }
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    pub fn entries(&self) -> &[LoggedFoodEntry] {
        self.log.entries()
    }

    pub fn daily_total(&self) -> NutrientSet {
        self.log.total()
    }

    pub fn insights(&self) -> HealthInsights {
        evaluate(&self.daily_total())
    }

    /// Parse `input`, resolve each name and add every match to the log.
    ///
    /// Returns [`WellnessError::NoFoodsFound`] when nothing resolved; the
    /// log is left untouched in that case.
    pub async fn log_foods<S: FoodDataSource>(
        &mut self,
        resolver: &FoodResolver<S>,
        input: &str,
    ) -> Result<LogOutcome> {
        let tokens = parse_food_input(input);
        info!(count = tokens.len(), "logging foods");

        let mut resolved: Vec<ResolvedFood> = Vec::new();
        let mut skipped = Vec::new();
        for resolution in resolver.resolve_all(&tokens).await {
            match resolution.food {
                Some(food) => resolved.push(food),
                None => skipped.push(resolution.token),
            }
        }

        let mut log = self.log.clone();
        let summary = log
            .add_batch(resolved)
            .ok_or(WellnessError::NoFoodsFound)?;
        self.commit_log(log)?;

        Ok(LogOutcome {
            entries: summary.entries,
            skipped,
            batch_total: summary.total,
        })
    }

    /// Log one serving of a recipe.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> Result<LoggedFoodEntry> {
        let entry = LoggedFoodEntry::new(
            FoodSource::Recipe {
                recipe_id: recipe.id,
            },
            recipe.label.clone(),
            recipe.serving_description(),
            recipe.per_serving(),
        );
        let mut log = self.log.clone();
        log.push(entry.clone());
        self.commit_log(log)?;
        Ok(entry)
    }

    /// Remove an entry by id. Unknown ids return `None` and change nothing.
    pub fn remove_entry(&mut self, id: &str) -> Result<Option<LoggedFoodEntry>> {
        let mut log = self.log.clone();
        let removed = log.remove(id);
        if let Some(entry) = &removed {
            self.commit_log(log)?;
            info!(id = %entry.id, name = %entry.name, "removed entry");
        }
        Ok(removed)
    }

    /// Find the entry whose id or id prefix equals `query`.
    pub fn find_by_id(&self, query: &str) -> Option<&LoggedFoodEntry> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.log.get(query).or_else(|| {
            let mut matches = self.entries().iter().filter(|e| e.id.starts_with(query));
            match (matches.next(), matches.next()) {
                (Some(entry), None) => Some(entry),
                _ => None,
            }
        })
    }

    /// Entries whose name resembles `query`, best match first.
    pub fn find_by_name(&self, query: &str) -> Vec<&LoggedFoodEntry> {
        let query = query.trim().to_lowercase();
        let mut scored: Vec<(&LoggedFoodEntry, f64)> = self
            .entries()
            .iter()
            .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > NAME_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(e, _)| e).collect()
    }

    pub fn favorites(&self) -> &[u32] {
        &self.favorites
    }

    pub fn is_favorite(&self, recipe_id: u32) -> bool {
        self.favorites.contains(&recipe_id)
    }

    /// Toggle a favorite. Returns true when the recipe is now a favorite.
    pub fn toggle_favorite(&mut self, recipe_id: u32) -> Result<bool> {
        let mut favorites = self.favorites.clone();
        let now_favorite = if self.is_favorite(recipe_id) {
            favorites.retain(|&id| id != recipe_id);
            false
        } else {
            favorites.push(recipe_id);
            true
        };
        self.store.set(FAVORITES_KEY, &favorites)?;
        self.favorites = favorites;
        Ok(now_favorite)
    }

    /// Start a new day: clear the log and its totals snapshot.
    pub fn reset_day(&mut self) -> Result<()> {
        self.commit_log(DailyLog::new())
    }

    /// Write `log` and a snapshot of its totals, then make it the session log.
    /// On a failed write the session keeps its previous log.
    fn commit_log(&mut self, log: DailyLog) -> Result<()> {
        self.store.set(FOOD_LOG_KEY, &log.entries())?;
        self.store.set(DAILY_TOTALS_KEY, &log.total())?;
        self.log = log;
        Ok(())
    }
}
