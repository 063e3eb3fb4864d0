use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NutrientSet;

/// Serving description used when a search result carries no serving size.
/// Detail nutrient amounts are reported per 100 g.
pub const DEFAULT_SERVING: &str = "100 g";

/// One search hit from the food-data provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCandidate {
    #[serde(default)]
    pub fdc_id: Option<u64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub data_type: Option<String>,

    #[serde(default)]
    pub serving_size: Option<f64>,

    #[serde(default)]
    pub serving_size_unit: Option<String>,
}

impl FoodCandidate {
    /// Non-blank description, if the provider sent one.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Serving description, e.g. "50 g".
    pub fn serving_description(&self) -> String {
        match (self.serving_size, self.serving_size_unit.as_deref()) {
            (Some(size), Some(unit)) if size > 0.0 => format!("{} {}", size, unit.to_lowercase()),
            _ => DEFAULT_SERVING.to_string(),
        }
    }
}

/// A food name that resolved to provider nutrient data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFood {
    pub fdc_id: u64,
    pub name: String,
    pub serving: String,
    pub nutrients: NutrientSet,
}

/// Where a logged entry's nutrient data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FoodSource {
    Usda { fdc_id: u64 },
    Recipe { recipe_id: u32 },
}

impl std::fmt::Display for FoodSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodSource::Usda { fdc_id } => write!(f, "usda:{}", fdc_id),
            FoodSource::Recipe { recipe_id } => write!(f, "recipe:{}", recipe_id),
        }
    }
}

/// A single item in today's food log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFoodEntry {
    /// Locally generated, unique per log action.
    pub id: String,

    pub source: FoodSource,

    pub name: String,

    pub serving: String,

    pub nutrients: NutrientSet,

    pub logged_at: DateTime<Utc>,
}

impl LoggedFoodEntry {
    pub fn new(source: FoodSource, name: String, serving: String, nutrients: NutrientSet) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            source,
            name,
            serving,
            nutrients,
            logged_at: Utc::now(),
        }
    }

    /// Short form of the id for display and lookup.
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}

impl From<ResolvedFood> for LoggedFoodEntry {
    fn from(food: ResolvedFood) -> Self {
        LoggedFoodEntry::new(
            FoodSource::Usda { fdc_id: food.fdc_id },
            food.name,
            food.serving,
            food.nutrients,
        )
    }
}
