use crate::models::Nutrient;

// ─────────────────────────────────────────────────────────────────────────────
// USDA FoodData Central nutrient identifiers
// ─────────────────────────────────────────────────────────────────────────────

pub const ENERGY_KCAL_ID: u64 = 1008;
pub const PROTEIN_ID: u64 = 1003;
pub const CARBOHYDRATE_ID: u64 = 1005;
pub const TOTAL_FAT_ID: u64 = 1004;
pub const FIBER_ID: u64 = 1079;
pub const SUGAR_ID: u64 = 2000;
pub const SODIUM_ID: u64 = 1093;

/// Provider nutrient identifier for a tracked nutrient.
pub fn fdc_nutrient_id(nutrient: Nutrient) -> u64 {
    match nutrient {
        Nutrient::Calories => ENERGY_KCAL_ID,
        Nutrient::Protein => PROTEIN_ID,
        Nutrient::Carbohydrates => CARBOHYDRATE_ID,
        Nutrient::Fat => TOTAL_FAT_ID,
        Nutrient::Fiber => FIBER_ID,
        Nutrient::Sugar => SUGAR_ID,
        Nutrient::Sodium => SODIUM_ID,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recommended daily ranges
// ─────────────────────────────────────────────────────────────────────────────

/// Optional lower and upper bound for a daily nutrient total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RecommendedRange {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// True when `value` is strictly above `max * factor`.
    pub fn exceeds(&self, value: f64, factor: f64) -> bool {
        self.max.is_some_and(|max| value > max * factor)
    }
}

pub const CALORIES_RANGE: RecommendedRange = RecommendedRange::between(1800.0, 2500.0);
pub const PROTEIN_RANGE: RecommendedRange = RecommendedRange::between(50.0, 150.0);
pub const CARBOHYDRATES_RANGE: RecommendedRange = RecommendedRange::between(225.0, 325.0);
pub const FAT_RANGE: RecommendedRange = RecommendedRange::between(44.0, 78.0);
pub const FIBER_RANGE: RecommendedRange = RecommendedRange::at_least(25.0);
pub const SUGAR_RANGE: RecommendedRange = RecommendedRange::at_most(50.0);
pub const SODIUM_RANGE: RecommendedRange = RecommendedRange::at_most(2300.0);

/// Calories only raise a warning once they pass this multiple of the maximum.
pub const CALORIE_OVERSHOOT_FACTOR: f64 = 1.2;

pub fn recommended_range(nutrient: Nutrient) -> RecommendedRange {
    match nutrient {
        Nutrient::Calories => CALORIES_RANGE,
        Nutrient::Protein => PROTEIN_RANGE,
        Nutrient::Carbohydrates => CARBOHYDRATES_RANGE,
        Nutrient::Fat => FAT_RANGE,
        Nutrient::Fiber => FIBER_RANGE,
        Nutrient::Sugar => SUGAR_RANGE,
        Nutrient::Sodium => SODIUM_RANGE,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Insight messages
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_WARNING: &str = "Calorie intake is well above the recommended daily maximum";
pub const PROTEIN_WARNING: &str = "Protein intake exceeds the recommended daily amount";
pub const SUGAR_WARNING: &str = "Sugar intake is above the recommended daily limit";
pub const SUGAR_RECOMMENDATION: &str = "Cut back on sugary drinks, desserts and sweetened snacks";
pub const SODIUM_WARNING: &str = "Sodium intake is above the recommended daily limit";
pub const SODIUM_RECOMMENDATION: &str = "Limit processed foods and added salt";

// ─────────────────────────────────────────────────────────────────────────────
// Local storage keys
// ─────────────────────────────────────────────────────────────────────────────

pub const FOOD_LOG_KEY: &str = "wellnessHub_foodLog";
pub const DAILY_TOTALS_KEY: &str = "wellnessHub_dailyNutrition";
pub const FAVORITES_KEY: &str = "wellnessHub_favoriteRecipes";

/// Jaro-Winkler score needed for a name to match a log entry.
pub const NAME_MATCH_THRESHOLD: f64 = 0.7;
