use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::NutrientSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snacks",
        }
    }
}

/// A recipe from the built-in catalog. Nutrient totals cover the whole yield.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: u32,
    pub label: String,
    pub source: String,
    pub meal_type: MealType,
    pub servings: u32,
    pub total_time_min: u32,
    pub diet_labels: Vec<String>,
    pub health_labels: Vec<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Nutrients for one serving, rounded to whole units.
    pub fn per_serving(&self) -> NutrientSet {
        let servings = self.servings.max(1) as f64;
        NutrientSet {
            calories: (self.calories / servings).round(),
            protein: (self.protein / servings).round(),
            carbohydrates: (self.carbs / servings).round(),
            fat: (self.fat / servings).round(),
            ..NutrientSet::default()
        }
    }

    pub fn serving_description(&self) -> String {
        format!("1 of {} servings", self.servings.max(1))
    }
}
