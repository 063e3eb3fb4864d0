use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The seven nutrients tracked per food and per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrates,
    Fat,
    Fiber,
    Sugar,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 7] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::Sodium,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrates => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::Sodium => "Sodium",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }
}

/// Nutrient amounts for a single food or an accumulated day.
///
/// Every field is non-negative. Addition is field-wise; subtraction is
/// field-wise and floored at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
}

impl NutrientSet {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
        }
    }

    /// Set a field, clamping negative and non-finite values to zero.
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let value = non_negative(value);
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::Carbohydrates => self.carbohydrates = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Fiber => self.fiber = value,
            Nutrient::Sugar => self.sugar = value,
            Nutrient::Sodium => self.sodium = value,
        }
    }

    /// Build a set by evaluating `f` for every nutrient.
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> f64) -> Self {
        let mut set = Self::default();
        for nutrient in Nutrient::ALL {
            set.set(nutrient, f(nutrient));
        }
        set
    }

    /// Field-wise subtraction, floored at zero.
    pub fn saturating_sub(&self, other: &NutrientSet) -> NutrientSet {
        NutrientSet::from_fn(|n| self.get(n) - other.get(n))
    }

    pub fn is_zero(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) == 0.0)
    }
}

#[inline]
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Add for NutrientSet {
    type Output = NutrientSet;

    fn add(self, rhs: NutrientSet) -> NutrientSet {
        NutrientSet::from_fn(|n| self.get(n) + rhs.get(n))
    }
}

impl Sum for NutrientSet {
    fn sum<I: Iterator<Item = NutrientSet>>(iter: I) -> Self {
        iter.fold(NutrientSet::default(), Add::add)
    }
}

impl<'a> Sum<&'a NutrientSet> for NutrientSet {
    fn sum<I: Iterator<Item = &'a NutrientSet>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
