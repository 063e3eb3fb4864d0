use crate::models::{LoggedFoodEntry, Nutrient, NutrientSet, Recipe};
use crate::nutrition::{HealthInsights, recommended_range};
use crate::state::LogOutcome;

fn format_amount(nutrient: Nutrient, value: f64) -> String {
    match nutrient {
        Nutrient::Calories | Nutrient::Sodium => format!("{:.0} {}", value, nutrient.unit()),
        _ => format!("{:.1} {}", value, nutrient.unit()),
    }
}

/// Amount left before each nutrient reaches its recommended maximum.
pub fn remaining_to_max(total: &NutrientSet) -> NutrientSet {
    let max = NutrientSet::from_fn(|n| recommended_range(n).max.unwrap_or(0.0));
    max.saturating_sub(total)
}

/// Display today's totals with remaining room against recommended maxima.
pub fn display_daily_totals(total: &NutrientSet) {
    let remaining = remaining_to_max(total);

    println!();
    println!("=== Today's Nutrition ===");
    println!();
    for nutrient in Nutrient::ALL {
        let range = recommended_range(nutrient);
        let left = match range.max {
            Some(_) => format!("  ({} left)", format_amount(nutrient, remaining.get(nutrient))),
            None => match range.min {
                Some(min) => format!("  (goal {})", format_amount(nutrient, min)),
                None => String::new(),
            },
        };
        println!(
            "  {:<8} {:>10}{}",
            nutrient.label(),
            format_amount(nutrient, total.get(nutrient)),
            left
        );
    }
    println!();
}

/// Widest entry name in characters, which is what `{:<width$}` pads by.
fn name_width(entries: &[LoggedFoodEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display the food log.
pub fn display_log(entries: &[LoggedFoodEntry]) {
    if entries.is_empty() {
        println!("Nothing logged today.");
        return;
    }

    println!();
    println!("=== Food Log ({} items) ===", entries.len());
    println!();

    let width = name_width(entries);
    for entry in entries {
        println!(
            "  [{}] {:<width$}  {:>12}  {:>5.0} kcal  P:{:.1} C:{:.1} F:{:.1}",
            entry.short_id(),
            entry.name,
            entry.serving,
            entry.nutrients.calories,
            entry.nutrients.protein,
            entry.nutrients.carbohydrates,
            entry.nutrients.fat,
            width = width
        );
    }
}

/// Summarize a logging action.
pub fn display_log_outcome(outcome: &LogOutcome) {
    for entry in &outcome.entries {
        println!(
            "Added: {} ({}, {:.0} kcal)",
            entry.name, entry.serving, entry.nutrients.calories
        );
    }
    if !outcome.skipped.is_empty() {
        println!("Not found: {}", outcome.skipped.join(", "));
    }
    println!(
        "Batch total: {:.0} kcal, {:.1} g protein",
        outcome.batch_total.calories, outcome.batch_total.protein
    );
}

pub fn display_insights(insights: &HealthInsights) {
    println!();
    println!("Overall status: {}", insights.status);

    if !insights.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &insights.warnings {
            println!("  ! {}", warning);
        }
    }

    if !insights.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &insights.recommendations {
            println!("  - {}", recommendation);
        }
    }
    println!();
}

/// Display recipes, marking favorites with a star.
pub fn display_recipes(recipes: &[&Recipe], favorites: &[u32]) {
    if recipes.is_empty() {
        println!("No recipes.");
        return;
    }

    for recipe in recipes {
        let star = if favorites.contains(&recipe.id) { "*" } else { " " };
        let per = recipe.per_serving();
        println!(
            "{} {:>2}. {} [{}] - {} min, {} servings, {:.0} kcal/serving",
            star,
            recipe.id,
            recipe.label,
            recipe.meal_type.label(),
            recipe.total_time_min,
            recipe.servings,
            per.calories
        );
        let labels: Vec<&str> = recipe
            .diet_labels
            .iter()
            .chain(recipe.health_labels.iter().take(3))
            .map(String::as_str)
            .collect();
        if !labels.is_empty() {
            println!("      {}", labels.join(" · "));
        }
        println!(
            "      P:{:.0} g  C:{:.0} g  F:{:.0} g per serving",
            per.protein, per.carbohydrates, per.fat
        );
        println!("      {} | {}", recipe.source, recipe.ingredients.join("; "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodSource;

    #[test]
    fn test_remaining_floors_at_zero() {
        let total = NutrientSet {
            calories: 1000.0,
            sodium: 2500.0,
            ..NutrientSet::default()
        };
        let remaining = remaining_to_max(&total);
        assert_eq!(remaining.calories, 1500.0);
        assert_eq!(remaining.sodium, 0.0);
        assert_eq!(remaining.fiber, 0.0);
    }

    #[test]
    fn test_name_width_counts_chars() {
        let entry = |name: &str| {
            LoggedFoodEntry::new(
                FoodSource::Recipe { recipe_id: 1 },
                name.to_string(),
                "1 serving".to_string(),
                NutrientSet::default(),
            )
        };
        let entries = vec![entry("Crème brûlée"), entry("Egg")];
        assert_eq!(name_width(&entries), 12);
        let padded = format!("{:<width$}|", entries[1].name, width = name_width(&entries));
        assert_eq!(padded.chars().count(), 13);
        assert_eq!(name_width(&[]), 10);
    }

    #[test]
    fn test_format_amount_units() {
        assert_eq!(format_amount(Nutrient::Calories, 143.4), "143 kcal");
        assert_eq!(format_amount(Nutrient::Protein, 12.56), "12.6 g");
        assert_eq!(format_amount(Nutrient::Sodium, 2300.0), "2300 mg");
    }
}
