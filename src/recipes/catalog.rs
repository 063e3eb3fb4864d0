use std::sync::LazyLock;

use crate::models::{MealType, Recipe};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in recipes.
pub static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe {
            id: 1,
            label: "Avocado Toast with Eggs".into(),
            source: "Healthy Meals".into(),
            meal_type: MealType::Breakfast,
            servings: 2,
            total_time_min: 15,
            diet_labels: strings(&["High-Fiber", "Vegetarian"]),
            health_labels: strings(&["Vegetarian", "Gluten-Free-Option"]),
            calories: 320.0,
            protein: 18.0,
            carbs: 25.0,
            fat: 20.0,
            ingredients: strings(&[
                "2 slices whole grain bread",
                "1 ripe avocado",
                "2 eggs",
                "Salt and pepper to taste",
                "Optional: red pepper flakes",
            ]),
        },
        Recipe {
            id: 2,
            label: "Greek Yogurt Berry Bowl".into(),
            source: "Nutrition Plus".into(),
            meal_type: MealType::Breakfast,
            servings: 1,
            total_time_min: 5,
            diet_labels: strings(&["High-Protein", "Low-Fat"]),
            health_labels: strings(&["Vegetarian", "Gluten-Free"]),
            calories: 280.0,
            protein: 20.0,
            carbs: 35.0,
            fat: 8.0,
            ingredients: strings(&[
                "1 cup Greek yogurt",
                "1/2 cup mixed berries",
                "2 tbsp granola",
                "1 tbsp honey",
                "1 tbsp chia seeds",
            ]),
        },
        Recipe {
            id: 3,
            label: "Quinoa Buddha Bowl".into(),
            source: "Plant Based".into(),
            meal_type: MealType::Lunch,
            servings: 2,
            total_time_min: 30,
            diet_labels: strings(&["High-Fiber", "Vegan"]),
            health_labels: strings(&["Vegan", "Gluten-Free"]),
            calories: 420.0,
            protein: 15.0,
            carbs: 65.0,
            fat: 12.0,
            ingredients: strings(&[
                "1 cup cooked quinoa",
                "1 cup roasted vegetables",
                "1/2 avocado",
                "2 tbsp hummus",
                "Mixed greens",
                "Lemon tahini dressing",
            ]),
        },
        Recipe {
            id: 4,
            label: "Grilled Salmon with Vegetables".into(),
            source: "Healthy Kitchen".into(),
            meal_type: MealType::Dinner,
            servings: 2,
            total_time_min: 25,
            diet_labels: strings(&["High-Protein", "Low-Carb"]),
            health_labels: strings(&["Pescatarian", "Gluten-Free", "Dairy-Free"]),
            calories: 380.0,
            protein: 35.0,
            carbs: 15.0,
            fat: 22.0,
            ingredients: strings(&[
                "6 oz salmon fillet",
                "2 cups mixed vegetables",
                "1 tbsp olive oil",
                "Herbs and spices",
                "Lemon for serving",
            ]),
        },
        Recipe {
            id: 5,
            label: "Energy Balls".into(),
            source: "Snack Time".into(),
            meal_type: MealType::Snack,
            servings: 12,
            total_time_min: 15,
            diet_labels: strings(&["High-Fiber", "Vegan"]),
            health_labels: strings(&["Vegan", "Gluten-Free"]),
            calories: 95.0,
            protein: 3.0,
            carbs: 12.0,
            fat: 5.0,
            ingredients: strings(&[
                "1 cup dates, pitted",
                "1/2 cup almonds",
                "2 tbsp chia seeds",
                "1 tbsp cocoa powder",
                "1 tsp vanilla extract",
            ]),
        },
    ]
});

pub fn all_recipes() -> &'static [Recipe] {
    &RECIPES
}

pub fn find_recipe(id: u32) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}

pub fn recipes_for(meal_type: MealType) -> Vec<&'static Recipe> {
    RECIPES.iter().filter(|r| r.meal_type == meal_type).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_meal_type_has_a_recipe() {
        for meal in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert!(!recipes_for(meal).is_empty(), "{:?}", meal);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = all_recipes().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all_recipes().len());
    }

    #[test]
    fn test_find_recipe() {
        assert_eq!(find_recipe(4).unwrap().label, "Grilled Salmon with Vegetables");
        assert!(find_recipe(99).is_none());
    }
}
