mod food;
mod nutrients;
mod recipe;

pub use food::{DEFAULT_SERVING, FoodCandidate, FoodSource, LoggedFoodEntry, ResolvedFood};
pub use nutrients::{Nutrient, NutrientSet};
pub use recipe::{MealType, Recipe};
