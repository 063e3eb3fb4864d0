mod catalog;

pub use catalog::{RECIPES, all_recipes, find_recipe, recipes_for};
