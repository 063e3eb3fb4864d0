pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod recipes;
pub mod relay;
pub mod state;
pub mod usda;

pub use error::{Result, WellnessError};
pub use models::{LoggedFoodEntry, NutrientSet};
