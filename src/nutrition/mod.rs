pub mod accumulator;
pub mod constants;
pub mod extract;
pub mod insights;
pub mod parser;

pub use accumulator::{BatchSummary, DailyLog, batch_total};
pub use constants::*;
pub use extract::{NutrientRecord, extract_nutrients, nutrient_value};
pub use insights::{HealthInsights, HealthStatus, evaluate};
pub use parser::parse_food_input;
