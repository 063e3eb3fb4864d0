mod export;
mod manager;
mod persistence;

pub use export::write_log_csv;
pub use manager::{LogOutcome, NutritionTracker};
pub use persistence::LocalStore;
