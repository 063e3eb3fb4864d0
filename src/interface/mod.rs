pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_entry, prompt_yes_no, select_entry};
pub use render::{
    display_daily_totals, display_insights, display_log, display_log_outcome, display_recipes,
    remaining_to_max,
};
