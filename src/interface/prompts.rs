use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::LoggedFoodEntry;

/// Ask what the user ate.
pub fn prompt_food_entry() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("What did you eat? (e.g. \"2 eggs, toast and coffee\")")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Let the user pick one of `entries`. Returns `None` if they back out.
pub fn select_entry<'a>(
    prompt: &str,
    entries: &[&'a LoggedFoodEntry],
) -> Result<Option<&'a LoggedFoodEntry>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = entries
        .iter()
        .map(|e| format!("{} ({}, {:.0} kcal)", e.name, e.serving, e.nutrients.calories))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
