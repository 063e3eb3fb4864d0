use thiserror::Error;

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("No foods found. Try simpler names like \"egg\" or \"apple\".")]
    NoFoodsFound,

    #[error("No search results for '{0}'")]
    NoCandidates(String),

    #[error("Search result for '{0}' has no usable identifier")]
    MissingIdentifier(String),

    #[error("Food {0} has no nutrient data")]
    MissingNutrients(u64),

    #[error("Log entry not found: {0}")]
    EntryNotFound(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(u32),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
