use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::models::FoodCandidate;
use crate::nutrition::NutrientRecord;

/// Body of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodCandidate>,
}

/// Body of a per-food detail response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub food_nutrients: Option<Vec<NutrientRecord>>,
}

/// The two remote operations the resolver needs.
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Text search. Candidates are returned in provider order.
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>>;

    /// Detail record for one provider identifier.
    async fn food_details(&self, fdc_id: u64) -> Result<FoodDetails>;
}
