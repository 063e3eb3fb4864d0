use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::{Result, WellnessError};
use crate::models::FoodCandidate;
use crate::usda::config::ResolverConfig;
use crate::usda::source::{FoodDataSource, FoodDetails, SearchResponse};

/// Error body returned by the relay.
#[derive(Debug, Default, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

/// Food data source that talks to the USDA relay over HTTP.
pub struct RelayClient {
    client: Client,
    search_url: String,
    detail_url: String,
}

impl RelayClient {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("wellness_hub_rs/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
            detail_url: config.detail_url.clone(),
        })
    }

    async fn post(&self, url: &str, body: Value) -> Result<Response> {
        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "relay responded");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(WellnessError::Upstream {
            status: status.as_u16(),
            message: describe_error(&text),
        })
    }
}

fn describe_error(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<RelayErrorBody>(body) else {
        return body.trim().to_string();
    };

    let mut message = parsed
        .error
        .unwrap_or_else(|| "request failed".to_string());
    if let Some(detail) = parsed.message {
        message = format!("{}: {}", message, detail);
    } else if let Some(details) = parsed.details {
        message = format!("{}: {}", message, details);
    }
    message
}

#[async_trait]
impl FoodDataSource for RelayClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>> {
        let response = self.post(&self.search_url, json!({ "query": query })).await?;
        let body: SearchResponse = response.json().await?;
        Ok(body.foods)
    }

    #[instrument(skip(self))]
    async fn food_details(&self, fdc_id: u64) -> Result<FoodDetails> {
        let response = self
            .post(&self.detail_url, json!({ "food_id": fdc_id }))
            .await?;
        Ok(response.json().await?)
    }
}
