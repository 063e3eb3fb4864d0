use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::Result;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Status and parsed body of an upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Relay settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Client for the USDA FoodData Central API. Holds the API key.
pub struct UsdaUpstream {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
}

impl UsdaUpstream {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let api_key = config.api_key.filter(|k| !k.trim().is_empty());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size: config.page_size,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search foods. The key travels in the `X-Api-Key` header.
    #[instrument(skip(self, api_key))]
    pub async fn search(&self, api_key: &str, query: &str) -> Result<UpstreamReply> {
        let response = self
            .client
            .post(format!("{}/foods/search", self.base_url))
            .header("X-Api-Key", api_key)
            .json(&json!({ "query": query, "pageSize": self.page_size }))
            .send()
            .await?;
        read_reply(response).await
    }

    /// Fetch one food. The key travels as the `api_key` query parameter.
    #[instrument(skip(self, api_key))]
    pub async fn food(&self, api_key: &str, food_id: &str) -> Result<UpstreamReply> {
        let response = self
            .client
            .get(format!("{}/food/{}", self.base_url, food_id))
            .query(&[("api_key", api_key)])
            .send()
            .await?;
        read_reply(response).await
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

async fn read_reply(response: reqwest::Response) -> Result<UpstreamReply> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    debug!(status, bytes = text.len(), "upstream responded");

    // Non-JSON bodies are passed on as a string.
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok(UpstreamReply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_missing() {
        let upstream = UsdaUpstream::new(RelayConfig {
            api_key: Some("  ".into()),
            ..RelayConfig::default()
        })
        .unwrap();
        assert!(!upstream.has_api_key());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let upstream = UsdaUpstream::new(RelayConfig {
            base_url: "http://localhost:9/fdc/v1/".into(),
            api_key: Some("key".into()),
            ..RelayConfig::default()
        })
        .unwrap();
        assert_eq!(upstream.base_url, "http://localhost:9/fdc/v1");
        assert_eq!(upstream.api_key(), Some("key"));
    }

    #[test]
    fn test_reply_success_range() {
        let ok = UpstreamReply { status: 200, body: Value::Null };
        let missing = UpstreamReply { status: 404, body: Value::Null };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
