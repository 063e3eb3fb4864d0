use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "http://localhost:5000/api/usda/search";
pub const DEFAULT_DETAIL_URL: &str = "http://localhost:5000/api/usda/food";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoints and limits for food resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub search_url: String,
    pub detail_url: String,
    pub timeout: Duration,
    /// Names resolved at once. 1 resolves strictly one after another.
    pub concurrency: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            detail_url: DEFAULT_DETAIL_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: 1,
        }
    }
}
