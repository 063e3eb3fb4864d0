use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::error::{Result, WellnessError};
use crate::models::ResolvedFood;
use crate::nutrition::extract_nutrients;
use crate::usda::source::FoodDataSource;

/// Outcome for one food name.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub token: String,
    pub food: Option<ResolvedFood>,
}

/// Turns food names into nutrient data: search, take the first hit, fetch
/// its details.
pub struct FoodResolver<S> {
    source: S,
    concurrency: usize,
}

impl<S: FoodDataSource> FoodResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            concurrency: 1,
        }
    }

    /// Resolve up to `concurrency` names at once. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Two-step lookup for one name. Any failure is an error.
    pub async fn try_resolve(&self, token: &str) -> Result<ResolvedFood> {
        let candidates = self.source.search(token).await?;
        let candidate = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WellnessError::NoCandidates(token.to_string()))?;
        let fdc_id = candidate
            .fdc_id
            .ok_or_else(|| WellnessError::MissingIdentifier(token.to_string()))?;

        debug!(token, fdc_id, description = ?candidate.description(), "selected candidate");

        let details = self.source.food_details(fdc_id).await?;
        let records = details
            .food_nutrients
            .ok_or(WellnessError::MissingNutrients(fdc_id))?;

        let name = match candidate.description() {
            Some(description) => description.to_string(),
            None => details.description.unwrap_or_else(|| token.to_string()),
        };

        Ok(ResolvedFood {
            fdc_id,
            name,
            serving: candidate.serving_description(),
            nutrients: extract_nutrients(&records),
        })
    }

    /// Like [`try_resolve`](Self::try_resolve) but a failed name is logged
    /// and skipped.
    pub async fn resolve(&self, token: &str) -> Option<ResolvedFood> {
        match self.try_resolve(token).await {
            Ok(food) => {
                info!(token, fdc_id = food.fdc_id, "resolved food");
                Some(food)
            }
            Err(e) => {
                warn!(token, error = %e, "skipping food");
                None
            }
        }
    }

    /// Resolve every name. Results keep input order.
    pub async fn resolve_all(&self, tokens: &[String]) -> Vec<Resolution> {
        stream::iter(tokens)
            .map(|token| async move {
                Resolution {
                    token: token.clone(),
                    food: self.resolve(token).await,
                }
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::models::FoodCandidate;
    use crate::usda::source::FoodDetails;

    #[derive(Default)]
    struct ScriptedSource {
        search: HashMap<String, Vec<FoodCandidate>>,
        details: HashMap<u64, FoodDetails>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FoodDataSource for ScriptedSource {
        async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>> {
            self.calls.lock().unwrap().push(format!("search:{}", query));
            match self.search.get(query) {
                Some(c) => Ok(c.clone()),
                None => Err(WellnessError::Upstream {
                    status: 500,
                    message: "boom".into(),
                }),
            }
        }

        async fn food_details(&self, fdc_id: u64) -> Result<FoodDetails> {
            self.calls.lock().unwrap().push(format!("detail:{}", fdc_id));
            self.details
                .get(&fdc_id)
                .cloned()
                .ok_or(WellnessError::Upstream {
                    status: 404,
                    message: "missing".into(),
                })
        }
    }

    fn candidate(id: Option<u64>, description: &str) -> FoodCandidate {
        FoodCandidate {
            fdc_id: id,
            description: Some(description.to_string()),
            ..FoodCandidate::default()
        }
    }

    fn details(calories: f64) -> FoodDetails {
        FoodDetails {
            description: None,
            food_nutrients: Some(
                serde_json::from_value(json!([{ "nutrientId": 1008, "value": calories }]))
                    .unwrap(),
            ),
        }
    }

    fn source() -> ScriptedSource {
        let mut source = ScriptedSource::default();
        source.search.insert(
            "egg".into(),
            vec![candidate(Some(1), "Egg, whole"), candidate(Some(2), "Egg white")],
        );
        source.search.insert("ghost".into(), vec![]);
        source.search.insert("noid".into(), vec![candidate(None, "Mystery")]);
        source.search.insert("bare".into(), vec![candidate(Some(3), "Bare")]);
        source.details.insert(1, details(143.0));
        source.details.insert(2, details(52.0));
        source.details.insert(3, FoodDetails::default());
        source
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let resolver = FoodResolver::new(source());
        let food = resolver.try_resolve("egg").await.unwrap();
        assert_eq!(food.fdc_id, 1);
        assert_eq!(food.name, "Egg, whole");
        assert_eq!(food.nutrients.calories, 143.0);
    }

    #[tokio::test]
    async fn test_unnamed_candidate_falls_back_to_detail_name() {
        let mut source = source();
        source.search.insert(
            "kiwi".into(),
            vec![FoodCandidate {
                fdc_id: Some(4),
                ..FoodCandidate::default()
            }],
        );
        source.details.insert(
            4,
            FoodDetails {
                description: Some("Kiwifruit, green, raw".into()),
                ..details(61.0)
            },
        );

        let food = FoodResolver::new(source).try_resolve("kiwi").await.unwrap();
        assert_eq!(food.name, "Kiwifruit, green, raw");
        assert_eq!(food.nutrients.calories, 61.0);
    }

    #[tokio::test]
    async fn test_failures_are_skipped() {
        let resolver = FoodResolver::new(source());
        assert!(matches!(
            resolver.try_resolve("ghost").await,
            Err(WellnessError::NoCandidates(_))
        ));
        assert!(matches!(
            resolver.try_resolve("noid").await,
            Err(WellnessError::MissingIdentifier(_))
        ));
        assert!(matches!(
            resolver.try_resolve("bare").await,
            Err(WellnessError::MissingNutrients(3))
        ));
        assert!(resolver.resolve("unknown").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_all_is_sequential_and_ordered() {
        let resolver = FoodResolver::new(source());
        let tokens = vec!["ghost".to_string(), "egg".to_string()];
        let results = resolver.resolve_all(&tokens).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].token, "ghost");
        assert!(results[0].food.is_none());
        assert!(results[1].food.is_some());

        let calls = resolver.source().calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["search:ghost", "search:egg", "detail:1"]);
    }

    #[tokio::test]
    async fn test_concurrent_resolution_keeps_order() {
        let resolver = FoodResolver::new(source()).with_concurrency(4);
        let tokens: Vec<String> = ["egg", "ghost", "egg"].iter().map(|s| s.to_string()).collect();
        let results = resolver.resolve_all(&tokens).await;
        let names: Vec<&str> = results.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(names, vec!["egg", "ghost", "egg"]);
        assert_eq!(results.iter().filter(|r| r.food.is_some()).count(), 2);
    }
}
