#[macro_use]
extern crate assert_float_eq;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use tempfile::tempdir;

use wellness_hub_rs::error::{Result, WellnessError};
use wellness_hub_rs::models::{FoodCandidate, Nutrient, NutrientSet};
use wellness_hub_rs::state::{LocalStore, NutritionTracker};
use wellness_hub_rs::usda::{FoodDataSource, FoodDetails, FoodResolver};

/// In-memory stand-in for the relay.
struct FakeFoodData {
    foods: HashMap<String, (u64, serde_json::Value)>,
}

impl FakeFoodData {
    fn new() -> Self {
        let mut foods = HashMap::new();
        foods.insert(
            "egg".to_string(),
            (
                748967,
                json!([
                    { "nutrient": { "id": 1008 }, "amount": 143 },
                    { "nutrient": { "id": 1003 }, "amount": 12.6 },
                    { "nutrient": { "id": 1005 }, "amount": 0.7 },
                    { "nutrient": { "id": 1004 }, "amount": 9.5 },
                    { "nutrient": { "id": 2000 }, "amount": 0.4 },
                    { "nutrient": { "id": 1093 }, "amount": 142 }
                ]),
            ),
        );
        foods.insert(
            "apple".to_string(),
            (
                1750340,
                json!([
                    { "nutrientId": 1008, "value": 52 },
                    { "nutrientId": 1003, "value": 0.3 },
                    { "nutrientId": 1005, "value": 13.8 },
                    { "nutrientId": 1004, "value": 0.2 },
                    { "nutrientId": 1079, "value": 2.4 },
                    { "nutrientId": 2000, "value": 10.4 },
                    { "nutrientId": 1093, "value": 1 }
                ]),
            ),
        );
        Self { foods }
    }
}

#[async_trait]
impl FoodDataSource for FakeFoodData {
    async fn search(&self, query: &str) -> Result<Vec<FoodCandidate>> {
        Ok(self
            .foods
            .get(&query.to_lowercase())
            .map(|(id, _)| {
                vec![FoodCandidate {
                    fdc_id: Some(*id),
                    description: Some(query.to_string()),
                    ..FoodCandidate::default()
                }]
            })
            .unwrap_or_default())
    }

    async fn food_details(&self, fdc_id: u64) -> Result<FoodDetails> {
        let nutrients = self
            .foods
            .values()
            .find(|(id, _)| *id == fdc_id)
            .map(|(_, n)| serde_json::from_value(n.clone()))
            .transpose()?;
        Ok(FoodDetails {
            description: None,
            food_nutrients: nutrients,
        })
    }
}

fn tracker(dir: &std::path::Path) -> NutritionTracker {
    NutritionTracker::load(LocalStore::open(dir.join("state.json")).unwrap())
}

fn assert_sets_eq(a: &NutrientSet, b: &NutrientSet) {
    for n in Nutrient::ALL {
        assert_float_absolute_eq!(a.get(n), b.get(n), 1e-9);
    }
}

#[tokio::test]
async fn test_two_foods_logged_and_summed() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker(dir.path());
    let resolver = FoodResolver::new(FakeFoodData::new());

    let outcome = tracker.log_foods(&resolver, "egg, apple").await.unwrap();

    assert_eq!(outcome.entries.len(), 2);
    assert!(outcome.skipped.is_empty());
    assert_eq!(tracker.entries().len(), 2);

    let expected = outcome.entries[0].nutrients + outcome.entries[1].nutrients;
    assert_sets_eq(&tracker.daily_total(), &expected);
    assert_float_absolute_eq!(tracker.daily_total().calories, 195.0, 1e-9);
    assert_float_absolute_eq!(tracker.daily_total().sodium, 143.0, 1e-9);
}

#[tokio::test]
async fn test_unknown_food_reports_no_foods_found() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker(dir.path());
    let resolver = FoodResolver::new(FakeFoodData::new());
    tracker.log_foods(&resolver, "apple").await.unwrap();
    let before = tracker.daily_total();

    let result = tracker.log_foods(&resolver, "xyzzy123").await;

    assert!(matches!(result, Err(WellnessError::NoFoodsFound)));
    assert_eq!(tracker.entries().len(), 1);
    assert_sets_eq(&tracker.daily_total(), &before);
}

#[tokio::test]
async fn test_partial_batch_skips_unmatched() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker(dir.path());
    let resolver = FoodResolver::new(FakeFoodData::new());

    let outcome = tracker
        .log_foods(&resolver, "egg and xyzzy123 & apple")
        .await
        .unwrap();

    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.skipped, vec!["xyzzy123".to_string()]);
    assert_float_absolute_eq!(outcome.batch_total.calories, 195.0, 1e-9);
}

#[tokio::test]
async fn test_remove_after_log_restores_total() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker(dir.path());
    let resolver = FoodResolver::new(FakeFoodData::new());

    tracker.log_foods(&resolver, "egg").await.unwrap();
    let before = tracker.daily_total();

    let outcome = tracker.log_foods(&resolver, "apple").await.unwrap();
    tracker.remove_entry(&outcome.entries[0].id).unwrap();

    assert_sets_eq(&tracker.daily_total(), &before);
}

#[tokio::test]
async fn test_log_survives_restart() {
    let dir = tempdir().unwrap();
    let resolver = FoodResolver::new(FakeFoodData::new()).with_concurrency(2);
    {
        let mut tracker = tracker(dir.path());
        tracker.log_foods(&resolver, "egg, apple").await.unwrap();
    }

    let reloaded = tracker(dir.path());
    assert_eq!(reloaded.entries().len(), 2);
    assert_eq!(reloaded.entries()[0].name, "egg");
    assert_float_absolute_eq!(reloaded.daily_total().calories, 195.0, 1e-9);
}

#[tokio::test]
async fn test_empty_input_finds_nothing() {
    let dir = tempdir().unwrap();
    let mut tracker = tracker(dir.path());
    let resolver = FoodResolver::new(FakeFoodData::new());

    let result = tracker.log_foods(&resolver, " , and & ").await;
    assert!(matches!(result, Err(WellnessError::NoFoodsFound)));
    assert!(tracker.entries().is_empty());
}

#[tokio::test]
async fn test_unwritable_store_keeps_log_empty() {
    let dir = tempdir().unwrap();
    let store = LocalStore::open(dir.path().join("gone").join("state.json")).unwrap();
    let mut tracker = NutritionTracker::load(store);
    let resolver = FoodResolver::new(FakeFoodData::new());

    let result = tracker.log_foods(&resolver, "egg, apple").await;

    assert!(matches!(result, Err(WellnessError::Io(_))));
    assert!(tracker.entries().is_empty());
    assert!(tracker.daily_total().is_zero());
}
