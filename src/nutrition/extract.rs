use serde_json::{Map, Value};

use crate::models::{Nutrient, NutrientSet};
use crate::nutrition::constants::fdc_nutrient_id;

/// A provider nutrient record. Field names differ between endpoints.
pub type NutrientRecord = Map<String, Value>;

/// A path of nested keys into a record.
type FieldPath = &'static [&'static str];

/// Identifier accessors, tried in order.
const ID_FIELDS: [FieldPath; 3] = [&["nutrientId"], &["id"], &["nutrient", "id"]];

/// Value accessors, tried in order.
const VALUE_FIELDS: [FieldPath; 3] = [&["amount"], &["value"], &["nutrient", "value"]];

fn lookup<'a>(record: &'a NutrientRecord, path: FieldPath) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = record.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Numbers and numeric strings both count.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn matches_id(record: &NutrientRecord, target: u64) -> bool {
    ID_FIELDS.into_iter().any(|path| {
        lookup(record, path)
            .and_then(as_number)
            .is_some_and(|id| id == target as f64)
    })
}

/// Value of the nutrient with `target_id`, or 0 when absent or unparseable.
///
/// The first record whose identifier matches decides the result; later
/// records are not consulted even if the first one has no usable value.
pub fn nutrient_value(records: &[NutrientRecord], target_id: u64) -> f64 {
    let Some(record) = records.iter().find(|r| matches_id(r, target_id)) else {
        return 0.0;
    };

    let value = VALUE_FIELDS
        .into_iter()
        .filter_map(|path| lookup(record, path))
        .find(|v| !v.is_null())
        .and_then(as_number)
        .unwrap_or(0.0);

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Extract all tracked nutrients from a detail record list.
pub fn extract_nutrients(records: &[NutrientRecord]) -> NutrientSet {
    NutrientSet::from_fn(|n: Nutrient| nutrient_value(records, fdc_nutrient_id(n)))
}
