use std::path::Path;

use crate::error::Result;
use crate::models::{LoggedFoodEntry, Nutrient};

/// Write the food log to a CSV file, one row per entry.
pub fn write_log_csv(entries: &[LoggedFoodEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec![
        "id".to_string(),
        "name".to_string(),
        "serving".to_string(),
        "source".to_string(),
        "logged_at".to_string(),
    ];
    header.extend(
        Nutrient::ALL
            .iter()
            .map(|n| format!("{}_{}", n.label().to_lowercase(), n.unit())),
    );
    wtr.write_record(&header)?;

    for entry in entries {
        let mut row = vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.serving.clone(),
            entry.source.to_string(),
            entry.logged_at.to_rfc3339(),
        ];
        row.extend(
            Nutrient::ALL
                .iter()
                .map(|&n| format!("{:.2}", entry.nutrients.get(n))),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodSource, NutrientSet};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_csv_has_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let entry = LoggedFoodEntry::new(
            FoodSource::Usda { fdc_id: 748967 },
            "Egg, whole".into(),
            "50 g".into(),
            NutrientSet {
                calories: 143.0,
                sodium: 142.0,
                ..NutrientSet::default()
            },
        );

        write_log_csv(&[entry.clone()], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,name,serving,source,logged_at,calories_kcal"));
        assert!(lines[0].ends_with("sodium_mg"));
        assert!(lines[1].contains("\"Egg, whole\""));
        assert!(lines[1].contains("usda:748967"));
        assert!(lines[1].ends_with("143.00,0.00,0.00,0.00,0.00,0.00,142.00"));
    }
}
