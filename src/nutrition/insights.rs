use std::fmt;

use serde::Serialize;

use crate::models::{Nutrient, NutrientSet};
use crate::nutrition::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Caution,
    Warning,
}

impl HealthStatus {
    fn severity(self) -> u8 {
        match self {
            HealthStatus::Excellent | HealthStatus::Good => 0,
            HealthStatus::Caution => 1,
            HealthStatus::Warning => 2,
        }
    }

    /// The more severe of `self` and `other`; never de-escalates.
    pub fn escalate(self, other: HealthStatus) -> HealthStatus {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthStatus::Excellent => "excellent",
            HealthStatus::Good => "good",
            HealthStatus::Caution => "caution",
            HealthStatus::Warning => "warning",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthInsights {
    pub status: HealthStatus,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Compare daily totals against the recommended ranges.
///
/// Checks run in a fixed order (calories, protein, sugar, sodium) and each
/// can only raise the status. "excellent" requires no warnings and a
/// non-zero calorie total.
pub fn evaluate(total: &NutrientSet) -> HealthInsights {
    let mut status = HealthStatus::Good;
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    if recommended_range(Nutrient::Calories).exceeds(total.calories, CALORIE_OVERSHOOT_FACTOR) {
        warnings.push(CALORIES_WARNING.to_string());
        status = status.escalate(HealthStatus::Caution);
    }

    if recommended_range(Nutrient::Protein).exceeds(total.protein, 1.0) {
        warnings.push(PROTEIN_WARNING.to_string());
        status = status.escalate(HealthStatus::Caution);
    }

    if recommended_range(Nutrient::Sugar).exceeds(total.sugar, 1.0) {
        warnings.push(SUGAR_WARNING.to_string());
        recommendations.push(SUGAR_RECOMMENDATION.to_string());
        status = status.escalate(HealthStatus::Caution);
    }

    if recommended_range(Nutrient::Sodium).exceeds(total.sodium, 1.0) {
        warnings.push(SODIUM_WARNING.to_string());
        recommendations.push(SODIUM_RECOMMENDATION.to_string());
        status = status.escalate(HealthStatus::Warning);
    }

    if warnings.is_empty() && total.calories > 0.0 {
        status = HealthStatus::Excellent;
    }

    HealthInsights {
        status,
        warnings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalate_never_lowers() {
        assert_eq!(HealthStatus::Warning.escalate(HealthStatus::Caution), HealthStatus::Warning);
        assert_eq!(HealthStatus::Good.escalate(HealthStatus::Caution), HealthStatus::Caution);
        assert_eq!(HealthStatus::Caution.escalate(HealthStatus::Good), HealthStatus::Caution);
    }

    #[test]
    fn test_calories_need_twenty_percent_overshoot() {
        let at_limit = NutrientSet {
            calories: 3000.0,
            ..NutrientSet::default()
        };
        assert_eq!(evaluate(&at_limit).status, HealthStatus::Excellent);

        let over = NutrientSet {
            calories: 3001.0,
            ..NutrientSet::default()
        };
        let insights = evaluate(&over);
        assert_eq!(insights.status, HealthStatus::Caution);
        assert_eq!(insights.warnings, vec![CALORIES_WARNING.to_string()]);
        assert!(insights.recommendations.is_empty());
    }

    #[test]
    fn test_sodium_overrides_caution() {
        let total = NutrientSet {
            calories: 2000.0,
            sugar: 80.0,
            sodium: 2400.0,
            ..NutrientSet::default()
        };
        let insights = evaluate(&total);
        assert_eq!(insights.status, HealthStatus::Warning);
        assert_eq!(
            insights.warnings,
            vec![SUGAR_WARNING.to_string(), SODIUM_WARNING.to_string()]
        );
        assert_eq!(
            insights.recommendations,
            vec![
                SUGAR_RECOMMENDATION.to_string(),
                SODIUM_RECOMMENDATION.to_string()
            ]
        );
    }

    #[test]
    fn test_protein_over_max_is_caution() {
        let total = NutrientSet {
            calories: 2000.0,
            protein: 160.0,
            ..NutrientSet::default()
        };
        let insights = evaluate(&total);
        assert_eq!(insights.status, HealthStatus::Caution);
        assert_eq!(insights.warnings.len(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(HealthStatus::Excellent.to_string(), "excellent");
        assert_eq!(HealthStatus::Warning.to_string(), "warning");
    }
}
