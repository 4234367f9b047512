//! Body-mass-index calculation and classification.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The four standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an (unrounded) BMI value.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed BMI with its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// BMI rounded to one decimal place.
    pub value: f64,
    pub category: BmiCategory,
}

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// The category is classified from the exact value; only the reported value
/// is rounded to one decimal place, so a reading of 24.96 reports as 25.0 but
/// still classifies as normal weight.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Result<BmiReading, InputError> {
    validate("height", height_cm)?;
    validate("weight", weight_kg)?;

    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);

    Ok(BmiReading {
        value: (raw * 10.0).round() / 10.0,
        category: BmiCategory::classify(raw),
    })
}

fn validate(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::InvalidInput { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_reading() {
        let reading = bmi(170.0, 70.0).unwrap();
        assert_eq!(reading.value, 24.2);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn test_obese_reading() {
        let reading = bmi(150.0, 90.0).unwrap();
        assert_eq!(reading.value, 40.0);
        assert_eq!(reading.category, BmiCategory::Obese);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        // 24.96 rounds to 25.0 but is still below the overweight threshold.
        let weight = 24.96 * 1.8 * 1.8;
        let reading = bmi(180.0, weight).unwrap();
        assert_eq!(reading.value, 25.0);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(bmi(0.0, 70.0).is_err());
        assert!(bmi(170.0, -5.0).is_err());
        assert!(bmi(f64::NAN, 70.0).is_err());
        assert!(bmi(170.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = bmi(-1.0, 70.0).unwrap_err();
        assert!(matches!(err, InputError::InvalidInput { field: "height", .. }));
        let err = bmi(170.0, 0.0).unwrap_err();
        assert!(matches!(err, InputError::InvalidInput { field: "weight", .. }));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BmiCategory::Underweight.label(), "Underweight");
        assert_eq!(BmiCategory::Normal.to_string(), "Normal weight");
    }
}
