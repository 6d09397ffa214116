use serde::{Deserialize, Serialize};

/// Body-mass index: weight (kg) over height (m) squared.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => f.write_str("Underweight"),
            BmiCategory::Normal => f.write_str("Normal"),
            BmiCategory::Overweight => f.write_str("Overweight"),
            BmiCategory::Obesity => f.write_str("Obesity"),
        }
    }
}

/// WHO-style BMI bands. Total over all positive inputs; callers do range
/// checks on weight/height, not this function.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// Rough somatotype used to pick nutrition focus in the advice tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    pub fn description(self) -> &'static str {
        match self {
            BodyType::Ectomorph => {
                "Naturally lean, fast metabolism, difficulty gaining weight"
            }
            BodyType::Mesomorph => {
                "Athletic build, gains muscle easily, responds well to training"
            }
            BodyType::Endomorph => {
                "Larger bone structure, gains weight easily, slower metabolism"
            }
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyType::Ectomorph => f.write_str("Ectomorph"),
            BodyType::Mesomorph => f.write_str("Mesomorph"),
            BodyType::Endomorph => f.write_str("Endomorph"),
        }
    }
}

/// Simplified body-type classification from BMI alone.
pub fn body_type(weight_kg: f64, height_m: f64) -> BodyType {
    let value = bmi(weight_kg, height_m);
    if value < 21.5 {
        BodyType::Ectomorph
    } else if value < 30.0 {
        BodyType::Mesomorph
    } else {
        BodyType::Endomorph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_formula() {
        // 50kg at 1.6m -> 19.53
        let value = bmi(50.0, 1.6);
        assert!((value - 19.53).abs() < 0.01);
    }

    #[test]
    fn test_classify_normal() {
        assert_eq!(classify_bmi(bmi(50.0, 1.6)), BmiCategory::Normal);
    }

    #[test]
    fn test_classify_band_boundaries() {
        assert_eq!(classify_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.99), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_body_type_bands() {
        assert_eq!(body_type(50.0, 1.6), BodyType::Ectomorph); // 19.5
        assert_eq!(body_type(60.0, 1.6), BodyType::Mesomorph); // 23.4
        assert_eq!(body_type(80.0, 1.6), BodyType::Endomorph); // 31.2
    }

    #[test]
    fn test_category_display_matches_stored_text() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::Obesity.to_string(), "Obesity");
    }
}
