use strum::{Display, EnumIter};

use crate::food::{ServingIntake, Servings};
use crate::round2;

/// Servings the nutrition comparison charts measure intake against.
pub const REFERENCE_INTAKE: ServingIntake = Servings::new(6.0, 2.0, 6.0, 3.0, 2.5);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("height must be greater than zero, got {0} cm")]
    NonPositiveHeight(f64),
    #[error("{weight_kg} kg at {height_cm} cm does not give a usable BMI")]
    OutOfRange { weight_kg: f64, height_cm: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodyMetrics {
    pub age: i32,
    pub gender: String,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BodyMetrics {
    pub fn new(age: i32, gender: String, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            age,
            gender,
            weight_kg,
            height_cm,
        }
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    pub fn bmi(&self) -> Result<f64, MetricsError> {
        if self.height_cm <= 0.0 {
            return Err(MetricsError::NonPositiveHeight(self.height_cm));
        }
        let bmi = round2(self.weight_kg / self.height_m().powf(2.0));
        if !bmi.is_finite() {
            return Err(MetricsError::OutOfRange {
                weight_kg: self.weight_kg,
                height_cm: self.height_cm,
            });
        }
        Ok(bmi)
    }
}

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum BmiCategory {
    #[strum(to_string = "Very Underweight")]
    VeryUnderweight,
    Underweight,
    #[strum(to_string = "Healthy Weight")]
    HealthyWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 15.0 {
            BmiCategory::VeryUnderweight
        } else if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::HealthyWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Upper end of the category as drawn on the BMI chart.
    pub fn chart_threshold(&self) -> f64 {
        match self {
            BmiCategory::VeryUnderweight => 15.0,
            BmiCategory::Underweight => 18.5,
            BmiCategory::HealthyWeight => 24.9,
            BmiCategory::Overweight => 29.9,
            BmiCategory::Obese => 35.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi() {
        let test_data = [
            (70.0, 175.0, 22.86),
            (50.0, 180.0, 15.43),
            (95.0, 170.0, 32.87),
            (60.0, 100.0, 60.0),
        ];

        for (i, (weight, height, expected_output)) in test_data.into_iter().enumerate() {
            let metrics = BodyMetrics::new(30, "male".to_owned(), weight, height);
            assert_eq!(metrics.bmi(), Ok(expected_output), "Test case #{}", i);
        }
    }

    #[test]
    fn bmi_rejects_zero_height() {
        let metrics = BodyMetrics::new(30, "female".to_owned(), 60.0, 0.0);

        assert_eq!(metrics.bmi(), Err(MetricsError::NonPositiveHeight(0.0)));
    }

    #[test]
    fn bmi_rejects_overflow() {
        let test_data = [(1e308, 1.0), (1e307, 100.0), (f64::MAX, 0.5)];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            let metrics = BodyMetrics::new(30, "male".to_owned(), weight, height);
            assert_eq!(
                metrics.bmi(),
                Err(MetricsError::OutOfRange {
                    weight_kg: weight,
                    height_cm: height,
                }),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn category_from_bmi() {
        let test_data = [
            (12.0, BmiCategory::VeryUnderweight),
            (15.0, BmiCategory::Underweight),
            (18.49, BmiCategory::Underweight),
            (18.5, BmiCategory::HealthyWeight),
            (22.86, BmiCategory::HealthyWeight),
            (24.99, BmiCategory::HealthyWeight),
            (25.0, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
            (41.2, BmiCategory::Obese),
        ];

        for (i, (bmi, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(BmiCategory::from_bmi(bmi), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn category_labels() {
        assert_eq!(BmiCategory::VeryUnderweight.to_string(), "Very Underweight");
        assert_eq!(BmiCategory::HealthyWeight.to_string(), "Healthy Weight");
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }
}
