use strum::{Display, EnumString};

use crate::round2;

const LITRES_PER_KG: f64 = 0.035;

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum ActivityLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    fn extra_litres(&self) -> f64 {
        match self {
            ActivityLevel::Low => 0.0,
            ActivityLevel::Medium => 0.5,
            ActivityLevel::High => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HydrationProfile {
    pub name: String,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

impl HydrationProfile {
    pub fn new(name: String, weight_kg: f64, activity_level: ActivityLevel) -> Self {
        Self {
            name,
            weight_kg,
            activity_level,
        }
    }

    /// Daily water target in litres: 35 ml per kg of body weight plus an
    /// activity allowance.
    pub fn recommended_intake(&self) -> f64 {
        round2(self.weight_kg * LITRES_PER_KG + self.activity_level.extra_litres())
    }
}

/// Water consumed each tracked day, in litres.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaterLog {
    daily_intake: Vec<f64>,
}

impl WaterLog {
    pub fn new(daily_intake: Vec<f64>) -> Self {
        Self { daily_intake }
    }

    pub fn days(&self) -> &[f64] {
        &self.daily_intake
    }

    pub fn total(&self) -> f64 {
        round2(self.daily_intake.iter().sum())
    }

    pub fn average(&self) -> f64 {
        if self.daily_intake.is_empty() {
            return 0.0;
        }
        round2(self.daily_intake.iter().sum::<f64>() / self.daily_intake.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_intake() {
        let test_data = [
            (70.0, ActivityLevel::Low, 2.45),
            (70.0, ActivityLevel::Medium, 2.95),
            (70.0, ActivityLevel::High, 3.45),
            (55.5, ActivityLevel::Low, 1.94),
            (0.0, ActivityLevel::High, 1.0),
        ];

        for (i, (weight, activity, expected_output)) in test_data.into_iter().enumerate() {
            let profile = HydrationProfile::new("Test".to_owned(), weight, activity);
            assert_eq!(
                profile.recommended_intake(),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn total_and_average() {
        let log = WaterLog::new(vec![2.0, 2.5, 1.75]);

        assert_eq!(log.total(), 6.25);
        assert_eq!(log.average(), 2.08);
    }

    #[test]
    fn average_of_empty_log_is_zero() {
        let log = WaterLog::default();

        assert_eq!(log.total(), 0.0);
        assert_eq!(log.average(), 0.0);
    }

    #[test]
    fn activity_level_parses_any_case() {
        assert_eq!("HIGH".parse::<ActivityLevel>(), Ok(ActivityLevel::High));
        assert_eq!("medium".parse::<ActivityLevel>(), Ok(ActivityLevel::Medium));
        assert_eq!(ActivityLevel::Medium.to_string(), "Medium");
        assert!("extreme".parse::<ActivityLevel>().is_err());
    }
}
