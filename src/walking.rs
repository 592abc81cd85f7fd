//! Sports walking workout calculations

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{expect_sensor_data, floor_div, Training, TrainingBase, MIN_IN_H};

/// Weight multiplier in the walking calorie formula
pub const WALK_CALORIE_1: f64 = 0.035;
/// Exponent applied to the mean speed
pub const WALK_CALORIE_2: f64 = 2.0;
/// Multiplier of the speed/height term
pub const WALK_CALORIE_3: f64 = 0.029;

/// Sports walking workout; calories also depend on the athlete's height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Athlete height in centimeters
    height: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }

    /// Build from positional sensor data `[action, duration, weight, height]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        expect_sensor_data(WorkoutKind::SportsWalking, data)?;
        Ok(Self::new(data[0], data[1], data[2], data[3]))
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        // Floored, not true, division of speed^2 by height
        let speed_term = floor_div(self.mean_speed().powf(WALK_CALORIE_2), self.height);

        (WALK_CALORIE_1 * self.base.weight + speed_term * WALK_CALORIE_3 * self.base.weight)
            * self.base.duration
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_walk() {
        let walk = SportsWalking::new(9000.0, 1.0, 75.0, 180.0);

        assert!((walk.distance() - 5.85).abs() < EPSILON);
        assert!((walk.mean_speed() - 5.85).abs() < EPSILON);
        // 5.85^2 = 34.2225 floors to 0 against 180 cm, leaving only the weight term
        assert!((walk.spent_calories() - 157.5).abs() < EPSILON);
    }

    #[test]
    fn test_floor_division_is_applied() {
        // 20 km/h: 400 / 180 floors to 2 (true division would give 2.22)
        let walk = SportsWalking::new(20000.0 / 0.65, 1.0, 80.0, 180.0);
        let speed = walk.mean_speed();
        assert!((speed - 20.0).abs() < 1e-9);

        let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < EPSILON);

        let true_division = (0.035 * 80.0 + speed * speed / 180.0 * 0.029 * 80.0) * 60.0;
        assert!((walk.spent_calories() - true_division).abs() > 1.0);
    }

    #[test]
    fn test_from_sensor_data() {
        let walk = SportsWalking::from_sensor_data(&[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.height(), 180.0);

        assert!(SportsWalking::from_sensor_data(&[9000.0, 1.0, 75.0]).is_err());
    }

    #[test]
    fn test_summary_type_name() {
        let record = SportsWalking::new(9000.0, 1.0, 75.0, 180.0).summary();
        assert_eq!(record.training_type, "SportsWalking");
    }
}
