//! Running workout calculations

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{expect_sensor_data, Training, TrainingBase, MIN_IN_H, M_IN_KM};

/// Speed multiplier in the running calorie formula
pub const RUN_CALORIE_1: f64 = 18.0;
/// Speed offset in the running calorie formula
pub const RUN_CALORIE_2: f64 = 20.0;

/// Running workout: step-based distance with a speed-driven calorie estimate
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }

    /// Build from positional sensor data `[action, duration, weight]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        expect_sensor_data(WorkoutKind::Running, data)?;
        Ok(Self::new(data[0], data[1], data[2]))
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (RUN_CALORIE_1 * self.mean_speed() - RUN_CALORIE_2) * self.base.weight / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}
