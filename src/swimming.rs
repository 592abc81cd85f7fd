//! Swimming workout calculations
//!
//! Pool swimming derives speed from the pool geometry rather than from the
//! stroke count. The stroke count still drives `distance()` through the
//! swimming stroke length, so summaries report a stroke-based distance next to
//! a pool-based speed.

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{expect_sensor_data, Training, TrainingBase, M_IN_KM};

/// Distance covered by one stroke, in meters
pub const SWIM_LEN_STEP: f64 = 1.38;
/// Speed offset in the swimming calorie formula
pub const SWIM_CALORIE_1: f64 = 1.1;
/// Multiplier in the swimming calorie formula
pub const SWIM_CALORIE_2: f64 = 2.0;

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length in meters
    pool_length: f64,
    /// Number of pool lengths swum
    pool_laps: f64,
}

impl Swimming {
    pub fn new(action: f64, duration: f64, weight: f64, pool_length: f64, pool_laps: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            pool_length,
            pool_laps,
        }
    }

    /// Build from positional sensor data
    /// `[action, duration, weight, pool_length, pool_laps]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        expect_sensor_data(WorkoutKind::Swimming, data)?;
        Ok(Self::new(data[0], data[1], data[2], data[3], data[4]))
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn pool_laps(&self) -> f64 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn step_length(&self) -> f64 {
        SWIM_LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_laps / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_CALORIE_1) * SWIM_CALORIE_2 * self.base.weight
    }
}
