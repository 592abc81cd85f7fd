//! Shared workout model
//!
//! Every workout variant owns a [`TrainingBase`] with the three raw sensor
//! values common to all activities and implements [`Training`], which derives
//! distance and speed from them. Calories have no shared formula, so
//! `spent_calories` is a required method rather than a fallible default.

use std::fmt::Debug;

use crate::error::{Result, StrideCalcError};
use crate::models::{WorkoutKind, WorkoutRecord};

/// Distance covered by one step, in meters
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Raw sensor values shared by every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes performed
    pub action: f64,
    /// Duration in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Calculation interface implemented by each workout variant
pub trait Training: Debug {
    /// Workout variant this instance represents
    fn kind(&self) -> WorkoutKind;

    /// Sensor values common to all variants
    fn base(&self) -> &TrainingBase;

    /// Meters covered per action
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        let base = self.base();
        base.action * self.step_length() / M_IN_KM
    }

    /// Average speed in km/h
    ///
    /// A zero duration yields an infinite or NaN speed; callers are expected
    /// to supply a positive duration.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> f64;

    /// Assemble the workout summary
    fn summary(&self) -> WorkoutRecord {
        let record = WorkoutRecord {
            training_type: self.kind().display_name().to_string(),
            duration: self.base().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };

        tracing::trace!(
            workout = %self.kind(),
            distance = record.distance,
            speed = record.speed,
            calories = record.calories,
            "Workout summary calculated"
        );

        record
    }
}

/// Check a positional sensor slice against the layout of `kind`
pub(crate) fn expect_sensor_data(kind: WorkoutKind, data: &[f64]) -> Result<()> {
    let expected = kind.parameter_count();
    if data.len() != expected {
        return Err(StrideCalcError::SensorDataMismatch {
            workout: kind,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Floored division with the rounding behaviour of a remainder-based floor
///
/// `a - a % b` is exactly divisible by `b`, so the quotient is snapped to the
/// nearest integer instead of relying on `(a / b).floor()`, which can be off
/// by one when `a / b` rounds up to a whole number.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    // Remainder must carry the sign of the divisor
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(a / b)
    }
}
