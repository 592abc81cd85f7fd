//! Sensor package dispatch
//!
//! Maps a three-letter workout code onto the matching workout constructor.

use crate::error::{ErrorSeverity, Result, StrideCalcError};
use crate::models::WorkoutKind;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Training;
use crate::walking::SportsWalking;

/// Builds a workout from positional sensor data
pub type WorkoutConstructor = fn(&[f64]) -> Result<Box<dyn Training>>;

fn build_swimming(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Swimming::from_sensor_data(data)?))
}

fn build_running(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(Running::from_sensor_data(data)?))
}

fn build_walking(data: &[f64]) -> Result<Box<dyn Training>> {
    Ok(Box::new(SportsWalking::from_sensor_data(data)?))
}

/// Constructor registered for `kind`
///
/// The match is exhaustive over the closed set of workout kinds, so adding a
/// kind without a constructor does not compile.
pub fn constructor_for(kind: WorkoutKind) -> WorkoutConstructor {
    match kind {
        WorkoutKind::Swimming => build_swimming,
        WorkoutKind::Running => build_running,
        WorkoutKind::SportsWalking => build_walking,
    }
}

/// Build a workout from a sensor package of `kind`
pub fn build_workout(kind: WorkoutKind, data: &[f64]) -> Result<Box<dyn Training>> {
    constructor_for(kind)(data)
}

/// Read a sensor package: resolve `code` and construct the workout from `data`
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let result = code
        .parse::<WorkoutKind>()
        .and_then(|kind| build_workout(kind, data));

    match &result {
        Ok(training) => {
            tracing::debug!(code, workout = %training.kind(), values = data.len(), "Package dispatched")
        }
        Err(err) => log_dispatch_error(code, err),
    }

    result
}

fn log_dispatch_error(code: &str, err: &StrideCalcError) {
    match err.severity() {
        ErrorSeverity::Warning => tracing::warn!(code, error = %err, "Package rejected"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            tracing::error!(code, error = %err, "Package rejected")
        }
    }
}

/// Sample packages processed when no input is given
pub fn sample_packages() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
