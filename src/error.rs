//! Unified error hierarchy for StrideCalc
//!
//! Typed errors for dispatching sensor packages and importing package files,
//! with severity levels that decide how failures are logged.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::WorkoutKind;

/// Top-level error type for all StrideCalc operations
#[derive(Debug, Error)]
pub enum StrideCalcError {
    /// Workout code not present in the dispatch table
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Sensor data does not match the parameter layout of the workout
    #[error("Invalid sensor data for {workout}: expected {expected} values, got {actual}")]
    SensorDataMismatch {
        workout: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// Sensor package rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Package file import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Package file import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension not handled by any reader
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {path} at line {line}: {reason}")]
    ParseError {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying JSON decoder failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for StrideCalc operations
pub type Result<T> = std::result::Result<T, StrideCalcError>;

impl StrideCalcError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StrideCalcError::Validation(_) => ErrorSeverity::Warning,
            StrideCalcError::UnknownWorkoutType { .. } => ErrorSeverity::Error,
            StrideCalcError::SensorDataMismatch { .. } => ErrorSeverity::Error,
            StrideCalcError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            StrideCalcError::UnknownWorkoutType { code } => {
                format!(
                    "'{}' is not a known workout code. Run `stridecalc codes` to list them.",
                    code
                )
            }
            StrideCalcError::SensorDataMismatch {
                workout, expected, ..
            } => {
                format!(
                    "{} expects {} sensor values: {}",
                    workout,
                    expected,
                    workout.parameter_names().join(", ")
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that stops the whole run
    Critical,
    /// Error that aborts a single workout
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}
