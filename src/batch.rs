//! Batch processing of sensor packages
//!
//! Runs every package through validation, dispatch and summary in input order.
//! A failing package aborts only itself; whether the remaining packages are
//! still processed is configurable.

use tracing::{debug, warn};

use crate::config::ValidationSettings;
use crate::error::StrideCalcError;
use crate::import::validation::PackageValidator;
use crate::import::SensorPackage;
use crate::models::WorkoutRecord;

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Apply strict value checks before dispatch
    pub strict: bool,
    /// Continue processing on errors
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            strict: true,
            continue_on_error: true,
        }
    }
}

impl From<&ValidationSettings> for BatchConfig {
    fn from(settings: &ValidationSettings) -> Self {
        Self {
            strict: settings.strict,
            continue_on_error: settings.continue_on_error,
        }
    }
}

/// A package that could not be turned into a summary
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input
    pub index: usize,
    /// Workout code as given
    pub code: String,
    pub error: StrideCalcError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Summaries of successful packages, in input order
    pub records: Vec<WorkoutRecord>,
    /// Failed packages, in input order
    pub failures: Vec<PackageFailure>,
    /// Packages not attempted because the run stopped early
    pub skipped: usize,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_packages(&self) -> usize {
        self.records.len() + self.failures.len() + self.skipped
    }
}

/// Processes sensor packages into workout summaries
pub struct BatchProcessor {
    validator: PackageValidator,
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self {
            validator: PackageValidator::new(config.strict),
            config,
        }
    }

    /// Summarize a single package
    pub fn process_one(&self, package: &SensorPackage) -> Result<WorkoutRecord, StrideCalcError> {
        self.validator.validate(package)?;
        let training = package.dispatch()?;
        Ok(training.summary())
    }

    /// Summarize all packages in order
    pub fn process(&self, packages: &[SensorPackage]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (index, package) in packages.iter().enumerate() {
            match self.process_one(package) {
                Ok(record) => {
                    debug!(index, code = %package.code, "Package processed");
                    summary.records.push(record);
                }
                Err(error) => {
                    warn!(index, code = %package.code, error = %error, "Package failed");
                    summary.failures.push(PackageFailure {
                        index,
                        code: package.code.clone(),
                        error,
                    });

                    if !self.config.continue_on_error {
                        summary.skipped = packages.len() - index - 1;
                        break;
                    }
                }
            }
        }

        summary
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}
