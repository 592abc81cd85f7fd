use crate::error::{Result, StrideCalcError};
use crate::import::SensorPackage;
use crate::models::WorkoutKind;

const DURATION: usize = 1;
const WEIGHT: usize = 2;
/// Height for walking, pool length for swimming
const EXTRA: usize = 3;

/// Checks sensor packages before they reach the dispatcher
///
/// The calculators accept any number; zero or negative durations and heights
/// produce infinite or meaningless results, so callers reject them here.
/// Unknown codes and wrong value counts are left to the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct PackageValidator {
    strict: bool,
}

impl PackageValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Validate a single package
    pub fn validate(&self, package: &SensorPackage) -> Result<()> {
        if let Some(value) = package.data.iter().find(|v| !v.is_finite()) {
            return Err(StrideCalcError::Validation(format!(
                "{} package contains a non-finite value: {}",
                package.code, value
            )));
        }

        if !self.strict {
            return Ok(());
        }

        let Some(kind) = WorkoutKind::from_code(&package.code) else {
            return Ok(());
        };
        if package.data.len() != kind.parameter_count() {
            return Ok(());
        }

        if package.data.iter().any(|v| *v < 0.0) {
            return Err(StrideCalcError::Validation(format!(
                "{} package contains a negative value",
                package.code
            )));
        }

        let mut positive = vec![DURATION, WEIGHT];
        if matches!(kind, WorkoutKind::SportsWalking | WorkoutKind::Swimming) {
            positive.push(EXTRA);
        }

        for index in positive {
            if package.data[index] <= 0.0 {
                return Err(StrideCalcError::Validation(format!(
                    "{} must be positive for {}, got {}",
                    kind.parameter_names()[index],
                    kind,
                    package.data[index]
                )));
            }
        }

        Ok(())
    }
}
