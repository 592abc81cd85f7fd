//! Sensor package import
//!
//! A sensor package is a workout code plus positional sensor values, as
//! accepted by [`read_package`]. Packages can be read in bulk from CSV or JSON
//! files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dispatch::read_package;
use crate::error::{ImportError, Result};
use crate::training::Training;

pub mod csv;
pub mod json;
pub mod validation;

/// Raw sensor reading for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Three-letter workout code
    pub code: String,

    /// Positional sensor values for the workout constructor
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Build the workout this package describes
    pub fn dispatch(&self) -> Result<Box<dyn Training>> {
        read_package(&self.code, &self.data)
    }
}

impl From<(&str, Vec<f64>)> for SensorPackage {
    fn from((code, data): (&str, Vec<f64>)) -> Self {
        Self::new(code, data)
    }
}

/// Trait for reading sensor packages from different file formats
pub trait PackageReader {
    /// Check if this reader can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read all packages from the file, in file order
    fn read_packages(&self, file_path: &Path) -> Result<Vec<SensorPackage>>;

    /// Get the format name for this reader
    fn format_name(&self) -> &'static str;
}

/// Manager for coordinating the package readers
pub struct ImportManager {
    readers: Vec<Box<dyn PackageReader>>,
}

impl ImportManager {
    /// Create a new import manager with all available readers
    pub fn new() -> Self {
        let readers: Vec<Box<dyn PackageReader>> = vec![
            Box::new(csv::CsvPackageReader::new()),
            Box::new(json::JsonPackageReader),
        ];

        Self { readers }
    }

    /// Import a single file, picking the reader from its extension
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let reader = self
            .readers
            .iter()
            .find(|reader| reader.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFormat {
                format: file_path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "<none>".to_string()),
            })?;

        tracing::info!(
            file = %file_path.display(),
            format = reader.format_name(),
            "Importing sensor packages"
        );

        let packages = reader.read_packages(file_path)?;
        tracing::debug!(count = packages.len(), "Sensor packages read");
        Ok(packages)
    }

    /// Check if this manager can import a given file
    pub fn can_import_file(&self, file_path: &Path) -> bool {
        self.readers.iter().any(|reader| reader.can_import(file_path))
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn has_extension(file_path: &Path, extensions: &[&str]) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StrideCalcError;
    use crate::models::WorkoutKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_package_dispatch() {
        let package = SensorPackage::from(("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(package.dispatch().unwrap().kind(), WorkoutKind::Running);
    }

    #[test]
    fn test_manager_picks_reader_by_extension() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("packages.CSV");
        fs::write(&csv_path, "RUN,15000,1,75\n").unwrap();

        let manager = ImportManager::new();
        assert!(manager.can_import_file(&csv_path));

        let packages = manager.import_file(&csv_path).unwrap();
        assert_eq!(packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_manager_rejects_unknown_extension() {
        let manager = ImportManager::new();
        let err = manager.import_file(Path::new("packages.fit")).unwrap_err();

        assert!(matches!(
            err,
            StrideCalcError::Import(ImportError::UnsupportedFormat { ref format }) if format == "fit"
        ));
    }
}
