use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, PackageReader, SensorPackage};

/// Accepted JSON shapes for a single package
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPackage {
    Object { code: String, data: Vec<f64> },
    Pair(String, Vec<f64>),
}

impl From<JsonPackage> for SensorPackage {
    fn from(package: JsonPackage) -> Self {
        match package {
            JsonPackage::Object { code, data } | JsonPackage::Pair(code, data) => {
                SensorPackage::new(code, data)
            }
        }
    }
}

/// JSON reader: an array of `{"code": ..., "data": [...]}` objects or
/// `["CODE", [...]]` pairs
pub struct JsonPackageReader;

impl JsonPackageReader {
    pub fn read_from<R: std::io::Read>(&self, source: R) -> Result<Vec<SensorPackage>> {
        let packages: Vec<JsonPackage> =
            serde_json::from_reader(source).map_err(ImportError::from)?;
        Ok(packages.into_iter().map(SensorPackage::from).collect())
    }
}

impl PackageReader for JsonPackageReader {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["json"])
    }

    fn read_packages(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let file = File::open(file_path)?;
        self.read_from(BufReader::new(file))
    }

    fn format_name(&self) -> &'static str {
        "JSON"
    }
}
