use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, PackageReader, SensorPackage};

/// CSV reader for sensor packages
///
/// Each row is `CODE,value,value,...`; rows may have different lengths and
/// lines starting with `#` are skipped. A header row is optional and detected
/// by its first column being `code`.
pub struct CsvPackageReader {
    delimiter: u8,
}

impl CsvPackageReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read packages from any CSV source
    pub fn read_from<R: std::io::Read>(&self, source: R, origin: &Path) -> Result<Vec<SensorPackage>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .delimiter(self.delimiter)
            .from_reader(source);

        let mut packages = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(ImportError::from)?;
            let line = row.position().map(|p| p.line() as usize).unwrap_or(index + 1);

            if index == 0 && Self::is_header(&row) {
                continue;
            }
            if row.iter().all(str::is_empty) {
                continue;
            }

            packages.push(Self::parse_row(&row, origin, line)?);
        }

        Ok(packages)
    }

    fn is_header(row: &StringRecord) -> bool {
        row.get(0)
            .map(|first| first.eq_ignore_ascii_case("code"))
            .unwrap_or(false)
    }

    fn parse_row(row: &StringRecord, origin: &Path, line: usize) -> Result<SensorPackage> {
        let parse_error = |reason: String| ImportError::ParseError {
            path: origin.to_path_buf(),
            line,
            reason,
        };

        let code = row
            .get(0)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| parse_error("missing workout code".to_string()))?;

        // A trailing delimiter is tolerated; a gap between values is not.
        let fields: Vec<&str> = row.iter().skip(1).collect();
        let filled = fields
            .iter()
            .rposition(|field| !field.is_empty())
            .map_or(0, |last| last + 1);

        let data = fields[..filled]
            .iter()
            .enumerate()
            .map(|(offset, field)| {
                if field.is_empty() {
                    return Err(parse_error(format!("empty value in column {}", offset + 2)));
                }
                field
                    .parse::<f64>()
                    .map_err(|_| parse_error(format!("invalid number '{}'", field)))
            })
            .collect::<std::result::Result<Vec<f64>, ImportError>>()?;

        Ok(SensorPackage::new(code, data))
    }
}

impl Default for CsvPackageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageReader for CsvPackageReader {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["csv", "tsv"])
    }

    fn read_packages(&self, file_path: &Path) -> Result<Vec<SensorPackage>> {
        let file = File::open(file_path)?;
        if has_extension(file_path, &["tsv"]) {
            return Self::with_delimiter(b'\t').read_from(file, file_path);
        }
        self.read_from(file, file_path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}
