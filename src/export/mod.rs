//! Writers for calculated workout summaries
//!
//! Each format writes a slice of [`WorkoutRecord`]s to any `io::Write`, so the
//! CLI can target stdout and tests can target a buffer.

use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::models::{MessageLocale, WorkoutRecord};

pub mod csv;
pub mod json;
pub mod table;
pub mod text;

/// Output formats for workout summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One localized summary line per workout
    #[default]
    Text,
    Json,
    Csv,
    /// Aligned terminal table
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Write `records` to `writer` in the requested format
pub fn write_records<W: Write>(
    records: &[WorkoutRecord],
    format: OutputFormat,
    locale: MessageLocale,
    writer: W,
) -> Result<(), ExportError> {
    tracing::debug!(?format, count = records.len(), "Writing workout summaries");

    match format {
        OutputFormat::Text => text::write_summaries(records, locale, writer),
        OutputFormat::Json => json::write_summaries(records, writer),
        OutputFormat::Csv => csv::write_summaries(records, writer),
        OutputFormat::Table => table::write_summaries(records, writer),
    }
}
