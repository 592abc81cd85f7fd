use super::ExportError;
use crate::models::WorkoutRecord;
use std::io::Write;

/// Write summaries as CSV with a header row
pub fn write_summaries<W: Write>(records: &[WorkoutRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(())
}
