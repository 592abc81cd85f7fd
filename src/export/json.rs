use super::ExportError;
use crate::models::WorkoutRecord;
use std::io::Write;

/// Write summaries as a pretty-printed JSON array
pub fn write_summaries<W: Write>(records: &[WorkoutRecord], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_records;

    #[test]
    fn test_json_keeps_full_precision() {
        let mut buffer = Vec::new();
        write_summaries(&sample_records(), &mut buffer).unwrap();

        let parsed: Vec<WorkoutRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, sample_records());
        assert_eq!(parsed[0].distance, 0.9936);
    }
}
