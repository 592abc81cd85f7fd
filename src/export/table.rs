use super::ExportError;
use crate::models::WorkoutRecord;
use std::io::Write;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Workout")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&WorkoutRecord> for SummaryRow {
    fn from(record: &WorkoutRecord) -> Self {
        Self {
            training_type: record.training_type.clone(),
            duration: format!("{:.3}", record.duration),
            distance: format!("{:.3}", record.distance),
            speed: format!("{:.3}", record.speed),
            calories: format!("{:.3}", record.calories),
        }
    }
}

/// Write summaries as an aligned table
pub fn write_summaries<W: Write>(records: &[WorkoutRecord], mut writer: W) -> Result<(), ExportError> {
    let rows: Vec<SummaryRow> = records.iter().map(SummaryRow::from).collect();
    writeln!(writer, "{}", Table::new(rows))?;
    Ok(())
}
