use super::ExportError;
use crate::models::{MessageLocale, WorkoutRecord};
use std::io::Write;

/// Write one rendered summary line per workout
pub fn write_summaries<W: Write>(
    records: &[WorkoutRecord],
    locale: MessageLocale,
    mut writer: W,
) -> Result<(), ExportError> {
    for record in records {
        writeln!(writer, "{}", record.render_with(locale))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_records;

    #[test]
    fn test_lines_follow_record_order() {
        let mut buffer = Vec::new();
        write_summaries(&sample_records(), MessageLocale::Russian, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
        assert!(lines[1].starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut buffer = Vec::new();
        write_summaries(&[], MessageLocale::English, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
