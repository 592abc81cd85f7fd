//! End-to-end tests: package file → batch → exported summaries

use std::fs;
use stridecalc::batch::BatchProcessor;
use stridecalc::export::{write_records, OutputFormat};
use stridecalc::import::ImportManager;
use stridecalc::{MessageLocale, WorkoutRecord};
use tempfile::tempdir;

#[test]
fn test_csv_file_to_text_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("packages.csv");
    fs::write(
        &path,
        "# pool session first\nSWM,720,1,80,25,40\nRUN,15000,1,75\nWLK,9000,1,75,180\n",
    )
    .unwrap();

    let packages = ImportManager::new().import_file(&path).unwrap();
    let summary = BatchProcessor::default().process(&packages);
    assert!(summary.is_success());

    let mut output = Vec::new();
    write_records(
        &summary.records,
        OutputFormat::Text,
        MessageLocale::Russian,
        &mut output,
    )
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Swimming"));
    assert!(lines[1].contains("Потрачено ккал: 699.750."));
    assert!(lines[2].contains("SportsWalking"));
}

#[test]
fn test_json_file_to_json_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("packages.json");
    fs::write(
        &path,
        r#"[{"code": "RUN", "data": [15000, 1, 75]}, ["SWM", [720, 1, 80, 25, 40]]]"#,
    )
    .unwrap();

    let packages = ImportManager::new().import_file(&path).unwrap();
    let summary = BatchProcessor::default().process(&packages);

    let mut output = Vec::new();
    write_records(
        &summary.records,
        OutputFormat::Json,
        MessageLocale::English,
        &mut output,
    )
    .unwrap();

    let records: Vec<WorkoutRecord> = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].training_type, "Running");
    assert!((records[1].calories - 336.0).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = ImportManager::new()
        .import_file(&dir.path().join("absent.csv"))
        .unwrap_err();

    assert!(matches!(err, stridecalc::StrideCalcError::Io(_)));
}
