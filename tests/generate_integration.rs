//! Integration tests for the generation pipeline.
//!
//! These tests run the full pipeline against a temporary directory and verify
//! both the written workbook and the behavior of failed runs.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

use regex::Regex;
use tempfile::TempDir;

use mobile_numgen::config::{AppConfig, GeneratorConfig, OutputConfig};
use mobile_numgen::domain::PhoneNumber;
use mobile_numgen::error::{AppError, ExitCode, Result};
use mobile_numgen::export::{TableSink, XlsxSink};
use mobile_numgen::run;
use mobile_numgen::service::{format_phone_number, sample, validate};

// ============================================================================
// Test Harness
// ============================================================================

/// Sink that keeps the table in memory.
#[derive(Default)]
struct RecordingSink {
    written: RefCell<Option<(String, Vec<PhoneNumber>)>>,
}

impl TableSink for RecordingSink {
    fn write_column(&self, column_name: &str, rows: &[PhoneNumber]) -> Result<PathBuf> {
        *self.written.borrow_mut() = Some((column_name.to_string(), rows.to_vec()));
        Ok(PathBuf::from("memory"))
    }
}

fn config_with(generator: GeneratorConfig, path: PathBuf) -> AppConfig {
    AppConfig {
        generator,
        output: OutputConfig {
            path,
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_default_run_writes_workbook() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out/numbers.xlsx");
    let config = config_with(GeneratorConfig::default(), path.clone());

    let summary = run(&config, &XlsxSink::new(&config.output)).unwrap();

    assert_eq!(summary.output, path);
    assert!(summary.report.validation.is_passed());
    assert_eq!(summary.report.validation.total_count, 3000);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn test_default_run_table_shape() {
    let sink = RecordingSink::default();
    let config = config_with(GeneratorConfig::default(), PathBuf::from("unused.xlsx"));

    run(&config, &sink).unwrap();

    let (column, rows) = sink.written.borrow_mut().take().unwrap();
    assert_eq!(column, "Mobile_Number");
    assert_eq!(rows.len(), 3000);

    let shape = Regex::new(r"^019\d{8}$").unwrap();
    assert!(rows.iter().all(|n| shape.is_match(n.as_str())));
    assert_eq!(rows.iter().collect::<HashSet<_>>().len(), 3000);
    assert!(rows.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_runs_are_reproducible() {
    let first = RecordingSink::default();
    let second = RecordingSink::default();
    let config = config_with(GeneratorConfig::default(), PathBuf::from("unused.xlsx"));

    run(&config, &first).unwrap();
    run(&config, &second).unwrap();

    assert_eq!(
        first.written.borrow().as_ref().unwrap().1,
        second.written.borrow().as_ref().unwrap().1
    );
}

#[test]
fn test_capacity_exceeded_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("numbers.xlsx");
    let generator = GeneratorConfig {
        prefix: "0190000000".to_string(),
        total_length: 11,
        count: 3000,
        seed: 42,
    };
    let config = config_with(generator, path.clone());

    let err = run(&config, &XlsxSink::new(&config.output)).unwrap_err();

    assert!(matches!(
        err,
        AppError::CapacityExceeded {
            requested: 3000,
            available: 10
        }
    ));
    assert_eq!(err.exit_code(), ExitCode::CAPACITY_EXCEEDED);
    assert_eq!(
        err.to_string(),
        "requested count exceeds available combinations: requested 3000, available 10"
    );
    assert!(!path.exists());
}

#[test]
fn test_zero_count_writes_header_only_table() {
    let sink = RecordingSink::default();
    let generator = GeneratorConfig {
        count: 0,
        ..Default::default()
    };
    let config = config_with(generator, PathBuf::from("unused.xlsx"));

    let summary = run(&config, &sink).unwrap();

    assert!(summary.report.validation.is_passed());
    assert!(sink.written.borrow().as_ref().unwrap().1.is_empty());
}

#[test]
fn test_single_value_universe() {
    let suffixes = sample(1, 1, 42).unwrap();
    assert_eq!(suffixes, vec![0]);

    let number = format_phone_number(suffixes[0], 8, "019").unwrap();
    assert_eq!(number.as_str(), "01900000000");

    let report = validate(std::slice::from_ref(&number), 1, "019", 11);
    assert!(report.is_passed());
}

#[test]
fn test_custom_column_name() {
    let sink = RecordingSink::default();
    let mut config = config_with(
        GeneratorConfig {
            count: 5,
            ..Default::default()
        },
        PathBuf::from("unused.xlsx"),
    );
    config.output.column_name = "Phone".to_string();

    run(&config, &sink).unwrap();

    assert_eq!(sink.written.borrow().as_ref().unwrap().0, "Phone");
}
