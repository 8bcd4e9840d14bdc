//! Integration tests for CSV ingestion feeding the reporting pipeline.

use std::io::Write;

use tabula_core::classify::Classification;
use tabula_core::report::ReportBuilder;
use tabula_core::sources::{CsvOptions, CsvSource};
use tabula_core::summary::ColumnSummary;
use tabula_core::table::CellValue;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_csv_to_report_end_to_end() {
    let file = write_temp(
        "Login ID,department,hours\n\
         ajohnson,Engineering,\"1.540,5\"\n\
         bsmith,Engineering,\"1.498,25\"\n\
         cdavis,Sales,\"1.540,5\"\n\
         dwilson,Sales,\n",
    );
    let mut table = CsvSource::new(file.path()).load().unwrap();
    let report = ReportBuilder::new()
        .build_report(&mut table, "hours", None)
        .unwrap();

    assert_eq!(report.classification, Classification::Numeric);
    let ColumnSummary::Numeric(stats) = &report.summary else {
        panic!("expected numeric summary");
    };
    assert_eq!(stats.min, Some(1498.25));
    assert_eq!(stats.max, Some(1540.5));
    // 1540.5 twice, 1498.25 once, one missing.
    assert_eq!(stats.distinct_count, 3);

    let top = &report.lookup.rows[0];
    assert_eq!(top.key, CellValue::Number(1540.5));
    assert_eq!(top.lookup, CellValue::Text("ajohnson".to_string()));
}

#[test]
fn test_quoted_fields_preserve_decimal_commas() {
    let file = write_temp("amount\n\"1,5\"\n\"2,0\"\n");
    let table = CsvSource::new(file.path()).load().unwrap();
    let amount = table.column("amount").unwrap();

    // The comma is data, not a delimiter: the raw text survives ingestion
    // for the rescue pass to parse.
    assert!(!amount.is_numeric());
    assert_eq!(amount.cell(0), CellValue::Text("1,5".to_string()));
}

#[test]
fn test_semicolon_dialect() {
    let file = write_temp("Login ID;hours\nada;1,5\ngrace;2,0\n");
    let options = CsvOptions {
        delimiter: b';',
        ..Default::default()
    };
    let mut table = CsvSource::with_options(file.path(), options)
        .load()
        .unwrap();

    let report = ReportBuilder::new()
        .build_report(&mut table, "hours", None)
        .unwrap();
    assert_eq!(report.classification, Classification::Numeric);
    assert_eq!(report.lookup.lookup_column, "Login ID");
}

#[test]
fn test_ragged_rows_are_rejected() {
    let file = write_temp("a,b\n1,2\n3\n");
    let result = CsvSource::new(file.path()).load();
    assert!(result.is_err());
}

#[test]
fn test_headerless_file() {
    let file = write_temp("1,x\n2,y\n");
    let options = CsvOptions {
        has_header: false,
        ..Default::default()
    };
    let table = CsvSource::with_options(file.path(), options)
        .load()
        .unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.num_columns(), 2);
}
