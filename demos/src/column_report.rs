//! End-to-end column report example.
//!
//! This example shows how to:
//! - Load a CSV file with locale-formatted numbers into a table
//! - Classify columns and rescue numeric text stored with `,` decimals
//! - Summarize a column and join a lookup value onto its frequency rows
//! - Inspect the chart specification produced for rendering
//!
//! Run with:
//! ```bash
//! cargo run --example column_report
//! ```

use tabula_core::logging::{init_logging, LoggingConfig};
use tabula_core::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::development())?;

    // Sample export with European number formatting: "." groups thousands
    // and "," marks the decimal point.
    let csv_data = "\
Login ID,department,hours,bonus
ajohnson,Engineering,\"1.540,5\",\"2.300,00\"
bsmith,Engineering,\"1.498,25\",\"1.850,50\"
cdavis,Sales,\"1.602,0\",\"2.100,00\"
dwilson,Sales,\"1.540,5\",
ebrown,Support,,\"1.200,00\"
";

    let temp_dir = std::env::temp_dir();
    let file_path = temp_dir.join("staff_hours.csv");
    std::fs::write(&file_path, csv_data)?;

    let mut table = CsvSource::new(&file_path).load()?;
    println!("Loaded {} rows, {} columns\n", table.num_rows(), table.num_columns());

    // Classification promotes "hours" and "bonus" to numeric storage in
    // place; "Login ID" and "department" stay categorical.
    let classifier = ColumnClassifier::new();
    let classes = classifier.classify(&mut table)?;
    for (name, classification) in classes.tags() {
        let rescued = if classes.rescued_columns().contains(name) {
            " (rescued from text)"
        } else {
            ""
        };
        println!("  {name}: {classification:?}{rescued}");
    }

    println!("\n{}", "=".repeat(60));

    // Full report for the numeric "hours" column. The lookup column
    // defaults to "Login ID" when none is given.
    let builder = ReportBuilder::new();
    let report = builder.build_report(&mut table, "hours", None)?;

    match &report.summary {
        ColumnSummary::Numeric(stats) => {
            println!("hours: sum={:.2}", stats.sum);
            if let Some(mean) = stats.mean {
                println!("hours: mean={mean:.2}");
            }
            println!("hours: distinct={}", stats.distinct_count);
        }
        ColumnSummary::Categorical(_) => unreachable!("hours is numeric"),
    }

    println!("\nFrequency table with lookup ({}):", report.lookup.lookup_column);
    for row in &report.lookup.rows {
        println!("  {} x{} -> {}", row.key, row.count, row.lookup);
    }

    println!("\nChart: {} (axis max {:.1})", report.chart.title(), report.chart.axis_max());

    // Categorical columns get a frequency summary and a bar-chart spec.
    let report = builder.build_report(&mut table, "department", Some("Login ID"))?;
    println!("\n{}", "=".repeat(60));
    println!("\nFrequency table for department:");
    for row in &report.summary.frequencies().rows {
        println!("  {} x{}", row.value, row.count);
    }

    let formatter = tabula_core::formatters::HumanFormatter::new();
    println!("\n{}", formatter.format(&report)?);

    std::fs::remove_file(&file_path).ok();
    Ok(())
}
