//! Example demonstrating the result formatters in Tabula.
//!
//! This example shows how to format column reports in different ways:
//! - Human-readable format for console output
//! - JSON format for programmatic consumption
//! - Custom formatting configurations
//!
//! Run with:
//! ```bash
//! cargo run --example result_formatters
//! ```

use std::error::Error;
use tabula_core::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ResultFormatter};
use tabula_core::prelude::*;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let mut table = Table::new(vec![
        Column::from_strings(
            "city",
            vec![
                Some("Oslo"),
                Some("Bergen"),
                Some("Oslo"),
                Some("Trondheim"),
                Some("Oslo"),
                None,
            ],
        ),
        Column::from_strings(
            "Login ID",
            vec![
                Some("ada"),
                Some("grace"),
                Some("edsger"),
                Some("barbara"),
                Some("tony"),
                Some("donald"),
            ],
        ),
    ])?;

    let report = ReportBuilder::new().build_report(&mut table, "city", None)?;

    println!("{}", "=".repeat(60));
    println!("1. HUMAN-READABLE FORMAT");
    println!("{}", "=".repeat(60));
    let human = HumanFormatter::new();
    println!("{}", human.format(&report)?);

    println!("{}", "=".repeat(60));
    println!("2. PRETTY JSON FORMAT");
    println!("{}", "=".repeat(60));
    let json = JsonFormatter::pretty();
    println!("{}", json.format(&report)?);

    println!("{}", "=".repeat(60));
    println!("3. MINIMAL CONFIGURATION (top 2 rows only)");
    println!("{}", "=".repeat(60));
    let compact = HumanFormatter::with_config(FormatterConfig::minimal().with_max_rows(2));
    println!("{}", compact.format(&report)?);

    Ok(())
}
