//! Rendering of column reports for display collaborators.
//!
//! The core's display responsibility ends at the 2-decimal mean rounding;
//! these formatters are convenience encoders that turn a [`ColumnReport`]
//! into text a shell can print (human-readable) or another process can
//! consume (JSON). Presentation beyond that belongs to the UI collaborator.
//!
//! # Examples
//!
//! ```
//! use tabula_core::formatters::{HumanFormatter, ResultFormatter};
//! use tabula_core::report::ReportBuilder;
//! use tabula_core::table::{Column, Table};
//!
//! let mut table = Table::new(vec![
//!     Column::from_strings("price", vec![Some("1,5"), Some("2,0")]),
//!     Column::from_strings("city", vec![Some("Oslo"), Some("Bergen")]),
//! ]).unwrap();
//! let report = ReportBuilder::new().build_report(&mut table, "price", None).unwrap();
//!
//! let text = HumanFormatter::new().format(&report).unwrap();
//! assert!(text.contains("Sum"));
//! ```

use std::fmt::Write;

use crate::error::Result;
use crate::logging::truncate_field;
use crate::report::ColumnReport;
use crate::summary::ColumnSummary;

/// Configuration options for formatting column reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include the frequency / lookup table rows in output.
    pub include_frequencies: bool,
    /// Maximum number of frequency rows to display (-1 for all).
    pub max_rows: i32,
    /// Maximum length for displayed values (longer values are truncated).
    pub max_field_length: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_frequencies: true,
            max_rows: -1,
            max_field_length: 64,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only the summary fields.
    pub fn minimal() -> Self {
        Self {
            include_frequencies: false,
            max_rows: 0,
            max_field_length: 64,
        }
    }

    /// Sets the maximum number of frequency rows to display.
    pub fn with_max_rows(mut self, max: i32) -> Self {
        self.max_rows = max;
        self
    }
}

/// Trait for formatting column reports into different output formats.
pub trait ResultFormatter {
    /// Formats a column report into a string representation.
    fn format(&self, report: &ColumnReport) -> Result<String>;
}

/// Human-readable plain-text formatter.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, report: &ColumnReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Column: {}", report.column);
        let _ = writeln!(out, "Classification: {:?}", report.classification);

        match &report.summary {
            ColumnSummary::Numeric(s) => {
                let _ = writeln!(out, "Sum: {}", s.sum);
                match (s.min, s.max, s.mean) {
                    (Some(min), Some(max), Some(mean)) => {
                        let _ = writeln!(out, "Min: {min}");
                        let _ = writeln!(out, "Max: {max}");
                        let _ = writeln!(out, "Mean: {mean:.2}");
                    }
                    _ => {
                        let _ = writeln!(out, "Min/Max/Mean: undefined (no values)");
                    }
                }
                let _ = writeln!(out, "Distinct values: {}", s.distinct_count);
            }
            ColumnSummary::Categorical(s) => {
                let _ = writeln!(out, "Distinct values: {}", s.distinct_count);
            }
        }

        if self.config.include_frequencies {
            let _ = writeln!(
                out,
                "{} | {} | {}",
                report.lookup.key_column, report.lookup.count_label, report.lookup.lookup_column
            );
            for (index, row) in report.lookup.rows.iter().enumerate() {
                if self.config.max_rows >= 0 && index as i32 >= self.config.max_rows {
                    let remaining = report.lookup.rows.len() - index;
                    let _ = writeln!(out, "... {remaining} more");
                    break;
                }
                let key = truncate_field(&row.key.to_string(), self.config.max_field_length);
                let lookup = truncate_field(&row.lookup.to_string(), self.config.max_field_length);
                let _ = writeln!(out, "{key} | {} | {lookup}", row.count);
            }
        }

        Ok(out)
    }
}

/// JSON formatter for machine consumers.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables pretty-printed output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, report: &ColumnReport) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportBuilder;
    use crate::table::{Column, Table};

    fn sample_report() -> ColumnReport {
        let mut table = Table::new(vec![
            Column::from_strings("price", vec![Some("1,5"), Some("2,0"), Some("1,5")]),
            Column::from_strings("city", vec![Some("Oslo"), Some("Bergen"), Some("Oslo")]),
        ])
        .unwrap();
        ReportBuilder::new()
            .build_report(&mut table, "price", Some("city"))
            .unwrap()
    }

    #[test]
    fn test_human_formatter_includes_summary_fields() {
        let text = HumanFormatter::new().format(&sample_report()).unwrap();
        assert!(text.contains("Column: price"));
        assert!(text.contains("Sum: 5"));
        assert!(text.contains("Mean: 1.67"));
        assert!(text.contains("Occurrences"));
    }

    #[test]
    fn test_human_formatter_row_limit() {
        let formatter =
            HumanFormatter::with_config(FormatterConfig::default().with_max_rows(1));
        let text = formatter.format(&sample_report()).unwrap();
        assert!(text.contains("more"));
    }

    #[test]
    fn test_minimal_config_skips_rows() {
        let formatter = HumanFormatter::with_config(FormatterConfig::minimal());
        let text = formatter.format(&sample_report()).unwrap();
        assert!(!text.contains("Occurrences"));
    }

    #[test]
    fn test_json_formatter_round_trips() {
        let encoded = JsonFormatter::new().format(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["column"], "price");
        assert_eq!(value["classification"], "Numeric");
    }
}
