//! # Tabula - Locale-Tolerant Tabular Analysis for Rust
//!
//! Tabula infers column types in messy tabular data, summarizes columns with
//! frequency tables and numeric aggregates, joins lookup values onto
//! frequency rows, and emits declarative chart specifications. It is built on
//! Apache Arrow for columnar storage and is tolerant of European-style number
//! formatting (`.` thousands separator, `,` decimal separator).
//!
//! ## Overview
//!
//! Real-world exports frequently store numbers as text in a locale-specific
//! format. Tabula rescues such columns: a text column where every non-missing
//! value parses under the configured [`NumberFormat`](parse::NumberFormat) is
//! promoted to numeric storage in place. Columns that resist promotion remain
//! categorical, and both kinds get a summary suited to their classification.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula_core::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let mut table = Table::new(vec![
//!     Column::from_strings("amount", vec![Some("1.234,56"), Some("7,5"), None]),
//!     Column::from_strings("login", vec![Some("ada"), Some("grace"), Some("ada")]),
//! ])?;
//!
//! let report = ReportBuilder::new().build_report(&mut table, "amount", None)?;
//!
//! assert_eq!(report.classification, Classification::Numeric);
//! match &report.summary {
//!     ColumnSummary::Numeric(stats) => {
//!         assert_eq!(stats.max, Some(1234.56));
//!         assert_eq!(stats.min, Some(7.5));
//!         // Two numbers plus the missing bucket.
//!         assert_eq!(stats.distinct_count, 3);
//!     }
//!     ColumnSummary::Categorical(_) => unreachable!(),
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Key Capabilities
//!
//! - **Locale-tolerant parsing**: `"1.234,56"` reads as `1234.56` under the
//!   default format; separators are configurable per locale
//! - **All-or-nothing promotion**: a text column is promoted to numeric only
//!   when every non-missing value parses, so mixed columns stay categorical
//! - **Frequency tables**: value counts in descending order with a dedicated
//!   bucket for missing values, ties broken by first appearance
//! - **Numeric aggregates**: sum, min, max, mean (rounded to two decimals),
//!   and distinct count, with empty columns signaled rather than panicking
//! - **Lookup joins**: XLOOKUP-style augmentation of frequency rows with the
//!   first non-missing match from a companion column
//! - **Chart specifications**: declarative histogram and bar-chart specs with
//!   a fixed axis headroom factor, ready for any rendering layer
//!
//! ## Architecture
//!
//! Tabula is organized as a pipeline of small, synchronous stages:
//!
//! - **`table`**: Arrow-backed [`Table`](table::Table) and
//!   [`Column`](table::Column) types plus the [`CellValue`](table::CellValue)
//!   cell representation
//! - **`parse`**: the [`NumberFormat`](parse::NumberFormat) locale-aware
//!   number parser
//! - **`classify`**: the [`ColumnClassifier`](classify::ColumnClassifier)
//!   that tags columns numeric or categorical and rescues numeric text
//! - **`summary`**: frequency tables and per-classification summaries
//! - **`lookup`**: the [`LookupJoiner`](lookup::LookupJoiner) for augmenting
//!   frequency tables
//! - **`chart`**: the [`ChartSpecBuilder`](chart::ChartSpecBuilder) producing
//!   renderer-agnostic chart specs
//! - **`report`**: the [`ReportBuilder`](report::ReportBuilder) orchestrating
//!   the full pipeline for one column
//! - **`sources`**: data loading, currently CSV files
//! - **`formatters`**: human-readable and JSON rendering of reports
//!
//! ## Examples
//!
//! See the `demos` directory for complete examples, including
//! `column_report.rs` which loads a CSV file and walks every stage of the
//! pipeline.

pub mod chart;
pub mod classify;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod lookup;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod sources;
pub mod summary;
pub mod table;
