//! Full per-column reporting.
//!
//! A [`ColumnReport`] is everything the reporting view needs for one
//! column: its classification, the fixed summary, the lookup-augmented
//! frequency table, and the chart specification. [`ReportBuilder`] runs
//! the whole pipeline (classify, summarize, join, build spec) in one
//! synchronous pass over the table.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::chart::{ChartSpec, ChartSpecBuilder};
use crate::classify::{Classification, ColumnClassifier};
use crate::error::Result;
use crate::lookup::{AugmentedFrequencyTable, LookupJoiner};
use crate::parse::NumberFormat;
use crate::summary::{ColumnSummarizer, ColumnSummary};
use crate::table::Table;

/// Everything the reporting view needs for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    pub column: String,
    pub classification: Classification,
    pub summary: ColumnSummary,
    pub lookup: AugmentedFrequencyTable,
    pub chart: ChartSpec,
}

/// Composes the core components into a single reporting pass.
///
/// # Examples
///
/// ```
/// use tabula_core::report::ReportBuilder;
/// use tabula_core::table::{Column, Table};
///
/// let mut table = Table::new(vec![
///     Column::from_strings("price", vec![Some("1,5"), Some("2,0")]),
///     Column::from_strings("city", vec![Some("Oslo"), Some("Bergen")]),
/// ]).unwrap();
///
/// let report = ReportBuilder::new()
///     .build_report(&mut table, "price", None)
///     .unwrap();
/// assert_eq!(report.column, "price");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    classifier: ColumnClassifier,
    summarizer: ColumnSummarizer,
    joiner: LookupJoiner,
    charts: ChartSpecBuilder,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit separator convention for the rescue pass.
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.classifier = ColumnClassifier::with_format(format);
        self
    }

    /// Uses an explicit preferred default lookup column.
    pub fn with_preferred_lookup(mut self, column: impl Into<String>) -> Self {
        self.joiner = LookupJoiner::with_preferred(column);
        self
    }

    /// Builds the full report for one column.
    ///
    /// Classification runs over the whole table first (it is idempotent,
    /// so repeated reports against the same table are cheap and stable);
    /// the remaining steps read only the requested columns.
    #[instrument(skip(self, table), fields(column))]
    pub fn build_report(
        &self,
        table: &mut Table,
        column: &str,
        lookup_column: Option<&str>,
    ) -> Result<ColumnReport> {
        let report = self.classifier.classify(table)?;
        let classification = report
            .classification(column)
            .ok_or_else(|| crate::error::TabulaError::column_not_found(column))?;

        let target = table.require_column(column)?;
        let summary = self.summarizer.summarize(target, classification);
        let lookup = self
            .joiner
            .join(table, column, summary.frequencies(), lookup_column)?;
        let chart = self.charts.build_spec(target, classification);

        info!(
            column,
            ?classification,
            distinct = summary.distinct_count(),
            "column report complete"
        );
        Ok(ColumnReport {
            column: column.to_string(),
            classification,
            summary,
            lookup,
            chart,
        })
    }
}
