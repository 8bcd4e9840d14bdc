//! Per-column summaries and value-frequency tables.
//!
//! A classified column summarizes into either a [`NumericSummary`] (sum,
//! min, max, mean, distinct count) or a [`CategoricalSummary`] (distinct
//! count), each carrying a [`FrequencyTable`] over the column's values.
//!
//! Missing values are excluded from the numeric aggregates but count as a
//! bucket of their own in the frequency table and the distinct count. A
//! column with zero non-missing values reports `sum = 0` and `None` for
//! min/max/mean; the empty column is signaled explicitly, never raised.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::classify::Classification;
use crate::table::{CellValue, Column};

/// Label for the count column wherever a frequency table is displayed,
/// distinct from the key and lookup column labels.
pub const COUNT_LABEL: &str = "Occurrences";

/// One distinct value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// The distinct value; `CellValue::Missing` is the missing bucket.
    pub value: CellValue,
    /// Number of rows carrying this value.
    pub count: u64,
}

/// Distinct values of a column ordered by descending count.
///
/// Ties break by first appearance in the source column, so the ordering is
/// deterministic and reproducible. The counts sum to the source column's
/// row count, missing bucket included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// The source column name.
    pub column: String,
    /// Rows in display order.
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Counts the distinct values of a column.
    pub fn of(column: &Column) -> Self {
        let mut order: Vec<CellValue> = Vec::new();
        let mut counts: HashMap<CellValue, u64> = HashMap::new();
        for cell in column.iter() {
            let entry = counts.entry(cell.clone()).or_insert(0);
            if *entry == 0 {
                order.push(cell);
            }
            *entry += 1;
        }

        let mut rows: Vec<FrequencyRow> = order
            .into_iter()
            .map(|value| {
                let count = counts[&value];
                FrequencyRow { value, count }
            })
            .collect();
        // Stable sort keeps first-appearance order within equal counts.
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            column: column.name().to_string(),
            rows,
        }
    }

    /// Number of distinct values, missing bucket included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the source column had no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts; equals the source column's row count.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// The largest count, or 0 for an empty table.
    pub fn max_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).max().unwrap_or(0)
    }

    /// Returns true if a missing bucket is present.
    pub fn has_missing_bucket(&self) -> bool {
        self.rows.iter().any(|r| r.value.is_missing())
    }
}

/// Summary of a numeric column.
///
/// `min`, `max`, and `mean` are `None` exactly when the column has zero
/// non-missing values; `sum` is 0 in that case (sum over the empty set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Mean rounded to 2 decimal digits for display.
    pub mean: Option<f64>,
    /// Distinct values including the missing bucket when present.
    pub distinct_count: usize,
    pub frequencies: FrequencyTable,
}

impl NumericSummary {
    /// Returns true if the column had zero non-missing values.
    pub fn is_empty_column(&self) -> bool {
        self.mean.is_none()
    }
}

/// Summary of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Distinct values including the missing bucket when present.
    pub distinct_count: usize,
    pub frequencies: FrequencyTable,
}

/// Summary of a classified column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    /// The frequency table, whichever shape the summary has.
    pub fn frequencies(&self) -> &FrequencyTable {
        match self {
            ColumnSummary::Numeric(s) => &s.frequencies,
            ColumnSummary::Categorical(s) => &s.frequencies,
        }
    }

    /// Distinct count, whichever shape the summary has.
    pub fn distinct_count(&self) -> usize {
        match self {
            ColumnSummary::Numeric(s) => s.distinct_count,
            ColumnSummary::Categorical(s) => s.distinct_count,
        }
    }
}

/// Computes fixed per-column summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSummarizer;

impl ColumnSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Summarizes a column under its classification.
    #[instrument(skip(self, column), fields(column = column.name(), rows = column.len()))]
    pub fn summarize(&self, column: &Column, classification: Classification) -> ColumnSummary {
        let frequencies = FrequencyTable::of(column);
        let distinct_count = frequencies.len();
        debug!(distinct = distinct_count, "frequency table computed");

        match classification {
            Classification::Categorical => ColumnSummary::Categorical(CategoricalSummary {
                distinct_count,
                frequencies,
            }),
            Classification::Numeric => {
                let mut sum = 0.0;
                let mut min: Option<f64> = None;
                let mut max: Option<f64> = None;
                let mut non_missing = 0u64;
                for value in column.numbers() {
                    sum += value;
                    non_missing += 1;
                    min = Some(min.map_or(value, |m: f64| m.min(value)));
                    max = Some(max.map_or(value, |m: f64| m.max(value)));
                }
                let mean = if non_missing == 0 {
                    None
                } else {
                    Some(round2(sum / non_missing as f64))
                };
                ColumnSummary::Numeric(NumericSummary {
                    sum,
                    min,
                    max,
                    mean,
                    distinct_count,
                    frequencies,
                })
            }
        }
    }
}

/// Rounds to 2 decimal digits, the display precision for means.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
