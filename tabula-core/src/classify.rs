//! Column classification with numeric rescue.
//!
//! The classifier decides, per column, whether it should be treated as
//! numeric or categorical. Columns already stored numerically are numeric
//! by definition. A text column is "rescued" (promoted to numeric storage)
//! only when *every* non-missing value parses under the configured
//! [`NumberFormat`]; a single failure aborts the promotion and leaves the
//! column untouched. The all-or-nothing rule keeps genuinely textual
//! columns that happen to contain number-like tokens (IDs, codes) out of
//! numeric storage.
//!
//! Classification is idempotent: re-running it over an already-classified
//! table yields the same report and changes nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::parse::NumberFormat;
use crate::table::{Column, Table};

/// The per-column tag produced by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Treat as numeric: summary statistics and distribution charts apply.
    Numeric,
    /// Treat as categorical: distinct counts and frequency charts apply.
    Categorical,
}

/// The outcome of one classification pass over a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    tags: Vec<(String, Classification)>,
    rescued: BTreeSet<String>,
}

impl ClassificationReport {
    /// The classification of a column, if the column exists.
    pub fn classification(&self, column: &str) -> Option<Classification> {
        self.tags
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, tag)| *tag)
    }

    /// Per-column tags in table order.
    pub fn tags(&self) -> &[(String, Classification)] {
        &self.tags
    }

    /// Names of all columns classified numeric, in sorted order.
    pub fn numeric_columns(&self) -> BTreeSet<&str> {
        self.tags
            .iter()
            .filter(|(_, tag)| *tag == Classification::Numeric)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Names of text columns that were promoted to numeric storage during
    /// this pass.
    pub fn rescued_columns(&self) -> &BTreeSet<String> {
        &self.rescued
    }
}

/// Classifies table columns, rescuing numeric columns mis-typed as text.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    format: NumberFormat,
}

impl ColumnClassifier {
    /// Creates a classifier with the default separator convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with an explicit separator convention.
    pub fn with_format(format: NumberFormat) -> Self {
        Self { format }
    }

    /// Classifies every column, promoting rescued columns in place.
    ///
    /// Promotion rewrites the column's storage: each cell is individually
    /// re-parsed, missing and unparseable cells become missing. Columns
    /// that stay categorical are left byte-for-byte unchanged.
    #[instrument(skip(self, table), fields(columns = table.num_columns(), rows = table.num_rows()))]
    pub fn classify(&self, table: &mut Table) -> Result<ClassificationReport> {
        let mut tags = Vec::with_capacity(table.num_columns());
        let mut rescued = BTreeSet::new();

        let names: Vec<String> = table
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for name in names {
            let column = table.require_column(&name)?;
            if column.is_numeric() {
                // Native numeric storage, no rescue attempted.
                tags.push((name, Classification::Numeric));
                continue;
            }

            if let Some(promoted) = self.try_rescue(column) {
                debug!(column = %name, "promoting text column to numeric storage");
                table.replace_column(&name, promoted)?;
                rescued.insert(name.clone());
                tags.push((name, Classification::Numeric));
            } else {
                tags.push((name, Classification::Categorical));
            }
        }

        let report = ClassificationReport { tags, rescued };
        info!(
            numeric = report.numeric_columns().len(),
            rescued = report.rescued.len(),
            "classification pass complete"
        );
        Ok(report)
    }

    /// Attempts the all-or-nothing promotion of a text column. Returns the
    /// replacement numeric column when every non-missing value parses.
    fn try_rescue(&self, column: &Column) -> Option<Column> {
        let values = column.text_values();
        let mut parsed: Vec<Option<f64>> = Vec::with_capacity(values.len());
        for value in values {
            match value {
                None => parsed.push(None),
                Some(raw) => match self.format.parse(raw) {
                    Some(number) => parsed.push(Some(number)),
                    // One unparseable value aborts the whole promotion.
                    None => return None,
                },
            }
        }
        Some(Column::from_numbers(column.name(), parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    fn table_of(columns: Vec<Column>) -> Table {
        Table::new(columns).unwrap()
    }

    #[test]
    fn test_native_numeric_is_tagged_without_rescue() {
        let mut table = table_of(vec![Column::from_numbers(
            "amount",
            vec![Some(1.0), Some(2.0)],
        )]);
        let report = ColumnClassifier::new().classify(&mut table).unwrap();
        assert_eq!(
            report.classification("amount"),
            Some(Classification::Numeric)
        );
        assert!(report.rescued_columns().is_empty());
    }

    #[test]
    fn test_all_values_parse_promotes_column() {
        let mut table = table_of(vec![Column::from_strings(
            "price",
            vec![Some("1,5"), Some("2,0"), Some("")],
        )]);
        let report = ColumnClassifier::new().classify(&mut table).unwrap();
        assert_eq!(report.classification("price"), Some(Classification::Numeric));
        assert!(report.rescued_columns().contains("price"));

        let column = table.column("price").unwrap();
        assert!(column.is_numeric());
        assert_eq!(column.cell(0), CellValue::Number(1.5));
        assert_eq!(column.cell(1), CellValue::Number(2.0));
        assert!(column.cell(2).is_missing());
    }

    #[test]
    fn test_single_failure_aborts_promotion() {
        let mut table = table_of(vec![Column::from_strings(
            "price",
            vec![Some("1,5"), Some("2,0"), Some("N/A")],
        )]);
        let before: Vec<CellValue> = table.column("price").unwrap().iter().collect();

        let report = ColumnClassifier::new().classify(&mut table).unwrap();
        assert_eq!(
            report.classification("price"),
            Some(Classification::Categorical)
        );

        let after: Vec<CellValue> = table.column("price").unwrap().iter().collect();
        assert_eq!(before, after);
        assert!(!table.column("price").unwrap().is_numeric());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let mut table = table_of(vec![
            Column::from_strings("price", vec![Some("1,5"), Some("2,0")]),
            Column::from_strings("city", vec![Some("Oslo"), Some("Bergen")]),
        ]);
        let classifier = ColumnClassifier::new();
        let first = classifier.classify(&mut table).unwrap();
        let second = classifier.classify(&mut table).unwrap();

        assert_eq!(
            first.numeric_columns().into_iter().collect::<Vec<_>>(),
            second.numeric_columns().into_iter().collect::<Vec<_>>()
        );
        // The second pass sees numeric storage and rescues nothing.
        assert!(second.rescued_columns().is_empty());
    }

    #[test]
    fn test_all_missing_text_column_promotes_vacuously() {
        let mut table = table_of(vec![Column::from_strings::<&str>(
            "empty",
            vec![None, None],
        )]);
        let report = ColumnClassifier::new().classify(&mut table).unwrap();
        assert_eq!(report.classification("empty"), Some(Classification::Numeric));
        assert!(table.column("empty").unwrap().is_numeric());
    }

    #[test]
    fn test_report_numeric_set() {
        let mut table = table_of(vec![
            Column::from_numbers("a", vec![Some(1.0)]),
            Column::from_strings("b", vec![Some("x")]),
            Column::from_strings("c", vec![Some("2,5")]),
        ]);
        let report = ColumnClassifier::new().classify(&mut table).unwrap();
        let numeric: Vec<&str> = report.numeric_columns().into_iter().collect();
        assert_eq!(numeric, vec!["a", "c"]);
    }
}
