//! XLOOKUP-style augmentation of frequency tables.
//!
//! For each distinct key in a frequency table, the joiner attaches one
//! representative value from another column of the same table: the value
//! from the first row whose key cell equals the key and whose lookup cell
//! is non-missing. Keys whose every occurrence lacks a usable lookup value
//! still appear in the output with a missing lookup cell; a distinct key
//! is never dropped.
//!
//! Equality is on the post-rescue cell value. Both the frequency table and
//! the probe read the same rescued column storage within a pass, so the
//! match is exact even for parsed floats.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::summary::{FrequencyTable, COUNT_LABEL};
use crate::table::{CellValue, Table};

/// Lookup column chosen by default when present in the table.
pub const DEFAULT_PREFERRED_LOOKUP: &str = "Login ID";

/// One augmented frequency row: `[key, count, lookup]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedRow {
    pub key: CellValue,
    pub count: u64,
    /// Representative value from the lookup column, or missing when no
    /// occurrence of the key carries one.
    pub lookup: CellValue,
}

/// A frequency table augmented with a representative lookup value per key.
///
/// Output column order is `[key_column, count, lookup_column]`; the count
/// column carries the [`COUNT_LABEL`] so it reads distinctly from the
/// other two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedFrequencyTable {
    pub key_column: String,
    pub count_label: String,
    pub lookup_column: String,
    pub rows: Vec<AugmentedRow>,
}

impl AugmentedFrequencyTable {
    /// Number of distinct keys; always equals the source frequency table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Joins a frequency table with a representative value from another column.
#[derive(Debug, Clone)]
pub struct LookupJoiner {
    preferred: String,
}

impl Default for LookupJoiner {
    fn default() -> Self {
        Self {
            preferred: DEFAULT_PREFERRED_LOOKUP.to_string(),
        }
    }
}

impl LookupJoiner {
    /// Creates a joiner with the default preferred lookup column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a joiner preferring the given column as default lookup.
    pub fn with_preferred(preferred: impl Into<String>) -> Self {
        Self {
            preferred: preferred.into(),
        }
    }

    /// Picks the default lookup column for a key column: the preferred
    /// name when present, otherwise the first column other than the key.
    pub fn default_lookup_column<'t>(&self, table: &'t Table, key_column: &str) -> Option<&'t str> {
        let names = table.column_names();
        names
            .iter()
            .find(|name| **name == self.preferred && **name != key_column)
            .or_else(|| names.iter().find(|name| **name != key_column))
            .copied()
    }

    /// Augments `frequencies` with one representative value per key from
    /// `lookup_column` (defaulted per [`Self::default_lookup_column`] when
    /// `None`).
    #[instrument(skip(self, table, frequencies), fields(key = key_column, keys = frequencies.len()))]
    pub fn join(
        &self,
        table: &Table,
        key_column: &str,
        frequencies: &FrequencyTable,
        lookup_column: Option<&str>,
    ) -> Result<AugmentedFrequencyTable> {
        let keys = table.require_column(key_column)?;
        let lookup_name = match lookup_column {
            Some(name) => name.to_string(),
            None => self
                .default_lookup_column(table, key_column)
                .unwrap_or(key_column)
                .to_string(),
        };
        let lookup = table.require_column(&lookup_name)?;

        let rows = frequencies
            .rows
            .iter()
            .map(|row| {
                let found = (0..table.num_rows())
                    .find(|&i| keys.cell(i) == row.value && !lookup.cell(i).is_missing())
                    .map(|i| lookup.cell(i))
                    .unwrap_or(CellValue::Missing);
                AugmentedRow {
                    key: row.value.clone(),
                    count: row.count,
                    lookup: found,
                }
            })
            .collect();

        debug!(lookup = %lookup_name, "lookup join complete");
        Ok(AugmentedFrequencyTable {
            key_column: key_column.to_string(),
            count_label: COUNT_LABEL.to_string(),
            lookup_column: lookup_name,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn sample_table() -> Table {
        Table::new(vec![
            Column::from_strings("dept", vec![Some("sales"), Some("ops"), Some("sales"), None]),
            Column::from_strings("Login ID", vec![Some("u1"), None, Some("u3"), Some("u4")]),
            Column::from_numbers("amount", vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_join_attaches_first_non_missing_match() {
        let table = sample_table();
        let freq = FrequencyTable::of(table.column("dept").unwrap());
        let joined = LookupJoiner::new()
            .join(&table, "dept", &freq, Some("Login ID"))
            .unwrap();

        assert_eq!(joined.len(), freq.len());
        let sales = joined
            .rows
            .iter()
            .find(|r| r.key == CellValue::Text("sales".to_string()))
            .unwrap();
        assert_eq!(sales.count, 2);
        assert_eq!(sales.lookup, CellValue::Text("u1".to_string()));
    }

    #[test]
    fn test_key_with_only_missing_lookups_is_kept() {
        let table = sample_table();
        let freq = FrequencyTable::of(table.column("dept").unwrap());
        let joined = LookupJoiner::new()
            .join(&table, "dept", &freq, Some("Login ID"))
            .unwrap();

        // "ops" occurs once and its only row has a missing Login ID.
        let ops = joined
            .rows
            .iter()
            .find(|r| r.key == CellValue::Text("ops".to_string()))
            .unwrap();
        assert!(ops.lookup.is_missing());
    }

    #[test]
    fn test_missing_key_bucket_joins_like_any_key() {
        let table = sample_table();
        let freq = FrequencyTable::of(table.column("dept").unwrap());
        let joined = LookupJoiner::new()
            .join(&table, "dept", &freq, Some("Login ID"))
            .unwrap();

        let missing = joined.rows.iter().find(|r| r.key.is_missing()).unwrap();
        assert_eq!(missing.lookup, CellValue::Text("u4".to_string()));
    }

    #[test]
    fn test_default_lookup_prefers_designated_column() {
        let table = sample_table();
        let joiner = LookupJoiner::new();
        assert_eq!(joiner.default_lookup_column(&table, "dept"), Some("Login ID"));
        // When the key *is* the preferred column, fall back to the first
        // other column.
        assert_eq!(joiner.default_lookup_column(&table, "Login ID"), Some("dept"));
    }

    #[test]
    fn test_default_lookup_without_preferred_column() {
        let table = Table::new(vec![
            Column::from_strings("a", vec![Some("x")]),
            Column::from_strings("b", vec![Some("y")]),
        ])
        .unwrap();
        let joiner = LookupJoiner::new();
        assert_eq!(joiner.default_lookup_column(&table, "a"), Some("b"));
    }

    #[test]
    fn test_numeric_keys_join_on_parsed_values() {
        let mut table = Table::new(vec![
            Column::from_strings("price", vec![Some("1,5"), Some("2,0"), Some("1,5")]),
            Column::from_strings("tag", vec![None, Some("b"), Some("c")]),
        ])
        .unwrap();
        let report = crate::classify::ColumnClassifier::new()
            .classify(&mut table)
            .unwrap();
        assert!(report.rescued_columns().contains("price"));

        let freq = FrequencyTable::of(table.column("price").unwrap());
        let joined = LookupJoiner::new()
            .join(&table, "price", &freq, Some("tag"))
            .unwrap();

        let key = joined
            .rows
            .iter()
            .find(|r| r.key == CellValue::Number(1.5))
            .unwrap();
        // First occurrence has a missing tag; the join walks on to row 2.
        assert_eq!(key.lookup, CellValue::Text("c".to_string()));
    }

    #[test]
    fn test_unknown_columns_error() {
        let table = sample_table();
        let freq = FrequencyTable::of(table.column("dept").unwrap());
        let joiner = LookupJoiner::new();
        assert!(joiner.join(&table, "nope", &freq, None).is_err());
        assert!(joiner.join(&table, "dept", &freq, Some("nope")).is_err());
    }

    #[test]
    fn test_output_labels() {
        let table = sample_table();
        let freq = FrequencyTable::of(table.column("dept").unwrap());
        let joined = LookupJoiner::new().join(&table, "dept", &freq, None).unwrap();
        assert_eq!(joined.key_column, "dept");
        assert_eq!(joined.count_label, COUNT_LABEL);
        assert_eq!(joined.lookup_column, "Login ID");
    }
}
