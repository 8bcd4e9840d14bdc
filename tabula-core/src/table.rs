//! The in-memory table model.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s of equal length,
//! aligned positionally by row index. Column storage is Arrow-backed: a
//! column is either text (`StringArray`, nulls mark missing cells) or
//! numeric (`Float64Array`, nulls mark missing cells). Reading a cell out
//! of a column yields a [`CellValue`].
//!
//! Row alignment is never reordered by the core; only the frequency tables
//! derived from a column are reordered.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::{cast, concat};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabulaError};

/// Label used when a missing-value bucket has to be displayed.
pub const MISSING_LABEL: &str = "(missing)";

/// A single cell read out of a column.
///
/// Missing covers both genuine nulls and empty/whitespace-only text, which
/// are normalized away at column construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CellValue {
    /// No value present.
    Missing,
    /// A numeric value.
    Number(f64),
    /// A textual value.
    Text(String),
}

impl CellValue {
    /// Returns true if this cell has no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// Equality and hashing use the f64 bit pattern so that frequency counting
// and lookup joining share one exact identity for rescued values.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Missing, CellValue::Missing) => true,
            (CellValue::Number(a), CellValue::Number(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            CellValue::Missing => 0u8.hash(state),
            CellValue::Number(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            CellValue::Text(s) => {
                2u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => write!(f, "{MISSING_LABEL}"),
            CellValue::Number(v) => {
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{v:.0}")
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A named column backed by an Arrow array.
///
/// Storage is either `Utf8` (text) or `Float64` (numeric). Nulls mark
/// missing cells in both representations.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    values: ArrayRef,
}

impl Column {
    /// Creates a text column. Empty and whitespace-only values are
    /// normalized to missing, matching the ingestion behavior for blank
    /// delimited fields.
    pub fn from_strings<S: AsRef<str>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let array: StringArray = values
            .into_iter()
            .map(|v| {
                v.and_then(|s| {
                    let trimmed = s.as_ref().trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(s.as_ref().to_string())
                    }
                })
            })
            .collect();
        Self {
            name: name.into(),
            values: Arc::new(array),
        }
    }

    /// Creates a numeric column.
    pub fn from_numbers(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        let array: Float64Array = values.into_iter().collect();
        Self {
            name: name.into(),
            values: Arc::new(array),
        }
    }

    /// Wraps an existing Arrow array as a column. Numeric arrays are cast
    /// to `Float64`; anything else is cast to `Utf8` and treated as text.
    pub fn from_array(name: impl Into<String>, array: &ArrayRef) -> Result<Self> {
        let name = name.into();
        match array.data_type() {
            DataType::Float64 => Ok(Self {
                name,
                values: Arc::clone(array),
            }),
            dt if dt.is_numeric() => {
                let values = cast(array.as_ref(), &DataType::Float64)?;
                Ok(Self { name, values })
            }
            DataType::Utf8 => {
                let strings = array
                    .as_any()
                    .downcast_ref::<StringArray>()
                    .expect("Utf8 array downcasts to StringArray");
                Ok(Self::from_strings(
                    name,
                    strings.iter().map(|v| v.map(|s| s.to_string())),
                ))
            }
            _ => {
                let utf8 = cast(array.as_ref(), &DataType::Utf8)?;
                let strings = utf8
                    .as_any()
                    .downcast_ref::<StringArray>()
                    .expect("cast to Utf8 yields StringArray");
                Ok(Self::from_strings(
                    name,
                    strings.iter().map(|v| v.map(|s| s.to_string())),
                ))
            }
        }
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of rows in this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if this column is stored numerically.
    pub fn is_numeric(&self) -> bool {
        self.values.data_type() == &DataType::Float64
    }

    /// Reads the cell at `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds, like indexing a slice.
    pub fn cell(&self, row: usize) -> CellValue {
        if self.values.is_null(row) {
            return CellValue::Missing;
        }
        if let Some(numbers) = self.values.as_any().downcast_ref::<Float64Array>() {
            CellValue::Number(numbers.value(row))
        } else {
            let strings = self
                .values
                .as_any()
                .downcast_ref::<StringArray>()
                .expect("non-numeric column storage is Utf8");
            CellValue::Text(strings.value(row).to_string())
        }
    }

    /// Iterates over every cell in row order.
    pub fn iter(&self) -> impl Iterator<Item = CellValue> + '_ {
        (0..self.len()).map(move |row| self.cell(row))
    }

    /// The text cells in row order, missing cells as `None`. Numeric
    /// columns yield nothing.
    pub(crate) fn text_values(&self) -> Vec<Option<&str>> {
        match self.values.as_any().downcast_ref::<StringArray>() {
            Some(strings) => strings.iter().collect(),
            None => Vec::new(),
        }
    }

    /// Iterates over the non-missing numeric values. Text columns yield
    /// nothing.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .as_any()
            .downcast_ref::<Float64Array>()
            .into_iter()
            .flat_map(|numbers| numbers.iter().flatten())
    }

    /// The underlying Arrow array.
    pub fn values(&self) -> &ArrayRef {
        &self.values
    }
}

/// An ordered collection of equal-length columns.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from columns, enforcing the equal-length invariant.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(TabulaError::ColumnLength {
                        column: column.name().to_string(),
                        expected,
                        found: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Builds a table from Arrow record batches sharing one schema, as
    /// produced by the CSV reader. Numeric columns keep numeric storage;
    /// everything else becomes text.
    pub fn from_batches(batches: &[RecordBatch]) -> Result<Self> {
        let Some(first) = batches.first() else {
            return Ok(Self { columns: Vec::new() });
        };
        let schema = first.schema();
        let mut columns = Vec::with_capacity(schema.fields().len());
        for (index, field) in schema.fields().iter().enumerate() {
            let parts: Vec<&dyn Array> =
                batches.iter().map(|b| b.column(index).as_ref()).collect();
            let merged = concat(&parts)?;
            columns.push(Column::from_array(field.name().clone(), &merged)?);
        }
        Self::new(columns)
    }

    /// The columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Looks up a column by name, erroring when absent.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| TabulaError::column_not_found(name))
    }

    /// The number of rows (0 for a table with no columns).
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// The number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Replaces a column's storage in place, preserving its position.
    /// Used by the classifier when promoting a rescued column.
    pub(crate) fn replace_column(&mut self, name: &str, column: Column) -> Result<()> {
        let expected = self.num_rows();
        if column.len() != expected {
            return Err(TabulaError::ColumnLength {
                column: name.to_string(),
                expected,
                found: column.len(),
            });
        }
        let slot = self
            .columns
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| TabulaError::column_not_found(name))?;
        *slot = column;
        Ok(())
    }
}
