//! CSV file source implementation.

use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use tracing::{debug, info, instrument};

use crate::error::{Result, TabulaError};
use crate::table::Table;

/// Options for configuring CSV file reading.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row
    pub has_header: bool,
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
    /// Maximum records to read for schema inference
    pub schema_infer_max_records: usize,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            quote: b'"',
            schema_infer_max_records: 1000,
        }
    }
}

/// A CSV file data source with schema inference.
///
/// Columns inferred as numeric keep numeric storage; everything else
/// (including date-like and boolean text) lands as text and is left to
/// the classifier's rescue pass.
///
/// # Examples
///
/// ```rust,ignore
/// use tabula_core::sources::{CsvOptions, CsvSource};
///
/// let table = CsvSource::new("data/users.csv").load()?;
///
/// let options = CsvOptions { delimiter: b';', ..Default::default() };
/// let table = CsvSource::with_options("data/users.csv", options).load()?;
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSource {
    /// Creates a new CSV source from a file path with default options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options: CsvOptions::default(),
        }
    }

    /// Creates a new CSV source with custom options.
    pub fn with_options(path: impl AsRef<Path>, options: CsvOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Reads the whole file into a [`Table`].
    ///
    /// The schema is inferred from the leading records, then the file is
    /// re-read with that schema. Ragged rows fail the read; they never
    /// reach the core.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Table> {
        let format = Format::default()
            .with_header(self.options.has_header)
            .with_delimiter(self.options.delimiter)
            .with_quote(self.options.quote);

        let mut file = File::open(&self.path)?;
        let (schema, inspected) = format
            .infer_schema(&mut file, Some(self.options.schema_infer_max_records))
            .map_err(|e| {
                TabulaError::data_source_with("CSV", "schema inference failed", e)
            })?;
        debug!(
            columns = schema.fields().len(),
            records_inspected = inspected,
            "inferred CSV schema"
        );

        file.rewind()?;
        let reader = ReaderBuilder::new(Arc::new(schema))
            .with_format(format)
            .build(file)
            .map_err(|e| TabulaError::data_source_with("CSV", "reader construction failed", e))?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| TabulaError::data_source_with("CSV", "read failed", e))?;

        let table = Table::from_batches(&batches)?;
        info!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            "loaded CSV file"
        );
        Ok(table)
    }
}
