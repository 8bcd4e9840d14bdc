//! Ingestion of delimited files into [`Table`]s.
//!
//! Ingestion is the boundary where file I/O happens; everything past it is
//! a pure in-memory transformation. The CSV source reads with a fixed
//! default dialect (comma-delimited, UTF-8, first row as header) with no
//! delimiter detection, and rejects malformed input (ragged rows)
//! before the core ever sees it.
//!
//! [`Table`]: crate::table::Table

mod csv;

pub use csv::{CsvOptions, CsvSource};
