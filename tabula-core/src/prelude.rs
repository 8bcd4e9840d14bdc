//! Prelude for commonly used types in tabula-core.

pub use crate::chart::{ChartSpec, ChartSpecBuilder, AXIS_HEADROOM};
pub use crate::classify::{Classification, ClassificationReport, ColumnClassifier};
pub use crate::error::{Result, TabulaError};
pub use crate::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ResultFormatter};
pub use crate::logging::LoggingConfig;
pub use crate::lookup::{AugmentedFrequencyTable, LookupJoiner};
pub use crate::parse::NumberFormat;
pub use crate::report::{ColumnReport, ReportBuilder};
pub use crate::sources::CsvSource;
pub use crate::summary::{ColumnSummarizer, ColumnSummary, FrequencyTable};
pub use crate::table::{CellValue, Column, Table};
