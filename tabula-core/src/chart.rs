//! Chart specification building.
//!
//! The core decides which chart shape a column needs and what the renderer
//! must display, without rendering anything itself. Numeric columns get a
//! distribution chart over their non-missing values; categorical columns
//! get a horizontal frequency chart over all values including a labelled
//! missing bar. In both cases the spec carries, per visual element, the
//! literal integer count to render as the element's label, and instructs
//! the renderer to scale the count axis to [`AXIS_HEADROOM`] times the
//! largest element so labels placed beyond the bars do not clip.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::classify::Classification;
use crate::summary::FrequencyTable;
use crate::table::{CellValue, Column};

/// Factor applied to the largest bucket/bar when scaling the count axis,
/// leaving room for the value labels above or beside the bars.
pub const AXIS_HEADROOM: f64 = 1.15;

/// One equal-width bucket of a distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBin {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound (inclusive for the last bin).
    pub upper: f64,
    /// Exact number of values in this bucket; rendered as the bar label.
    pub count: u64,
}

/// One bar of a categorical frequency chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBar {
    /// Display label; missing values render as their own labelled bar.
    pub label: String,
    /// Exact number of rows; rendered as the bar label.
    pub count: u64,
}

/// What a renderer needs to draw one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ChartSpec {
    /// Vertical distribution chart over a numeric column.
    Distribution {
        title: String,
        /// Non-missing values, in row order, for renderers that re-bin.
        values: Vec<f64>,
        /// Deterministic equal-width buckets with exact counts; the counts
        /// are the labels to display.
        bins: Vec<DistributionBin>,
        /// Vertical axis maximum as a multiple of the largest bin count.
        axis_max_scale_factor: f64,
    },
    /// Horizontal frequency chart over a categorical column.
    CategoricalFrequency {
        title: String,
        /// One bar per distinct value, missing bucket included, in
        /// frequency-table order.
        bars: Vec<FrequencyBar>,
        /// Horizontal axis maximum as a multiple of the longest bar.
        axis_max_scale_factor: f64,
    },
}

impl ChartSpec {
    /// The chart title.
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Distribution { title, .. } => title,
            ChartSpec::CategoricalFrequency { title, .. } => title,
        }
    }

    /// The absolute axis maximum: headroom factor times the largest count.
    pub fn axis_max(&self) -> f64 {
        let largest = match self {
            ChartSpec::Distribution { bins, .. } => {
                bins.iter().map(|b| b.count).max().unwrap_or(0)
            }
            ChartSpec::CategoricalFrequency { bars, .. } => {
                bars.iter().map(|b| b.count).max().unwrap_or(0)
            }
        };
        largest as f64 * AXIS_HEADROOM
    }
}

/// Builds chart specifications from classified columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartSpecBuilder;

impl ChartSpecBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Decides the chart shape from the column's classification and
    /// computes the exact element counts the renderer must label with.
    #[instrument(skip(self, column), fields(column = column.name()))]
    pub fn build_spec(&self, column: &Column, classification: Classification) -> ChartSpec {
        match classification {
            Classification::Numeric => {
                let values: Vec<f64> = column.numbers().collect();
                let bins = equal_width_bins(&values);
                ChartSpec::Distribution {
                    title: format!("{} distribution", column.name()),
                    values,
                    bins,
                    axis_max_scale_factor: AXIS_HEADROOM,
                }
            }
            Classification::Categorical => {
                let frequencies = FrequencyTable::of(column);
                let bars = frequencies
                    .rows
                    .iter()
                    .map(|row| FrequencyBar {
                        label: match &row.value {
                            CellValue::Missing => crate::table::MISSING_LABEL.to_string(),
                            other => other.to_string(),
                        },
                        count: row.count,
                    })
                    .collect();
                ChartSpec::CategoricalFrequency {
                    title: format!("{} frequency", column.name()),
                    bars,
                    axis_max_scale_factor: AXIS_HEADROOM,
                }
            }
        }
    }
}

/// Buckets values into equal-width bins, Sturges bin count. Deterministic:
/// same values, same bins. Returns no bins for an empty slice and a single
/// bin when all values coincide.
fn equal_width_bins(values: &[f64]) -> Vec<DistributionBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![DistributionBin {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let bin_count = ((values.len() as f64).log2().ceil() as usize + 1).max(1);
    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0u64; bin_count];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| DistributionBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn test_numeric_column_gets_distribution_spec() {
        let column = Column::from_numbers("n", vec![Some(1.0), Some(2.0), None, Some(3.0)]);
        let spec = ChartSpecBuilder::new().build_spec(&column, Classification::Numeric);
        let ChartSpec::Distribution {
            title,
            values,
            bins,
            axis_max_scale_factor,
        } = spec
        else {
            panic!("expected distribution spec");
        };
        assert_eq!(title, "n distribution");
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(axis_max_scale_factor, AXIS_HEADROOM);
        // Bin counts are exact and complete over the non-missing values.
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 3);
    }

    #[test]
    fn test_categorical_column_gets_frequency_spec() {
        let column = Column::from_strings("c", vec![Some("a"), Some("a"), Some("b"), None]);
        let spec = ChartSpecBuilder::new().build_spec(&column, Classification::Categorical);
        let ChartSpec::CategoricalFrequency { title, bars, .. } = spec else {
            panic!("expected categorical frequency spec");
        };
        assert_eq!(title, "c frequency");
        // All rows represented, missing bucket labelled.
        assert_eq!(bars.iter().map(|b| b.count).sum::<u64>(), 4);
        assert!(bars.iter().any(|b| b.label == crate::table::MISSING_LABEL));
        assert_eq!(bars[0].label, "a");
        assert_eq!(bars[0].count, 2);
    }

    #[test]
    fn test_axis_max_applies_headroom() {
        let column = Column::from_strings("c", vec![Some("a"), Some("a"), Some("b")]);
        let spec = ChartSpecBuilder::new().build_spec(&column, Classification::Categorical);
        assert!((spec.axis_max() - 2.0 * AXIS_HEADROOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bins_for_identical_values() {
        let bins = equal_width_bins(&[5.0, 5.0, 5.0]);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].lower, 5.0);
        assert_eq!(bins[0].upper, 5.0);
    }

    #[test]
    fn test_bins_for_empty_values() {
        assert!(equal_width_bins(&[]).is_empty());
        let column = Column::from_numbers("n", vec![None, None]);
        let spec = ChartSpecBuilder::new().build_spec(&column, Classification::Numeric);
        assert_eq!(spec.axis_max(), 0.0);
        let ChartSpec::Distribution { bins, values, .. } = spec else {
            panic!("expected distribution spec");
        };
        assert!(bins.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn test_bin_assignment_is_complete_and_exact() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = equal_width_bins(&values);
        // Sturges: ceil(log2(100)) + 1 = 8 bins.
        assert_eq!(bins.len(), 8);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 100);
        // The maximum value lands in the last bin, not out of range.
        assert!(bins.last().unwrap().count > 0);
    }
}
