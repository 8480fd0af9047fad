//! Vigil Analytics - Pure aggregation over demographic detection records
//!
//! Turns a flat list of detection records into the derived views the
//! console charts render: per-category counts that stay total over every
//! closed enumeration, zero-filtered chart series, day-bucketed time
//! series, and confidence summaries.
//!
//! No I/O, no mutation of input, and every function is total: malformed
//! or empty input degrades to zero/empty results, never an error.

pub mod aggregate;
pub mod chart;
pub mod confidence;
pub mod series;

pub use aggregate::{Analytics, aggregate};
pub use chart::{ChartPoint, chart_data, chart_data_with};
pub use confidence::average_confidence;
pub use series::{TimeSeriesPoint, time_series};
