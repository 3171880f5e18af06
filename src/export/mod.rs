//! Export functionality for simulation data.
//!
//! Provides CSV time-series export of the displayable metrics.

mod csv_export;

pub use csv_export::{CsvExporter, TimeSeriesRecord};
