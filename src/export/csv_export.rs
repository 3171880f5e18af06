//! CSV time-series export for simulation metrics.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::state::SimulationMetrics;

/// Record for CSV time-series export
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRecord {
    /// Simulated time (seconds)
    pub time_sec: f64,
    /// Tick counter
    pub tick: u64,
    /// Fibrinogen (AU)
    pub fibrinogen_AU: f64,
    /// Fibrin (AU)
    pub fibrin_AU: f64,
    /// Cross-linked fibrin (AU)
    pub cross_linked_fibrin_AU: f64,
    /// Prothrombin (AU)
    pub prothrombin_AU: f64,
    /// Thrombin (AU)
    pub thrombin_AU: f64,
    /// Factor Xa (AU)
    pub factor10a_AU: f64,
    /// Plasmin (AU)
    pub plasmin_AU: f64,
    /// Fibrin degradation products (AU)
    pub fibrin_degradation_AU: f64,
    /// Calcium ion level (AU)
    pub calcium_AU: f64,
}

impl From<&SimulationMetrics> for TimeSeriesRecord {
    fn from(m: &SimulationMetrics) -> Self {
        Self {
            time_sec: m.time_sec,
            tick: m.tick,
            fibrinogen_AU: m.fibrinogen_AU,
            fibrin_AU: m.fibrin_AU,
            cross_linked_fibrin_AU: m.cross_linked_fibrin_AU,
            prothrombin_AU: m.prothrombin_AU,
            thrombin_AU: m.thrombin_AU,
            factor10a_AU: m.factor10a_AU,
            plasmin_AU: m.plasmin_AU,
            fibrin_degradation_AU: m.fibrin_degradation_AU,
            calcium_AU: m.calcium_AU,
        }
    }
}

/// CSV exporter for time-series data
pub struct CsvExporter {
    writer: csv::Writer<File>,
    /// Sample interval in simulated seconds
    sample_interval_sec: f64,
    /// Last sample time
    last_sample_time: f64,
    /// Path to output file
    path: PathBuf,
}

impl CsvExporter {
    /// Create a new CSV exporter with the given sample interval
    ///
    /// Creates the exports directory if it doesn't exist.
    /// Filename is auto-generated with timestamp.
    pub fn new(sample_interval_sec: f64) -> Result<Self> {
        // Create exports directory
        let dir = PathBuf::from("exports");
        std::fs::create_dir_all(&dir)?;

        // Generate filename with timestamp
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("cascade_{}.csv", timestamp);
        let path = dir.join(&filename);

        // Create writer
        let file = File::create(&path)?;
        let writer = csv::Writer::from_writer(file);

        log::info!("CSV export started: {}", path.display());

        Ok(Self {
            writer,
            sample_interval_sec,
            last_sample_time: -sample_interval_sec, // Ensure first sample is recorded
            path,
        })
    }

    /// Record a sample if the interval has elapsed
    pub fn maybe_record(&mut self, metrics: &SimulationMetrics) -> Result<bool> {
        let time = metrics.time_sec;

        if time - self.last_sample_time >= self.sample_interval_sec {
            let record = TimeSeriesRecord::from(metrics);
            self.writer.serialize(&record)?;
            self.last_sample_time = time;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Force record a sample regardless of interval
    pub fn record(&mut self, metrics: &SimulationMetrics) -> Result<()> {
        let record = TimeSeriesRecord::from(metrics);
        self.writer.serialize(&record)?;
        self.last_sample_time = metrics.time_sec;
        Ok(())
    }

    /// Finish writing and return the output path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("CSV export completed: {}", self.path.display());
        Ok(self.path)
    }

    /// Get the output path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
