//! Simulation parameter structures with JSON overrides.
//!
//! Defaults are compiled in; a JSON file, when present, overrides them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Cascade simulation parameters
    pub simulation: SimulationParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let simulation = SimulationParameters::load_or_default("data/parameters/simulation.json");
        Self { simulation }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let simulation = SimulationParameters::load_or_default(dir.as_ref().join("simulation.json"));
        Self { simulation }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            simulation: SimulationParameters::default(),
        }
    }
}

/// Parameters governing cascade playback and its advisory limits.
///
/// The core never halts itself; the ceiling and time limit are read by the
/// driver to decide when to stop calling `step()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Cross-linked fibrin level regarded as a fully formed clot (AU).
    /// Matches the total fibrinogen reserve of the default state, so a
    /// complete conversion saturates exactly at this ceiling.
    pub clot_ceiling_AU: f64,

    /// Fibrinogen added per supplementation action (AU),
    /// modeling exogenous fibrinogen concentrate
    pub fibrinogen_increment_AU: f64,

    /// Driver interval for speed "x 1" (milliseconds); faster speeds divide
    /// this, the half-speed setting doubles it
    pub base_tick_interval_ms: u64,

    /// Advisory wall on simulated time (seconds); each tick is half a second
    pub max_elapsed_sec: f64,
}

impl SimulationParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded simulation parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse simulation parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Simulation parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            clot_ceiling_AU: 50_000.0,
            fibrinogen_increment_AU: 1000.0,
            base_tick_interval_ms: 500,
            max_elapsed_sec: 3600.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulation_params() {
        let params = SimulationParameters::default();
        assert_eq!(params.clot_ceiling_AU, 50_000.0);
        assert_eq!(params.fibrinogen_increment_AU, 1000.0);
        assert_eq!(params.base_tick_interval_ms, 500);
    }

    #[test]
    fn test_serialization() {
        let params = Parameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let parsed: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.simulation.clot_ceiling_AU,
            params.simulation.clot_ceiling_AU
        );
        assert_eq!(
            parsed.simulation.max_elapsed_sec,
            params.simulation.max_elapsed_sec
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let params = SimulationParameters::load_or_default("/nonexistent/simulation.json");
        assert_eq!(params.clot_ceiling_AU, 50_000.0);
    }
}
