//! Unified simulation metrics for display and export.
//!
//! Aggregates the displayable values of a [`SimulationState`] into one
//! structure suitable for a HUD, a summary printout or CSV/JSON export.

use serde::{Deserialize, Serialize};

use crate::cascade::Species;
use crate::state::SimulationState;

/// Clot progression indicator relative to the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClottingStatus {
    /// No meaningful cross-linked fibrin yet
    #[default]
    Fluid,
    /// Clot forming: cross-linked fibrin between 1% and 95% of the ceiling
    Forming,
    /// At or near the fully-clotted ceiling
    Clotted,
}

impl ClottingStatus {
    /// Classify a cross-linked fibrin level against the clot ceiling.
    pub fn from_level(cross_linked_AU: f64, ceiling_AU: f64) -> Self {
        let fraction = if ceiling_AU > 0.0 {
            cross_linked_AU / ceiling_AU
        } else {
            0.0
        };
        if fraction < 0.01 {
            ClottingStatus::Fluid
        } else if fraction < 0.95 {
            ClottingStatus::Forming
        } else {
            ClottingStatus::Clotted
        }
    }
}

/// Snapshot of displayable simulation values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Simulated time (seconds; two ticks per second)
    pub time_sec: f64,
    /// Raw tick counter
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
    /// International Normalized Ratio (display-only)
    pub inr: f64,
    /// Activated partial thromboplastin time (seconds, display-only)
    pub aptt_sec: f64,
    /// Clot progression relative to the configured ceiling
    pub clotting_status: ClottingStatus,
}

impl SimulationMetrics {
    /// Sample the current state.
    pub fn sample(state: &SimulationState) -> Self {
        let cross_linked_AU = state.concentration(Species::CrossLinkedFibrin);
        Self {
            time_sec: state.elapsed_seconds(),
            tick: state.current_time,
            fibrinogen_AU: state.concentration(Species::Fibrinogen),
            fibrin_AU: state.concentration(Species::Fibrin),
            cross_linked_fibrin_AU: cross_linked_AU,
            prothrombin_AU: state.concentration(Species::Prothrombin),
            thrombin_AU: state.concentration(Species::Thrombin),
            factor10a_AU: state.concentration(Species::FactorXa),
            plasmin_AU: state.concentration(Species::Plasmin),
            fibrin_degradation_AU: state.concentration(Species::FibrinDegradationProducts),
            calcium_AU: state.concentration(Species::CalciumIons),
            inr: state.inr,
            aptt_sec: state.aptt_sec,
            clotting_status: ClottingStatus::from_level(cross_linked_AU, state.clot_ceiling_AU()),
        }
    }

    /// Print a formatted summary
    pub fn print_summary(&self) {
        println!("=== Cascade State (t = {:.1} s, tick {}) ===", self.time_sec, self.tick);
        println!();
        println!("Common pathway:");
        println!("  Prothrombin:          {:.3} AU", self.prothrombin_AU);
        println!("  Thrombin:             {:.3} AU", self.thrombin_AU);
        println!("  Factor Xa:            {:.3} AU", self.factor10a_AU);
        println!();
        println!("Clot:");
        println!("  Fibrinogen:           {:.3} AU", self.fibrinogen_AU);
        println!("  Fibrin:               {:.3} AU", self.fibrin_AU);
        println!("  Cross-linked fibrin:  {:.3} AU", self.cross_linked_fibrin_AU);
        println!("  Status:               {:?}", self.clotting_status);
        println!();
        println!("Fibrinolysis:");
        println!("  Plasmin:              {:.3} AU", self.plasmin_AU);
        println!("  Degradation products: {:.3} AU", self.fibrin_degradation_AU);
        println!();
        println!("Clinical (display-only):");
        println!("  Calcium:              {:.3} AU", self.calcium_AU);
        println!("  INR:                  {:.2}", self.inr);
        println!("  aPTT:                 {:.0} s", self.aptt_sec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(ClottingStatus::from_level(0.0, 50_000.0), ClottingStatus::Fluid);
        assert_eq!(ClottingStatus::from_level(400.0, 50_000.0), ClottingStatus::Fluid);
        assert_eq!(ClottingStatus::from_level(25_000.0, 50_000.0), ClottingStatus::Forming);
        assert_eq!(ClottingStatus::from_level(49_900.0, 50_000.0), ClottingStatus::Clotted);
    }

    #[test]
    fn test_sample_reflects_state() {
        let mut state = SimulationState::default();
        state.step();
        let metrics = state.metrics();
        assert_eq!(metrics.tick, 1);
        assert_eq!(metrics.time_sec, 0.5);
        assert_eq!(metrics.fibrinogen_AU, 50_000.0);
        assert_eq!(metrics.clotting_status, ClottingStatus::Fluid);
    }

    #[test]
    fn test_metrics_serialize() {
        let state = SimulationState::default();
        let metrics = state.metrics();
        let json = serde_json::to_string(&metrics).unwrap();
        let parsed: SimulationMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.fibrinogen_AU, metrics.fibrinogen_AU);
    }
}
