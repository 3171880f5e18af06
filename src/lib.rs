//! Coagulation Simulator - discrete-time blood coagulation cascade engine
//!
//! This library models the coagulation cascade as a set of interacting
//! species whose AU concentrations evolve tick-by-tick under enzyme-kinetics-
//! inspired conversion rules: the intrinsic, extrinsic and common pathways,
//! thrombin feedback, the physiological inhibitor panel, and fibrinolysis.
//! A driver (GUI or CLI) repeatedly calls `step()`, reads concentrations for
//! display, and injects perturbations (injury, disorders, fibrinogen
//! supplementation, fibrinolysis mode) between ticks.

// Allow non-snake-case for unit suffixes in field names (AU, mM, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod cascade;
pub mod config;
pub mod export;
pub mod state;

pub use cascade::{
    calcium_rate_multiplier, CascadeReaction, ReactionParameters, Species, SpeciesMap,
    UnknownSpecies, CASCADE, CALCIUM_BASELINE_AU, DEFAULT_TAIL, SOURCE_DEPLETION_FLOOR_AU,
};
pub use config::{Parameters, SimulationParameters};
pub use export::{CsvExporter, TimeSeriesRecord};
pub use state::{
    ClottingStatus, Disorder, SimulationMetrics, SimulationState, Speed, TraceBuffer,
    UnknownDisorder, UnknownSpeed, NO_INJURY, TRACKED_SLOTS,
};
