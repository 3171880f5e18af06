//! State management for the cascade simulation.
//!
//! Contains the mutable simulation state, the disorder preset catalog,
//! playback speed settings, driver-owned history recording, and display
//! metrics.

mod disorder;
mod history;
mod metrics;
mod simulation;
mod speed;

pub use disorder::{Disorder, UnknownDisorder};
pub use history::{TraceBuffer, TRACKED_SLOTS};
pub use metrics::{ClottingStatus, SimulationMetrics};
pub use simulation::{SimulationState, NO_INJURY};
pub use speed::{Speed, UnknownSpeed};
