//! Coagulation cascade model: species, kinetics, and the reaction table.
//!
//! This module holds everything the simulation knows about the biochemistry:
//! - the closed [`Species`] registry and its dense [`SpeciesMap`] storage,
//! - the per-tick conversion kinetics ([`ReactionParameters`]),
//! - the fixed, ordered [`CASCADE`] reaction table.
//!
//! The model covers secondary haemostasis (intrinsic, extrinsic and common
//! pathways with thrombin feedback), the physiological inhibitor panel, and
//! fibrinolysis. Primary-haemostasis species (platelets, granule contents,
//! endothelial signals) are tracked for display but have no wired reactions
//! in the current catalog.
//!
//! All concentrations use one abstract unit ("AU") rather than real assay
//! units; each tick represents half a simulated second.

pub mod catalog;
pub mod reaction;
pub mod species;

pub use catalog::{CascadeReaction, CASCADE};
pub use reaction::{
    calcium_rate_multiplier, ReactionParameters, CALCIUM_BASELINE_AU, DEFAULT_TAIL,
    SOURCE_DEPLETION_FLOOR_AU,
};
pub use species::{Species, SpeciesMap, UnknownSpecies};
