//! The simulation state and its tick-by-tick evolution.
//!
//! [`SimulationState`] owns every species concentration plus the scalar
//! control state (speed, tick counter, injury stage, display-only clinical
//! measures). `step()` advances one tick by applying the [`CASCADE`] table in
//! its fixed order; perturbation operations mutate the state directly between
//! steps. All operations are total: there are no error paths in the core.
//!
//! The state assumes serialized access by a single driver — one `step()`
//! completes before the next begins, and perturbations never interleave with
//! an in-progress tick.

use crate::cascade::{CascadeReaction, ReactionParameters, Species, SpeciesMap, CASCADE};
use crate::config::Parameters;

use super::disorder::Disorder;
use super::metrics::SimulationMetrics;
use super::speed::Speed;

/// Injury-stage marker value meaning "no injury has occurred".
pub const NO_INJURY: i32 = -1;

/// Complete mutable state of one cascade simulation.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Concentrations of every tracked species (AU)
    species: SpeciesMap,
    /// Playback speed (driver scheduling only)
    pub speed: Speed,
    /// Tick counter; each tick represents half a simulated second
    pub current_time: u64,
    /// Injury progression marker; [`NO_INJURY`] until an injury is applied
    pub injury_stage: i32,
    /// International Normalized Ratio — display-only, not derived from the
    /// live extrinsic pathway
    pub inr: f64,
    /// Activated partial thromboplastin time (seconds) — display-only
    pub aptt_sec: f64,
    /// Cross-linked fibrin level regarded as a fully formed clot (AU)
    clot_ceiling_AU: f64,
    /// Fibrinogen added per supplementation action (AU)
    fibrinogen_increment_AU: f64,
}

impl SimulationState {
    /// Create a resting, uninjured state from parameters.
    pub fn new(params: &Parameters) -> Self {
        Self {
            species: SpeciesMap::default(),
            speed: Speed::default(),
            current_time: 0,
            injury_stage: NO_INJURY,
            inr: 1.0,
            aptt_sec: 30.0,
            clot_ceiling_AU: params.simulation.clot_ceiling_AU,
            fibrinogen_increment_AU: params.simulation.fibrinogen_increment_AU,
        }
    }

    /// Concentration of a species (AU).
    #[inline]
    pub fn concentration(&self, species: Species) -> f64 {
        self.species.get(species)
    }

    /// Overwrite the concentration of a species (AU), clamped non-negative.
    #[inline]
    pub fn set_concentration(&mut self, species: Species, value_AU: f64) {
        self.species.set(species, value_AU);
    }

    /// Simulated seconds elapsed; each tick is half a second.
    pub fn elapsed_seconds(&self) -> f64 {
        self.current_time as f64 / 2.0
    }

    /// Cross-linked fibrin level regarded as a fully formed clot (AU).
    pub fn clot_ceiling_AU(&self) -> f64 {
        self.clot_ceiling_AU
    }

    /// Advance the simulation by one tick.
    ///
    /// Applies every catalog entry in its fixed order. Later entries see
    /// concentrations already updated by earlier entries within the same
    /// tick; this sequential approximation is part of the model, not an
    /// implementation accident.
    pub fn step(&mut self) {
        for reaction in CASCADE.iter() {
            self.apply_reaction(reaction);
        }
        self.current_time += 1;
    }

    /// Apply a single catalog entry, returning the amount converted (AU).
    ///
    /// The subtract-then-add pair is atomic within the call: the amount
    /// removed from the source equals the amount added to the product, so
    /// mass is conserved per conversion (inhibition entries route mass into
    /// the sink by design).
    pub fn apply_reaction(&mut self, reaction: &CascadeReaction) -> f64 {
        if let Some((gate_species, threshold)) = reaction.gate {
            if self.species.get(gate_species) <= threshold {
                return 0.0;
            }
        }

        let (catalyst2_AU, synergy_multiplier) = match reaction.catalyst2 {
            Some(species) => (self.species.get(species), reaction.synergy_multiplier),
            None => (0.0, 1.0),
        };
        let (inhibitor1_AU, inhibitor1_multiplier) = match reaction.inhibitor1 {
            Some((species, multiplier)) => (self.species.get(species), multiplier),
            None => (0.0, 0.0),
        };
        let (inhibitor2_AU, inhibitor2_multiplier) = match reaction.inhibitor2 {
            Some((species, multiplier)) => (self.species.get(species), multiplier),
            None => (0.0, 0.0),
        };

        let params = ReactionParameters {
            catalyst_AU: self.species.get(reaction.catalyst),
            catalyst2_AU,
            synergy_multiplier,
            source_AU: self.species.get(reaction.source),
            divisor: reaction.divisor,
            inhibitor1_AU,
            inhibitor1_multiplier,
            inhibitor2_AU,
            inhibitor2_multiplier,
            tail: reaction.tail,
            calcium_sensitive: reaction.calcium_sensitive,
            calcium_ions_AU: self.species.get(Species::CalciumIons),
        };

        let amount = params.conversion_amount();
        self.species.add(reaction.source, -amount);
        self.species.add(reaction.product, amount);
        amount
    }

    /// Restore the default snapshot, discarding all perturbations.
    ///
    /// History buffers are owned by the driver and are not touched here.
    pub fn reset(&mut self) {
        *self = Self {
            clot_ceiling_AU: self.clot_ceiling_AU,
            fibrinogen_increment_AU: self.fibrinogen_increment_AU,
            ..Self::new(&Parameters::default())
        };
        log::debug!("simulation state reset to defaults");
    }

    /// Tissue injury: exposes procoagulant surfaces and arms fibrinolysis.
    ///
    /// Equivalent to the pro-thrombotic haemostasis mode.
    pub fn apply_injury(&mut self) {
        self.set_haemostasis_mode(true);
    }

    /// Expose injury surfaces and seed the fibrinolytic reserve.
    ///
    /// The anti-thrombotic variant additionally primes the physiological
    /// anticoagulant panel, so the cascade ignites and is then held in check.
    pub fn set_haemostasis_mode(&mut self, prothrombotic: bool) {
        self.species.set(Species::TissueFactor, 100.0);
        self.species.set(Species::Subendothelium, 100.0);
        self.species.set(Species::Plasminogen, 10_000.0);
        self.species.set(Species::Alpha2Antiplasmin, 100.0);
        self.injury_stage = 0;
        if !prothrombotic {
            self.species.set(Species::Thrombomodulin, 100.0);
            self.species.set(Species::ProteinS, 1000.0);
            self.species.set(Species::Tfpi, 100.0);
            self.species.set(Species::AntithrombinIII, 10_000.0);
            self.species.set(Species::C1EsteraseInhibitor, 10_000.0);
        }
        log::info!(
            "haemostasis mode set ({})",
            if prothrombotic { "pro-thrombotic" } else { "anticoagulant-primed" }
        );
    }

    /// Supplement fibrinogen by the configured increment.
    pub fn increase_fibrinogen_level(&mut self) {
        self.species.add(Species::Fibrinogen, self.fibrinogen_increment_AU);
    }

    /// Jump straight to a fully formed clot and arm its breakdown.
    ///
    /// Shortcut for observing fibrinolysis without replaying clot formation:
    /// resets elapsed time, forces plasminogen and tPA to active levels,
    /// clears PAI-1 and fibrinogen, and sets cross-linked fibrin to the
    /// fully-clotted ceiling.
    pub fn set_fibrinolysis_mode(&mut self) {
        self.current_time = 0;
        self.species.set(Species::Plasminogen, 10_000.0);
        self.species.set(Species::Tpa, 100.0);
        self.species.set(Species::Pai1, 0.0);
        self.species.set(Species::Fibrinogen, 0.0);
        self.species.set(Species::CrossLinkedFibrin, self.clot_ceiling_AU);
        log::info!("fibrinolysis mode set");
    }

    /// Apply a disorder preset.
    ///
    /// Presets overwrite factor levels directly; they do not reset other
    /// perturbations first (the driver decides whether to start clean).
    /// Selectable presets without a wired numeric effect log a warning so
    /// the gap is visible.
    pub fn set_disorder(&mut self, disorder: Disorder) {
        match disorder {
            Disorder::None => {}
            Disorder::VonWillebrandDisease
            | Disorder::VitaminKDeficiency
            | Disorder::FactorVLeiden => {
                log::warn!(
                    "disorder preset '{}' is selectable but has no wired numeric effect",
                    disorder
                );
                return;
            }
            Disorder::LiverDisorder => {
                // Hepatic synthesis failure depresses the vitamin-K-dependent
                // factors and platelet production together
                self.species.set(Species::Prothrombin, 100.0);
                self.species.set(Species::FactorVII, 10.0);
                self.species.set(Species::FactorIX, 10.0);
                self.species.set(Species::FactorX, 10.0);
                self.species.set(Species::Platelets, 100.0);
            }
            Disorder::HaemophiliaAModerate => {
                self.species.set(Species::FactorVIII, 500.0);
            }
            Disorder::HaemophiliaASevere => {
                self.species.set(Species::FactorVIII, 0.0);
            }
            Disorder::HaemophiliaB => {
                self.species.set(Species::FactorIX, 0.0);
            }
            Disorder::HaemophiliaC => {
                self.species.set(Species::FactorXI, 0.0);
            }
            Disorder::HypocalcaemiaModerate => {
                self.species.set(Species::CalciumIons, 1.1);
            }
            Disorder::HypocalcaemiaSevere => {
                self.species.set(Species::CalciumIons, 0.9);
            }
        }
        if disorder != Disorder::None {
            log::info!("disorder preset applied: {}", disorder);
        }
    }

    /// Select the playback speed for the driver.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Snapshot of displayable metrics for the driver and export layers.
    pub fn metrics(&self) -> SimulationMetrics {
        SimulationMetrics::sample(self)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&Parameters::default())
    }
}
