//! Per-tick conversion kinetics for cascade reactions.
//!
//! Every reaction in the cascade is a directed conversion of a source species
//! into a product species, driven by one or two catalysts and limited by
//! inhibitors, calcium availability and a per-tick saturation cap. This module
//! computes the bounded amount converted in a single tick as a pure function
//! of the reaction inputs; it owns no state and never fails.
//!
//! The rate model is deliberately coarse-grained (single abstract AU unit,
//! linear catalyst scaling with a saturation tail) rather than a literal
//! Michaelis-Menten treatment: the cascade is driven by relative factor
//! levels, not absolute assay kinetics.

/// Source concentrations below this are treated as depleted.
///
/// Avoids floating-point underflow noise from reactions chewing on
/// vanishingly small remainders.
pub const SOURCE_DEPLETION_FLOOR_AU: f64 = 0.005;

/// Near-physiological calcium level (AU). At or above this, calcium-sensitive
/// reactions run at full rate.
pub const CALCIUM_BASELINE_AU: f64 = 1.2;

/// Default per-tick saturation tail: at most 1/100 of the remaining source
/// converts in one tick.
pub const DEFAULT_TAIL: f64 = 100.0;

/// Inputs for a single reaction evaluation.
///
/// All amounts are non-negative AU; `divisor` is a positive constant from the
/// reaction catalog ("how much catalyst converts one unit of source per
/// tick"). Inputs are pre-validated by the caller, so evaluation is total.
#[derive(Debug, Clone)]
pub struct ReactionParameters {
    /// Primary catalyst concentration (AU)
    pub catalyst_AU: f64,
    /// Optional second catalyst concentration (AU); 0 when absent
    pub catalyst2_AU: f64,
    /// Rate bonus when both catalysts are present together
    pub synergy_multiplier: f64,
    /// Remaining source concentration (AU)
    pub source_AU: f64,
    /// Catalyst units needed to convert one unit of source per tick
    pub divisor: f64,
    /// First inhibitor concentration (AU); 0 when absent
    pub inhibitor1_AU: f64,
    /// Potency of the first inhibitor
    pub inhibitor1_multiplier: f64,
    /// Second inhibitor concentration (AU); 0 when absent
    pub inhibitor2_AU: f64,
    /// Potency of the second inhibitor
    pub inhibitor2_multiplier: f64,
    /// Per-tick saturation cap as a divisor of remaining source
    pub tail: f64,
    /// Whether the reaction rate depends on calcium availability
    pub calcium_sensitive: bool,
    /// Current calcium ion level (AU)
    pub calcium_ions_AU: f64,
}

impl Default for ReactionParameters {
    fn default() -> Self {
        Self {
            catalyst_AU: 0.0,
            catalyst2_AU: 0.0,
            synergy_multiplier: 1.0,
            source_AU: 0.0,
            divisor: 1.0,
            inhibitor1_AU: 0.0,
            inhibitor1_multiplier: 0.0,
            inhibitor2_AU: 0.0,
            inhibitor2_multiplier: 0.0,
            tail: DEFAULT_TAIL,
            calcium_sensitive: false,
            calcium_ions_AU: CALCIUM_BASELINE_AU,
        }
    }
}

impl ReactionParameters {
    /// Amount of source converted to product this tick.
    ///
    /// Always in `[0, source_AU]`: the result is capped both by the
    /// catalyst-driven capacity and by `source_AU / tail`, and a source below
    /// [`SOURCE_DEPLETION_FLOOR_AU`] converts nothing at all.
    pub fn conversion_amount(&self) -> f64 {
        if self.source_AU < SOURCE_DEPLETION_FLOOR_AU {
            return 0.0;
        }
        let max_source_available = self.source_AU / self.tail;
        max_source_available.min(self.catalyst_capacity())
    }

    /// Catalyst-driven conversion capacity (AU/tick), after inhibition and
    /// calcium scaling, clamped to be non-negative.
    ///
    /// The three-way max models catalyst 1 alone, catalyst 2 alone, or the
    /// synergy bonus when both are present; the synergy term only dominates
    /// once both catalysts are large enough for their joint term to win.
    pub fn catalyst_capacity(&self) -> f64 {
        let paired = self.catalyst_AU.min(self.catalyst2_AU) * self.synergy_multiplier;
        let strongest = self.catalyst_AU.max(self.catalyst2_AU).max(paired);
        let mut capacity = strongest / self.divisor - self.inhibitor_load();
        if self.calcium_sensitive {
            capacity *= calcium_rate_multiplier(self.calcium_ions_AU);
        }
        capacity.max(0.0)
    }

    /// Effective inhibition (AU/tick). Inhibitors do not stack additively:
    /// the stronger one dominates.
    pub fn inhibitor_load(&self) -> f64 {
        let load1 = self.inhibitor1_AU * self.inhibitor1_multiplier;
        let load2 = self.inhibitor2_AU * self.inhibitor2_multiplier;
        load1.max(load2)
    }
}

/// Rate multiplier for calcium-sensitive reactions.
///
/// 1.0 at or above near-physiological calcium (threshold just below
/// [`CALCIUM_BASELINE_AU`]), otherwise a cubic penalty `(level / 1.2)³`
/// reflecting cooperative multi-site calcium dependency.
#[inline]
pub fn calcium_rate_multiplier(calcium_AU: f64) -> f64 {
    if calcium_AU > 1.199 {
        return 1.0;
    }
    (calcium_AU / CALCIUM_BASELINE_AU).powi(3)
}
