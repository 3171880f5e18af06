//! The fixed, ordered reaction table of the coagulation cascade.
//!
//! The whole cascade is data: one [`CascadeReaction`] descriptor per directed
//! conversion, applied top to bottom every tick by
//! [`SimulationState::step`](crate::state::SimulationState::step). Order is
//! significant — later entries see concentrations already updated by earlier
//! entries in the same tick, a deliberate sequential approximation of an
//! instantaneous system.
//!
//! Pathways covered: the common pathway (prothrombin → thrombin → fibrin →
//! cross-linked fibrin), thrombin feedback activation of V/VII/VIII/XI/XIII,
//! the extrinsic (tissue factor → VIIa → Xa) and intrinsic (XIIa → XIa →
//! IXa → Xa) pathways, fibrinolysis (tPA → plasmin → degradation products),
//! and the inhibitor arm (TFPI, antithrombin III, C1-esterase inhibitor,
//! activated protein C + protein S, PAI-1, alpha-2-antiplasmin). Inhibition
//! entries convert their target into [`Species::Sink`], removing it from the
//! tracked pools.

use super::reaction::DEFAULT_TAIL;
use super::species::Species;

/// One directed conversion in the cascade.
///
/// `divisor` is the catalyst amount needed to convert one unit of source per
/// tick; `tail` caps the fraction of remaining source converted per tick.
/// An entry with a `gate` is skipped entirely while the gating species is at
/// or below its threshold.
#[derive(Debug, Clone)]
pub struct CascadeReaction {
    /// Short name for diagnostics and logs
    pub name: &'static str,
    /// Species consumed
    pub source: Species,
    /// Species produced ([`Species::Sink`] for inhibition entries)
    pub product: Species,
    /// Primary catalyst
    pub catalyst: Species,
    /// Optional second catalyst enabling the synergy term
    pub catalyst2: Option<Species>,
    /// Rate bonus when both catalysts are present together
    pub synergy_multiplier: f64,
    /// Catalyst units per unit of source converted per tick
    pub divisor: f64,
    /// Up to two inhibitors, each with its own potency multiplier
    pub inhibitor1: Option<(Species, f64)>,
    pub inhibitor2: Option<(Species, f64)>,
    /// Whether the conversion rate is scaled by calcium availability
    pub calcium_sensitive: bool,
    /// Per-tick saturation cap as a divisor of remaining source
    pub tail: f64,
    /// Skip the entry while the gating species is at or below the threshold
    pub gate: Option<(Species, f64)>,
}

impl CascadeReaction {
    /// A plain single-catalyst conversion with default tail and no modifiers.
    pub const fn new(
        name: &'static str,
        catalyst: Species,
        source: Species,
        product: Species,
        divisor: f64,
    ) -> Self {
        Self {
            name,
            source,
            product,
            catalyst,
            catalyst2: None,
            synergy_multiplier: 1.0,
            divisor,
            inhibitor1: None,
            inhibitor2: None,
            calcium_sensitive: false,
            tail: DEFAULT_TAIL,
            gate: None,
        }
    }

    /// Add a second catalyst with a synergy multiplier.
    pub const fn with_second_catalyst(mut self, catalyst2: Species, synergy: f64) -> Self {
        self.catalyst2 = Some(catalyst2);
        self.synergy_multiplier = synergy;
        self
    }

    /// Add an inhibitor with its potency multiplier (first free slot).
    pub const fn with_inhibitor(mut self, inhibitor: Species, multiplier: f64) -> Self {
        if self.inhibitor1.is_none() {
            self.inhibitor1 = Some((inhibitor, multiplier));
        } else {
            self.inhibitor2 = Some((inhibitor, multiplier));
        }
        self
    }

    /// Mark the conversion as calcium-sensitive.
    pub const fn calcium_dependent(mut self) -> Self {
        self.calcium_sensitive = true;
        self
    }

    /// Override the per-tick saturation tail.
    pub const fn with_tail(mut self, tail: f64) -> Self {
        self.tail = tail;
        self
    }

    /// Skip the entry while `species` is at or below `threshold`.
    pub const fn gated_on(mut self, species: Species, threshold: f64) -> Self {
        self.gate = Some((species, threshold));
        self
    }

    /// Inhibition entries discard their product; mass is intentionally not
    /// conserved into a tracked pool.
    pub fn is_inhibition(&self) -> bool {
        self.product == Species::Sink
    }
}

/// The cascade, in application order.
pub const CASCADE: [CascadeReaction; 30] = [
    // Common pathway: fibrin formation and stabilization
    CascadeReaction::new(
        "thrombin cleaves fibrinogen",
        Species::Thrombin,
        Species::Fibrinogen,
        Species::Fibrin,
        15.0,
    )
    .calcium_dependent(),
    CascadeReaction::new(
        "factor XIIIa cross-links fibrin",
        Species::FactorXIIIa,
        Species::Fibrin,
        Species::CrossLinkedFibrin,
        50.0,
    ),
    CascadeReaction::new(
        "prothrombinase converts prothrombin",
        Species::FactorXa,
        Species::Prothrombin,
        Species::Thrombin,
        120_000.0,
    )
    .with_second_catalyst(Species::FactorVa, 6000.0)
    .calcium_dependent()
    .with_inhibitor(Species::Tfpi, 0.1),
    // Thrombin positive feedback
    CascadeReaction::new(
        "thrombin activates factor VII",
        Species::Thrombin,
        Species::FactorVII,
        Species::FactorVIIa,
        1000.0,
    ),
    CascadeReaction::new(
        "thrombin activates factor VIII",
        Species::Thrombin,
        Species::FactorVIII,
        Species::FactorVIIIa,
        1000.0,
    ),
    CascadeReaction::new(
        "thrombin activates factor XI",
        Species::Thrombin,
        Species::FactorXI,
        Species::FactorXIa,
        1000.0,
    ),
    CascadeReaction::new(
        "thrombin activates factor V",
        Species::Thrombin,
        Species::FactorV,
        Species::FactorVa,
        120_000.0,
    )
    .with_second_catalyst(Species::FactorXa, 6000.0),
    // Extrinsic pathway
    CascadeReaction::new(
        "tissue factor activates factor VII",
        Species::TissueFactor,
        Species::FactorVII,
        Species::FactorVIIa,
        1000.0,
    ),
    // Intrinsic pathway
    CascadeReaction::new(
        "factor XIa activates factor IX",
        Species::FactorXIa,
        Species::FactorIX,
        Species::FactorIXa,
        2000.0,
    )
    .with_second_catalyst(Species::FactorVIIa, 200.0)
    .calcium_dependent(),
    CascadeReaction::new(
        "factor VIIa activates factor X (extrinsic)",
        Species::FactorVIIa,
        Species::FactorX,
        Species::FactorXa,
        1000.0,
    ),
    CascadeReaction::new(
        "tenase activates factor X (intrinsic)",
        Species::FactorIXa,
        Species::FactorX,
        Species::FactorXa,
        120_000.0,
    )
    .with_second_catalyst(Species::FactorVIIIa, 3000.0)
    .calcium_dependent(),
    CascadeReaction::new(
        "factor XIIa activates factor XI",
        Species::FactorXIIa,
        Species::FactorXI,
        Species::FactorXIa,
        500.0,
    ),
    CascadeReaction::new(
        "subendothelium activates factor XII",
        Species::Subendothelium,
        Species::FactorXII,
        Species::FactorXIIa,
        100.0,
    ),
    CascadeReaction::new(
        "thrombin activates factor XIII",
        Species::Thrombin,
        Species::FactorXIII,
        Species::FactorXIIIa,
        20.0,
    ),
    // Fibrinolysis
    CascadeReaction::new(
        "tPA activates plasminogen",
        Species::Tpa,
        Species::Plasminogen,
        Species::Plasmin,
        20.0,
    )
    .with_tail(500.0),
    CascadeReaction::new(
        "plasmin degrades cross-linked fibrin",
        Species::Plasmin,
        Species::CrossLinkedFibrin,
        Species::FibrinDegradationProducts,
        20.0,
    )
    .with_inhibitor(Species::Tafia, 0.15),
    CascadeReaction::new(
        "plasmin degrades fibrin",
        Species::Plasmin,
        Species::Fibrin,
        Species::FibrinDegradationProducts,
        40.0,
    )
    .with_inhibitor(Species::Tafia, 0.15),
    CascadeReaction::new(
        "thrombin activates TAFI",
        Species::Thrombin,
        Species::Tafi,
        Species::Tafia,
        400.0,
    ),
    CascadeReaction::new(
        "PAI-1 neutralizes tPA",
        Species::Pai1,
        Species::Tpa,
        Species::Sink,
        500.0,
    ),
    CascadeReaction::new(
        "alpha-2-antiplasmin neutralizes plasmin",
        Species::Alpha2Antiplasmin,
        Species::Plasmin,
        Species::Sink,
        100.0,
    ),
    // Protein C system
    CascadeReaction::new(
        "thrombomodulin-thrombin activates protein C",
        Species::Thrombomodulin,
        Species::ProteinC,
        Species::ProteinCa,
        100.0,
    )
    .with_second_catalyst(Species::Thrombin, 100.0)
    .gated_on(Species::Thrombomodulin, 0.01),
    CascadeReaction::new(
        "activated protein C degrades factor VIIIa",
        Species::ProteinCa,
        Species::FactorVIIIa,
        Species::Sink,
        2000.0,
    )
    .with_second_catalyst(Species::ProteinS, 2000.0),
    CascadeReaction::new(
        "activated protein C degrades factor Va",
        Species::ProteinCa,
        Species::FactorVa,
        Species::Sink,
        2000.0,
    )
    .with_second_catalyst(Species::ProteinS, 2000.0),
    // Stoichiometric inhibitors
    CascadeReaction::new(
        "TFPI neutralizes factor VIIa",
        Species::Tfpi,
        Species::FactorVIIa,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "TFPI neutralizes factor Xa",
        Species::Tfpi,
        Species::FactorXa,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "C1-esterase inhibitor neutralizes factor XIa",
        Species::C1EsteraseInhibitor,
        Species::FactorXIa,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "C1-esterase inhibitor neutralizes factor XIIa",
        Species::C1EsteraseInhibitor,
        Species::FactorXIIa,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "antithrombin III neutralizes thrombin",
        Species::AntithrombinIII,
        Species::Thrombin,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "antithrombin III neutralizes factor Xa",
        Species::AntithrombinIII,
        Species::FactorXa,
        Species::Sink,
        2000.0,
    ),
    CascadeReaction::new(
        "antithrombin III neutralizes factor IXa",
        Species::AntithrombinIII,
        Species::FactorIXa,
        Species::Sink,
        2000.0,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_well_formed() {
        for reaction in CASCADE.iter() {
            assert!(reaction.divisor > 0.0, "{}: divisor must be positive", reaction.name);
            assert!(reaction.tail >= 1.0, "{}: tail must be >= 1", reaction.name);
            assert!(
                reaction.synergy_multiplier >= 0.0,
                "{}: synergy must be non-negative",
                reaction.name
            );
            assert_ne!(
                reaction.source, reaction.product,
                "{}: source and product must differ",
                reaction.name
            );
            assert_ne!(
                reaction.source,
                Species::Sink,
                "{}: the sink is never a source",
                reaction.name
            );
        }
    }

    #[test]
    fn test_inhibition_entries_target_sink() {
        let inhibitions: Vec<_> = CASCADE.iter().filter(|r| r.is_inhibition()).collect();
        assert_eq!(inhibitions.len(), 11);
        for reaction in inhibitions {
            assert_eq!(reaction.product, Species::Sink);
        }
    }

    #[test]
    fn test_fibrin_formation_precedes_factor_activation() {
        // The table intentionally runs the common pathway first, so a tick's
        // newly produced thrombin is not consumed by fibrinogen cleavage
        // until the next tick.
        let first = &CASCADE[0];
        assert_eq!(first.source, Species::Fibrinogen);
        assert_eq!(first.product, Species::Fibrin);
    }

    #[test]
    fn test_protein_c_activation_is_gated() {
        let protein_c = CASCADE
            .iter()
            .find(|r| r.product == Species::ProteinCa)
            .expect("protein C activation present");
        assert_eq!(protein_c.gate, Some((Species::Thrombomodulin, 0.01)));
    }

    #[test]
    fn test_calcium_sensitive_entries() {
        let sensitive: Vec<_> = CASCADE
            .iter()
            .filter(|r| r.calcium_sensitive)
            .map(|r| r.name)
            .collect();
        assert_eq!(
            sensitive,
            vec![
                "thrombin cleaves fibrinogen",
                "prothrombinase converts prothrombin",
                "factor XIa activates factor IX",
                "tenase activates factor X (intrinsic)",
            ]
        );
    }

    #[test]
    fn test_plasminogen_activation_has_long_tail() {
        let activation = CASCADE
            .iter()
            .find(|r| r.source == Species::Plasminogen)
            .expect("plasminogen activation present");
        assert_eq!(activation.tail, 500.0);
    }
}
