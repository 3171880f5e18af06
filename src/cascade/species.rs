//! Closed registry of cascade species and their concentration storage.
//!
//! Every quantity the simulation tracks is a [`Species`] variant with a
//! stable snake_case key (for CLI/config/export surfaces) and a display
//! label (for presentation). Concentrations live in a dense array-backed
//! [`SpeciesMap`] indexed by the enum, so lookups are infallible once a name
//! has been resolved; the only fallible surface is `from_key`, used at the
//! UI/CLI boundary where names arrive as text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named species of the coagulation model.
///
/// Covers primary haemostasis markers, the clotting factor cascade
/// (zymogen and activated forms), the inhibitor panel, the fibrinolytic
/// system, and a [`Species::Sink`] placeholder used as the destination of
/// inhibition reactions (mass deliberately leaves the tracked pools there).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    // Primary haemostasis
    VonWillebrandFactor,
    Platelets,
    ActivatedPlatelets,
    GlycoproteinIb,
    GlycoproteinIIbIIIa,
    Endothelin,
    NitricOxide,
    Prostacyclin,
    AlphaGranules,
    DenseGranules,
    Serotonin,
    Adp,
    CalciumIons,
    // Surfaces exposed by injury
    Subendothelium,
    TissueFactor,
    // Clotting factors (zymogen / activated)
    FactorV,
    FactorVa,
    FactorVII,
    FactorVIIa,
    FactorVIII,
    FactorVIIIa,
    FactorIX,
    FactorIXa,
    FactorX,
    FactorXa,
    FactorXI,
    FactorXIa,
    FactorXII,
    FactorXIIa,
    FactorXIII,
    FactorXIIIa,
    // Common pathway
    Prothrombin,
    Thrombin,
    Fibrinogen,
    Fibrin,
    CrossLinkedFibrin,
    // Inhibitor panel
    ProteinC,
    ProteinCa,
    Tfpi,
    AntithrombinIII,
    Thrombomodulin,
    ProteinS,
    C1EsteraseInhibitor,
    // Fibrinolysis
    Plasminogen,
    Plasmin,
    Tpa,
    Pai1,
    Alpha2Antiplasmin,
    Tafi,
    Tafia,
    FibrinDegradationProducts,
    // Discarded product of inhibition reactions
    Sink,
}

impl Species {
    /// Number of species tracked by the model.
    pub const COUNT: usize = 52;

    /// Every species, in storage order.
    pub const ALL: [Species; Species::COUNT] = [
        Species::VonWillebrandFactor,
        Species::Platelets,
        Species::ActivatedPlatelets,
        Species::GlycoproteinIb,
        Species::GlycoproteinIIbIIIa,
        Species::Endothelin,
        Species::NitricOxide,
        Species::Prostacyclin,
        Species::AlphaGranules,
        Species::DenseGranules,
        Species::Serotonin,
        Species::Adp,
        Species::CalciumIons,
        Species::Subendothelium,
        Species::TissueFactor,
        Species::FactorV,
        Species::FactorVa,
        Species::FactorVII,
        Species::FactorVIIa,
        Species::FactorVIII,
        Species::FactorVIIIa,
        Species::FactorIX,
        Species::FactorIXa,
        Species::FactorX,
        Species::FactorXa,
        Species::FactorXI,
        Species::FactorXIa,
        Species::FactorXII,
        Species::FactorXIIa,
        Species::FactorXIII,
        Species::FactorXIIIa,
        Species::Prothrombin,
        Species::Thrombin,
        Species::Fibrinogen,
        Species::Fibrin,
        Species::CrossLinkedFibrin,
        Species::ProteinC,
        Species::ProteinCa,
        Species::Tfpi,
        Species::AntithrombinIII,
        Species::Thrombomodulin,
        Species::ProteinS,
        Species::C1EsteraseInhibitor,
        Species::Plasminogen,
        Species::Plasmin,
        Species::Tpa,
        Species::Pai1,
        Species::Alpha2Antiplasmin,
        Species::Tafi,
        Species::Tafia,
        Species::FibrinDegradationProducts,
        Species::Sink,
    ];

    /// Index into the dense concentration array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case key used by CLI flags, config and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Species::VonWillebrandFactor => "von_willebrand_factor",
            Species::Platelets => "platelets",
            Species::ActivatedPlatelets => "activated_platelets",
            Species::GlycoproteinIb => "glycoprotein_1b",
            Species::GlycoproteinIIbIIIa => "glycoprotein_2b3a",
            Species::Endothelin => "endothelin",
            Species::NitricOxide => "nitric_oxide",
            Species::Prostacyclin => "prostacyclin",
            Species::AlphaGranules => "alpha_granules",
            Species::DenseGranules => "dense_granules",
            Species::Serotonin => "serotonin",
            Species::Adp => "adp",
            Species::CalciumIons => "calcium_ions",
            Species::Subendothelium => "subendothelium",
            Species::TissueFactor => "tissue_factor",
            Species::FactorV => "factor5",
            Species::FactorVa => "factor5a",
            Species::FactorVII => "factor7",
            Species::FactorVIIa => "factor7a",
            Species::FactorVIII => "factor8",
            Species::FactorVIIIa => "factor8a",
            Species::FactorIX => "factor9",
            Species::FactorIXa => "factor9a",
            Species::FactorX => "factor10",
            Species::FactorXa => "factor10a",
            Species::FactorXI => "factor11",
            Species::FactorXIa => "factor11a",
            Species::FactorXII => "factor12",
            Species::FactorXIIa => "factor12a",
            Species::FactorXIII => "factor13",
            Species::FactorXIIIa => "factor13a",
            Species::Prothrombin => "prothrombin",
            Species::Thrombin => "thrombin",
            Species::Fibrinogen => "fibrinogen",
            Species::Fibrin => "fibrin",
            Species::CrossLinkedFibrin => "cross_linked_fibrin",
            Species::ProteinC => "protein_c",
            Species::ProteinCa => "protein_ca",
            Species::Tfpi => "tfpi",
            Species::AntithrombinIII => "antithrombin3",
            Species::Thrombomodulin => "thrombomodulin",
            Species::ProteinS => "protein_s",
            Species::C1EsteraseInhibitor => "c1_esterase_inhibitor",
            Species::Plasminogen => "plasminogen",
            Species::Plasmin => "plasmin",
            Species::Tpa => "tpa",
            Species::Pai1 => "pai1",
            Species::Alpha2Antiplasmin => "alpha_2_antiplasmin",
            Species::Tafi => "tafi",
            Species::Tafia => "tafia",
            Species::FibrinDegradationProducts => "fibrin_degradation_products",
            Species::Sink => "sink",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Species::VonWillebrandFactor => "Von Willebrand Factor",
            Species::Platelets => "Inactive Platelets",
            Species::ActivatedPlatelets => "Activated Platelets",
            Species::GlycoproteinIb => "Glycoprotein Ib",
            Species::GlycoproteinIIbIIIa => "Glycoprotein IIb/IIIa",
            Species::Endothelin => "Endothelin",
            Species::NitricOxide => "Nitric Oxide",
            Species::Prostacyclin => "Prostacyclin",
            Species::AlphaGranules => "Alpha Granules",
            Species::DenseGranules => "Dense Granules",
            Species::Serotonin => "Serotonin",
            Species::Adp => "ADP",
            Species::CalciumIons => "Calcium Ions",
            Species::Subendothelium => "Exposed Subendothelium",
            Species::TissueFactor => "Exposed Tissue Factor (factor III)",
            Species::FactorV => "Factor V",
            Species::FactorVa => "Factor Va",
            Species::FactorVII => "Factor VII",
            Species::FactorVIIa => "Factor VIIa",
            Species::FactorVIII => "Factor VIII",
            Species::FactorVIIIa => "Factor VIIIa",
            Species::FactorIX => "Factor IX",
            Species::FactorIXa => "Factor IXa",
            Species::FactorX => "Factor X",
            Species::FactorXa => "Factor Xa",
            Species::FactorXI => "Factor XI",
            Species::FactorXIa => "Factor XIa",
            Species::FactorXII => "Factor XII",
            Species::FactorXIIa => "Factor XIIa",
            Species::FactorXIII => "Factor XIII",
            Species::FactorXIIIa => "Factor XIIIa",
            Species::Prothrombin => "Prothrombin (factor II)",
            Species::Thrombin => "Thrombin (factor IIa)",
            Species::Fibrinogen => "Fibrinogen (factor I)",
            Species::Fibrin => "Fibrin (factor Ia)",
            Species::CrossLinkedFibrin => "Cross-linked Fibrin",
            Species::ProteinC => "Protein C",
            Species::ProteinCa => "Protein Ca",
            Species::Tfpi => "Tissue Factor Pathway Inhibitor",
            Species::AntithrombinIII => "Antithrombin III",
            Species::Thrombomodulin => "Thrombomodulin",
            Species::ProteinS => "Protein S",
            Species::C1EsteraseInhibitor => "C1-esterase Inhibitor",
            Species::Plasminogen => "Plasminogen",
            Species::Plasmin => "Plasmin",
            Species::Tpa => "Tissue Plasminogen Activator",
            Species::Pai1 => "Plasminogen Activator Inhibitor-1",
            Species::Alpha2Antiplasmin => "Alpha-2-antiplasmin",
            Species::Tafi => "TAFI",
            Species::Tafia => "TAFIa",
            Species::FibrinDegradationProducts => "Fibrin Degradation Products",
            Species::Sink => "Sink",
        }
    }

    /// Default concentration (AU) in the resting, uninjured state.
    ///
    /// Values roughly target a ratio of 1 AU = 0.1 ng/mL.
    pub fn default_AU(self) -> f64 {
        match self {
            Species::VonWillebrandFactor => 100_000.0,
            Species::Platelets => 300.0,
            Species::CalciumIons => 1.2,
            Species::FactorV => 1000.0,
            Species::FactorVII => 100.0,
            Species::FactorVIII => 1000.0,
            Species::FactorIX => 1000.0,
            Species::FactorX => 1000.0,
            Species::FactorXI => 1000.0,
            Species::FactorXII => 1000.0,
            Species::FactorXIII => 10_000.0,
            Species::Prothrombin => 10_000.0,
            Species::Fibrinogen => 50_000.0,
            Species::ProteinC => 10_000.0,
            Species::Plasminogen => 10_000.0,
            Species::Tafi => 1000.0,
            Species::Pai1 => 100.0,
            Species::Alpha2Antiplasmin => 100.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup failure for a species key arriving as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species key '{0}'")]
pub struct UnknownSpecies(pub String);

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .iter()
            .copied()
            .find(|s| s.key() == key)
            .ok_or_else(|| UnknownSpecies(key.to_string()))
    }
}

/// Dense concentration storage, one slot per [`Species`].
#[derive(Debug, Clone)]
pub struct SpeciesMap {
    values: [f64; Species::COUNT],
}

impl SpeciesMap {
    /// A map with every species at zero.
    pub fn zeroed() -> Self {
        Self {
            values: [0.0; Species::COUNT],
        }
    }

    /// Get the concentration of a species (AU).
    #[inline]
    pub fn get(&self, species: Species) -> f64 {
        self.values[species.index()]
    }

    /// Set the concentration of a species, clamped to be non-negative.
    #[inline]
    pub fn set(&mut self, species: Species, value_AU: f64) {
        self.values[species.index()] = value_AU.max(0.0);
    }

    /// Add to the concentration of a species.
    #[inline]
    pub fn add(&mut self, species: Species, delta_AU: f64) {
        let current = self.values[species.index()];
        self.set(species, current + delta_AU);
    }

    /// Iterate over every species with its concentration.
    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        Species::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Sum of all tracked concentrations, including the sink.
    pub fn total_AU(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl Default for SpeciesMap {
    fn default() -> Self {
        let mut map = Self::zeroed();
        for species in Species::ALL {
            map.set(species, species.default_AU());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_index_once() {
        assert_eq!(Species::ALL.len(), Species::COUNT);
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for species in Species::ALL {
            let parsed: Species = species.key().parse().expect("key must round-trip");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn test_unknown_key_fails_fast() {
        let err = "factor_xiv".parse::<Species>().unwrap_err();
        assert_eq!(err, UnknownSpecies("factor_xiv".to_string()));
    }

    #[test]
    fn test_default_concentrations() {
        let map = SpeciesMap::default();
        assert_eq!(map.get(Species::VonWillebrandFactor), 100_000.0);
        assert_eq!(map.get(Species::Fibrinogen), 50_000.0);
        assert_eq!(map.get(Species::Prothrombin), 10_000.0);
        assert_eq!(map.get(Species::FactorVII), 100.0);
        assert_eq!(map.get(Species::CalciumIons), 1.2);
        assert_eq!(map.get(Species::Thrombin), 0.0);
        assert_eq!(map.get(Species::TissueFactor), 0.0);
        assert_eq!(map.get(Species::Sink), 0.0);
    }

    #[test]
    fn test_set_clamps_negative() {
        let mut map = SpeciesMap::zeroed();
        map.set(Species::Thrombin, -5.0);
        assert_eq!(map.get(Species::Thrombin), 0.0);
    }

    #[test]
    fn test_add_and_total() {
        let mut map = SpeciesMap::zeroed();
        map.add(Species::Fibrin, 2.5);
        map.add(Species::Fibrin, 1.5);
        assert_eq!(map.get(Species::Fibrin), 4.0);
        assert_eq!(map.total_AU(), 4.0);
    }
}
