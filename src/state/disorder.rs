//! Coagulation disorder presets.
//!
//! Each disorder is a fixed perturbation of the default factor levels,
//! selectable by display name (case-insensitive) for UI and CLI surfaces.
//! Presets compose with other perturbations by direct overwrite; there is no
//! merging logic, later calls win.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Selectable disorder presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disorder {
    /// Healthy baseline, no perturbation
    #[default]
    None,
    VonWillebrandDisease,
    HaemophiliaAModerate,
    HaemophiliaASevere,
    HaemophiliaB,
    HaemophiliaC,
    HypocalcaemiaModerate,
    HypocalcaemiaSevere,
    VitaminKDeficiency,
    LiverDisorder,
    FactorVLeiden,
}

impl Disorder {
    /// Every selectable disorder, in display order.
    pub const ALL: [Disorder; 11] = [
        Disorder::None,
        Disorder::VonWillebrandDisease,
        Disorder::HaemophiliaAModerate,
        Disorder::HaemophiliaASevere,
        Disorder::HaemophiliaB,
        Disorder::HaemophiliaC,
        Disorder::HypocalcaemiaModerate,
        Disorder::HypocalcaemiaSevere,
        Disorder::VitaminKDeficiency,
        Disorder::LiverDisorder,
        Disorder::FactorVLeiden,
    ];

    /// Display label, as shown in a disorder selector.
    pub fn label(self) -> &'static str {
        match self {
            Disorder::None => "None",
            Disorder::VonWillebrandDisease => "Von Willebrand Disease",
            Disorder::HaemophiliaAModerate => "Haemophilia A (Moderate)",
            Disorder::HaemophiliaASevere => "Haemophilia A (Severe)",
            Disorder::HaemophiliaB => "Haemophilia B",
            Disorder::HaemophiliaC => "Haemophilia C",
            Disorder::HypocalcaemiaModerate => "Hypocalcaemia (Moderate)",
            Disorder::HypocalcaemiaSevere => "Hypocalcaemia (Severe)",
            Disorder::VitaminKDeficiency => "Vitamin K Deficiency",
            Disorder::LiverDisorder => "Liver Disorder",
            Disorder::FactorVLeiden => "Factor V Leiden",
        }
    }

    /// Whether the preset carries a numeric effect.
    ///
    /// Von Willebrand Disease, Vitamin K Deficiency and Factor V Leiden are
    /// selectable but currently have no wired effect on factor levels;
    /// applying one logs a warning instead of silently doing nothing.
    /// TODO: wire vWF binding, gamma-carboxylation loss and APC resistance
    /// into the catalog so these presets perturb the cascade.
    pub fn is_wired(self) -> bool {
        !matches!(
            self,
            Disorder::VonWillebrandDisease | Disorder::VitaminKDeficiency | Disorder::FactorVLeiden
        )
    }
}

impl fmt::Display for Disorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup failure for a disorder name arriving as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown disorder '{0}'")]
pub struct UnknownDisorder(pub String);

impl FromStr for Disorder {
    type Err = UnknownDisorder;

    /// Case-insensitive match on the display label.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_uppercase();
        Disorder::ALL
            .iter()
            .copied()
            .find(|d| d.label().to_uppercase() == wanted)
            .ok_or_else(|| UnknownDisorder(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_all_presets() {
        assert_eq!(Disorder::ALL.len(), 11);
        assert_eq!(Disorder::ALL[0], Disorder::None);
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(
            "haemophilia b".parse::<Disorder>().unwrap(),
            Disorder::HaemophiliaB
        );
        assert_eq!(
            "HAEMOPHILIA A (SEVERE)".parse::<Disorder>().unwrap(),
            Disorder::HaemophiliaASevere
        );
        assert_eq!("none".parse::<Disorder>().unwrap(), Disorder::None);
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let err = "haemophilia d".parse::<Disorder>().unwrap_err();
        assert_eq!(err, UnknownDisorder("haemophilia d".to_string()));
    }

    #[test]
    fn test_unwired_presets_flagged() {
        assert!(!Disorder::VonWillebrandDisease.is_wired());
        assert!(!Disorder::FactorVLeiden.is_wired());
        assert!(!Disorder::VitaminKDeficiency.is_wired());
        assert!(Disorder::HaemophiliaB.is_wired());
        assert!(Disorder::None.is_wired());
    }
}
