//! Playback speed settings for the simulation driver.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tick-rate multiplier, one of a fixed discrete set.
///
/// Speed never changes `step()` semantics; it only scales how often the
/// driver schedules the next tick. A change takes effect on the next
/// scheduled tick — an in-flight tick is a single atomic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    X1,
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    Half,
}

impl Speed {
    /// Every selectable speed, in display order.
    pub const ALL: [Speed; 8] = [
        Speed::X1,
        Speed::X2,
        Speed::X4,
        Speed::X8,
        Speed::X16,
        Speed::X32,
        Speed::X64,
        Speed::Half,
    ];

    /// Tick-rate multiplier relative to real time.
    pub fn multiplier(self) -> f64 {
        match self {
            Speed::X1 => 1.0,
            Speed::X2 => 2.0,
            Speed::X4 => 4.0,
            Speed::X8 => 8.0,
            Speed::X16 => 16.0,
            Speed::X32 => 32.0,
            Speed::X64 => 64.0,
            Speed::Half => 0.5,
        }
    }

    /// Display label, as shown in a speed selector.
    pub fn label(self) -> &'static str {
        match self {
            Speed::X1 => "x 1",
            Speed::X2 => "x 2",
            Speed::X4 => "x 4",
            Speed::X8 => "x 8",
            Speed::X16 => "x 16",
            Speed::X32 => "x 32",
            Speed::X64 => "x 64",
            Speed::Half => "x 0.5",
        }
    }

    /// Driver interval between ticks for a given base interval.
    pub fn tick_interval_ms(self, base_ms: u64) -> u64 {
        (base_ms as f64 / self.multiplier()).round() as u64
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup failure for a speed label arriving as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown speed '{0}' (expected one of 1, 2, 4, 8, 16, 32, 64, 0.5)")]
pub struct UnknownSpeed(pub String);

impl FromStr for Speed {
    type Err = UnknownSpeed;

    /// Accepts either the display label ("x 4") or the bare multiplier ("4").
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let wanted = text.trim();
        Speed::ALL
            .iter()
            .copied()
            .find(|s| s.label() == wanted || s.label().trim_start_matches("x ") == wanted)
            .ok_or_else(|| UnknownSpeed(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_intervals() {
        assert_eq!(Speed::X1.tick_interval_ms(500), 500);
        assert_eq!(Speed::X2.tick_interval_ms(500), 250);
        assert_eq!(Speed::X64.tick_interval_ms(500), 8);
        assert_eq!(Speed::Half.tick_interval_ms(500), 1000);
    }

    #[test]
    fn test_parse_labels_and_multipliers() {
        assert_eq!("x 4".parse::<Speed>().unwrap(), Speed::X4);
        assert_eq!("16".parse::<Speed>().unwrap(), Speed::X16);
        assert_eq!("0.5".parse::<Speed>().unwrap(), Speed::Half);
        assert!("x 3".parse::<Speed>().is_err());
    }

    #[test]
    fn test_default_is_real_time() {
        assert_eq!(Speed::default(), Speed::X1);
        assert_eq!(Speed::default().multiplier(), 1.0);
    }
}
