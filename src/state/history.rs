//! Time-series recording for the plotting layer.
//!
//! The core state keeps no history; the driver owns a [`TraceBuffer`] and
//! appends to it after every tick. Two species are tracked at a time,
//! matching the two plotted lines of the presentation layer.

use crate::cascade::Species;
use crate::state::SimulationState;

/// Number of tracked series.
pub const TRACKED_SLOTS: usize = 2;

/// Two-line time-series buffer over the simulation state.
///
/// Retargeting a slot or clearing the buffer discards recorded samples; the
/// time axis is shared by both series, so the buffer is always rectangular.
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    tracked: [Species; TRACKED_SLOTS],
    time_sec: Vec<f64>,
    series: [Vec<f64>; TRACKED_SLOTS],
}

impl TraceBuffer {
    /// Buffer with the default selections: cross-linked fibrin and thrombin.
    pub fn new() -> Self {
        Self::with_tracked([Species::CrossLinkedFibrin, Species::Thrombin])
    }

    /// Buffer tracking a specific pair of species.
    pub fn with_tracked(tracked: [Species; TRACKED_SLOTS]) -> Self {
        Self {
            tracked,
            time_sec: Vec::new(),
            series: [Vec::new(), Vec::new()],
        }
    }

    /// Species currently tracked in a slot.
    pub fn tracked(&self, slot: usize) -> Species {
        self.tracked[slot]
    }

    /// Retarget a slot to another species.
    ///
    /// Clears the whole buffer: the series share one time axis, so samples
    /// recorded for the previous selection cannot be kept.
    pub fn set_tracked(&mut self, slot: usize, species: Species) {
        self.tracked[slot] = species;
        self.clear();
    }

    /// Append one sample per tracked species at the state's current time.
    pub fn record(&mut self, state: &SimulationState) {
        self.time_sec.push(state.elapsed_seconds());
        for (slot, series) in self.series.iter_mut().enumerate() {
            series.push(state.concentration(self.tracked[slot]));
        }
    }

    /// Discard all recorded samples, keeping the tracked selections.
    pub fn clear(&mut self) {
        self.time_sec.clear();
        for series in self.series.iter_mut() {
            series.clear();
        }
    }

    /// Shared time axis (simulated seconds).
    pub fn times_sec(&self) -> &[f64] {
        &self.time_sec
    }

    /// Recorded values for a slot.
    pub fn series(&self, slot: usize) -> &[f64] {
        &self.series[slot]
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracks_clot_and_thrombin() {
        let buffer = TraceBuffer::new();
        assert_eq!(buffer.tracked(0), Species::CrossLinkedFibrin);
        assert_eq!(buffer.tracked(1), Species::Thrombin);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_record_appends_per_tick() {
        let mut state = SimulationState::default();
        let mut buffer = TraceBuffer::new();

        for _ in 0..5 {
            state.step();
            buffer.record(&state);
        }

        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.series(0).len(), 5);
        assert_eq!(buffer.series(1).len(), 5);
        // Half a simulated second per tick
        assert_eq!(buffer.times_sec(), &[0.5, 1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_retargeting_clears_samples() {
        let mut state = SimulationState::default();
        let mut buffer = TraceBuffer::new();
        state.step();
        buffer.record(&state);
        assert_eq!(buffer.len(), 1);

        buffer.set_tracked(1, Species::Fibrin);
        assert!(buffer.is_empty());
        assert_eq!(buffer.tracked(1), Species::Fibrin);
    }
}
