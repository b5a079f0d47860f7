//! Operation counters derived from a step history
//!
//! A frame counts as one comparison when its comparing set is non-empty,
//! and as one swap when at least two indices were selected (single-index
//! selections are highlights or single-slot writes, not swaps).

use crate::engine::step::SortingStep;

/// Comparison and swap counts over a step history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: usize,
    pub swaps: usize,
}

impl RunStats {
    /// Count operations over `steps`.
    ///
    /// Works on any prefix of a history, so the UI can show counts up to
    /// the current playback position.
    pub fn from_steps(steps: &[SortingStep]) -> RunStats {
        let mut stats = RunStats::default();
        for step in steps {
            if !step.comparing.is_empty() {
                stats.comparisons += 1;
            }
            if step.selected.len() >= 2 {
                stats.swaps += 1;
            }
        }
        stats
    }
}
