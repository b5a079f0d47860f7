//! The step snapshot record
//!
//! This module defines [`SortingStep`], one immutable snapshot of array
//! state plus index annotations at one instant of an algorithm's execution.
//! A step is constructed once by the recorder and never mutated; the array
//! is a full deep copy, not a diff, so earlier frames stay intact however
//! the working copy changes afterwards.

/// One recorded instant of a sorting algorithm's execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingStep {
    /// Full array state at this instant
    pub array: Vec<i64>,

    /// Indices currently being compared (0, 1, or 2 entries typically)
    pub comparing: Vec<usize>,

    /// Indices just involved in a swap or assignment
    pub selected: Vec<usize>,

    /// Indices already in final sorted position, ascending
    pub sorted: Vec<usize>,

    /// Indices acting as a pivot or boundary anchor
    pub pivot: Vec<usize>,
}

impl SortingStep {
    /// Whether this step carries no annotations at all
    pub fn is_clean(&self) -> bool {
        self.comparing.is_empty()
            && self.selected.is_empty()
            && self.sorted.is_empty()
            && self.pivot.is_empty()
    }

    /// Whether every position is marked sorted and no other marks remain
    pub fn is_terminal(&self) -> bool {
        self.sorted.len() == self.array.len()
            && self.comparing.is_empty()
            && self.selected.is_empty()
            && self.pivot.is_empty()
    }
}
