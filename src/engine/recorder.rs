//! Working-copy snapshot recorder
//!
//! This module defines [`StepRecorder`], the object every generator drives.
//! The recorder owns a private working copy of the input: all mutation goes
//! through it, and every recorded frame deep-copies the working array and
//! the cumulative sorted set, so no frame can alias state that a later
//! operation mutates.
//!
//! # Recording conventions
//!
//! - Construction records the clean starting frame (no marks).
//! - Pivot marks persist in every following frame until cleared, so a
//!   partition scan keeps its pivot visible across compare/swap frames.
//! - The sorted set only ever grows; it is snapshotted in ascending order.
//! - [`StepRecorder::finish`] appends the terminal all-sorted frame unless
//!   the last recorded frame already is exactly that, which keeps the
//!   empty-input history at a single frame.

use crate::engine::step::SortingStep;
use rustc_hash::FxHashSet;

/// Records the step history of one generator run
#[derive(Debug)]
pub struct StepRecorder {
    /// Private working copy of the input
    array: Vec<i64>,

    /// Cumulative set of finally-placed indices
    sorted: FxHashSet<usize>,

    /// Currently active pivot marks, carried into every frame
    pivot: Vec<usize>,

    /// Recorded history
    steps: Vec<SortingStep>,
}

impl StepRecorder {
    /// Create a recorder over a copy of `input` and record the clean
    /// starting frame.
    pub fn new(input: &[i64]) -> Self {
        let mut recorder = StepRecorder {
            array: input.to_vec(),
            sorted: FxHashSet::default(),
            pivot: Vec::new(),
            steps: Vec::new(),
        };
        recorder.push(Vec::new(), Vec::new());
        recorder
    }

    /// Number of elements in the working array
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the working array is empty
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Current working array contents
    pub fn values(&self) -> &[i64] {
        &self.array
    }

    /// Value at one slot of the working array
    pub fn get(&self, index: usize) -> i64 {
        self.array[index]
    }

    /// Record a comparison touching the given indices
    pub fn compare(&mut self, indices: &[usize]) {
        self.push(indices.to_vec(), Vec::new());
    }

    /// Highlight indices as selected without changing the array
    pub fn select(&mut self, indices: &[usize]) {
        self.push(Vec::new(), indices.to_vec());
    }

    /// Swap two slots and record the post-swap array
    pub fn swap(&mut self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.push(Vec::new(), vec![i, j]);
    }

    /// Move the value at `src` into `dst` (`dst <= src`), shifting
    /// `dst..src` right by one, and record the post-move array with the
    /// destination selected.
    ///
    /// Every recorded frame must hold a permutation of the input, so
    /// placements that would overwrite a slot are expressed as rotations:
    /// the shifted elements keep their relative order and no value is
    /// duplicated or dropped mid-flight.
    pub fn rotate_into(&mut self, dst: usize, src: usize) {
        let value = self.array[src];
        self.array.copy_within(dst..src, dst + 1);
        self.array[dst] = value;
        self.push(Vec::new(), vec![dst]);
    }

    /// Set pivot marks and record a frame showing them.
    ///
    /// The marks persist in every following frame until [`clear_pivot`]
    /// is called.
    ///
    /// [`clear_pivot`]: StepRecorder::clear_pivot
    pub fn set_pivot(&mut self, indices: &[usize]) {
        self.pivot = indices.to_vec();
        self.push(Vec::new(), Vec::new());
    }

    /// Drop pivot marks. Does not record a frame on its own; the next
    /// recorded frame simply no longer carries them.
    pub fn clear_pivot(&mut self) {
        self.pivot.clear();
    }

    /// Mark indices as finally placed and record a frame with the scan
    /// marks cleared. Indices already marked are kept; the frame is
    /// skipped when it would duplicate the previous one.
    pub fn mark_sorted<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            self.sorted.insert(index);
        }
        let frame = SortingStep {
            array: self.array.clone(),
            comparing: Vec::new(),
            selected: Vec::new(),
            sorted: self.sorted_snapshot(),
            pivot: self.pivot.clone(),
        };
        if self.steps.last() != Some(&frame) {
            self.steps.push(frame);
        }
    }

    /// Mark the whole range sorted, append the terminal frame, and return
    /// the recorded history.
    pub fn finish(mut self) -> Vec<SortingStep> {
        self.pivot.clear();
        for index in 0..self.array.len() {
            self.sorted.insert(index);
        }
        let terminal = SortingStep {
            array: self.array.clone(),
            comparing: Vec::new(),
            selected: Vec::new(),
            sorted: self.sorted_snapshot(),
            pivot: Vec::new(),
        };
        if self.steps.last() != Some(&terminal) {
            self.steps.push(terminal);
        }
        self.steps
    }

    /// Snapshot the sorted set in ascending order
    fn sorted_snapshot(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.sorted.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    fn push(&mut self, comparing: Vec<usize>, selected: Vec<usize>) {
        self.steps.push(SortingStep {
            array: self.array.clone(),
            comparing,
            selected,
            sorted: self.sorted_snapshot(),
            pivot: self.pivot.clone(),
        });
    }
}
