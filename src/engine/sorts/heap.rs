//! Heapsort generator
//!
//! Builds a max-heap over the whole array, then repeatedly swaps the heap
//! root with the last unsorted element, marks that slot sorted, and sifts
//! the new root down the shrunken heap.  Sift-down compares the two
//! children first, then the parent against the larger child.

use crate::engine::recorder::StepRecorder;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    // Build phase: sift every internal node down, last parent first.
    for root in (0..n / 2).rev() {
        sift_down(&mut recorder, root, n);
    }

    // Extraction phase: the heap shrinks from the right.
    for end in (1..n).rev() {
        recorder.swap(0, end);
        recorder.mark_sorted([end]);
        sift_down(&mut recorder, 0, end);
    }
    recorder.mark_sorted([0]);

    recorder.finish()
}

/// Sift the element at `root` down the heap `0..end`
fn sift_down(recorder: &mut StepRecorder, root: usize, end: usize) {
    let mut parent = root;
    loop {
        let mut child = 2 * parent + 1;
        if child >= end {
            break;
        }
        if child + 1 < end {
            recorder.compare(&[child, child + 1]);
            if recorder.get(child + 1) > recorder.get(child) {
                child += 1;
            }
        }
        recorder.compare(&[parent, child]);
        if recorder.get(parent) < recorder.get(child) {
            recorder.swap(parent, child);
            parent = child;
        } else {
            break;
        }
    }
}
