//! Bubble sort generator
//!
//! Each pass compares adjacent pairs across the shrinking unsorted range,
//! swapping inversions.  The largest unsorted element bubbles to the end
//! of the active range, so the pass's last index is marked sorted when the
//! pass completes.  A pass without swaps ends the scan early.

use crate::engine::recorder::StepRecorder;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            recorder.compare(&[j, j + 1]);
            if recorder.get(j) > recorder.get(j + 1) {
                recorder.swap(j, j + 1);
                swapped = true;
            }
        }
        recorder.mark_sorted([n - 1 - pass]);
        if !swapped {
            break;
        }
    }

    recorder.finish()
}
