//! Quicksort generator
//!
//! Lomuto partition with the last element of the active range as the
//! pivot.  The pivot choice is fixed so step sequences stay reproducible.
//! The pivot mark persists across the whole partition scan; once the
//! pivot swaps into its final slot that index is marked sorted, then both
//! sides are partitioned recursively, left side first.

use crate::engine::recorder::StepRecorder;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    if recorder.len() < 2 {
        return recorder.finish();
    }

    let n = recorder.len();
    sort_range(&mut recorder, 0, n);
    recorder.finish()
}

/// Sort `lo..hi` of the working array
fn sort_range(recorder: &mut StepRecorder, lo: usize, hi: usize) {
    if hi <= lo {
        return;
    }
    if hi - lo == 1 {
        recorder.mark_sorted([lo]);
        return;
    }

    let pivot_index = hi - 1;
    let pivot = recorder.get(pivot_index);
    recorder.set_pivot(&[pivot_index]);

    let mut boundary = lo;
    for j in lo..pivot_index {
        recorder.compare(&[j, pivot_index]);
        if recorder.get(j) < pivot {
            if boundary != j {
                recorder.swap(boundary, j);
            }
            boundary += 1;
        }
    }
    if boundary != pivot_index {
        recorder.swap(boundary, pivot_index);
    }

    recorder.clear_pivot();
    recorder.mark_sorted([boundary]);

    sort_range(recorder, lo, boundary);
    sort_range(recorder, boundary + 1, hi);
}
