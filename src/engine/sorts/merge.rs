//! Merge sort generator
//!
//! Recursive divide, left half first.  Each merge marks the sub-range
//! boundary as the pivot anchor and compares the front elements of the
//! two runs.  When the front of the left run wins it is finalized where
//! it stands; when the front of the right run wins it rotates into the
//! output slot, shifting the left run right by one.  Rotation keeps every
//! frame a permutation of the input, which a buffered write-back would
//! not.  The merged range is marked sorted when the merge completes.

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
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(recorder, lo, mid);
    sort_range(recorder, mid, hi);
    merge(recorder, lo, mid, hi);
}

/// Merge the sorted runs `lo..mid` and `mid..hi` in place
fn merge(recorder: &mut StepRecorder, lo: usize, mid: usize, hi: usize) {
    recorder.set_pivot(&[mid]);

    // `left..right` is the remaining left run; `right..hi` the remaining
    // right run.  Both shift as right-run elements rotate in.
    let mut left = lo;
    let mut right = mid;

    while left < right && right < hi {
        recorder.compare(&[left, right]);
        // <= keeps equal elements in left-run order, which makes the
        // overall sort stable.
        if recorder.get(left) <= recorder.get(right) {
            recorder.select(&[left]);
            left += 1;
        } else {
            recorder.rotate_into(left, right);
            left += 1;
            right += 1;
        }
    }

    recorder.clear_pivot();
    recorder.mark_sorted(lo..hi);
}
