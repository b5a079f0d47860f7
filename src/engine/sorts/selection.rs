//! Selection sort generator
//!
//! For each position left to right, scans the remaining unsorted suffix
//! for its minimum, highlighting each new candidate, then swaps the
//! minimum into place and marks the position sorted.

use crate::engine::recorder::StepRecorder;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        recorder.select(&[i]);

        for j in i + 1..n {
            recorder.compare(&[min_index, j]);
            if recorder.get(j) < recorder.get(min_index) {
                min_index = j;
                recorder.select(&[min_index]);
            }
        }

        if min_index != i {
            recorder.swap(i, min_index);
        }
        recorder.mark_sorted([i]);
    }

    recorder.finish()
}
