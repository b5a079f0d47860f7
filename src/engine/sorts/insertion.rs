//! Insertion sort generator
//!
//! Grows a sorted prefix: each new element is picked up, compared leftward
//! against the prefix, and swapped down until it is no smaller than its
//! left neighbor.  The prefix boundary advances after every insertion and
//! everything left of it is marked sorted.

use crate::engine::recorder::StepRecorder;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    for i in 1..n {
        recorder.select(&[i]);

        let mut j = i;
        while j > 0 {
            recorder.compare(&[j, j - 1]);
            if recorder.get(j) < recorder.get(j - 1) {
                recorder.swap(j, j - 1);
                j -= 1;
            } else {
                break;
            }
        }

        recorder.mark_sorted(0..=i);
    }

    recorder.finish()
}
