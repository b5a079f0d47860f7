//! Bucket sort generator
//!
//! Partitions the value range into as many equal buckets as there are
//! elements.  Distribution records a compare frame per element; each
//! non-empty bucket is then settled into place in ascending bucket order
//! with its start slot anchored as the pivot, insertion-sorted in place,
//! and marked sorted.  Buckets cover disjoint ascending value ranges, so
//! positions finalize left to right.

use crate::engine::recorder::StepRecorder;
use crate::engine::sorts::settle_range;
use crate::engine::step::SortingStep;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    let min = *recorder.values().iter().min().unwrap_or(&0);
    let max = *recorder.values().iter().max().unwrap_or(&0);

    // Distribution pass.
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); n];
    for index in 0..n {
        recorder.compare(&[index]);
        let value = recorder.get(index);
        buckets[bucket_index(value, min, max, n)].push(value);
    }

    let desired: Vec<i64> = buckets.iter().flatten().copied().collect();

    // Settle each bucket's region and sort it in place.
    let mut start = 0;
    for bucket in &buckets {
        if bucket.is_empty() {
            continue;
        }
        let end = start + bucket.len();
        recorder.set_pivot(&[start]);

        settle_range(&mut recorder, &desired, start, end);

        // Insertion-style pass over the settled region.
        for i in start + 1..end {
            let mut j = i;
            while j > start {
                recorder.compare(&[j, j - 1]);
                if recorder.get(j) < recorder.get(j - 1) {
                    recorder.swap(j, j - 1);
                    j -= 1;
                } else {
                    break;
                }
            }
        }

        recorder.clear_pivot();
        recorder.mark_sorted(start..end);
        start = end;
    }

    recorder.finish()
}

/// Bucket for a value: `count` equal ranges over `[min, max]`.
/// Widened through i128 so extreme spans cannot overflow.
fn bucket_index(value: i64, min: i64, max: i64, count: usize) -> usize {
    if min == max {
        return 0;
    }
    let offset = value as i128 - min as i128;
    let span = max as i128 - min as i128;
    (offset * (count as i128 - 1) / span) as usize
}
