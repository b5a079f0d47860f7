//! Radix sort generator
//!
//! Least-significant-digit radix sort, base 10.  Digits are taken from
//! keys shifted by the array minimum (`key = value - min`), which makes
//! negative inputs valid without a separate sign pass.  Each digit pass
//! records a compare frame per element as its digit is extracted, then
//! one placement frame per slot as the array settles into bucket order.
//! No index is marked sorted until the terminal frame: order is not
//! final until every digit has been processed.

use crate::engine::recorder::StepRecorder;
use crate::engine::sorts::settle_range;
use crate::engine::step::SortingStep;

const BASE: u64 = 10;

pub fn generate(input: &[i64]) -> Vec<SortingStep> {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();
    if n < 2 {
        return recorder.finish();
    }

    let min = *recorder.values().iter().min().unwrap_or(&0);
    let max_key = recorder
        .values()
        .iter()
        .map(|&value| shifted_key(value, min))
        .max()
        .unwrap_or(0);

    let mut exp: u64 = 1;
    loop {
        // Digit extraction: bucket every element by its current digit.
        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); BASE as usize];
        for index in 0..n {
            recorder.compare(&[index]);
            let value = recorder.get(index);
            let digit = (shifted_key(value, min) / exp % BASE) as usize;
            buckets[digit].push(value);
        }

        // Write-back: settle the array into stable bucket order.
        let desired: Vec<i64> = buckets.into_iter().flatten().collect();
        settle_range(&mut recorder, &desired, 0, n);

        if max_key / exp < BASE {
            break;
        }
        exp *= BASE;
    }

    recorder.finish()
}

/// Non-negative sort key for a value, shifted by the array minimum.
/// Widened through i128 so extreme spans cannot overflow.
fn shifted_key(value: i64, min: i64) -> u64 {
    (value as i128 - min as i128) as u64
}
