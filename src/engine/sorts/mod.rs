//! Step generators, one module per algorithm
//!
//! Each module exposes a single `generate` function taking the input
//! slice and returning the full step history.  All generators share the
//! recorder conventions: a clean starting frame, deep-copied snapshots,
//! a monotonically growing sorted set, and a terminal frame with every
//! position marked.
//!
//! Ordering is numeric ascending throughout.  Bubble, insertion, and
//! merge are stable; the others are not and make no stability promise.

use crate::engine::recorder::StepRecorder;

pub mod bubble;
pub mod bucket;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

/// Rearrange the slots `lo..hi` of the working array into the order given
/// by `desired[lo..hi]`, recording one placement frame per slot.
///
/// `desired` must hold a permutation of the working array over `lo..hi`.
/// Each slot takes the first matching value at or after it, moved in by
/// rotation, so equal elements keep their relative order and every frame
/// stays a permutation of the input.  Used by the distribution sorts for
/// their write-back passes.
fn settle_range(recorder: &mut StepRecorder, desired: &[i64], lo: usize, hi: usize) {
    for out in lo..hi {
        let mut src = out;
        while recorder.get(src) != desired[out] {
            src += 1;
        }
        if src == out {
            recorder.select(&[out]);
        } else {
            recorder.rotate_into(out, src);
        }
    }
}
