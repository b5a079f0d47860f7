//! # Introduction
//!
//! sortty animates sorting algorithms in the terminal.  A selected algorithm
//! is run once over the input values, recording a full step-by-step history
//! of its execution.  The history is then navigated forward and backward
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input values → Generator → Step history → Playback → TUI
//! ```
//!
//! 1. [`engine`] — the step-generation engine: eight deterministic
//!    generators (bubble, selection, insertion, merge, quick, heap, radix,
//!    bucket), each producing an ordered sequence of
//!    [`engine::SortingStep`] snapshots, plus the [`engine::Algorithm`]
//!    registry resolving identifiers to metadata and generator functions.
//! 2. [`playback`] — a forward/backward cursor over a generated history.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Comparison sorts: bubble, selection, insertion, merge, quick, heap.
//! Distribution sorts: radix (LSD, base 10), bucket.
//! All orderings are numeric ascending over `i64` values.

pub mod engine;
pub mod playback;
pub mod ui;
