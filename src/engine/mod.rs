//! Step-generation engine
//!
//! This module provides the core step-generation logic:
//! - [`registry`]: the closed [`Algorithm`] set with metadata and dispatch
//! - [`sorts`]: one generator per algorithm
//! - [`recorder`]: the working-copy snapshot recorder driven by generators
//! - [`step`]: the [`SortingStep`] snapshot record
//! - [`stats`]: comparison/swap counters derived from a history
//! - [`input`]: command-line value parsing
//! - [`errors`]: engine error types
//!
//! # Generation model
//!
//! A generator clones the input into a private working copy and mutates
//! only that copy, emitting a deep-copied [`SortingStep`] frame at each
//! recorded instant.  Generation is eager and synchronous: the complete
//! history is returned before the caller resumes, and replaying it in
//! order reconstructs the algorithm's execution, ending in a fully
//! sorted, fully marked array.
//!
//! Generators are deterministic: the same input always produces the
//! structurally identical step sequence.

pub mod errors;
pub mod input;
pub mod recorder;
pub mod registry;
pub mod sorts;
pub mod stats;
pub mod step;

pub use errors::EngineError;
pub use registry::{Algorithm, AlgorithmInfo, Complexity};
pub use stats::RunStats;
pub use step::SortingStep;
