//! Algorithm registry
//!
//! This module defines [`Algorithm`], the closed set of the eight supported
//! sorting algorithms, together with the descriptive [`AlgorithmInfo`]
//! metadata shown in the UI and the dispatch from a variant to its
//! generator function.
//!
//! The set is fixed, so dispatch is an exhaustive match rather than a
//! dynamic lookup table: adding a variant without wiring its metadata and
//! generator fails at compile time.  Lookup by name is total over the
//! eight identifiers and rejects everything else with
//! [`EngineError::UnknownAlgorithm`]; there is no fallback default.

use crate::engine::errors::EngineError;
use crate::engine::sorts;
use crate::engine::step::SortingStep;

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
}

/// Complexity labels for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// Descriptive metadata for one algorithm, purely informational
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Identifier used on the command line
    pub name: &'static str,

    /// Human-readable name
    pub display_name: &'static str,

    /// Free-text description shown in the info pane
    pub description: &'static str,

    /// Time/space complexity labels
    pub complexity: Complexity,
}

impl Algorithm {
    /// All algorithms, in the order shown by usage listings
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    /// Resolve an identifier to its algorithm.
    ///
    /// Matching is case-insensitive; anything outside the supported set
    /// is rejected.
    pub fn from_name(name: &str) -> Result<Algorithm, EngineError> {
        match name.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "radix" => Ok(Algorithm::Radix),
            "bucket" => Ok(Algorithm::Bucket),
            _ => Err(EngineError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Identifier for this algorithm
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Descriptive metadata for this algorithm
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Bubble => &BUBBLE_INFO,
            Algorithm::Selection => &SELECTION_INFO,
            Algorithm::Insertion => &INSERTION_INFO,
            Algorithm::Merge => &MERGE_INFO,
            Algorithm::Quick => &QUICK_INFO,
            Algorithm::Heap => &HEAP_INFO,
            Algorithm::Radix => &RADIX_INFO,
            Algorithm::Bucket => &BUCKET_INFO,
        }
    }

    /// Run this algorithm's generator over `input`, producing the full
    /// step history
    pub fn generate(self, input: &[i64]) -> Vec<SortingStep> {
        match self {
            Algorithm::Bubble => sorts::bubble::generate(input),
            Algorithm::Selection => sorts::selection::generate(input),
            Algorithm::Insertion => sorts::insertion::generate(input),
            Algorithm::Merge => sorts::merge::generate(input),
            Algorithm::Quick => sorts::quick::generate(input),
            Algorithm::Heap => sorts::heap::generate(input),
            Algorithm::Radix => sorts::radix::generate(input),
            Algorithm::Bucket => sorts::bucket::generate(input),
        }
    }
}

static BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "bubble",
    display_name: "Bubble Sort",
    description: "Repeatedly steps through the list, comparing adjacent \
                  elements and swapping them if they are out of order. \
                  Each pass bubbles the largest unsorted element to the \
                  end; the scan stops early once a pass makes no swap.",
    complexity: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
};

static SELECTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "selection",
    display_name: "Selection Sort",
    description: "Scans the unsorted suffix for its minimum and swaps it \
                  into the next position. Exactly one swap per position, \
                  at the cost of a full scan each time.",
    complexity: Complexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
};

static INSERTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "insertion",
    display_name: "Insertion Sort",
    description: "Grows a sorted prefix one element at a time, shifting \
                  larger elements rightward until the picked-up element \
                  finds its slot. Stable, and fast on nearly-sorted input.",
    complexity: Complexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
        space: "O(1)",
    },
};

static MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "merge",
    display_name: "Merge Sort",
    description: "Recursively splits the array in half, then merges the \
                  sorted halves by repeatedly taking the smaller front \
                  element. Stable, with guaranteed n log n comparisons.",
    complexity: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
        space: "O(n)",
    },
};

static QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "quick",
    display_name: "Quick Sort",
    description: "Partitions around a pivot (the last element of the \
                  active range), placing smaller elements to its left, \
                  then recurses on both sides. The pivot lands in its \
                  final position after every partition.",
    complexity: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
        space: "O(log n)",
    },
};

static HEAP_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "heap",
    display_name: "Heap Sort",
    description: "Builds a max-heap over the array, then repeatedly swaps \
                  the root with the last unsorted element and sifts the \
                  new root down the shrunken heap.",
    complexity: Complexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
        space: "O(1)",
    },
};

static RADIX_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "radix",
    display_name: "Radix Sort",
    description: "Distributes elements into ten digit buckets, least \
                  significant digit first, rewriting the array after each \
                  pass. No element comparisons at all; order is only \
                  final once every digit has been processed.",
    complexity: Complexity {
        best: "O(nk)",
        average: "O(nk)",
        worst: "O(nk)",
        space: "O(n + k)",
    },
};

static BUCKET_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "bucket",
    display_name: "Bucket Sort",
    description: "Partitions the value range into equal buckets, drops \
                  each element into its bucket, insertion-sorts each \
                  bucket in place, and concatenates them in order.",
    complexity: Complexity {
        best: "O(n + k)",
        average: "O(n + k)",
        worst: "O(n²)",
        space: "O(n)",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for algorithm in Algorithm::ALL {
            let resolved = Algorithm::from_name(algorithm.name())
                .expect("registry name failed to resolve");
            assert_eq!(resolved, algorithm);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Algorithm::from_name("BUBBLE"), Ok(Algorithm::Bubble));
        assert_eq!(Algorithm::from_name("Quick"), Ok(Algorithm::Quick));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = Algorithm::from_name("bogo").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownAlgorithm {
                name: "bogo".to_string()
            }
        );
    }

    #[test]
    fn info_tables_are_populated() {
        for algorithm in Algorithm::ALL {
            let info = algorithm.info();
            assert!(!info.display_name.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.complexity.average.is_empty());
            assert!(!info.complexity.space.is_empty());
        }
    }
}
