// Cross-algorithm invariant tests for the step-generation engine

use std::collections::HashSet;

use sortty::engine::Algorithm;

const CASES: &[&[i64]] = &[
    &[],
    &[7],
    &[5, 3, 8, 1],
    &[9, 1],
    &[2, 2, 2],
    &[1, 2, 3, 4, 5],
    &[5, 4, 3, 2, 1],
    &[-3, 12, 0, -3, 7, 5],
    &[10, -10, 0, 10, -10],
    &[64, 25, 12, 22, 11, 90, 64, 1, 0, 33],
];

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

#[test]
fn final_step_is_sorted_and_fully_marked() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let steps = algorithm.generate(input);
            assert!(
                !steps.is_empty(),
                "{} produced an empty history for {:?}",
                algorithm.name(),
                input
            );

            let last = steps.last().unwrap();
            assert_eq!(
                last.array,
                sorted_copy(input),
                "{} did not sort {:?}",
                algorithm.name(),
                input
            );
            let full_range: Vec<usize> = (0..input.len()).collect();
            assert_eq!(
                last.sorted,
                full_range,
                "{} left unmarked indices for {:?}",
                algorithm.name(),
                input
            );
            assert!(
                last.comparing.is_empty() && last.selected.is_empty() && last.pivot.is_empty(),
                "{} left scan marks in the terminal step for {:?}",
                algorithm.name(),
                input
            );
        }
    }
}

#[test]
fn first_step_is_a_clean_input_frame() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let steps = algorithm.generate(input);
            let first = &steps[0];
            assert_eq!(
                first.array,
                input,
                "{} altered the input in its first step",
                algorithm.name()
            );
            assert!(
                first.comparing.is_empty()
                    && first.selected.is_empty()
                    && first.pivot.is_empty()
                    && (first.sorted.is_empty() || input.is_empty()),
                "{} marked indices in its first step for {:?}",
                algorithm.name(),
                input
            );
        }
    }
}

#[test]
fn sorted_marks_only_grow() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let steps = algorithm.generate(input);
            for pair in steps.windows(2) {
                let previous: HashSet<usize> = pair[0].sorted.iter().copied().collect();
                let next: HashSet<usize> = pair[1].sorted.iter().copied().collect();
                assert!(
                    previous.is_subset(&next),
                    "{} dropped sorted marks on {:?}: {:?} -> {:?}",
                    algorithm.name(),
                    input,
                    pair[0].sorted,
                    pair[1].sorted
                );
            }
        }
    }
}

#[test]
fn every_frame_is_a_permutation_of_the_input() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let expected = sorted_copy(input);
            let steps = algorithm.generate(input);
            for (index, step) in steps.iter().enumerate() {
                assert_eq!(
                    step.array.len(),
                    input.len(),
                    "{} changed the array length at step {} for {:?}",
                    algorithm.name(),
                    index,
                    input
                );
                assert_eq!(
                    sorted_copy(&step.array),
                    expected,
                    "{} invented or dropped values at step {} for {:?}",
                    algorithm.name(),
                    index,
                    input
                );
            }
        }
    }
}

#[test]
fn generators_are_deterministic() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let first_run = algorithm.generate(input);
            let second_run = algorithm.generate(input);
            assert_eq!(
                first_run,
                second_run,
                "{} produced differing histories for {:?}",
                algorithm.name(),
                input
            );
        }
    }
}

#[test]
fn index_sets_are_in_bounds_and_duplicate_free() {
    for algorithm in Algorithm::ALL {
        for &input in CASES {
            let steps = algorithm.generate(input);
            for (index, step) in steps.iter().enumerate() {
                let sets = [
                    ("comparing", &step.comparing),
                    ("selected", &step.selected),
                    ("sorted", &step.sorted),
                    ("pivot", &step.pivot),
                ];
                for (set_name, indices) in sets {
                    assert!(
                        indices.iter().all(|&i| i < input.len()),
                        "{} step {} has out-of-range {} indices {:?} for {:?}",
                        algorithm.name(),
                        index,
                        set_name,
                        indices,
                        input
                    );
                    let unique: HashSet<usize> = indices.iter().copied().collect();
                    assert_eq!(
                        unique.len(),
                        indices.len(),
                        "{} step {} has duplicate {} indices {:?}",
                        algorithm.name(),
                        index,
                        set_name,
                        indices
                    );
                }
            }
        }
    }
}

#[test]
fn empty_input_yields_a_single_trivial_step() {
    for algorithm in Algorithm::ALL {
        let steps = algorithm.generate(&[]);
        assert_eq!(
            steps.len(),
            1,
            "{} produced extra steps for an empty input",
            algorithm.name()
        );
        let only = &steps[0];
        assert!(only.array.is_empty());
        assert!(only.is_clean());
        assert!(only.is_terminal());
    }
}

#[test]
fn single_element_input_is_marked_sorted() {
    for algorithm in Algorithm::ALL {
        let steps = algorithm.generate(&[7]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![7]);
        assert_eq!(last.sorted, vec![0]);
    }
}
