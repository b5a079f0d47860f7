// Per-algorithm scenario tests for the step generators

use sortty::engine::{Algorithm, RunStats};

#[test]
fn bubble_replays_the_classic_example() {
    let steps = Algorithm::Bubble.generate(&[5, 3, 8, 1]);

    // Clean starting frame over the unmodified input.
    assert_eq!(steps[0].array, vec![5, 3, 8, 1]);
    assert!(steps[0].is_clean());

    // First pass: compare (0,1), then swap it.
    assert_eq!(steps[1].comparing, vec![0, 1]);
    assert!(steps[1].selected.is_empty());
    assert_eq!(steps[2].array, vec![3, 5, 8, 1]);
    assert_eq!(steps[2].selected, vec![0, 1]);

    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 3, 5, 8]);
    assert_eq!(last.sorted, vec![0, 1, 2, 3]);
    assert!(last.comparing.is_empty() && last.selected.is_empty() && last.pivot.is_empty());
}

#[test]
fn bubble_stats_match_a_hand_checked_run() {
    // [5,3,8,1]: passes compare 3+2+1 pairs and swap 2+1+1 times.
    let steps = Algorithm::Bubble.generate(&[5, 3, 8, 1]);
    let stats = RunStats::from_steps(&steps);
    assert_eq!(stats.comparisons, 6);
    assert_eq!(stats.swaps, 4);
}

#[test]
fn quick_records_the_last_element_as_first_pivot() {
    let steps = Algorithm::Quick.generate(&[9, 1]);
    let first_pivot = steps
        .iter()
        .find(|step| !step.pivot.is_empty())
        .expect("quick never recorded a pivot");
    assert_eq!(first_pivot.pivot, vec![1]);

    let steps = Algorithm::Quick.generate(&[3, 1, 2]);
    let first_pivot = steps
        .iter()
        .find(|step| !step.pivot.is_empty())
        .expect("quick never recorded a pivot");
    assert_eq!(first_pivot.pivot, vec![2]);
}

#[test]
fn quick_keeps_the_pivot_visible_across_the_partition_scan() {
    let steps = Algorithm::Quick.generate(&[4, 2, 5, 1, 3]);
    // Every comparison of the first partition carries the pivot mark.
    let scan: Vec<_> = steps
        .iter()
        .filter(|step| !step.comparing.is_empty() && step.sorted.is_empty())
        .collect();
    assert!(!scan.is_empty());
    assert!(scan.iter().all(|step| step.pivot == vec![4]));
}

#[test]
fn selection_highlights_each_new_candidate_minimum() {
    let steps = Algorithm::Selection.generate(&[3, 1, 2]);
    // Scanning [3,1,2] from position 0 finds a new minimum at index 1.
    assert!(steps
        .iter()
        .any(|step| step.selected == vec![1] && step.array == vec![3, 1, 2]));

    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);
}

#[test]
fn insertion_marks_the_prefix_as_the_boundary_advances() {
    let steps = Algorithm::Insertion.generate(&[3, 1, 2]);
    assert!(steps.iter().any(|step| step.sorted == vec![0, 1]));

    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);
    assert_eq!(last.sorted, vec![0, 1, 2]);
}

#[test]
fn merge_marks_the_run_boundary_as_pivot() {
    let steps = Algorithm::Merge.generate(&[2, 1]);
    assert!(steps.iter().any(|step| step.pivot == vec![1]));

    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 2]);
}

#[test]
fn merge_is_stable_and_sorts_duplicates() {
    let steps = Algorithm::Merge.generate(&[2, 2, 1, 2]);
    assert_eq!(steps.last().unwrap().array, vec![1, 2, 2, 2]);
}

#[test]
fn heap_sorts_through_root_extractions() {
    let steps = Algorithm::Heap.generate(&[1, 3, 2]);
    let last = steps.last().unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);

    // The first extraction swaps the heap root to the back and marks it.
    assert!(steps
        .iter()
        .any(|step| step.selected == vec![0, 2] && step.array == vec![2, 1, 3]));
}

#[test]
fn radix_marks_nothing_before_the_terminal_frame() {
    let steps = Algorithm::Radix.generate(&[170, 45, 75, 90, 2, 802, 24, 66]);
    let (last, earlier) = steps.split_last().unwrap();
    assert!(earlier.iter().all(|step| step.sorted.is_empty()));
    assert_eq!(last.array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn radix_handles_negative_values() {
    let steps = Algorithm::Radix.generate(&[-5, 3, -1, 2]);
    assert_eq!(steps.last().unwrap().array, vec![-5, -1, 2, 3]);
}

#[test]
fn bucket_finalizes_regions_left_to_right() {
    let steps = Algorithm::Bucket.generate(&[42, 7, 19, 3]);
    // Sorted marks only ever cover a prefix of the array.
    for step in &steps {
        let prefix: Vec<usize> = (0..step.sorted.len()).collect();
        assert_eq!(step.sorted, prefix, "non-prefix sorted marks: {:?}", step);
    }
    assert_eq!(steps.last().unwrap().array, vec![3, 7, 19, 42]);
}

#[test]
fn bucket_anchors_each_bucket_start_as_pivot() {
    let steps = Algorithm::Bucket.generate(&[42, 7, 19, 3]);
    assert!(steps.iter().any(|step| step.pivot == vec![0]));
    assert!(steps.iter().any(|step| step.pivot == vec![2]));
}

#[test]
fn all_duplicate_input_stays_unchanged() {
    for algorithm in Algorithm::ALL {
        let steps = algorithm.generate(&[2, 2, 2]);
        let last = steps.last().unwrap();
        assert_eq!(
            last.array,
            vec![2, 2, 2],
            "{} disturbed an all-duplicate array",
            algorithm.name()
        );
        assert_eq!(last.sorted, vec![0, 1, 2]);
    }
}
