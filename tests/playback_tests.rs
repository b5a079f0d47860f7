// Tests for step history navigation

use sortty::engine::Algorithm;
use sortty::playback::Playback;

fn bubble_playback() -> Playback {
    Playback::new(Algorithm::Bubble.generate(&[5, 3, 8, 1]))
}

#[test]
fn starts_at_the_first_step() {
    let playback = bubble_playback();
    assert_eq!(playback.position(), 0);
    assert!(playback.is_at_start());
    assert!(!playback.is_at_end());
    assert_eq!(playback.current().unwrap().array, vec![5, 3, 8, 1]);
}

#[test]
fn steps_forward_to_the_end_and_clamps() {
    let mut playback = bubble_playback();
    let total = playback.len();

    let mut forward_steps = 0;
    while playback.step_forward() {
        forward_steps += 1;
    }
    assert_eq!(forward_steps, total - 1);
    assert!(playback.is_at_end());
    assert_eq!(playback.position(), total - 1);

    // Further forward steps are refused at the end.
    assert!(!playback.step_forward());
    assert_eq!(playback.position(), total - 1);
    assert_eq!(playback.current().unwrap().array, vec![1, 3, 5, 8]);
}

#[test]
fn steps_backward_to_the_start_and_clamps() {
    let mut playback = bubble_playback();
    assert!(!playback.step_backward());

    playback.jump_to_end();
    let mut backward_steps = 0;
    while playback.step_backward() {
        backward_steps += 1;
    }
    assert_eq!(backward_steps, playback.len() - 1);
    assert!(playback.is_at_start());
}

#[test]
fn jump_and_rewind_move_to_the_boundaries() {
    let mut playback = bubble_playback();
    playback.jump_to_end();
    assert!(playback.is_at_end());
    assert!(playback.current().unwrap().is_terminal());

    playback.rewind_to_start();
    assert!(playback.is_at_start());
    assert!(playback.current().unwrap().is_clean());
}

#[test]
fn steps_so_far_tracks_the_cursor() {
    let mut playback = bubble_playback();
    assert_eq!(playback.steps_so_far().len(), 1);

    playback.step_forward();
    playback.step_forward();
    assert_eq!(playback.steps_so_far().len(), 3);

    playback.jump_to_end();
    assert_eq!(playback.steps_so_far().len(), playback.len());
}

#[test]
fn single_step_history_is_both_start_and_end() {
    let mut playback = Playback::new(Algorithm::Merge.generate(&[]));
    assert_eq!(playback.len(), 1);
    assert!(playback.is_at_start());
    assert!(playback.is_at_end());
    assert!(!playback.step_forward());
    assert!(!playback.step_backward());
}
