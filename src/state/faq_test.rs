use super::*;

#[test]
fn all_entries_start_collapsed() {
    let state = FaqState::new(4);
    for index in 0..4 {
        assert!(!state.is_open(index));
    }
}

#[test]
fn toggle_flips_a_single_entry() {
    let mut state = FaqState::new(4);
    state.toggle(1);
    assert!(state.is_open(1));
    state.toggle(1);
    assert!(!state.is_open(1));
}

#[test]
fn entries_expand_independently() {
    let mut state = FaqState::new(4);
    state.toggle(0);
    state.toggle(2);
    assert!(state.is_open(0));
    assert!(!state.is_open(1));
    assert!(state.is_open(2));
    assert!(!state.is_open(3));
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut state = FaqState::new(2);
    state.toggle(5);
    assert_eq!(state, FaqState::new(2));
    assert!(!state.is_open(5));
}
