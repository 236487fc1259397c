use super::*;

// =============================================================
// Breakpoints
// =============================================================

#[test]
fn per_view_breakpoints_are_inclusive() {
    assert_eq!(per_view_for_width(320.0), 1);
    assert_eq!(per_view_for_width(768.0), 1);
    assert_eq!(per_view_for_width(769.0), 2);
    assert_eq!(per_view_for_width(1024.0), 2);
    assert_eq!(per_view_for_width(1025.0), 3);
    assert_eq!(per_view_for_width(1920.0), 3);
}

// =============================================================
// Paging
// =============================================================

#[test]
fn starts_at_first_page() {
    let state = CarouselState::new(6, 1920.0);
    assert_eq!(state.index, 0);
    assert_eq!(state.per_view, 3);
    assert_eq!(state.max_index(), 3);
}

#[test]
fn next_saturates_at_the_last_page() {
    let mut state = CarouselState::new(6, 1920.0);
    for _ in 0..10 {
        state.next();
    }
    assert_eq!(state.index, state.max_index());
    let at_end = state;
    state.next();
    assert_eq!(state, at_end, "next past the end is idempotent");
}

#[test]
fn prev_saturates_at_the_first_page() {
    let mut state = CarouselState::new(6, 1920.0);
    state.prev();
    assert_eq!(state.index, 0);
    state.next();
    state.prev();
    assert_eq!(state.index, 0);
}

#[test]
fn fewer_items_than_per_view_pins_index_to_zero() {
    let mut state = CarouselState::new(2, 1920.0);
    assert_eq!(state.max_index(), 0);
    state.next();
    assert_eq!(state.index, 0);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_within_the_same_bucket_preserves_paging() {
    let mut state = CarouselState::new(6, 1920.0);
    state.next();
    state.next();
    assert!(!state.on_resize(1600.0));
    assert_eq!(state.index, 2);
    assert_eq!(state.per_view, 3);
}

#[test]
fn resize_across_a_breakpoint_resets_to_the_start() {
    let mut state = CarouselState::new(6, 1920.0);
    state.next();
    state.next();
    assert!(state.on_resize(700.0));
    assert_eq!(state.per_view, 1);
    assert_eq!(state.index, 0);
}

// =============================================================
// Layout
// =============================================================

#[test]
fn card_width_is_the_per_view_share() {
    let state = CarouselState::new(6, 700.0);
    assert!((state.card_width_percent() - 100.0).abs() < f64::EPSILON);

    let state = CarouselState::new(6, 1000.0);
    assert!((state.card_width_percent() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn track_offset_tracks_the_index() {
    let mut state = CarouselState::new(6, 1000.0);
    assert!((state.track_offset_percent() - 0.0).abs() < f64::EPSILON);
    state.next();
    assert!((state.track_offset_percent() - -50.0).abs() < f64::EPSILON);
    state.next();
    assert!((state.track_offset_percent() - -100.0).abs() < f64::EPSILON);
}
