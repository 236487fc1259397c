use super::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================
// Month layout
// =============================================================

#[test]
fn leap_february_has_29_days_and_a_thursday_start() {
    let state = CalendarState::for_month_of(date(2024, 2, 10));
    assert_eq!(state.day_count(), 29);
    assert_eq!(state.leading_blanks(), 4);
    assert_eq!(state.days(date(2024, 2, 1)).len(), 29);
}

#[test]
fn non_leap_february_has_28_days() {
    let state = CalendarState::for_month_of(date(2025, 2, 1));
    assert_eq!(state.day_count(), 28);
}

#[test]
fn heading_is_month_name_and_year() {
    let state = CalendarState::for_month_of(date(2025, 3, 15));
    assert_eq!(state.heading(), "March 2025");
}

#[test]
fn day_cells_are_numbered_from_one() {
    let state = CalendarState::for_month_of(date(2025, 3, 1));
    let days = state.days(date(2025, 3, 1));
    assert_eq!(days.first().map(|c| c.day), Some(1));
    assert_eq!(days.last().map(|c| c.day), Some(31));
}

// =============================================================
// Past-date disabling
// =============================================================

#[test]
fn days_before_today_are_disabled() {
    let state = CalendarState::for_month_of(date(2025, 3, 1));
    let days = state.days(date(2025, 3, 15));

    assert!(days[13].disabled, "March 14 is in the past");
    assert!(!days[14].disabled, "March 15 is today and selectable");
    assert!(!days[30].disabled, "March 31 is in the future");
}

#[test]
fn a_fully_past_month_is_entirely_disabled() {
    let state = CalendarState::for_month_of(date(2025, 2, 1));
    assert!(state.days(date(2025, 3, 15)).iter().all(|c| c.disabled));
}

#[test]
fn a_future_month_is_entirely_selectable() {
    let state = CalendarState::for_month_of(date(2025, 4, 1));
    assert!(state.days(date(2025, 3, 15)).iter().all(|c| !c.disabled));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn january_wraps_to_december_of_the_previous_year() {
    let mut state = CalendarState::for_month_of(date(2025, 1, 20));
    state.prev_month();
    assert_eq!(state.month(), 12);
    assert_eq!(state.year(), 2024);
}

#[test]
fn december_wraps_to_january_of_the_next_year() {
    let mut state = CalendarState::for_month_of(date(2024, 12, 3));
    state.next_month();
    assert_eq!(state.month(), 1);
    assert_eq!(state.year(), 2025);
}

#[test]
fn prev_then_next_round_trips() {
    let mut state = CalendarState::for_month_of(date(2025, 6, 1));
    let start = state;
    state.prev_month();
    state.next_month();
    assert_eq!(state, start);
}

// =============================================================
// Date-input formatting
// =============================================================

#[test]
fn input_format_is_zero_padded_iso() {
    assert_eq!(format_input_date(date(2025, 3, 15)), "2025-03-15");
    assert_eq!(format_input_date(date(2026, 1, 5)), "2026-01-05");
}

#[test]
fn selecting_day_15_in_march_2025_yields_the_input_string() {
    let state = CalendarState::for_month_of(date(2025, 3, 1));
    let days = state.days(date(2025, 3, 1));
    let picked = days[14];
    assert_eq!(picked.day, 15);
    assert_eq!(format_input_date(picked.date), "2025-03-15");
}
