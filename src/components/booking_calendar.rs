//! Hand-rolled month calendar bound to the booking date input.

use chrono::Local;
use leptos::prelude::*;

use crate::state::calendar::{CalendarState, WEEKDAY_LABELS, format_input_date};

/// Month-grid date picker. Clicking a selectable day writes `YYYY-MM-DD`
/// into `date`, the same value format the native date input uses.
#[component]
pub fn BookingCalendar(date: RwSignal<String>) -> impl IntoView {
    let calendar = RwSignal::new(CalendarState::for_today());

    // The picker sits inside the booking form; keep the nav buttons from
    // submitting it.
    let on_prev = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        calendar.update(CalendarState::prev_month);
    };
    let on_next = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        calendar.update(CalendarState::next_month);
    };

    let heading = move || calendar.get().heading();

    view! {
        <div class="booking-calendar">
            <div class="booking-calendar__header">
                <button class="prev-month" aria-label="Previous month" on:click=on_prev>
                    "\u{2190}"
                </button>
                <span class="current-month">{heading}</span>
                <button class="next-month" aria-label="Next month" on:click=on_next>
                    "\u{2192}"
                </button>
            </div>
            <div class="calendar-grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="calendar-day-label">{*label}</div> })
                    .collect::<Vec<_>>()}
                {move || {
                    let state = calendar.get();
                    let today = Local::now().date_naive();
                    let mut cells = Vec::new();
                    for _ in 0..state.leading_blanks() {
                        cells.push(view! { <div class="calendar-day empty"></div> }.into_any());
                    }
                    for cell in state.days(today) {
                        if cell.disabled {
                            cells.push(
                                view! {
                                    <div class="calendar-day disabled">{cell.day.to_string()}</div>
                                }
                                    .into_any(),
                            );
                        } else {
                            let on_pick = move |_| date.set(format_input_date(cell.date));
                            cells.push(
                                view! {
                                    <div class="calendar-day" on:click=on_pick>
                                        {cell.day.to_string()}
                                    </div>
                                }
                                    .into_any(),
                            );
                        }
                    }
                    cells
                }}
            </div>
        </div>
    }
}
