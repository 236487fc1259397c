#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Local, Months, NaiveDate};

/// Weekday header labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A single day cell in the rendered month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    /// Past dates render inert; no click handler is attached.
    pub disabled: bool,
}

/// The month currently displayed by the booking date-picker.
///
/// Stored as the first day of the month, which keeps the navigation
/// arithmetic on `NaiveDate` and the fields always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarState {
    first: NaiveDate,
}

impl CalendarState {
    /// Open the picker on today's month.
    pub fn for_today() -> Self {
        Self::for_month_of(Local::now().date_naive())
    }

    pub fn for_month_of(date: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self { first }
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// "March 2025"-style heading for the displayed month.
    pub fn heading(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Step to the previous month, wrapping January into December of the
    /// prior year. Saturates at the edge of chrono's representable range.
    pub fn prev_month(&mut self) {
        if let Some(first) = self.first.checked_sub_months(Months::new(1)) {
            self.first = first;
        }
    }

    /// Step to the next month, wrapping December into January of the next
    /// year. Saturates at the edge of chrono's representable range.
    pub fn next_month(&mut self) {
        if let Some(first) = self.first.checked_add_months(Months::new(1)) {
            self.first = first;
        }
    }

    /// Blank grid cells before day 1: the weekday index of the first of the
    /// month, with Sunday as 0.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Days in the displayed month, leap-aware.
    pub fn day_count(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next_first| next_first.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// One cell per day of the month. A day is disabled iff its date is
    /// strictly before `today` (time-truncated by construction).
    pub fn days(&self, today: NaiveDate) -> Vec<CalendarDay> {
        (1..=self.day_count())
            .filter_map(|day| {
                NaiveDate::from_ymd_opt(self.year(), self.month(), day).map(|date| CalendarDay {
                    day,
                    date,
                    disabled: date < today,
                })
            })
            .collect()
    }
}

/// Zero-padded `YYYY-MM-DD`, the native date-input value format.
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
