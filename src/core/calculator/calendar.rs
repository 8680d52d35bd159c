//! Month grid projection for the calendar view.

use crate::models::entry::DailyEntry;
use crate::utils::date::{date_string, days_in_month, first_weekday_of_month};

/// One day of the month, with the entry recorded for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub entry: Option<DailyEntry>,
}

impl DayCell {
    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }

    /// Fixed-width date strings make this a plain string comparison.
    pub fn is_future(&self, today: &str) -> bool {
        self.date.as_str() > today
    }
}

/// Project a month onto a Sunday-first calendar grid: `None` cells pad up
/// to the weekday of the 1st, then one cell per day of the month. No
/// trailing padding.
pub fn month_grid(year: i32, month: u32, entries: &[DailyEntry]) -> Vec<Option<DayCell>> {
    let leading = first_weekday_of_month(year, month);
    let days = days_in_month(year, month);

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity((leading + days) as usize);

    for _ in 0..leading {
        cells.push(None);
    }

    for day in 1..=days {
        let date = date_string(year, month, day);
        let entry = entries.iter().find(|e| e.date == date).cloned();
        cells.push(Some(DayCell { day, date, entry }));
    }

    cells
}
