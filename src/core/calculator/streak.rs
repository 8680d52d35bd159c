//! Consecutive-day streak, anchored at the reference date.

use crate::models::entry::DailyEntry;
use crate::utils::date::format_date;
use chrono::NaiveDate;

/// Length of the run of consecutive days with an entry, counting backward
/// from `today`. `today` itself must have an entry for the streak to be
/// nonzero; the first gap stops the count. Dates are unique per the
/// repository invariant, so each cursor position matches at most once.
pub fn current_streak(entries: &[DailyEntry], today: NaiveDate) -> u32 {
    let mut sorted: Vec<&DailyEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut cursor = today;

    for entry in sorted {
        let cursor_str = format_date(cursor);

        if entry.date == cursor_str {
            streak += 1;
            match cursor.pred_opt() {
                Some(prev) => cursor = prev,
                None => break,
            }
        } else if entry.date.as_str() < cursor_str.as_str() {
            // gap: no entry for the cursor day
            break;
        }
        // entries dated after the cursor (future-dated) are skipped
    }

    streak
}
