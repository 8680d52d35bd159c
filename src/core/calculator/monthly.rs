//! Qualitative summary of the current calendar month.

use crate::models::entry::DailyEntry;
use crate::models::labels::day_rating_label;
use crate::utils::date::month_label;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String, // "August 2026"
    pub avg_rating: f64,
    /// Label of the nearest-integer rating.
    pub avg_label: &'static str,
    pub total_days: usize,
    pub message: &'static str,
    pub emoji: &'static str,
}

/// Tier thresholds on the month's mean rating, best first.
fn classify(avg_rating: f64) -> (&'static str, &'static str) {
    if avg_rating >= 4.5 {
        (
            "Outstanding month! You've been consistently having great days. Keep up the excellent work!",
            "🌟",
        )
    } else if avg_rating >= 3.5 {
        (
            "Good month overall! You've had more positive days than challenging ones. Nice progress!",
            "😊",
        )
    } else if avg_rating >= 2.5 {
        (
            "A balanced month with ups and downs. Every day is a learning opportunity!",
            "💪",
        )
    } else if avg_rating >= 1.5 {
        (
            "A challenging month, but you kept showing up. That takes real strength!",
            "🌱",
        )
    } else {
        (
            "A tough month, but remember: difficult times don't last. Keep pushing forward!",
            "❤️",
        )
    }
}

/// Summary over the entries of `today`'s calendar month, or None when the
/// month has no entries yet.
pub fn monthly_summary(entries: &[DailyEntry], today: NaiveDate) -> Option<MonthlySummary> {
    let month_entries: Vec<&DailyEntry> = entries
        .iter()
        .filter(|e| {
            e.date_naive()
                .map(|d| d.year() == today.year() && d.month() == today.month())
                .unwrap_or(false)
        })
        .collect();

    if month_entries.is_empty() {
        return None;
    }

    let avg_rating = month_entries
        .iter()
        .map(|e| e.day_rating as f64)
        .sum::<f64>()
        / month_entries.len() as f64;

    let (message, emoji) = classify(avg_rating);

    Some(MonthlySummary {
        month: month_label(today.year(), today.month()),
        avg_rating,
        avg_label: day_rating_label(avg_rating.round() as u8),
        total_days: month_entries.len(),
        message,
        emoji,
    })
}
