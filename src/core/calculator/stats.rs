//! Range-filtered summary statistics for the stats view.

use crate::core::calculator::streak::current_streak;
use crate::models::entry::DailyEntry;
use crate::utils::date::{format_date, short_day_label};
use crate::utils::time::fractional_hour;
use chrono::{Days, NaiveDate};
use clap::ValueEnum;

/// User-chosen lookback window for the stats view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeRange {
    #[value(name = "7d")]
    Last7Days,
    #[value(name = "30d")]
    Last30Days,
    #[value(name = "90d")]
    Last90Days,
    #[value(name = "all")]
    AllTime,
}

impl TimeRange {
    pub fn window_days(&self) -> Option<u64> {
        match self {
            TimeRange::Last7Days => Some(7),
            TimeRange::Last30Days => Some(30),
            TimeRange::Last90Days => Some(90),
            TimeRange::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "last 7 days",
            TimeRange::Last30Days => "last 30 days",
            TimeRange::Last90Days => "last 90 days",
            TimeRange::AllTime => "all time",
        }
    }

    /// Parse a config-file value like "30d" / "all".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "7d" => Some(TimeRange::Last7Days),
            "30d" => Some(TimeRange::Last30Days),
            "90d" => Some(TimeRange::Last90Days),
            "all" => Some(TimeRange::AllTime),
            _ => None,
        }
    }
}

/// One point of the rating trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String, // "Aug 7"
    pub day_rating: u8,
}

/// One energy sample annotated with its fractional local hour-of-day and
/// owning entry's date.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySample {
    pub hour: f64,
    pub level: u8,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub range: TimeRange,
    pub total_entries: usize,
    pub avg_day_rating: f64,
    pub total_accomplishments: usize,
    /// Always computed over the unfiltered collection; the range selector
    /// must not affect the streak.
    pub streak: u32,
    /// Count per rating value, in label order (Terrible..Amazing).
    pub day_rating_distribution: [u32; 5],
    /// Ascending by date, capped to the last 14 entries of the window.
    pub day_rating_trend: Vec<TrendPoint>,
    pub energy_samples: Vec<EnergySample>,
}

/// Entries whose date falls inside the lookback window ending at `today`.
/// The cutoff is pure calendar-day arithmetic, unaffected by time-of-day.
pub fn filter_by_range<'a>(
    entries: &'a [DailyEntry],
    range: TimeRange,
    today: NaiveDate,
) -> Vec<&'a DailyEntry> {
    let Some(days) = range.window_days() else {
        return entries.iter().collect();
    };

    let cutoff = today
        .checked_sub_days(Days::new(days))
        .map(format_date)
        .unwrap_or_default();

    entries.iter().filter(|e| e.date >= cutoff).collect()
}

/// Compute every stats-view metric over the filtered window. An empty
/// window produces zeroed/empty outputs, never an error.
pub fn compute(entries: &[DailyEntry], range: TimeRange, today: NaiveDate) -> Stats {
    let filtered = filter_by_range(entries, range, today);

    let total_entries = filtered.len();

    let avg_day_rating = if filtered.is_empty() {
        0.0
    } else {
        filtered.iter().map(|e| e.day_rating as f64).sum::<f64>() / filtered.len() as f64
    };

    let total_accomplishments = filtered.iter().map(|e| e.accomplishments.len()).sum();

    let mut day_rating_distribution = [0u32; 5];
    for e in &filtered {
        let idx = (e.day_rating as usize).wrapping_sub(1);
        if let Some(slot) = day_rating_distribution.get_mut(idx) {
            *slot += 1;
        }
    }

    let mut ascending: Vec<&DailyEntry> = filtered.clone();
    ascending.sort_by(|a, b| a.date.cmp(&b.date));

    let day_rating_trend = ascending
        .iter()
        .rev()
        .take(14)
        .rev()
        .map(|e| TrendPoint {
            label: short_day_label(&e.date),
            day_rating: e.day_rating,
        })
        .collect();

    let mut energy_samples = Vec::new();
    for e in &filtered {
        for log in &e.energy_logs {
            // samples with an unreadable timestamp are skipped, not fatal
            if let Some(hour) = fractional_hour(&log.timestamp) {
                energy_samples.push(EnergySample {
                    hour,
                    level: log.level,
                    date: e.date.clone(),
                });
            }
        }
    }

    Stats {
        range,
        total_entries,
        avg_day_rating,
        total_accomplishments,
        streak: current_streak(entries, today),
        day_rating_distribution,
        day_rating_trend,
        energy_samples,
    }
}
