//! Time utilities: parsing HH:MM, RFC-3339 instants, fractional hours.

use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Current instant as RFC-3339 with the local offset.
pub fn now_rfc3339() -> String {
    chrono::Local::now().to_rfc3339()
}

/// Fractional hour-of-day (`hour + minute/60`) of an RFC-3339 timestamp,
/// read in the offset the timestamp itself carries. Falls back to a naive
/// "YYYY-MM-DDTHH:MM[:SS]" parse; None when nothing matches.
pub fn fractional_hour(timestamp: &str) -> Option<f64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.hour() as f64 + dt.minute() as f64 / 60.0);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.hour() as f64 + dt.minute() as f64 / 60.0);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") {
        return Some(dt.hour() as f64 + dt.minute() as f64 / 60.0);
    }
    None
}

/// "2:05 PM" style clock label for printed energy samples.
pub fn clock_label(timestamp: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%-I:%M %p").to_string();
    }
    timestamp.to_string()
}
