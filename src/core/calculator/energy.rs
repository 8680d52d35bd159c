//! Time-of-day bucketing of energy samples.

use crate::core::calculator::stats::EnergySample;

/// Fixed local-time buckets, half-open on the fractional hour. Hours
/// before 05:00 fall in no bucket and the sample is dropped.
const TIME_BUCKETS: [(&str, f64, f64); 5] = [
    ("Early Morning", 5.0, 8.0),
    ("Morning", 8.0, 12.0),
    ("Afternoon", 12.0, 17.0),
    ("Evening", 17.0, 21.0),
    ("Night", 21.0, 24.0),
];

/// Average energy per non-empty bucket; empty buckets are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBucket {
    pub name: &'static str,
    /// Mean level, rounded to 2 decimal places.
    pub avg_level: f64,
    pub count: usize,
}

pub fn energy_by_time_of_day(samples: &[EnergySample]) -> Vec<EnergyBucket> {
    let mut totals = [(0u32, 0usize); 5];

    for sample in samples {
        let bucket = TIME_BUCKETS
            .iter()
            .position(|(_, start, end)| sample.hour >= *start && sample.hour < *end);
        if let Some(i) = bucket {
            totals[i].0 += sample.level as u32;
            totals[i].1 += 1;
        }
    }

    TIME_BUCKETS
        .iter()
        .zip(totals.iter())
        .filter(|(_, (_, count))| *count > 0)
        .map(|(&(name, _, _), &(total, count))| EnergyBucket {
            name,
            avg_level: round2(total as f64 / count as f64),
            count,
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
