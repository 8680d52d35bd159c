use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::energy::energy_by_time_of_day;
use crate::core::calculator::monthly::monthly_summary;
use crate::core::calculator::stats::{self, TimeRange};
use crate::db::pool::DbPool;
use crate::db::repository::load_entries;
use crate::errors::AppResult;
use crate::models::labels::{DAY_RATING_LABELS, day_rating_label};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::date;
use crate::utils::formatting::{bar, days_word, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { range } = cmd {
        let range = (*range)
            .or_else(|| TimeRange::parse(&cfg.default_stats_range))
            .unwrap_or(TimeRange::Last30Days);

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&pool)?;

        if entries.is_empty() {
            println!("No entries yet. Start tracking your days to see statistics!");
            return Ok(());
        }

        let today = date::today();
        let stats = stats::compute(&entries, range, today);

        //
        // Stat cards
        //
        println!();
        header(format!("Statistics ({})", range.label()));
        println!(
            "{}• Total entries:{} {}",
            CYAN, RESET, stats.total_entries
        );
        println!(
            "{}• Current streak:{} {}{} {}{}",
            CYAN,
            RESET,
            GREEN,
            stats.streak,
            days_word(stats.streak),
            RESET
        );
        println!(
            "{}• Avg day rating:{} {:.1} ({})",
            CYAN,
            RESET,
            stats.avg_day_rating,
            day_rating_label(stats.avg_day_rating.round() as u8)
        );
        println!(
            "{}• Accomplishments:{} {} logged, {:.1} per day",
            CYAN,
            RESET,
            stats.total_accomplishments,
            stats.total_accomplishments as f64 / stats.total_entries.max(1) as f64
        );

        //
        // Rating distribution
        //
        println!();
        header("Day rating distribution");
        let max = stats.day_rating_distribution.iter().copied().max().unwrap_or(0);
        for (i, label) in DAY_RATING_LABELS.iter().enumerate() {
            let count = stats.day_rating_distribution[i];
            println!(
                "{} {} {}",
                pad_right(label, 10),
                pad_right(&bar(count, max, 24), 24),
                count
            );
        }

        //
        // Rating trend
        //
        if stats.day_rating_trend.len() > 1 {
            println!();
            header("Day rating trend");
            for point in &stats.day_rating_trend {
                println!(
                    "{} {} {}",
                    pad_right(&point.label, 7),
                    pad_right(&bar(point.day_rating as u32, 5, 10), 10),
                    day_rating_label(point.day_rating)
                );
            }
        }

        //
        // Energy by time of day
        //
        let buckets = energy_by_time_of_day(&stats.energy_samples);
        if !buckets.is_empty() {
            println!();
            header("Energy levels throughout the day");
            for b in &buckets {
                println!(
                    "{} {} {:.2} ({} samples)",
                    pad_right(b.name, 14),
                    pad_right(&bar(b.avg_level.round() as u32, 5, 10), 10),
                    b.avg_level,
                    b.count
                );
            }
            println!(
                "Based on {} logged energy samples.",
                stats.energy_samples.len()
            );
        }

        //
        // Monthly summary
        //
        if let Some(summary) = monthly_summary(&entries, today) {
            println!();
            header(format!("{} {} Summary", summary.emoji, summary.month));
            println!(
                "{}{:.1}{} avg rating ({}) based on {} days tracked",
                YELLOW, summary.avg_rating, RESET, summary.avg_label, summary.total_days
            );
            println!("{}", summary.message);
        }

        println!();
    }

    Ok(())
}
