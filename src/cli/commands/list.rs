use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::repository::load_entries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::DailyEntry;
use crate::models::labels::{day_rating_label, energy_label};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::clock_label;
use std::collections::HashSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: only_today,
        details,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let dates = if *only_today {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };
        let wanted: HashSet<String> = dates.iter().map(|d| date::format_date(*d)).collect();

        let mut entries: Vec<DailyEntry> = load_entries(&pool)?
            .into_iter()
            .filter(|e| wanted.contains(&e.date))
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        if entries.is_empty() {
            println!("No entries for the selected period.");
            return Ok(());
        }

        if *details {
            for e in &entries {
                print_entry_details(e, cfg);
            }
        } else {
            print_entry_table(&entries, cfg);
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<chrono::NaiveDate>> {
    use chrono::Datelike;

    if let Some(p) = period {
        return date::generate_from_period(p).map_err(AppError::InvalidPeriod);
    }

    let today = date::today();
    Ok(date::all_days_of_month(today.year(), today.month()))
}

fn print_entry_table(entries: &[DailyEntry], cfg: &Config) {
    let mut table = Table::new(vec![
        Column {
            header: "Date".to_string(),
            width: 12,
        },
        Column {
            header: "Rating".to_string(),
            width: 12,
        },
        Column {
            header: "Energy".to_string(),
            width: 8,
        },
        Column {
            header: "Done".to_string(),
            width: 6,
        },
        Column {
            header: "Challenges".to_string(),
            width: 10,
        },
        Column {
            header: "Notes".to_string(),
            width: 5,
        },
    ]);

    for e in entries {
        let date_cell = if cfg.show_weekday {
            match date::weekday_name(&e.date) {
                Some(w) => format!("{} {}", e.date, &w[..3.min(w.len())]),
                None => e.date.clone(),
            }
        } else {
            e.date.clone()
        };

        table.add_row(vec![
            date_cell,
            format!("{} {}", e.day_rating, day_rating_label(e.day_rating)),
            e.average_energy_level()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
            e.accomplishments.len().to_string(),
            e.challenges.len().to_string(),
            if e.notes.is_empty() { "-" } else { "yes" }.to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn print_entry_details(e: &DailyEntry, cfg: &Config) {
    println!("\n=== {} ===", e.date);
    println!(
        "How was your day: {} ({})",
        day_rating_label(e.day_rating),
        e.day_rating
    );

    if !e.energy_logs.is_empty() {
        println!("Energy samples:");
        for log in &e.energy_logs {
            println!(
                "  {} {} | {}",
                cfg.separator_char,
                clock_label(&log.timestamp),
                energy_label(log.level)
            );
        }
    }

    if !e.accomplishments.is_empty() {
        println!("Accomplishments:");
        for item in &e.accomplishments {
            println!("  {} {}", cfg.separator_char, item);
        }
    }

    if !e.challenges.is_empty() {
        println!("Challenges:");
        for item in &e.challenges {
            println!("  {} {}", cfg.separator_char, item);
        }
    }

    if !e.notes.is_empty() {
        println!("Notes: {}", e.notes);
    }
}
