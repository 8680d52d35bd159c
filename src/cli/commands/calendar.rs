use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::calendar::month_grid;
use crate::db::pool::DbPool;
use crate::db::repository::load_entries;
use crate::errors::{AppError, AppResult};
use crate::models::labels::DAY_RATING_LABELS;
use crate::utils::colors::{GREY, RATING_COLORS, RESET, color_for_rating};
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::Datelike;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let today = date::today();

        let (year, m) = match month {
            Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidPeriod(s.clone()))?,
            None => (today.year(), today.month()),
        };

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries(&pool)?;

        let cells = month_grid(year, m, &entries);
        let today_str = date::format_date(today);

        //
        // Header
        //
        println!();
        println!("{:^28}", bold(&date::month_label(year, m)));
        for wd in WEEKDAYS {
            print!("{:>4}", wd);
        }
        println!();

        //
        // Grid, 7 cells per row
        //
        for (i, cell) in cells.iter().enumerate() {
            match cell {
                None => print!("    "),
                Some(c) => {
                    let day = format!("{:>3}", c.day);
                    if c.date == today_str {
                        print!("{}", bold(&day));
                    } else if c.is_future(&today_str) {
                        print!("{}{}{}", GREY, day, RESET);
                    } else {
                        print!("{}", day);
                    }

                    match &c.entry {
                        Some(e) => print!("{}●{}", color_for_rating(e.day_rating), RESET),
                        None => print!(" "),
                    }
                }
            }
            if (i + 1) % 7 == 0 {
                println!();
            }
        }
        if cells.len() % 7 != 0 {
            println!();
        }

        //
        // Legend
        //
        println!();
        for (i, label) in DAY_RATING_LABELS.iter().enumerate() {
            print!("{}●{} {}  ", RATING_COLORS[i], RESET, label);
        }
        println!();
    }

    Ok(())
}
