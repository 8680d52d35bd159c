use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::info::{integrity_check, print_db_info, vacuum};
use crate::db::pool::DbPool;
use crate::db::repository::clear_all;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        info: show_info,
        check,
        vacuum: run_vacuum,
        clear,
        yes,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *show_info {
            print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            let result = integrity_check(&pool)?;
            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                warning(format!("Integrity check reported: {}", result));
            }
        }

        if *run_vacuum {
            vacuum(&pool)?;
            success("Database optimized (VACUUM).");
        }

        if *clear {
            if !*yes
                && !ask_confirmation(
                    "Delete ALL entries and settings? This action is irreversible.",
                )
            {
                info("Operation cancelled.");
                return Ok(());
            }
            clear_all(&pool)?;
            success("All data cleared.");
        }
    }

    Ok(())
}
