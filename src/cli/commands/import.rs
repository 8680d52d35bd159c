use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::normalize;
use crate::db::pool::DbPool;
use crate::db::repository::{replace_entries, save_settings};
use crate::errors::{AppError, AppResult};
use crate::export::ImportDocument;
use crate::models::entry::DailyEntry;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
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

/// Import an export document, replacing the matching store slots wholesale.
///
/// The document is fully decoded before anything is written: a malformed
/// file fails here and leaves the store untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let path = crate::utils::path::expand_tilde(file);
        let data = fs::read_to_string(&path)
            .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;

        let document: ImportDocument = serde_json::from_str(&data)
            .map_err(|e| AppError::Import(format!("unreadable document ({})", e)))?;

        if document.entries.is_none() && document.settings.is_none() {
            return Err(AppError::Import(
                "document contains neither entries nor settings".to_string(),
            ));
        }

        if !*yes {
            let prompt = format!(
                "Importing '{}' replaces your current data. Continue?",
                file
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let pool = DbPool::new(&cfg.database)?;

        if let Some(raw_entries) = document.entries {
            let entries: Vec<DailyEntry> = raw_entries.into_iter().map(normalize).collect();
            replace_entries(&pool, &entries)?;
            success(format!("Imported {} entries.", entries.len()));
        }

        if let Some(settings) = document.settings {
            save_settings(&pool, &settings)?;
            success("Imported settings.");
        }
    }

    Ok(())
}
