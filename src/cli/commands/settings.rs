use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::repository::{load_settings, save_settings};
use crate::errors::{AppError, AppResult};
use crate::models::settings::Section;
use crate::ui::messages::{header, success};
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print_settings,
        theme,
        enable,
        disable,
        reminder,
        no_reminder,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut settings = load_settings(&pool)?;
        let mut changed = false;

        if let Some(t) = theme {
            settings.theme = *t;
            changed = true;
        }

        for section in enable {
            settings.enabled_sections.set(*section, true);
            changed = true;
        }
        for section in disable {
            settings.enabled_sections.set(*section, false);
            changed = true;
        }

        if let Some(time) = reminder {
            parse_time(time).ok_or_else(|| AppError::InvalidTime(time.clone()))?;
            settings.reminder_time = Some(time.clone());
            changed = true;
        }
        if *no_reminder {
            settings.reminder_time = None;
            changed = true;
        }

        if changed {
            save_settings(&pool, &settings)?;
            success("Settings saved.");
        }

        if *print_settings || !changed {
            println!();
            header("Settings");
            println!("Theme:    {}", settings.theme.as_str());
            println!(
                "Reminder: {}",
                settings.reminder_time.as_deref().unwrap_or("off")
            );
            println!("Sections:");
            for section in Section::ALL {
                println!(
                    "  [{}] {}",
                    if settings.enabled_sections.get(section) {
                        "x"
                    } else {
                        " "
                    },
                    section.display_name()
                );
            }
            println!();
        }
    }

    Ok(())
}
