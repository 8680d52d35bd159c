use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::save::{EnergySpec, SaveLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time;

/// Create or update the journal entry for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        rating,
        energy,
        done,
        challenge,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse energy specs (optional, repeatable)
        //
        let energy_specs = energy
            .iter()
            .map(|spec| parse_energy_spec(spec))
            .collect::<AppResult<Vec<EnergySpec>>>()?;

        //
        // 3. Open DB and execute logic
        //
        let pool = DbPool::new(&cfg.database)?;

        SaveLogic::apply(
            &pool,
            d,
            *rating,
            &energy_specs,
            done,
            challenge,
            notes.as_deref(),
        )?;
    }

    Ok(())
}

/// Parse "LEVEL" or "LEVEL@HH:MM" into an energy spec. Level must be 1-5.
fn parse_energy_spec(spec: &str) -> AppResult<EnergySpec> {
    let (level_str, time_str) = match spec.split_once('@') {
        Some((l, t)) => (l, Some(t)),
        None => (spec, None),
    };

    let level: u8 = level_str
        .parse()
        .map_err(|_| AppError::InvalidEnergy(spec.to_string()))?;
    if !(1..=5).contains(&level) {
        return Err(AppError::InvalidEnergy(format!(
            "{} (level must be between 1 and 5)",
            spec
        )));
    }

    let time = match time_str {
        Some(t) => Some(parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?),
        None => None,
    };

    Ok(EnergySpec { level, time })
}
