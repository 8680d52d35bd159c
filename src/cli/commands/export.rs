use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::repository::{load_entries, load_settings};
use crate::errors::AppResult;
use crate::export::{
    EXPORT_VERSION, EntryExport, ExportDocument, ExportFormat, ensure_writable, export_csv,
    export_json,
};
use crate::utils::path::expand_tilde;
use crate::utils::time::now_rfc3339;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let path = path.as_path();
        ensure_writable(path, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        let mut entries = load_entries(&pool)?;
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        let settings = load_settings(&pool)?;

        match format {
            ExportFormat::Json => {
                let document = ExportDocument {
                    entries: &entries,
                    settings: &settings,
                    exported_at: now_rfc3339(),
                    version: EXPORT_VERSION,
                };
                export_json(&document, path)?;
            }
            ExportFormat::Csv => {
                let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
                export_csv(&rows, path)?;
            }
        }
    }

    Ok(())
}
