//! The interchange document written by `export` and read by `import`.

use crate::models::entry::DailyEntry;
use crate::models::raw::RawEntry;
use crate::models::settings::Settings;
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0";

/// Document written on export: always carries both collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub entries: &'a [DailyEntry],
    pub settings: &'a Settings,
    pub exported_at: String, // RFC-3339
    pub version: &'static str,
}

/// Document accepted on import: either or both collections may be present.
/// Entries arrive in the tolerant raw shape and are normalized before the
/// slot is replaced.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportDocument {
    pub entries: Option<Vec<RawEntry>>,
    pub settings: Option<Settings>,
    pub exported_at: Option<String>,
    pub version: Option<String>,
}
