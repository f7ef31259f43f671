use crate::error::{OceanError, Result};
use crate::types::report::HealthReport;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SNAPSHOT_DIR: &str = ".ocean-health/reports";

#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot<'a> {
    pub version: String,
    pub generated_at: String,
    pub report: &'a HealthReport,
}

impl<'a> ReportSnapshot<'a> {
    pub fn new(report: &'a HealthReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            report,
        }
    }
}

pub fn write_snapshot(root: &Path, snapshot: &ReportSnapshot<'_>) -> Result<PathBuf> {
    let dir = root.join(SNAPSHOT_DIR);
    fs::create_dir_all(&dir).map_err(OceanError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("report-{stamp}.json"));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&out_path, json).map_err(OceanError::Io)?;
    info!(path = %out_path.display(), "report snapshot written");
    Ok(out_path)
}
