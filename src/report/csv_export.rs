use crate::error::{OceanError, Result};
use crate::types::report::HealthReport;
use serde::Serialize;

#[derive(Serialize)]
struct CsvRow<'a> {
    location: &'a str,
    date: String,
    ph: f64,
    sst_celsius: f64,
    species_observed: i64,
    norm_ph: u8,
    norm_sst: u8,
    norm_bio: u8,
    overall_score: u8,
    classification: &'static str,
}

/// One flat row per observation, header included.
pub fn to_csv(report: &HealthReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &report.observations {
        writer.serialize(CsvRow {
            location: &row.observation.location,
            date: row.observation.date.to_string(),
            ph: row.observation.ph,
            sst_celsius: row.observation.sst_celsius,
            species_observed: row.observation.species_observed,
            norm_ph: row.norm_ph,
            norm_sst: row.norm_sst,
            norm_bio: row.norm_bio,
            overall_score: row.overall_score,
            classification: row.classification.as_str(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OceanError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OceanError::DataParse(e.to_string()))
}
