use crate::error::{OceanError, Result};
use crate::types::observation::{Observation, ObservationFile};

pub fn from_json(content: &str, source: &str) -> Result<Vec<Observation>> {
    let file: ObservationFile = serde_json::from_str(content)
        .map_err(|e| OceanError::DataParse(format!("{source}: {e}")))?;
    Ok(file.observations)
}

/// Dates may be quoted `YYYY-MM-DD` strings or bare TOML dates.
pub fn from_toml(content: &str, source: &str) -> Result<Vec<Observation>> {
    let file: ObservationFile =
        toml::from_str(content).map_err(|e| OceanError::DataParse(format!("{source}: {e}")))?;
    Ok(file.observations)
}
