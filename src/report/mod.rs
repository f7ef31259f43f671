pub mod csv_export;
pub mod json;
pub mod md;

use crate::error::{OceanError, Result};
use crate::types::report::HealthReport;
use crate::types::weights::WeightVector;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
}

pub fn render(report: &HealthReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(OceanError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Csv => csv_export::to_csv(report),
    }
}

/// Weight vectors only have a markdown and a JSON form.
pub fn render_weights(weights: &WeightVector, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(weights).map_err(OceanError::Json),
        OutputFormat::Md | OutputFormat::Csv => {
            Ok(format!("# Weights\n\n{}", md::weights_markdown(weights)))
        }
    }
}
