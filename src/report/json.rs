use crate::types::report::HealthReport;

pub fn to_json(report: &HealthReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
