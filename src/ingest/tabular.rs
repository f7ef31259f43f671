use crate::error::{OceanError, Result};
use crate::types::observation::Observation;
use csv::{ReaderBuilder, Trim};
use std::io::Read;

/// Reads observations from CSV with a header row. Both snake_case field names
/// and the dashboard's column titles are accepted.
pub fn read_observations<R: Read>(reader: R, source: &str) -> Result<Vec<Observation>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut observations = Vec::new();
    for (index, record) in reader.deserialize::<Observation>().enumerate() {
        let observation = record.map_err(|e| {
            OceanError::DataParse(format!("{source}: row {}: {e}", index + 1))
        })?;
        observations.push(observation);
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_dashboard_column_titles() {
        let data = "Location,Date,pH,SST (°C),Species Observed\n\
                    Great Barrier Reef,2024-01-15,8.05,28.5,45\n\
                    Arctic Ocean, 2024-01-15 ,8.15,1.5,15\n";
        let rows = read_observations(data.as_bytes(), "inline").expect("csv should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].location, "Great Barrier Reef");
        assert_eq!(rows[1].species_observed, 15);
    }

    #[test]
    fn reads_snake_case_headers() {
        let data = "location,date,ph,sst_celsius,species_observed\nLagoon,2024-02-01,8.0,22.0,-3\n";
        let rows = read_observations(data.as_bytes(), "inline").expect("csv should parse");
        assert_eq!(rows[0].sst_celsius, 22.0);
        assert_eq!(rows[0].species_observed, -3);
    }

    #[test]
    fn bad_rows_report_source_and_row_number() {
        let data = "location,date,ph,sst_celsius,species_observed\nLagoon,not-a-date,8.0,22.0,3\n";
        let err = read_observations(data.as_bytes(), "reef.csv").expect_err("bad date should fail");
        let message = err.to_string();
        assert!(message.contains("reef.csv"));
        assert!(message.contains("row 1"));
    }
}
