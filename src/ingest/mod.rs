pub mod document;
pub mod filesystem;
pub mod sample;
pub mod tabular;

use crate::config::{DEFAULT_CONFIG_FILE, STATE_DIR};
use crate::error::{OceanError, Result};
use crate::types::observation::Observation;
use filesystem::{extension_of, list_files};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "json", "toml"];

/// Loads observations from a single data file or every supported file under a directory.
pub fn discover(path: &Path) -> Result<Vec<Observation>> {
    if !path.exists() {
        return Err(OceanError::PathNotFound(path.display().to_string()));
    }

    if path.is_dir() {
        let mut observations = Vec::new();
        for file in list_files(path, &[STATE_DIR]) {
            if file.file_name().and_then(|name| name.to_str()) == Some(DEFAULT_CONFIG_FILE) {
                debug!(path = %file.display(), "skipping project config");
                continue;
            }
            let supported = extension_of(&file)
                .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
                .unwrap_or(false);
            if !supported {
                debug!(path = %file.display(), "skipping unsupported file");
                continue;
            }
            observations.extend(load_file(&file)?);
        }
        info!(
            path = %path.display(),
            observations = observations.len(),
            "loaded dataset directory"
        );
        return Ok(observations);
    }

    let observations = load_file(path)?;
    info!(
        path = %path.display(),
        observations = observations.len(),
        "loaded dataset file"
    );
    Ok(observations)
}

pub fn load_file(path: &Path) -> Result<Vec<Observation>> {
    let source = path.display().to_string();
    match extension_of(path).as_deref() {
        Some("csv") => tabular::read_observations(File::open(path)?, &source),
        Some("json") => document::from_json(&std::fs::read_to_string(path)?, &source),
        Some("toml") => document::from_toml(&std::fs::read_to_string(path)?, &source),
        _ => Err(OceanError::UnsupportedFormat(format!(
            "{source} (expected one of: {})",
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CSV: &str = "location,date,ph,sst_celsius,species_observed\nReef,2024-01-15,8.1,20.0,40\n";
    const JSON: &str = r#"{"observations":[{"location":"Lagoon","date":"2024-01-16","ph":8.0,"sst_celsius":22.0,"species_observed":30}]}"#;

    #[test]
    fn missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = discover(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(OceanError::PathNotFound(_))));
    }

    #[test]
    fn explicit_unsupported_file_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("readings.xlsx");
        fs::write(&path, "binary").expect("file should write");
        assert!(matches!(
            discover(&path),
            Err(OceanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn directory_walk_loads_supported_files_in_sorted_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), JSON).expect("json should write");
        fs::write(dir.path().join("a.csv"), CSV).expect("csv should write");
        fs::write(dir.path().join("notes.txt"), "ignore me").expect("txt should write");
        fs::write(dir.path().join("nested/c.CSV"), CSV.replace("Reef", "Shelf"))
            .expect("nested csv should write");

        let rows = discover(dir.path()).expect("directory should load");
        let locations: Vec<&str> = rows.iter().map(|row| row.location.as_str()).collect();
        assert_eq!(locations, vec!["Reef", "Lagoon", "Shelf"]);
    }

    #[test]
    fn directory_walk_skips_config_and_state_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        let reports = dir.path().join(STATE_DIR).join("reports");
        fs::create_dir_all(&reports).expect("state dir should create");
        fs::write(dir.path().join("readings.csv"), CSV).expect("csv should write");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[weights]\nph = 0.5\nsst = 0.25\nbiodiversity = 0.25\n",
        )
        .expect("config should write");
        fs::write(
            dir.path().join(STATE_DIR).join("local.toml"),
            "[classifier]\nmin_delay_ms = 0\n",
        )
        .expect("local config should write");
        fs::write(
            reports.join("report-20240115T000000Z.json"),
            r#"{"version":"0.1.0","generated_at":"2024-01-15T00:00:00Z","report":{}}"#,
        )
        .expect("snapshot should write");

        let rows = discover(dir.path()).expect("directory should load");
        let locations: Vec<&str> = rows.iter().map(|row| row.location.as_str()).collect();
        assert_eq!(locations, vec!["Reef"]);
    }

    #[test]
    fn directory_walk_rejects_document_without_observations() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("a.csv"), CSV).expect("csv should write");
        fs::write(
            dir.path().join("b.json"),
            JSON.replace("\"observations\"", "\"Observations\""),
        )
        .expect("json should write");

        assert!(matches!(
            discover(dir.path()),
            Err(OceanError::DataParse(_))
        ));
    }

    #[test]
    fn empty_directory_yields_no_observations() {
        let dir = TempDir::new().expect("temp dir should be created");
        let rows = discover(dir.path()).expect("empty dir should load");
        assert!(rows.is_empty());
    }
}
