use crate::error::{OceanError, Result};
use crate::types::config::OceanConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "ocean-health.toml";
/// Project state directory holding the local config layer and report snapshots.
pub const STATE_DIR: &str = ".ocean-health";
pub const DEFAULT_LOCAL_FILE: &str = ".ocean-health/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/ocean-health/config.toml";

/// Loads the layered configuration for `root`, or the single file named by `explicit`.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<OceanConfig>> {
    if let Some(path) = explicit {
        return load_config_file(path).map(Some);
    }
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub fn load_config_file(path: &Path) -> Result<OceanConfig> {
    if !path.exists() {
        return Err(OceanError::ConfigNotFound(path.display().to_string()));
    }
    let value = read_toml_value(path)?;
    into_config(value)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<OceanConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += usize::from(merge_file_if_exists(&mut merged, path)?);
    }
    layers += usize::from(merge_file_if_exists(
        &mut merged,
        &root.join(DEFAULT_CONFIG_FILE),
    )?);
    layers += usize::from(merge_file_if_exists(
        &mut merged,
        &root.join(DEFAULT_LOCAL_FILE),
    )?);

    if layers == 0 {
        return Ok(None);
    }
    into_config(merged).map(Some)
}

fn into_config(value: Value) -> Result<OceanConfig> {
    let cfg: OceanConfig = value
        .try_into()
        .map_err(|e: toml::de::Error| OceanError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| OceanError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
max_expected_species = 80

[classifier]
min_delay_ms = 10
max_delay_ms = 20
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[weights]
ph = 0.5
sst = 0.25
biodiversity = 0.25

[classifier]
max_delay_ms = 40
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".ocean-health"))
            .expect("local override dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[weights]
sst = 0.3
biodiversity = 0.2
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let weights = cfg.weights().expect("weights should resolve");
        assert_eq!(weights.ph(), 0.5);
        assert_eq!(weights.sst(), 0.3);
        assert_eq!(weights.biodiversity(), 0.2);
        assert_eq!(cfg.scoring_params().max_expected_species, 80);

        let classifier = cfg.classifier_settings();
        assert_eq!(classifier.min_delay_ms, 10);
        assert_eq!(classifier.max_delay_ms, 40);
    }

    #[test]
    fn global_layer_alone_is_enough() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[classification]\npoor = 30\n").expect("global should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global layer should produce a config");
        assert_eq!(cfg.thresholds().poor, 30);
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[weights]\nph = 0.8\nsst = 0.8\nbiodiversity = 0.8\n",
        )
        .expect("config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(OceanError::ConfigParse(_))));
    }

    #[test]
    fn explicit_file_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let missing = root.path().join("nope.toml");
        let result = load_config(root.path(), Some(&missing));
        assert!(matches!(result, Err(OceanError::ConfigNotFound(_))));
    }
}
