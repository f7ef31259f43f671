use crate::classifier::species::DEFAULT_SPECIES;
use crate::classifier::ClassifierSettings;
use crate::error::{OceanError, Result};
use crate::types::scoring::{ClassificationThresholds, ScoringParams};
use crate::types::weights::WeightVector;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OceanConfig {
    pub weights: Option<WeightsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub classification: Option<ClassificationConfig>,
    pub classifier: Option<ClassifierConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    pub ph: Option<f64>,
    pub sst: Option<f64>,
    pub biodiversity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub optimal_ph: Option<f64>,
    pub max_ph_deviation: Option<f64>,
    pub optimal_sst_min: Option<f64>,
    pub optimal_sst_max: Option<f64>,
    pub max_sst_deviation: Option<f64>,
    pub max_expected_species: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassificationConfig {
    pub healthy: Option<u8>,
    pub moderate: Option<u8>,
    pub poor: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    pub min_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub species: Option<Vec<String>>,
}

impl OceanConfig {
    /// Resolves `[weights]`; a partial table falls back to the default for missing keys.
    pub fn weights(&self) -> Result<WeightVector> {
        let defaults = WeightVector::default();
        match &self.weights {
            Some(weights) => WeightVector::new(
                weights.ph.unwrap_or(defaults.ph()),
                weights.sst.unwrap_or(defaults.sst()),
                weights.biodiversity.unwrap_or(defaults.biodiversity()),
            )
            .map_err(|e| OceanError::ConfigParse(format!("weights: {e}"))),
            None => Ok(defaults),
        }
    }

    pub fn thresholds(&self) -> ClassificationThresholds {
        let defaults = ClassificationThresholds::default();
        match &self.classification {
            Some(classification) => ClassificationThresholds {
                healthy: classification.healthy.unwrap_or(defaults.healthy),
                moderate: classification.moderate.unwrap_or(defaults.moderate),
                poor: classification.poor.unwrap_or(defaults.poor),
            },
            None => defaults,
        }
    }

    pub fn scoring_params(&self) -> ScoringParams {
        let defaults = ScoringParams::default();
        let thresholds = self.thresholds();
        match &self.scoring {
            Some(scoring) => ScoringParams {
                optimal_ph: scoring.optimal_ph.unwrap_or(defaults.optimal_ph),
                max_ph_deviation: scoring
                    .max_ph_deviation
                    .unwrap_or(defaults.max_ph_deviation),
                optimal_sst_min: scoring.optimal_sst_min.unwrap_or(defaults.optimal_sst_min),
                optimal_sst_max: scoring.optimal_sst_max.unwrap_or(defaults.optimal_sst_max),
                max_sst_deviation: scoring
                    .max_sst_deviation
                    .unwrap_or(defaults.max_sst_deviation),
                max_expected_species: scoring
                    .max_expected_species
                    .unwrap_or(defaults.max_expected_species),
                thresholds,
            },
            None => ScoringParams {
                thresholds,
                ..defaults
            },
        }
    }

    pub fn classifier_settings(&self) -> ClassifierSettings {
        let defaults = ClassifierSettings::default();
        match &self.classifier {
            Some(classifier) => ClassifierSettings {
                min_delay_ms: classifier.min_delay_ms.unwrap_or(defaults.min_delay_ms),
                max_delay_ms: classifier.max_delay_ms.unwrap_or(defaults.max_delay_ms),
                species: classifier
                    .species
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SPECIES.iter().map(|s| s.to_string()).collect()),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.weights()?;

        let params = self.scoring_params();
        if !params.optimal_ph.is_finite() || !(0.0..=14.0).contains(&params.optimal_ph) {
            return Err(OceanError::ConfigParse(
                "scoring.optimal_ph must be between 0.0 and 14.0".to_string(),
            ));
        }
        if !is_positive(params.max_ph_deviation) {
            return Err(OceanError::ConfigParse(
                "scoring.max_ph_deviation must be greater than 0".to_string(),
            ));
        }
        if !is_positive(params.max_sst_deviation) {
            return Err(OceanError::ConfigParse(
                "scoring.max_sst_deviation must be greater than 0".to_string(),
            ));
        }
        if !params.optimal_sst_min.is_finite()
            || !params.optimal_sst_max.is_finite()
            || params.optimal_sst_min > params.optimal_sst_max
        {
            return Err(OceanError::ConfigParse(format!(
                "scoring.optimal_sst_min ({}) must not exceed scoring.optimal_sst_max ({})",
                params.optimal_sst_min, params.optimal_sst_max
            )));
        }
        if params.max_expected_species == 0 {
            return Err(OceanError::ConfigParse(
                "scoring.max_expected_species must be greater than 0".to_string(),
            ));
        }

        let thresholds = params.thresholds;
        if thresholds.healthy > 100
            || thresholds.healthy <= thresholds.moderate
            || thresholds.moderate <= thresholds.poor
        {
            return Err(OceanError::ConfigParse(format!(
                "classification thresholds must be strictly descending and at most 100 (found healthy={}, moderate={}, poor={})",
                thresholds.healthy, thresholds.moderate, thresholds.poor
            )));
        }

        let classifier = self.classifier_settings();
        if classifier.min_delay_ms > classifier.max_delay_ms {
            return Err(OceanError::ConfigParse(
                "classifier.min_delay_ms must not exceed classifier.max_delay_ms".to_string(),
            ));
        }
        if classifier.species.is_empty() {
            return Err(OceanError::ConfigParse(
                "classifier.species cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> OceanConfig {
        toml::from_str(raw).expect("config should parse")
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = OceanConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weights().expect("weights"), WeightVector::default());
        assert_eq!(cfg.scoring_params(), ScoringParams::default());
        assert_eq!(cfg.classifier_settings().species.len(), DEFAULT_SPECIES.len());
    }

    #[test]
    fn weights_table_overrides_defaults() {
        let cfg = parse(
            r#"
[weights]
ph = 0.5
sst = 0.25
biodiversity = 0.25
"#,
        );
        let weights = cfg.weights().expect("weights should resolve");
        assert_eq!(weights.ph(), 0.5);
        assert_eq!(weights.biodiversity(), 0.25);
    }

    #[test]
    fn validate_rejects_weights_that_do_not_sum_to_one() {
        let cfg = parse(
            r#"
[weights]
ph = 0.9
"#,
        );
        let err = cfg.validate().expect_err("0.9 + 0.333 + 0.334 should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn validate_rejects_inverted_sst_band() {
        let cfg = parse(
            r#"
[scoring]
optimal_sst_min = 26.0
optimal_sst_max = 20.0
"#,
        );
        assert!(matches!(cfg.validate(), Err(OceanError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_non_descending_thresholds() {
        let cfg = parse(
            r#"
[classification]
healthy = 70
moderate = 70
"#,
        );
        let err = cfg.validate().expect_err("equal thresholds should fail");
        assert!(err.to_string().contains("strictly descending"));
    }

    #[test]
    fn validate_rejects_empty_species_list_and_inverted_delay() {
        let empty = parse(
            r#"
[classifier]
species = []
"#,
        );
        assert!(empty.validate().is_err());

        let inverted = parse(
            r#"
[classifier]
min_delay_ms = 500
max_delay_ms = 100
"#,
        );
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn unknown_tables_are_rejected_at_parse_time() {
        let result: std::result::Result<OceanConfig, _> = toml::from_str("[metrics]\nx = 1\n");
        assert!(result.is_err());
    }
}
