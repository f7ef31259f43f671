use crate::types::observation::Observation;
use serde::Serialize;
use std::fmt;

/// Normalized suitability on a 0-100 scale.
pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HealthStatus {
    Critical,
    Poor,
    Moderate,
    Healthy,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Healthy,
        HealthStatus::Moderate,
        HealthStatus::Poor,
        HealthStatus::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Moderate => "Moderate",
            HealthStatus::Poor => "Poor",
            HealthStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimal ranges and margins used by the metric normalizers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringParams {
    pub optimal_ph: f64,
    pub max_ph_deviation: f64,
    pub optimal_sst_min: f64,
    pub optimal_sst_max: f64,
    pub max_sst_deviation: f64,
    pub max_expected_species: u32,
    pub thresholds: ClassificationThresholds,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            optimal_ph: 8.1,
            max_ph_deviation: 0.5,
            optimal_sst_min: 15.0,
            optimal_sst_max: 25.0,
            max_sst_deviation: 5.0,
            max_expected_species: 60,
            thresholds: ClassificationThresholds::default(),
        }
    }
}

/// Lower bounds (inclusive) of each bucket; anything below `poor` is critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationThresholds {
    pub healthy: Score,
    pub moderate: Score,
    pub poor: Score,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            healthy: 80,
            moderate: 60,
            poor: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredObservation {
    #[serde(flatten)]
    pub observation: Observation,
    pub norm_ph: Score,
    pub norm_sst: Score,
    pub norm_bio: Score,
    pub overall_score: Score,
    pub classification: HealthStatus,
}
