use crate::types::scoring::{HealthStatus, ScoredObservation, ScoringParams};
use crate::types::weights::WeightVector;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub moderate: usize,
    pub poor: usize,
    pub critical: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: HealthStatus) {
        match status {
            HealthStatus::Healthy => self.healthy += 1,
            HealthStatus::Moderate => self.moderate += 1,
            HealthStatus::Poor => self.poor += 1,
            HealthStatus::Critical => self.critical += 1,
        }
    }

    pub fn get(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Healthy => self.healthy,
            HealthStatus::Moderate => self.moderate,
            HealthStatus::Poor => self.poor,
            HealthStatus::Critical => self.critical,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub dataset_sha256: String,
    pub weights: WeightVector,
    pub params: ScoringParams,
    pub mean_overall_score: Option<f64>,
    pub status_counts: StatusCounts,
    pub observations: Vec<ScoredObservation>,
    pub findings: Vec<Finding>,
}

impl HealthReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }

    /// True when any row is classified at or below `status`.
    pub fn any_at_or_below(&self, status: HealthStatus) -> bool {
        self.observations
            .iter()
            .any(|scored| scored.classification <= status)
    }
}
