use crate::types::scoring::{ClassificationThresholds, HealthStatus, Score};

pub fn classify(score: Score) -> HealthStatus {
    classify_with(score, &ClassificationThresholds::default())
}

/// First matching bucket wins, checked from the top down.
pub fn classify_with(score: Score, thresholds: &ClassificationThresholds) -> HealthStatus {
    if score >= thresholds.healthy {
        HealthStatus::Healthy
    } else if score >= thresholds.moderate {
        HealthStatus::Moderate
    } else if score >= thresholds.poor {
        HealthStatus::Poor
    } else {
        HealthStatus::Critical
    }
}
