pub mod biodiversity;
pub mod classify;
pub mod lint;
pub mod ph;
pub mod temperature;

use crate::types::observation::Observation;
use crate::types::report::{HealthReport, StatusCounts};
use crate::types::scoring::{Score, ScoredObservation, ScoringParams};
use crate::types::weights::WeightVector;
use chrono::Datelike;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Round half up onto the 0-100 scale.
pub(crate) fn round_percent(raw: f64) -> Score {
    if !raw.is_finite() {
        return 0;
    }
    (raw + 0.5).floor().clamp(0.0, 100.0) as Score
}

pub fn score_observation(
    observation: &Observation,
    weights: &WeightVector,
    params: &ScoringParams,
) -> ScoredObservation {
    let norm_ph = ph::normalize_ph_with(observation.ph, params);
    let norm_sst = temperature::normalize_sst_with(observation.sst_celsius, params);
    let norm_bio = biodiversity::normalize_biodiversity_with(observation.species_observed, params);

    let overall_score = round_percent(
        f64::from(norm_ph) * weights.ph()
            + f64::from(norm_sst) * weights.sst()
            + f64::from(norm_bio) * weights.biodiversity(),
    );
    let classification = classify::classify_with(overall_score, &params.thresholds);

    ScoredObservation {
        observation: observation.clone(),
        norm_ph,
        norm_sst,
        norm_bio,
        overall_score,
        classification,
    }
}

pub fn score_all(
    observations: &[Observation],
    weights: &WeightVector,
    params: &ScoringParams,
) -> Vec<ScoredObservation> {
    observations
        .iter()
        .map(|observation| score_observation(observation, weights, params))
        .collect()
}

/// Scores every observation and attaches summary statistics and input findings.
pub fn build_report(
    observations: &[Observation],
    weights: &WeightVector,
    params: &ScoringParams,
) -> HealthReport {
    let scored = score_all(observations, weights, params);

    let mut status_counts = StatusCounts::default();
    for row in &scored {
        debug!(
            location = %row.observation.location,
            overall = row.overall_score,
            status = %row.classification,
            "scored observation"
        );
        status_counts.record(row.classification);
    }

    let mean_overall_score = if scored.is_empty() {
        None
    } else {
        let total: f64 = scored.iter().map(|row| f64::from(row.overall_score)).sum();
        Some(total / scored.len() as f64)
    };

    let findings = lint::input_findings(observations);
    info!(
        observations = scored.len(),
        findings = findings.len(),
        "health report built"
    );

    HealthReport {
        dataset_sha256: dataset_digest(observations),
        weights: *weights,
        params: *params,
        mean_overall_score,
        status_counts,
        observations: scored,
        findings,
    }
}

/// SHA-256 over a fixed binary encoding of the rows. Readings are hashed by bit
/// pattern so NaN and the infinities stay distinguishable.
fn dataset_digest(observations: &[Observation]) -> String {
    let mut hasher = Sha256::new();
    for observation in observations {
        let location = observation.location.as_bytes();
        hasher.update((location.len() as u64).to_le_bytes());
        hasher.update(location);
        hasher.update(observation.date.num_days_from_ce().to_le_bytes());
        hasher.update(observation.ph.to_bits().to_le_bytes());
        hasher.update(observation.sst_celsius.to_bits().to_le_bytes());
        hasher.update(observation.species_observed.to_le_bytes());
    }
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
