//! Weighted ocean health scoring.
//!
//! Raw [`Observation`]s pass through three per-metric normalizers, are combined
//! with a caller-owned [`WeightVector`] and bucketed into a [`HealthStatus`].
//! Everything in the scoring path is a pure function of its inputs.

pub mod classifier;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod score;
pub mod snapshot;
pub mod types;

pub use error::{OceanError, Result};
pub use score::biodiversity::normalize_biodiversity;
pub use score::classify::classify;
pub use score::ph::normalize_ph;
pub use score::temperature::normalize_sst;
pub use score::{build_report, score_all, score_observation};
pub use types::observation::Observation;
pub use types::scoring::{HealthStatus, Score, ScoredObservation, ScoringParams};
pub use types::weights::{WeightKey, WeightVector};
