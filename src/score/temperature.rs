use super::round_percent;
use crate::types::scoring::{Score, ScoringParams};

pub fn normalize_sst(temp_c: f64) -> Score {
    normalize_sst_with(temp_c, &ScoringParams::default())
}

/// Full marks inside the optimal band (inclusive), linear decay to 0 over
/// `max_sst_deviation` degrees on either side.
pub fn normalize_sst_with(temp_c: f64, params: &ScoringParams) -> Score {
    if !temp_c.is_finite() {
        return 0;
    }
    let deviation = if temp_c < params.optimal_sst_min {
        params.optimal_sst_min - temp_c
    } else if temp_c > params.optimal_sst_max {
        temp_c - params.optimal_sst_max
    } else {
        return 100;
    };
    round_percent(100.0 * (1.0 - deviation / params.max_sst_deviation).max(0.0))
}
