use super::round_percent;
use crate::types::scoring::{Score, ScoringParams};

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

pub fn normalize_ph(ph: f64) -> Score {
    normalize_ph_with(ph, &ScoringParams::default())
}

/// Linear falloff from the optimum; any deviation of `max_ph_deviation` or more scores 0.
pub fn normalize_ph_with(ph: f64, params: &ScoringParams) -> Score {
    if !ph.is_finite() {
        return 0;
    }
    let deviation = (ph.clamp(PH_MIN, PH_MAX) - params.optimal_ph).abs();
    round_percent(100.0 * (1.0 - deviation / params.max_ph_deviation).max(0.0))
}
