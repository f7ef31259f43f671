use super::round_percent;
use crate::types::scoring::{Score, ScoringParams};

pub fn normalize_biodiversity(count: i64) -> Score {
    normalize_biodiversity_with(count, &ScoringParams::default())
}

/// Share of `max_expected_species`, saturating at 100. Negative counts floor at 0.
pub fn normalize_biodiversity_with(count: i64, params: &ScoringParams) -> Score {
    let count = count.max(0) as f64;
    let expected = f64::from(params.max_expected_species.max(1));
    round_percent((count / expected * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_at_expected_maximum() {
        assert_eq!(normalize_biodiversity(60), 100);
        assert_eq!(normalize_biodiversity(600), 100);
    }

    #[test]
    fn scales_linearly_below_maximum() {
        assert_eq!(normalize_biodiversity(30), 50);
        assert_eq!(normalize_biodiversity(45), 75);
        assert_eq!(normalize_biodiversity(15), 25);
        assert_eq!(normalize_biodiversity(10), 17);
    }

    #[test]
    fn zero_and_negative_counts_floor_at_zero() {
        assert_eq!(normalize_biodiversity(0), 0);
        assert_eq!(normalize_biodiversity(-12), 0);
    }
}
