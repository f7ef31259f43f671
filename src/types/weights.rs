use crate::error::{OceanError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Tolerance accepted when a caller supplies a full vector.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKey {
    Ph,
    Sst,
    Biodiversity,
}

impl WeightKey {
    pub const ALL: [WeightKey; 3] = [WeightKey::Ph, WeightKey::Sst, WeightKey::Biodiversity];

    pub fn as_str(self) -> &'static str {
        match self {
            WeightKey::Ph => "ph",
            WeightKey::Sst => "sst",
            WeightKey::Biodiversity => "biodiversity",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightKey {
    type Err = OceanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ph" => Ok(WeightKey::Ph),
            "sst" | "temperature" => Ok(WeightKey::Sst),
            "biodiversity" | "bio" | "species" => Ok(WeightKey::Biodiversity),
            other => Err(OceanError::InvalidWeight(format!(
                "unknown weight key `{other}` (expected ph, sst or biodiversity)"
            ))),
        }
    }
}

/// Weighting of the three normalized sub-scores. Components always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    ph: f64,
    sst: f64,
    biodiversity: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            ph: 0.333,
            sst: 0.333,
            biodiversity: 0.334,
        }
    }
}

impl WeightVector {
    /// Builds a vector from explicit components, rejecting values that break the sum invariant.
    pub fn new(ph: f64, sst: f64, biodiversity: f64) -> Result<Self> {
        let components = [ph, sst, biodiversity];
        if components
            .iter()
            .any(|weight| !weight.is_finite() || !(0.0..=1.0).contains(weight))
        {
            return Err(OceanError::InvalidWeight(
                "weights must be between 0.0 and 1.0".to_string(),
            ));
        }
        let sum: f64 = components.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(OceanError::InvalidWeight(format!(
                "weights must sum to 1.0 (found {sum:.3})"
            )));
        }
        Ok(Self {
            ph,
            sst,
            biodiversity,
        })
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn sst(&self) -> f64 {
        self.sst
    }

    pub fn biodiversity(&self) -> f64 {
        self.biodiversity
    }

    pub fn get(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::Ph => self.ph,
            WeightKey::Sst => self.sst,
            WeightKey::Biodiversity => self.biodiversity,
        }
    }

    pub fn sum(&self) -> f64 {
        self.ph + self.sst + self.biodiversity
    }

    /// Sets `key` to `value` (clamped to [0, 1]) and splits the residual equally
    /// between the other two components. The prior ratio of those two is discarded.
    /// A final pass divides by the total so the result sums to exactly 1.
    pub fn rebalance(&self, key: WeightKey, value: f64) -> WeightVector {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        let share = (1.0 - value) / 2.0;

        let mut next = WeightVector {
            ph: share,
            sst: share,
            biodiversity: share,
        };
        match key {
            WeightKey::Ph => next.ph = value,
            WeightKey::Sst => next.sst = value,
            WeightKey::Biodiversity => next.biodiversity = value,
        }

        let sum = next.sum();
        if sum > 0.0 {
            next.ph /= sum;
            next.sst /= sum;
            next.biodiversity /= sum;
        }
        next
    }

    /// Applies assignments left to right, as a user dragging sliders in sequence would.
    pub fn rebalance_all(&self, assignments: &[WeightAssignment]) -> WeightVector {
        assignments
            .iter()
            .fold(*self, |weights, assignment| {
                weights.rebalance(assignment.key, assignment.value)
            })
    }
}

/// A `key=value` request parsed from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightAssignment {
    pub key: WeightKey,
    pub value: f64,
}

impl FromStr for WeightAssignment {
    type Err = OceanError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            OceanError::InvalidWeight(format!("expected KEY=VALUE, got `{s}`"))
        })?;
        let key = key.parse::<WeightKey>()?;
        let value = value.trim().parse::<f64>().map_err(|e| {
            OceanError::InvalidWeight(format!("weight value for {key} is not a number: {e}"))
        })?;
        Ok(WeightAssignment { key, value })
    }
}
