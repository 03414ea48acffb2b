//! Maps raw composite scores onto the 0-100 conviction scale shown on the
//! dashboard.
//!
//! Scores are scaled linearly against the maximum attainable raw score so the
//! spacing between candidates survives into the displayed percentage.

use crate::error::{ConvictionError, ConvictionResult};

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

/// A shaping function from raw score to display percentage.
///
/// Implementations must return a value in `[0, 100]` for every input and
/// must never rank a higher raw score below a lower one.
pub trait ScoreNormalizer {
    fn normalize(&self, raw_score: f64) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearNormalizer {
    max_score: f64,
}

impl LinearNormalizer {
    pub fn new(max_score: f64) -> ConvictionResult<Self> {
        if !max_score.is_finite() {
            return Err(ConvictionError::InvalidConfiguration(format!(
                "max score must be a finite number, got {max_score}"
            )));
        }
        if max_score <= 0.0 {
            return Err(ConvictionError::InvalidConfiguration(format!(
                "max score must be greater than zero, got {max_score}"
            )));
        }
        Ok(Self { max_score })
    }

    /// Builds a normalizer from an optional maximum, failing when none was
    /// configured.
    pub fn from_config(max_score: Option<f64>) -> ConvictionResult<Self> {
        let max_score = max_score.ok_or_else(|| {
            ConvictionError::InvalidConfiguration("max score is not configured".to_string())
        })?;
        Self::new(max_score)
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl ScoreNormalizer for LinearNormalizer {
    fn normalize(&self, raw_score: f64) -> f64 {
        // Non-positive scores pin to zero so -0.0 never reaches the display.
        if raw_score.is_nan() || raw_score <= 0.0 {
            return MIN_PERCENT;
        }
        ((raw_score / self.max_score) * 100.0).clamp(MIN_PERCENT, MAX_PERCENT)
    }
}

/// Rounds a percentage to the single decimal the dashboard renders.
pub fn round_display(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}
