//! Percentage-point weights for combining fairness factors.

use dutyshare_core::MAX_SCORE;

use crate::FairnessWeightsError;

/// Points each factor can add to or remove from the baseline score.
///
/// Every factor signal lies in `-1.0..=1.0` (rotation in `0.0..=1.0`), so a
/// weight is the largest swing that factor can cause. Validated weights can
/// never produce a score outside `0.0..=100.0`, which keeps every ranking on
/// the same scale whether or not preferences are supplied.
///
/// # Examples
/// ```
/// use dutyshare_scorer::FairnessWeights;
///
/// let weights = FairnessWeights::default().validate().expect("defaults are valid");
/// assert_eq!(weights.ceiling(), 100.0);
/// assert_eq!(weights.floor(), 5.0);
///
/// let greedy = FairnessWeights { preference: 40.0, ..FairnessWeights::default() };
/// assert!(greedy.validate().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FairnessWeights {
    /// Score of a task when every factor is neutral.
    pub baseline: f32,
    /// Weight of the workload balance signal.
    pub workload: f32,
    /// Weight of the difficulty rotation signal.
    pub rotation: f32,
    /// Weight of the category freshness signal.
    pub repetition: f32,
    /// Weight of the preference signal.
    pub preference: f32,
}

impl FairnessWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`FairnessWeightsError`] when a weight is not finite or is
    /// negative, or when the extremes of the weighted sum would leave
    /// `0.0..=100.0`.
    pub fn validate(self) -> Result<Self, FairnessWeightsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(FairnessWeightsError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(FairnessWeightsError::Negative { field, value });
            }
        }
        let ceiling = self.ceiling();
        if ceiling > MAX_SCORE {
            return Err(FairnessWeightsError::CeilingTooHigh {
                ceiling,
                max: MAX_SCORE,
            });
        }
        let floor = self.floor();
        if floor < 0.0 {
            return Err(FairnessWeightsError::FloorBelowZero { floor });
        }
        Ok(self)
    }

    /// Highest score reachable: every factor at its most favourable.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the ceiling is the sum of all weights"
    )]
    pub fn ceiling(self) -> f32 {
        self.baseline + self.workload + self.rotation + self.repetition + self.preference
    }

    /// Lowest score reachable: every signed factor at its least favourable.
    ///
    /// Rotation never goes negative, so it does not lower the floor.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the floor subtracts the signed weights from the baseline"
    )]
    pub fn floor(self) -> f32 {
        self.baseline - self.workload - self.repetition - self.preference
    }

    const fn fields(self) -> [(&'static str, f32); 5] {
        [
            ("baseline", self.baseline),
            ("workload", self.workload),
            ("rotation", self.rotation),
            ("repetition", self.repetition),
            ("preference", self.preference),
        ]
    }
}

impl Default for FairnessWeights {
    fn default() -> Self {
        Self {
            baseline: 45.0_f32,
            workload: 25.0_f32,
            rotation: 15.0_f32,
            repetition: 10.0_f32,
            preference: 5.0_f32,
        }
    }
}
