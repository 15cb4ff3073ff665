//! Per-run factor signals.
//!
//! Signals are unitless: workload, freshness and preference lie in
//! `-1.0..=1.0`, rotation in `0.0..=1.0`. [`FairnessWeights`] turns them
//! into score points.

use dutyshare_core::{
    Category, DifficultyBand, FactorBreakdown, FairnessContext, FairnessStats, Preferences,
    RECENT_TASK_WINDOW, Task, roster_mean_points,
};

use crate::FairnessWeights;

/// Everything about a scoring run that does not depend on the candidate.
#[derive(Debug, Clone)]
pub(crate) struct RunFactors<'a> {
    workload: f32,
    last_band: Option<DifficultyBand>,
    last_category: Option<Category>,
    repeat_unavoidable: bool,
    window: &'a [Task],
    preferences: Option<&'a Preferences>,
}

impl<'a> RunFactors<'a> {
    pub(crate) fn new(
        tasks: &[Task],
        context: &'a FairnessContext,
        roster: &[FairnessStats],
    ) -> Self {
        let workload = if context.has_user() {
            roster_mean_points(roster)
                .map_or(0.0, |mean| workload_signal(context.stats.total_points, mean))
        } else {
            0.0
        };
        let last = context.most_recent();
        let last_category = last.map(|task| task.category);
        let repeat_unavoidable = last_category
            .is_some_and(|category| tasks.iter().all(|task| task.category == category));
        Self {
            workload,
            last_band: last.map(Task::band),
            last_category,
            repeat_unavoidable,
            window: context.recent_window(),
            preferences: context.preferences.as_ref(),
        }
    }

    /// Workload signal shared by every candidate in the run.
    pub(crate) const fn workload(&self) -> f32 {
        self.workload
    }

    /// Weighted contributions for one candidate.
    #[expect(
        clippy::float_arithmetic,
        reason = "contributions scale unit signals by their weights"
    )]
    pub(crate) fn breakdown(&self, task: &Task, weights: FairnessWeights) -> FactorBreakdown {
        FactorBreakdown {
            workload: weights.workload * self.workload,
            rotation: weights.rotation * self.rotation(task.band()),
            repetition: weights.repetition * self.freshness(task.category),
            preference: weights.preference * preference_signal(self.preferences, task.category),
        }
    }

    fn rotation(&self, band: DifficultyBand) -> f32 {
        self.last_band
            .map_or(0.0, |last| rotation_signal(last, band))
    }

    fn freshness(&self, category: Category) -> f32 {
        if self.last_category == Some(category) {
            return if self.repeat_unavoidable { 0.0 } else { -1.0 };
        }
        if self.window.is_empty() {
            return 0.0;
        }
        self.window
            .iter()
            .position(|task| task.category == category)
            .map_or(1.0, position_signal)
    }
}

/// How far the member trails the space average, relative to that average.
///
/// Positive when behind, negative when ahead. The divisor is at least one
/// point so a roster of zeroes stays neutral.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "workload compares point totals as a fraction of the mean"
)]
pub(crate) fn workload_signal(points: u32, mean: f32) -> f32 {
    let signal = (mean - points as f32) / mean.max(1.0);
    if signal.is_finite() {
        signal.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Bonus for moving away from the band of the last completed task.
pub(crate) const fn rotation_signal(last: DifficultyBand, candidate: DifficultyBand) -> f32 {
    match (last, candidate) {
        (DifficultyBand::Hard, DifficultyBand::Easy)
        | (DifficultyBand::Easy, DifficultyBand::Hard) => 1.0,
        (DifficultyBand::Hard, DifficultyBand::Medium) => 0.75,
        (DifficultyBand::Easy, DifficultyBand::Medium) => 0.5,
        (DifficultyBand::Medium, DifficultyBand::Easy | DifficultyBand::Hard) => 0.25,
        _ => 0.0,
    }
}

/// +1 for preferred, -1 for avoided, 0 otherwise or when listed as both.
pub(crate) fn preference_signal(preferences: Option<&Preferences>, category: Category) -> f32 {
    let Some(preferences) = preferences else {
        return 0.0;
    };
    match (preferences.prefers(category), preferences.avoids(category)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "older occurrences map linearly onto the freshness scale"
)]
fn position_signal(index: usize) -> f32 {
    index.min(RECENT_TASK_WINDOW) as f32 / RECENT_TASK_WINDOW as f32
}
