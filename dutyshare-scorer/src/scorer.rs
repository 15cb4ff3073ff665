//! The fairness scorer.

use dutyshare_core::{
    Factor, FactorBreakdown, FairnessContext, FairnessStats, RECENT_TASK_WINDOW, Reason,
    Recommender, Task, TaskRecommendation,
};

use crate::{FairnessWeights, FairnessWeightsError, factors::RunFactors};

/// Task-specific factors in reason priority order.
const REASON_PRIORITY: [Factor; 3] = [Factor::Rotation, Factor::Repetition, Factor::Preference];

/// Scores chores as a weighted sum of workload, rotation, repetition and
/// preference signals.
///
/// The scorer is stateless apart from its validated weights, so one
/// instance can be shared across threads.
///
/// # Examples
/// ```
/// use dutyshare_core::{Category, FairnessContext, FairnessStats, Reason, Recommender, Task};
/// use dutyshare_scorer::FairnessScorer;
///
/// let last = Task::new("t-0", "flat-9", "Oven", Category::Kitchen, 8).completed_by("ana", 10);
/// let context = FairnessContext::new("ana", FairnessStats::with_points("ana", "flat-9", 0))
///     .with_recent_tasks(vec![last]);
/// let roster = [
///     FairnessStats::with_points("ana", "flat-9", 0),
///     FairnessStats::with_points("bo", "flat-9", 200),
/// ];
/// let tasks = [
///     Task::new("t-1", "flat-9", "Hob", Category::Kitchen, 5),
///     Task::new("t-2", "flat-9", "Bins", Category::Trash, 2),
/// ];
///
/// let ranked = FairnessScorer::default().recommend(&tasks, &context, &roster);
///
/// assert_eq!(ranked[0].task.id, "t-2");
/// assert_eq!(ranked[0].reason, Reason::ChangeOfPace);
/// assert!(ranked[0].score > ranked[1].score);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FairnessScorer {
    weights: FairnessWeights,
}

impl FairnessScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`FairnessWeightsError`] when the weights could produce a
    /// score outside `0.0..=100.0`.
    pub fn new(weights: FairnessWeights) -> Result<Self, FairnessWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> FairnessWeights {
        self.weights
    }

    fn score_task(&self, task: &Task, run: &RunFactors<'_>, new_member: bool) -> TaskRecommendation {
        let breakdown = run.breakdown(task, self.weights);
        let score = <Self as Recommender>::sanitise(total(self.weights.baseline, breakdown));
        TaskRecommendation {
            task: task.clone(),
            score,
            reason: select_reason(breakdown, new_member),
            breakdown,
        }
    }
}

impl Recommender for FairnessScorer {
    fn recommend(
        &self,
        tasks: &[Task],
        context: &FairnessContext,
        roster: &[FairnessStats],
    ) -> Vec<TaskRecommendation> {
        if tasks.is_empty() {
            return Vec::new();
        }
        if !context.has_user() {
            log::warn!("scoring without a user id; workload factor is neutral");
        }
        if context.recent_tasks.len() > RECENT_TASK_WINDOW {
            log::warn!(
                "recent history holds {} tasks; only the latest {RECENT_TASK_WINDOW} are considered",
                context.recent_tasks.len()
            );
        }
        log::debug!(
            "scoring {} tasks for {} against {} roster rows",
            tasks.len(),
            context.user_id,
            roster.len()
        );

        let run = RunFactors::new(tasks, context, roster);
        let new_member = context.is_new_member();
        let mut ranked: Vec<TaskRecommendation> = tasks
            .iter()
            .map(|task| self.score_task(task, &run, new_member))
            .collect();
        // `sort_by` is stable, so ties keep the caller's newest-first order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        log::debug!(
            "ranked {} tasks for {}; workload signal {}",
            ranked.len(),
            context.user_id,
            run.workload()
        );
        ranked
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the score is the baseline plus each factor's contribution"
)]
fn total(baseline: f32, breakdown: FactorBreakdown) -> f32 {
    baseline + breakdown.workload + breakdown.rotation + breakdown.repetition + breakdown.preference
}

/// Pick the explanation for a task.
///
/// The largest strictly positive task-specific contribution wins, earlier
/// factors in [`REASON_PRIORITY`] winning ties. Workload is the same for
/// every candidate, so it only explains a task when nothing task-specific
/// stands out.
pub(crate) fn select_reason(breakdown: FactorBreakdown, new_member: bool) -> Reason {
    let mut best: Option<(Factor, f32)> = None;
    for factor in REASON_PRIORITY {
        let value = breakdown.get(factor);
        if value > best.map_or(0.0, |(_, top)| top) {
            best = Some((factor, value));
        }
    }
    if let Some((factor, _)) = best {
        return Reason::from(factor);
    }
    if breakdown.workload > 0.0 {
        Reason::BalancesWorkload
    } else if new_member {
        Reason::GettingStarted
    } else {
        Reason::UpForGrabs
    }
}
