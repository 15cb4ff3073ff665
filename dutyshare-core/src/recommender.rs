//! Rank open chores for a member.
//!
//! The `Recommender` trait turns a candidate list and a
//! [`FairnessContext`](crate::FairnessContext) into ordered
//! [`TaskRecommendation`](crate::TaskRecommendation)s.

use crate::{FairnessContext, FairnessStats, Task, TaskRecommendation};

/// Highest score a recommendation can carry.
pub const MAX_SCORE: f32 = 100.0;

/// Rank candidate tasks for one member.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single
/// recommender can serve concurrent renders. The method is infallible and
/// pure: identical inputs produce identical output.
///
/// Implementations must:
/// - Return one recommendation per candidate, preserving task identities.
/// - Sort by score, highest first, keeping input order between ties.
/// - Produce finite scores in `0.0..=MAX_SCORE`.
///
/// Use [`Recommender::sanitise`] to apply the score guards.
///
/// # Examples
///
/// ```rust
/// use dutyshare_core::{
///     Category, FactorBreakdown, FairnessContext, FairnessStats, Reason, Recommender, Task,
///     TaskRecommendation,
/// };
///
/// struct Flat;
///
/// impl Recommender for Flat {
///     fn recommend(
///         &self,
///         tasks: &[Task],
///         _context: &FairnessContext,
///         _roster: &[FairnessStats],
///     ) -> Vec<TaskRecommendation> {
///         tasks
///             .iter()
///             .map(|task| TaskRecommendation {
///                 task: task.clone(),
///                 score: 50.0,
///                 reason: Reason::UpForGrabs,
///                 breakdown: FactorBreakdown::default(),
///             })
///             .collect()
///     }
/// }
///
/// let tasks = [Task::new("t-1", "flat-9", "Bins", Category::Trash, 2)];
/// let context = FairnessContext::new("ana", FairnessStats::default());
/// let ranked = Flat.recommend(&tasks, &context, &[]);
/// assert_eq!(ranked.len(), 1);
/// ```
pub trait Recommender: Send + Sync {
    /// Rank `tasks` for the member described by `context`.
    ///
    /// `roster` holds one stats row per member of the space, including the
    /// requesting member.
    fn recommend(
        &self,
        tasks: &[Task],
        context: &FairnessContext,
        roster: &[FairnessStats],
    ) -> Vec<TaskRecommendation>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=MAX_SCORE`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
