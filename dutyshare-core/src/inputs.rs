//! Assemble scorer inputs from a [`SpaceStore`].
//!
//! Gathering is the only step that performs I/O. It produces a consistent
//! snapshot the scorer can rank without touching the store again.

use crate::{
    FairnessContext, FairnessStats, MemberPoints, Preferences, RECENT_TASK_WINDOW, SpaceStore,
    Task,
};

/// Candidate tasks, requesting member context and roster for one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationInputs {
    /// Open, unassigned tasks of the space, newest first.
    pub tasks: Vec<Task>,
    /// The requesting member's context.
    pub context: FairnessContext,
    /// One stats row per member of the space.
    pub roster: Vec<FairnessStats>,
}

impl RecommendationInputs {
    /// Read everything needed to rank tasks for `user_id` in `space_id`.
    ///
    /// The member's stats are derived from their full completed history;
    /// `total_points` comes from the membership row when one exists, since
    /// that ledger is authoritative. A member missing from the roster keeps
    /// the points derived from history.
    ///
    /// # Errors
    /// Propagates the store's read errors.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::{Category, MemberPoints, RecommendationInputs, SpaceSnapshot, Task};
    ///
    /// let snapshot = SpaceSnapshot::new(
    ///     vec![
    ///         Task::new("bins", "flat-9", "Bins", Category::Trash, 2),
    ///         Task::new("oven", "flat-9", "Oven", Category::Kitchen, 8).completed_by("ana", 90),
    ///     ],
    ///     vec![MemberPoints::new("ana", "flat-9", 8), MemberPoints::new("bo", "flat-9", 20)],
    /// );
    /// let inputs = RecommendationInputs::gather(&snapshot, "flat-9", "ana", None)
    ///     .expect("snapshot reads are infallible");
    ///
    /// assert_eq!(inputs.tasks.len(), 1);
    /// assert_eq!(inputs.roster.len(), 2);
    /// assert_eq!(inputs.context.stats.tasks_completed, 1);
    /// ```
    pub fn gather<S: SpaceStore + ?Sized>(
        store: &S,
        space_id: &str,
        user_id: &str,
        preferences: Option<Preferences>,
    ) -> Result<Self, S::Error> {
        let tasks = store.open_tasks(space_id)?;
        let members = store.members(space_id)?;
        let history = store.completed_tasks(space_id, user_id)?;

        let mut stats = FairnessStats::from_history(user_id, space_id, &history);
        if let Some(member) = members.iter().find(|member| member.user_id == user_id) {
            stats.total_points = member.total_points;
        } else {
            log::warn!("user {user_id} is not a member of space {space_id}; using history points");
        }

        let roster = members.iter().map(roster_row).collect();
        let recent: Vec<Task> = history.into_iter().take(RECENT_TASK_WINDOW).collect();

        let mut context = FairnessContext::new(user_id, stats).with_recent_tasks(recent);
        context.preferences = preferences;

        log::debug!(
            "gathered {} open tasks and {} members for {user_id} in {space_id}",
            tasks.len(),
            members.len()
        );

        Ok(Self {
            tasks,
            context,
            roster,
        })
    }

    /// Mean point total across the roster, if the roster is not empty.
    #[must_use]
    pub fn roster_mean_points(&self) -> Option<f32> {
        crate::roster_mean_points(&self.roster)
    }
}

fn roster_row(member: &MemberPoints) -> FairnessStats {
    FairnessStats::with_points(
        member.user_id.as_str(),
        member.space_id.as_str(),
        member.total_points,
    )
}
