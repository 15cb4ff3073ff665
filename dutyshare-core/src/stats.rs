//! Per-member fairness statistics.
//!
//! Stats are a read-only snapshot derived from completed task history each
//! time recommendations are requested. The scorer never writes them back.

use crate::{DifficultyBand, Task};

/// Accumulated workload of one member within one space.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FairnessStats {
    /// Member the stats describe.
    pub user_id: String,
    /// Space the stats are scoped to.
    pub space_id: String,
    /// Cumulative points earned.
    pub total_points: u32,
    /// Number of completed tasks.
    pub tasks_completed: u32,
    /// Completed tasks with difficulty of 3 or less.
    pub easy_tasks: u32,
    /// Completed tasks with difficulty between 4 and 6.
    pub medium_tasks: u32,
    /// Completed tasks with difficulty above 6.
    pub hard_tasks: u32,
    /// Mean difficulty of completed tasks, `0.0` without history.
    pub avg_difficulty: f32,
    /// Completion time of the latest task, in seconds since the UNIX epoch.
    pub last_task_date: Option<i64>,
}

impl FairnessStats {
    /// Build a roster row that carries only a point total.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::FairnessStats;
    ///
    /// let stats = FairnessStats::with_points("bo", "flat-9", 120);
    /// assert_eq!(stats.total_points, 120);
    /// assert_eq!(stats.tasks_completed, 0);
    /// ```
    #[must_use]
    pub fn with_points(
        user_id: impl Into<String>,
        space_id: impl Into<String>,
        total_points: u32,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            space_id: space_id.into(),
            total_points,
            ..Self::default()
        }
    }

    /// Derive stats from a member's completed tasks.
    ///
    /// Points are the sum of difficulties. Tasks without a completion time
    /// still count towards totals but never set `last_task_date`.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::{Category, FairnessStats, Task};
    ///
    /// let history = [
    ///     Task::new("a", "flat-9", "Bins", Category::Trash, 2).completed_by("ana", 10),
    ///     Task::new("b", "flat-9", "Oven", Category::Kitchen, 8).completed_by("ana", 20),
    /// ];
    /// let stats = FairnessStats::from_history("ana", "flat-9", &history);
    ///
    /// assert_eq!(stats.total_points, 10);
    /// assert_eq!(stats.easy_tasks, 1);
    /// assert_eq!(stats.hard_tasks, 1);
    /// assert_eq!(stats.avg_difficulty, 5.0);
    /// assert_eq!(stats.last_task_date, Some(20));
    /// ```
    #[must_use]
    pub fn from_history(
        user_id: impl Into<String>,
        space_id: impl Into<String>,
        completed: &[Task],
    ) -> Self {
        let mut stats = Self::with_points(user_id, space_id, 0);
        for task in completed {
            stats.record(task);
        }
        stats.avg_difficulty = mean_difficulty(stats.total_points, stats.tasks_completed);
        stats
    }

    fn record(&mut self, task: &Task) {
        self.total_points = self.total_points.saturating_add(u32::from(task.points()));
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        let band = match task.band() {
            DifficultyBand::Easy => &mut self.easy_tasks,
            DifficultyBand::Medium => &mut self.medium_tasks,
            DifficultyBand::Hard => &mut self.hard_tasks,
        };
        *band = band.saturating_add(1);
        if let Some(at) = task.completed_at {
            self.last_task_date = Some(self.last_task_date.map_or(at, |seen| seen.max(at)));
        }
    }
}

/// Mean of the point totals across a roster.
///
/// Returns `None` for an empty roster so callers can stay neutral instead
/// of dividing by zero.
///
/// # Examples
/// ```
/// use dutyshare_core::{FairnessStats, roster_mean_points};
///
/// let roster = [
///     FairnessStats::with_points("ana", "s", 40),
///     FairnessStats::with_points("bo", "s", 80),
/// ];
/// assert_eq!(roster_mean_points(&roster), Some(60.0));
/// assert_eq!(roster_mean_points(&[]), None);
/// ```
#[must_use]
pub fn roster_mean_points(roster: &[FairnessStats]) -> Option<f32> {
    if roster.is_empty() {
        return None;
    }
    let total: u64 = roster.iter().map(|row| u64::from(row.total_points)).sum();
    let count = u64::try_from(roster.len()).unwrap_or(u64::MAX);
    Some(ratio(total, count))
}

fn mean_difficulty(total_points: u32, tasks_completed: u32) -> f32 {
    if tasks_completed == 0 {
        return 0.0;
    }
    ratio(u64::from(total_points), u64::from(tasks_completed))
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "point totals stay far below the f64 mantissa and the mean is reported as f32"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "means of u32-sized totals fit comfortably in f32"
)]
fn ratio(numerator: u64, denominator: u64) -> f32 {
    (numerator as f64 / denominator as f64) as f32
}
