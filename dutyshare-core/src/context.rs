//! Per-request fairness context for the member asking for recommendations.

use crate::{FairnessStats, Preferences, Task};

/// Number of recently completed tasks considered for rotation and
/// repetition checks.
pub const RECENT_TASK_WINDOW: usize = 10;

/// Everything the scorer needs to know about the requesting member.
///
/// The context is passed explicitly so scoring never reaches into session
/// or storage state.
///
/// # Examples
/// ```
/// use dutyshare_core::{Category, FairnessContext, FairnessStats, Task};
///
/// let last = Task::new("t-9", "flat-9", "Oven", Category::Kitchen, 8).completed_by("ana", 50);
/// let context = FairnessContext::new("ana", FairnessStats::with_points("ana", "flat-9", 8))
///     .with_recent_tasks(vec![last]);
///
/// assert_eq!(context.most_recent().map(|task| task.category), Some(Category::Kitchen));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FairnessContext {
    /// Member the recommendations are for.
    pub user_id: String,
    /// Recently completed tasks, most recent first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recent_tasks: Vec<Task>,
    /// The member's current stats.
    pub stats: FairnessStats,
    /// Optional category preferences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Option<Preferences>,
}

impl FairnessContext {
    /// Construct a context with no history and no preferences.
    #[must_use]
    pub fn new(user_id: impl Into<String>, stats: FairnessStats) -> Self {
        Self {
            user_id: user_id.into(),
            recent_tasks: Vec::new(),
            stats,
            preferences: None,
        }
    }

    /// Attach recent history, most recent first.
    #[must_use]
    pub fn with_recent_tasks(mut self, recent_tasks: Vec<Task>) -> Self {
        self.recent_tasks = recent_tasks;
        self
    }

    /// Attach preferences.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// The slice of history considered by the scorer.
    ///
    /// At most [`RECENT_TASK_WINDOW`] entries are returned.
    #[must_use]
    pub fn recent_window(&self) -> &[Task] {
        let end = self.recent_tasks.len().min(RECENT_TASK_WINDOW);
        self.recent_tasks.get(..end).unwrap_or_default()
    }

    /// The member's most recently completed task, if any.
    #[must_use]
    pub fn most_recent(&self) -> Option<&Task> {
        self.recent_tasks.first()
    }

    /// Whether the member has completed anything yet.
    #[must_use]
    pub fn is_new_member(&self) -> bool {
        self.recent_tasks.is_empty()
    }

    /// Whether the context names a member at all.
    #[must_use]
    pub fn has_user(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}
