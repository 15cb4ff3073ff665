use crate::{Category, DifficultyBand};

/// Lifecycle state of a chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TaskStatus {
    /// Waiting to be claimed or started.
    #[default]
    Todo,
    /// Claimed and under way.
    InProgress,
    /// Completed; points have been awarded.
    Done,
}

impl TaskStatus {
    /// Return the status as stored upstream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("unknown task status '{s}'")),
        }
    }
}

/// A chore in a shared space.
///
/// Difficulty sits on a `1..=10` scale and doubles as the number of points
/// awarded on completion. Timestamps are seconds since the UNIX epoch.
///
/// # Examples
/// ```
/// use dutyshare_core::{Category, DifficultyBand, Task};
///
/// let task = Task::new("t-1", "flat-9", "Empty the bins", Category::Trash, 2);
///
/// assert!(task.is_open());
/// assert_eq!(task.points(), 2);
/// assert_eq!(task.band(), DifficultyBand::Easy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Unique identifier.
    pub id: String,
    /// Space the task belongs to.
    pub space_id: String,
    /// Short human-readable title.
    pub title: String,
    /// Chore category.
    pub category: Category,
    /// Difficulty and point value.
    pub difficulty: u8,
    /// Lifecycle state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: TaskStatus,
    /// Member currently holding the task, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub assigned_to: Option<String>,
    /// Creation time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: i64,
    /// Completion time, once done.
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed_at: Option<i64>,
}

impl Task {
    /// Construct an open, unassigned task.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        space_id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        difficulty: u8,
    ) -> Self {
        Self {
            id: id.into(),
            space_id: space_id.into(),
            title: title.into(),
            category,
            difficulty,
            status: TaskStatus::Todo,
            assigned_to: None,
            created_at: 0,
            completed_at: None,
        }
    }

    /// Set the creation timestamp while returning `self` for chaining.
    #[must_use]
    pub const fn created_at(mut self, timestamp: i64) -> Self {
        self.created_at = timestamp;
        self
    }

    /// Mark the task as completed by `user_id` at `timestamp`.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::{Category, Task, TaskStatus};
    ///
    /// let task = Task::new("t-2", "flat-9", "Mop", Category::Sweeping, 5)
    ///     .completed_by("ana", 1_700_000_000);
    /// assert_eq!(task.status, TaskStatus::Done);
    /// assert_eq!(task.assigned_to.as_deref(), Some("ana"));
    /// ```
    #[must_use]
    pub fn completed_by(mut self, user_id: impl Into<String>, timestamp: i64) -> Self {
        self.status = TaskStatus::Done;
        self.assigned_to = Some(user_id.into());
        self.completed_at = Some(timestamp);
        self
    }

    /// Points awarded when the task is completed.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.difficulty
    }

    /// Difficulty band of the task.
    #[must_use]
    pub const fn band(&self) -> DifficultyBand {
        DifficultyBand::of(self.difficulty)
    }

    /// Whether the task can still be claimed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Todo) && self.assigned_to.is_none()
    }
}
