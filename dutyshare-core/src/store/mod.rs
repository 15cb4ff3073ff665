//! Data access traits for tasks and space membership.
//!
//! The `SpaceStore` trait defines a read-only interface over the upstream
//! task, membership and history stores. The scorer never talks to a store
//! directly; callers gather a consistent snapshot first and pass plain data
//! in.

use crate::Task;

#[cfg(feature = "serde")]
mod snapshot;
#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "serde")]
pub use snapshot::{SnapshotError, SpaceSnapshot};
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteSpaceStore, SqliteSpaceStoreError};

/// A member's standing in a space.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberPoints {
    /// Member identifier.
    pub user_id: String,
    /// Space identifier.
    pub space_id: String,
    /// Points accumulated in the space.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_points: u32,
}

impl MemberPoints {
    /// Construct a membership row.
    pub fn new(user_id: impl Into<String>, space_id: impl Into<String>, total_points: u32) -> Self {
        Self {
            user_id: user_id.into(),
            space_id: space_id.into(),
            total_points,
        }
    }
}

/// Read-only access to a space's tasks and members.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use dutyshare_core::{Category, MemberPoints, SpaceStore, Task};
///
/// struct OneTask(Task);
///
/// impl SpaceStore for OneTask {
///     type Error = Infallible;
///
///     fn open_tasks(&self, space_id: &str) -> Result<Vec<Task>, Self::Error> {
///         Ok(std::iter::once(self.0.clone())
///             .filter(|task| task.space_id == space_id && task.is_open())
///             .collect())
///     }
///
///     fn members(&self, _space_id: &str) -> Result<Vec<MemberPoints>, Self::Error> {
///         Ok(Vec::new())
///     }
///
///     fn completed_tasks(&self, _space_id: &str, _user_id: &str) -> Result<Vec<Task>, Self::Error> {
///         Ok(Vec::new())
///     }
/// }
///
/// let store = OneTask(Task::new("t-1", "flat-9", "Bins", Category::Trash, 2));
/// assert_eq!(store.open_tasks("flat-9").map(|tasks| tasks.len()), Ok(1));
/// assert_eq!(store.open_tasks("flat-2").map(|tasks| tasks.len()), Ok(0));
/// ```
pub trait SpaceStore {
    /// Error raised when the backing store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return open, unassigned tasks of the space, newest first.
    fn open_tasks(&self, space_id: &str) -> Result<Vec<Task>, Self::Error>;

    /// Return one row per member of the space.
    fn members(&self, space_id: &str) -> Result<Vec<MemberPoints>, Self::Error>;

    /// Return tasks the member completed in the space, most recent first.
    fn completed_tasks(&self, space_id: &str, user_id: &str) -> Result<Vec<Task>, Self::Error>;
}
