//! In-memory store loaded from a JSON snapshot of a space.

use std::io::Read;

use thiserror::Error;

use super::{MemberPoints, SpaceStore};
use crate::{Task, TaskStatus};

/// Error raised while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload was not a valid snapshot document.
    #[error("failed to decode space snapshot: {source}")]
    Decode {
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Tasks and members exported from the upstream database.
///
/// The document shape is `{ "tasks": [...], "members": [...] }`. Category
/// strings the engine does not know load as `other`.
///
/// # Examples
/// ```
/// use dutyshare_core::{SpaceSnapshot, SpaceStore};
///
/// let json = r#"{
///     "tasks": [
///         {"id": "t-1", "space_id": "flat-9", "title": "Bins", "category": "trash", "difficulty": 2}
///     ],
///     "members": [{"user_id": "ana", "space_id": "flat-9", "total_points": 12}]
/// }"#;
/// let snapshot = SpaceSnapshot::from_reader(json.as_bytes()).expect("valid snapshot");
///
/// assert_eq!(snapshot.open_tasks("flat-9").map(|t| t.len()).ok(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SpaceSnapshot {
    /// Every task in the export, whatever its state.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Every membership row in the export.
    #[serde(default)]
    pub members: Vec<MemberPoints>,
}

impl SpaceSnapshot {
    /// Construct a snapshot from tasks and members.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, members: Vec<MemberPoints>) -> Self {
        Self { tasks, members }
    }

    /// Decode a snapshot from JSON.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Decode`] when the payload is malformed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        serde_json::from_reader(reader).map_err(|source| SnapshotError::Decode { source })
    }
}

impl SpaceStore for SpaceSnapshot {
    type Error = SnapshotError;

    fn open_tasks(&self, space_id: &str) -> Result<Vec<Task>, Self::Error> {
        let mut open: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.space_id == space_id && task.is_open())
            .cloned()
            .collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(open)
    }

    fn members(&self, space_id: &str) -> Result<Vec<MemberPoints>, Self::Error> {
        Ok(self
            .members
            .iter()
            .filter(|member| member.space_id == space_id)
            .cloned()
            .collect())
    }

    fn completed_tasks(&self, space_id: &str, user_id: &str) -> Result<Vec<Task>, Self::Error> {
        let mut done: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| {
                task.space_id == space_id
                    && task.status == TaskStatus::Done
                    && task.assigned_to.as_deref() == Some(user_id)
            })
            .cloned()
            .collect();
        done.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::{fixture, rstest};

    #[fixture]
    fn snapshot() -> SpaceSnapshot {
        let mut claimed = Task::new("claimed", "flat-9", "Hoover", Category::Sweeping, 4);
        claimed.assigned_to = Some("bo".into());
        SpaceSnapshot::new(
            vec![
                Task::new("old", "flat-9", "Bins", Category::Trash, 2).created_at(10),
                Task::new("new", "flat-9", "Oven", Category::Kitchen, 8).created_at(30),
                Task::new("mid", "flat-9", "Dust", Category::Dusting, 3).created_at(20),
                Task::new("elsewhere", "flat-2", "Dust", Category::Dusting, 3).created_at(40),
                claimed,
                Task::new("d1", "flat-9", "Dishes", Category::Dishes, 2).completed_by("ana", 100),
                Task::new("d2", "flat-9", "Laundry", Category::Laundry, 5).completed_by("ana", 300),
                Task::new("d3", "flat-9", "Wash", Category::Washroom, 7).completed_by("bo", 200),
            ],
            vec![
                MemberPoints::new("ana", "flat-9", 7),
                MemberPoints::new("bo", "flat-9", 7),
                MemberPoints::new("cy", "flat-2", 0),
            ],
        )
    }

    #[rstest]
    fn open_tasks_are_filtered_and_newest_first(snapshot: SpaceSnapshot) {
        let ids: Vec<String> = snapshot
            .open_tasks("flat-9")
            .expect("snapshot reads are infallible")
            .into_iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[rstest]
    fn completed_tasks_are_per_member_and_most_recent_first(snapshot: SpaceSnapshot) {
        let ids: Vec<String> = snapshot
            .completed_tasks("flat-9", "ana")
            .expect("snapshot reads are infallible")
            .into_iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, ["d2", "d1"]);
    }

    #[rstest]
    fn members_are_scoped_to_the_space(snapshot: SpaceSnapshot) {
        let members = snapshot.members("flat-9").expect("members");
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|member| member.space_id == "flat-9"));
    }

    #[rstest]
    fn unknown_categories_load_as_other() {
        let json = r#"{"tasks": [{"id": "t", "space_id": "s", "title": "Garden",
            "category": "gardening", "difficulty": 4}]}"#;
        let snapshot = SpaceSnapshot::from_reader(json.as_bytes()).expect("decode snapshot");
        let task = snapshot.tasks.first().expect("one task");
        assert_eq!(task.category, Category::Other);
        assert!(task.is_open());
    }

    #[rstest]
    fn malformed_json_is_reported() {
        let err = SpaceSnapshot::from_reader("{ not json".as_bytes()).expect_err("invalid");
        assert!(matches!(err, SnapshotError::Decode { .. }));
    }
}
