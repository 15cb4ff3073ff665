//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

#[cfg(feature = "serde")]
use crate::{Category, SpaceSnapshot};
use crate::{MemberPoints, Task};

/// Space used by [`sample_snapshot`].
pub const SAMPLE_SPACE: &str = "flat-9";

/// A small flat with three members and a mix of open and completed chores.
///
/// `ana` is behind the average and last did a hard kitchen job; `bo` is
/// ahead; `cy` has never completed anything.
#[cfg(feature = "serde")]
#[must_use]
pub fn sample_snapshot() -> SpaceSnapshot {
    SpaceSnapshot::new(
        vec![
            Task::new("bins", SAMPLE_SPACE, "Take out the bins", Category::Trash, 2).created_at(300),
            Task::new("hob", SAMPLE_SPACE, "Scrub the hob", Category::Kitchen, 5).created_at(200),
            Task::new("loo", SAMPLE_SPACE, "Clean the loo", Category::Washroom, 8).created_at(100),
            Task::new("oven", SAMPLE_SPACE, "Degrease the oven", Category::Kitchen, 8)
                .completed_by("ana", 90),
            Task::new("mop", SAMPLE_SPACE, "Mop the hallway", Category::Sweeping, 4)
                .completed_by("ana", 40),
            Task::new("sheets", SAMPLE_SPACE, "Wash sheets", Category::Laundry, 6)
                .completed_by("bo", 80),
        ],
        vec![
            MemberPoints::new("ana", SAMPLE_SPACE, 12),
            MemberPoints::new("bo", SAMPLE_SPACE, 60),
            MemberPoints::new("cy", SAMPLE_SPACE, 0),
        ],
    )
}

/// Create the `tasks` and `space_members` tables at `path` and insert rows.
///
/// # Errors
/// Propagates any `rusqlite` failure.
#[cfg(feature = "store-sqlite")]
pub fn write_space_database(
    path: &std::path::Path,
    tasks: &[Task],
    members: &[MemberPoints],
) -> rusqlite::Result<()> {
    let connection = rusqlite::Connection::open(path)?;
    connection.execute_batch(
        "CREATE TABLE tasks (
            id TEXT PRIMARY KEY,
            space_id TEXT NOT NULL,
            title TEXT NOT NULL,
            category TEXT,
            difficulty INTEGER NOT NULL,
            status TEXT NOT NULL,
            assigned_to TEXT,
            created_at INTEGER,
            completed_at INTEGER
        );
        CREATE TABLE space_members (
            user_id TEXT NOT NULL,
            space_id TEXT NOT NULL,
            total_points INTEGER,
            PRIMARY KEY (user_id, space_id)
        );",
    )?;
    for task in tasks {
        connection.execute(
            "INSERT INTO tasks (id, space_id, title, category, difficulty, status, assigned_to,
                created_at, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                task.id,
                task.space_id,
                task.title,
                task.category.as_str(),
                task.difficulty,
                task.status.as_str(),
                task.assigned_to,
                task.created_at,
                task.completed_at,
            ],
        )?;
    }
    for member in members {
        connection.execute(
            "INSERT INTO space_members (user_id, space_id, total_points) VALUES (?1, ?2, ?3)",
            rusqlite::params![member.user_id, member.space_id, member.total_points],
        )?;
    }
    Ok(())
}
