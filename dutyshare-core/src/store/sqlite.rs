//! SQLite-backed read access to an exported space database.
//!
//! The store expects two existing tables: `tasks` and `space_members`. It
//! opens the database read-only and never creates or migrates schema.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use rusqlite::{Connection, OpenFlags, Row, params};
use thiserror::Error;

use super::{MemberPoints, SpaceStore};
use crate::{Category, Task, TaskStatus};

const TASK_COLUMNS: &str =
    "id, space_id, title, category, difficulty, status, assigned_to, created_at, completed_at";

/// Error raised when reading tasks or members from SQLite.
#[derive(Debug, Error)]
pub enum SqliteSpaceStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A query could not be prepared or executed.
    #[error("failed to query {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored difficulty does not fit the `u8` scale.
    #[error("task {id} has invalid difficulty {raw}")]
    InvalidDifficulty {
        /// Identifier of the offending task.
        id: String,
        /// Raw value read from the database.
        raw: i64,
    },
    /// A stored status is not one the engine understands.
    #[error("task {id} has unknown status {raw:?}")]
    InvalidStatus {
        /// Identifier of the offending task.
        id: String,
        /// Raw value read from the database.
        raw: String,
    },
    /// A stored point total is negative or too large.
    #[error("member {user_id} has invalid point total {raw}")]
    InvalidPoints {
        /// Identifier of the offending member.
        user_id: String,
        /// Raw value read from the database.
        raw: i64,
    },
}

/// Read-only space store backed by SQLite.
pub struct SqliteSpaceStore {
    connection: Connection,
    path: PathBuf,
}

impl fmt::Debug for SqliteSpaceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteSpaceStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteSpaceStore {
    /// Open an existing database read-only.
    ///
    /// # Errors
    /// Returns [`SqliteSpaceStoreError::OpenDatabase`] when the file is
    /// missing or is not a SQLite database.
    pub fn open<P: AsRef<Path>>(database_path: P) -> Result<Self, SqliteSpaceStoreError> {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteSpaceStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    fn query_tasks(
        &self,
        operation: &'static str,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Task>, SqliteSpaceStoreError> {
        let query_error = |source| SqliteSpaceStoreError::Query { operation, source };
        let mut statement = self.connection.prepare(sql).map_err(query_error)?;
        let mut rows = statement.query(params).map_err(query_error)?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            let raw = RawTask::read(row).map_err(query_error)?;
            tasks.push(raw.into_task()?);
        }
        Ok(tasks)
    }
}

impl SpaceStore for SqliteSpaceStore {
    type Error = SqliteSpaceStoreError;

    fn open_tasks(&self, space_id: &str) -> Result<Vec<Task>, Self::Error> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE space_id = ?1 AND status = 'todo' AND assigned_to IS NULL
             ORDER BY created_at DESC, rowid ASC"
        );
        self.query_tasks("open tasks", &sql, params![space_id])
    }

    fn members(&self, space_id: &str) -> Result<Vec<MemberPoints>, Self::Error> {
        let query_error = |source| SqliteSpaceStoreError::Query {
            operation: "space members",
            source,
        };
        let mut statement = self
            .connection
            .prepare(
                "SELECT user_id, space_id, total_points FROM space_members
                 WHERE space_id = ?1 ORDER BY rowid ASC",
            )
            .map_err(query_error)?;
        let mut rows = statement.query(params![space_id]).map_err(query_error)?;
        let mut members = Vec::new();
        while let Some(row) = rows.next().map_err(query_error)? {
            let user_id: String = row.get(0).map_err(query_error)?;
            let space: String = row.get(1).map_err(query_error)?;
            let raw_points: Option<i64> = row.get(2).map_err(query_error)?;
            let raw = raw_points.unwrap_or(0);
            let total_points = u32::try_from(raw).map_err(|_| {
                SqliteSpaceStoreError::InvalidPoints {
                    user_id: user_id.clone(),
                    raw,
                }
            })?;
            members.push(MemberPoints {
                user_id,
                space_id: space,
                total_points,
            });
        }
        Ok(members)
    }

    fn completed_tasks(&self, space_id: &str, user_id: &str) -> Result<Vec<Task>, Self::Error> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE space_id = ?1 AND assigned_to = ?2 AND status = 'done'
             ORDER BY completed_at DESC, rowid ASC"
        );
        self.query_tasks("completed tasks", &sql, params![space_id, user_id])
    }
}

struct RawTask {
    id: String,
    space_id: String,
    title: String,
    category: Option<String>,
    difficulty: i64,
    status: String,
    assigned_to: Option<String>,
    created_at: Option<i64>,
    completed_at: Option<i64>,
}

impl RawTask {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            space_id: row.get(1)?,
            title: row.get(2)?,
            category: row.get(3)?,
            difficulty: row.get(4)?,
            status: row.get(5)?,
            assigned_to: row.get(6)?,
            created_at: row.get(7)?,
            completed_at: row.get(8)?,
        })
    }

    fn into_task(self) -> Result<Task, SqliteSpaceStoreError> {
        let difficulty =
            u8::try_from(self.difficulty).map_err(|_| SqliteSpaceStoreError::InvalidDifficulty {
                id: self.id.clone(),
                raw: self.difficulty,
            })?;
        let status =
            TaskStatus::from_str(&self.status).map_err(|_| SqliteSpaceStoreError::InvalidStatus {
                id: self.id.clone(),
                raw: self.status.clone(),
            })?;
        Ok(Task {
            id: self.id,
            space_id: self.space_id,
            title: self.title,
            category: self
                .category
                .as_deref()
                .map_or(Category::Other, Category::parse_lossy),
            difficulty,
            status,
            assigned_to: self.assigned_to,
            created_at: self.created_at.unwrap_or(0),
            completed_at: self.completed_at,
        })
    }
}
