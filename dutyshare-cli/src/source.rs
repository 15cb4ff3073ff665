//! Resolve and read the space data source shared by `recommend` and `stats`.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use dutyshare_core::{Preferences, RecommendationInputs, SpaceSnapshot};
use dutyshare_fs::open_utf8_file;
use serde::Serialize;

use crate::{ARG_DATABASE, ARG_SNAPSHOT, CliError};

/// Where a command reads tasks and members from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SpaceSource {
    /// Exported SQLite database.
    Database(Utf8PathBuf),
    /// JSON snapshot document.
    Snapshot(Utf8PathBuf),
}

impl SpaceSource {
    /// Pick exactly one of the two source options.
    pub(crate) fn from_options(
        database: Option<Utf8PathBuf>,
        snapshot: Option<Utf8PathBuf>,
    ) -> Result<Self, CliError> {
        match (database, snapshot) {
            (Some(path), None) => Ok(Self::Database(path)),
            (None, Some(path)) => Ok(Self::Snapshot(path)),
            (Some(_), Some(_)) => Err(CliError::ConflictingSources {
                database: ARG_DATABASE,
                snapshot: ARG_SNAPSHOT,
            }),
            (None, None) => Err(CliError::MissingSource {
                database: ARG_DATABASE,
                snapshot: ARG_SNAPSHOT,
            }),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Database(path) => require_existing(path, ARG_DATABASE),
            Self::Snapshot(path) => require_existing(path, ARG_SNAPSHOT),
        }
    }

    /// Read everything needed to score `user_id` in `space_id`.
    pub(crate) fn gather(
        &self,
        space_id: &str,
        user_id: &str,
        preferences: Option<Preferences>,
    ) -> Result<RecommendationInputs, CliError> {
        match self {
            Self::Database(path) => gather_from_database(path, space_id, user_id, preferences),
            Self::Snapshot(path) => {
                let snapshot = load_snapshot(path)?;
                RecommendationInputs::gather(&snapshot, space_id, user_id, preferences).map_err(
                    |source| CliError::ReadSnapshot {
                        path: path.clone(),
                        source,
                    },
                )
            }
        }
    }
}

#[cfg(feature = "store-sqlite")]
fn gather_from_database(
    path: &Utf8Path,
    space_id: &str,
    user_id: &str,
    preferences: Option<Preferences>,
) -> Result<RecommendationInputs, CliError> {
    let store = dutyshare_core::SqliteSpaceStore::open(path.as_std_path())?;
    RecommendationInputs::gather(&store, space_id, user_id, preferences).map_err(CliError::from)
}

#[cfg(not(feature = "store-sqlite"))]
fn gather_from_database(
    _path: &Utf8Path,
    _space_id: &str,
    _user_id: &str,
    _preferences: Option<Preferences>,
) -> Result<RecommendationInputs, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "reading a space database",
    })
}

/// Loads a JSON-encoded [`SpaceSnapshot`] from disk.
pub(crate) fn load_snapshot(path: &Utf8Path) -> Result<SpaceSnapshot, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    SpaceSnapshot::from_reader(BufReader::new(file)).map_err(|source| CliError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match dutyshare_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
