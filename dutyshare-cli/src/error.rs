//! Error types emitted by the Dutyshare CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dutyshare_core::SnapshotError;
use dutyshare_scorer::{FairnessWeightsError, PreferencesError};
use thiserror::Error;

/// Errors emitted by the Dutyshare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Neither a database nor a snapshot was named.
    #[error("no space data source (set --{database} or --{snapshot})")]
    MissingSource {
        database: &'static str,
        snapshot: &'static str,
    },
    /// Both a database and a snapshot were named.
    #[error("--{database} and --{snapshot} are mutually exclusive")]
    ConflictingSources {
        database: &'static str,
        snapshot: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A category name on the command line is not one the engine knows.
    #[error("unknown category {raw:?} in --{field}")]
    UnknownCategory { field: &'static str, raw: String },
    /// Scoring weights failed validation.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(#[from] FairnessWeightsError),
    /// Opening the snapshot file failed.
    #[error("failed to open space snapshot at {path:?}: {source}")]
    OpenSnapshot {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Decoding or reading the snapshot failed.
    #[error("failed to read space snapshot at {path:?}: {source}")]
    ReadSnapshot {
        path: Utf8PathBuf,
        #[source]
        source: SnapshotError,
    },
    /// Opening or querying the SQLite space database failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    SpaceDatabase(#[from] dutyshare_core::SqliteSpaceStoreError),
    /// Writing the preference file failed.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
