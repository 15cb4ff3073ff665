//! Error types raised while configuring the scorer or handling preference
//! files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Reasons a [`FairnessWeights`](crate::FairnessWeights) set is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum FairnessWeightsError {
    /// A weight was NaN or infinite.
    #[error("weight `{field}` must be finite")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
    },
    /// A weight was below zero.
    #[error("weight `{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the offending weight.
        field: &'static str,
        /// Value supplied.
        value: f32,
    },
    /// The best possible score would exceed the maximum.
    #[error("weights can reach {ceiling}, above the maximum score of {max}")]
    CeilingTooHigh {
        /// Highest score the weights could produce.
        ceiling: f32,
        /// Maximum allowed score.
        max: f32,
    },
    /// The worst possible score would drop below zero.
    #[error("weights can fall to {floor}, below zero")]
    FloorBelowZero {
        /// Lowest score the weights could produce.
        floor: f32,
    },
}

/// Errors raised while reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// Opening or inspecting the preference file failed.
    #[error("failed to read preference file at {path}")]
    ReadFile {
        /// Preference file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The preference file did not contain valid JSON.
    #[error("failed to decode preference file at {path}")]
    Decode {
        /// Preference file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the parent directory for the preference file failed.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the preference file failed.
    #[error("failed to write preference file at {path}")]
    WriteFile {
        /// Preference file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising preferences failed.
    #[error("failed to serialise preferences into {path}")]
    Encode {
        /// Preference file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
