//! Facade crate for the Dutyshare chore recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the fairness
//! scorer and the SQLite space store behind feature flags.

#![forbid(unsafe_code)]

pub use dutyshare_core::{
    Category, DifficultyBand, FactorBreakdown, FairnessContext, FairnessStats, MemberPoints,
    Preferences, RECENT_TASK_WINDOW, Reason, RecommendationInputs, Recommender, SpaceStore, Task,
    TaskRecommendation, TaskStatus,
};

#[cfg(feature = "serde")]
pub use dutyshare_core::{SnapshotError, SpaceSnapshot};

#[cfg(feature = "store-sqlite")]
pub use dutyshare_core::{SqliteSpaceStore, SqliteSpaceStoreError};

#[cfg(feature = "scorer")]
pub use dutyshare_scorer::{
    FairnessScorer, FairnessWeights, FairnessWeightsError, calculate_task_recommendations,
};
