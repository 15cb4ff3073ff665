//! Core domain types for the Dutyshare engine.
//!
//! The crate models chores, members' fairness statistics and the data the
//! recommender consumes. It defines the [`Recommender`] seam implemented by
//! scoring crates and the [`SpaceStore`] seam implemented by data backends.
//! Scoring itself lives elsewhere; everything here is plain data plus
//! read-only store access.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod context;
mod inputs;
mod preferences;
mod recommendation;
mod recommender;
mod stats;
pub mod store;
mod task;

pub use category::{Category, DifficultyBand};
pub use context::{FairnessContext, RECENT_TASK_WINDOW};
pub use inputs::RecommendationInputs;
pub use preferences::Preferences;
pub use recommendation::{Factor, FactorBreakdown, Reason, TaskRecommendation};
pub use recommender::{MAX_SCORE, Recommender};
pub use stats::{FairnessStats, roster_mean_points};
#[cfg(feature = "serde")]
pub use store::{SnapshotError, SpaceSnapshot};
pub use store::{MemberPoints, SpaceStore};
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteSpaceStore, SqliteSpaceStoreError};
pub use task::{Task, TaskStatus};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
