//! Fairness scoring for Dutyshare chores.
//!
//! The crate ranks open chores for one member of a shared space. Each task
//! starts from a baseline and is pushed up or down by four independent
//! signals:
//! - **Workload balance**: members behind the space average get a uniform
//!   boost; members ahead are dampened.
//! - **Difficulty rotation**: after a hard chore, easier ones score higher,
//!   and after an easy chore, harder ones do.
//! - **Category repetition**: repeating the category just completed is
//!   penalised; categories not done recently are favoured.
//! - **Preference**: a small nudge for preferred categories and against
//!   avoided ones.
//!
//! Scoring is a pure function of its inputs. The crate also reads and
//! writes the optional per-member preference file.
//!
//! # Examples
//!
//! ```
//! use dutyshare_core::{Category, FairnessContext, FairnessStats, Task};
//! use dutyshare_scorer::calculate_task_recommendations;
//!
//! let context = FairnessContext::new("ana", FairnessStats::with_points("ana", "flat-9", 10));
//! let roster = [FairnessStats::with_points("ana", "flat-9", 10)];
//! let tasks = [Task::new("t-1", "flat-9", "Bins", Category::Trash, 2)];
//!
//! let ranked = calculate_task_recommendations(&tasks, &context, &roster);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].reason_message(), "Great way to get started");
//! ```

#![forbid(unsafe_code)]

use dutyshare_core::{FairnessContext, FairnessStats, Recommender, Task, TaskRecommendation};

mod error;
mod factors;
mod preferences;
mod scorer;
mod weights;

pub use error::{FairnessWeightsError, PreferencesError};
pub use preferences::{load_preferences, write_preferences};
pub use scorer::FairnessScorer;
pub use weights::FairnessWeights;

/// Rank `tasks` for the member in `context` using the default weights.
///
/// `tasks` must already be limited to open, unassigned chores of one space,
/// newest first; ties keep that order. An empty slice yields an empty list.
#[must_use]
pub fn calculate_task_recommendations(
    tasks: &[Task],
    context: &FairnessContext,
    roster: &[FairnessStats],
) -> Vec<TaskRecommendation> {
    FairnessScorer::default().recommend(tasks, context, roster)
}

#[cfg(test)]
mod tests;
