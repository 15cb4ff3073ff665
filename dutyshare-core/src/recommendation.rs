//! Ranked output of the fairness scorer.

use crate::Task;

/// One of the four independent scoring factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Factor {
    /// Member's points compared with the space average.
    Workload,
    /// Difficulty band compared with the member's last task.
    Rotation,
    /// Category compared with the member's recent history.
    Repetition,
    /// Category compared with the member's stated preferences.
    Preference,
}

/// Short explanation attached to every recommendation.
///
/// The set of templates is fixed so callers can localise or style them.
///
/// # Examples
/// ```
/// use dutyshare_core::Reason;
///
/// assert_eq!(Reason::ChangeOfPace.message(), "Nice change of pace");
/// assert_eq!(Reason::FreshChore.to_string(), "You haven't done this in a while");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Reason {
    /// The member is behind the space average.
    BalancesWorkload,
    /// The difficulty differs from what the member just did.
    ChangeOfPace,
    /// The member has not done this category recently.
    FreshChore,
    /// The category is on the member's preferred list.
    MatchesPreference,
    /// The member has no history yet.
    GettingStarted,
    /// Nothing in particular stands out.
    UpForGrabs,
}

impl Reason {
    /// Human-readable text for the reason.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BalancesWorkload => "Balances your workload",
            Self::ChangeOfPace => "Nice change of pace",
            Self::FreshChore => "You haven't done this in a while",
            Self::MatchesPreference => "Matches your preference",
            Self::GettingStarted => "Great way to get started",
            Self::UpForGrabs => "Up for grabs",
        }
    }

    /// The factor a reason reports on, if it reports on one.
    #[must_use]
    pub const fn factor(self) -> Option<Factor> {
        match self {
            Self::BalancesWorkload => Some(Factor::Workload),
            Self::ChangeOfPace => Some(Factor::Rotation),
            Self::FreshChore => Some(Factor::Repetition),
            Self::MatchesPreference => Some(Factor::Preference),
            Self::GettingStarted | Self::UpForGrabs => None,
        }
    }
}

impl From<Factor> for Reason {
    fn from(factor: Factor) -> Self {
        match factor {
            Factor::Workload => Self::BalancesWorkload,
            Factor::Rotation => Self::ChangeOfPace,
            Factor::Repetition => Self::FreshChore,
            Factor::Preference => Self::MatchesPreference,
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Signed contribution of each factor, in score points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorBreakdown {
    /// Workload balance contribution.
    pub workload: f32,
    /// Difficulty rotation contribution.
    pub rotation: f32,
    /// Category repetition contribution.
    pub repetition: f32,
    /// Preference contribution.
    pub preference: f32,
}

impl FactorBreakdown {
    /// Contribution of a single factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f32 {
        match factor {
            Factor::Workload => self.workload,
            Factor::Rotation => self.rotation,
            Factor::Repetition => self.repetition,
            Factor::Preference => self.preference,
        }
    }
}

/// A candidate task with its score and explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskRecommendation {
    /// The scored task.
    pub task: Task,
    /// Match score in `0.0..=100.0`; only meaningful relative to siblings.
    pub score: f32,
    /// Dominant reason for the rank.
    pub reason: Reason,
    /// Per-factor contributions behind `score`.
    pub breakdown: FactorBreakdown,
}

impl TaskRecommendation {
    /// Text shown next to the recommendation.
    #[must_use]
    pub const fn reason_message(&self) -> &'static str {
        self.reason.message()
    }
}
