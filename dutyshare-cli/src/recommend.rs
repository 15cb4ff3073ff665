//! Recommend command implementation for the Dutyshare CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dutyshare_core::{Preferences, Recommender, TaskRecommendation};
use dutyshare_scorer::{FairnessScorer, FairnessWeights, load_preferences};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_DATABASE, ARG_LIMIT, ARG_PREFERENCES, ARG_SNAPSHOT, ARG_SPACE, ARG_USER, CliError,
    ENV_RECOMMEND_SPACE, ENV_RECOMMEND_USER,
    source::{SpaceSource, write_json},
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the open chores of a space for one member. Tasks and \
                 members come from an exported SQLite database or a JSON \
                 snapshot; preferences are read from an optional local file.",
    about = "Recommend open chores for a member"
)]
#[ortho_config(prefix = "DUTYSHARE")]
pub(crate) struct RecommendArgs {
    /// Space to rank tasks in.
    #[arg(long = ARG_SPACE, value_name = "id")]
    #[serde(default)]
    pub(crate) space: Option<String>,
    /// Member to rank tasks for.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Path to an exported SQLite space database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Path to a JSON space snapshot.
    #[arg(long = ARG_SNAPSHOT, value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Path to the member's preference file.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Print at most this many recommendations.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Score of a task when every factor is neutral.
    #[arg(long = "baseline-weight", value_name = "points")]
    #[serde(default)]
    pub(crate) baseline_weight: Option<f32>,
    /// Weight of the workload balance factor.
    #[arg(long = "workload-weight", value_name = "points")]
    #[serde(default)]
    pub(crate) workload_weight: Option<f32>,
    /// Weight of the difficulty rotation factor.
    #[arg(long = "rotation-weight", value_name = "points")]
    #[serde(default)]
    pub(crate) rotation_weight: Option<f32>,
    /// Weight of the category repetition factor.
    #[arg(long = "repetition-weight", value_name = "points")]
    #[serde(default)]
    pub(crate) repetition_weight: Option<f32>,
    /// Weight of the preference factor.
    #[arg(long = "preference-weight", value_name = "points")]
    #[serde(default)]
    pub(crate) preference_weight: Option<f32>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }

    fn weights(&self) -> FairnessWeights {
        let defaults = FairnessWeights::default();
        FairnessWeights {
            baseline: self.baseline_weight.unwrap_or(defaults.baseline),
            workload: self.workload_weight.unwrap_or(defaults.workload),
            rotation: self.rotation_weight.unwrap_or(defaults.rotation),
            repetition: self.repetition_weight.unwrap_or(defaults.repetition),
            preference: self.preference_weight.unwrap_or(defaults.preference),
        }
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) source: SpaceSource,
    pub(crate) space: String,
    pub(crate) user: String,
    pub(crate) preferences: Option<Utf8PathBuf>,
    pub(crate) limit: Option<usize>,
    pub(crate) weights: FairnessWeights,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let weights = args.weights().validate()?;
        let space = args.space.ok_or(CliError::MissingArgument {
            field: ARG_SPACE,
            env: ENV_RECOMMEND_SPACE,
        })?;
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_USER,
            env: ENV_RECOMMEND_USER,
        })?;
        let source = SpaceSource::from_options(args.database, args.snapshot)?;
        Ok(Self {
            source,
            space,
            user,
            preferences: args.preferences,
            limit: args.limit,
            weights,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate()?;
    let ranked = execute_recommend(&config)?;
    write_json(writer, &ranked)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<Vec<TaskRecommendation>, CliError> {
    let preferences = config.preferences.as_deref().and_then(lenient_preferences);
    let inputs = config
        .source
        .gather(&config.space, &config.user, preferences)?;
    let scorer = FairnessScorer::new(config.weights)?;
    let mut ranked = scorer.recommend(&inputs.tasks, &inputs.context, &inputs.roster);
    if let Some(limit) = config.limit {
        ranked.truncate(limit);
    }
    Ok(ranked)
}

/// Preferences are optional, so an unreadable file only costs the nudge.
fn lenient_preferences(path: &Utf8Path) -> Option<Preferences> {
    match load_preferences(path) {
        Ok(preferences) => preferences,
        Err(err) => {
            log::warn!("ignoring preferences: {err}");
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
