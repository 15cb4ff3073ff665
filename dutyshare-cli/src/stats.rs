//! Stats command implementation for the Dutyshare CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use dutyshare_core::FairnessStats;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_DATABASE, ARG_SNAPSHOT, ARG_SPACE, ARG_USER, CliError, ENV_STATS_SPACE, ENV_STATS_USER,
    source::{SpaceSource, write_json},
};

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the fairness statistics derived for one member from \
                  their completed chores, alongside the space's average \
                  point total and every member's points.",
    about = "Show a member's fairness statistics"
)]
#[ortho_config(prefix = "DUTYSHARE")]
pub(crate) struct StatsArgs {
    /// Space the member belongs to.
    #[arg(long = ARG_SPACE, value_name = "id")]
    #[serde(default)]
    pub(crate) space: Option<String>,
    /// Member to describe.
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
}

impl StatsArgs {
    pub(crate) fn into_config(self) -> Result<StatsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StatsConfig::try_from(merged)
    }
}

/// Resolved `stats` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsConfig {
    pub(crate) source: SpaceSource,
    pub(crate) space: String,
    pub(crate) user: String,
}

impl TryFrom<StatsArgs> for StatsConfig {
    type Error = CliError;

    fn try_from(args: StatsArgs) -> Result<Self, Self::Error> {
        let space = args.space.ok_or(CliError::MissingArgument {
            field: ARG_SPACE,
            env: ENV_STATS_SPACE,
        })?;
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_USER,
            env: ENV_STATS_USER,
        })?;
        let source = SpaceSource::from_options(args.database, args.snapshot)?;
        Ok(Self {
            source,
            space,
            user,
        })
    }
}

/// What `stats` prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StatsReport {
    /// The member's stats, derived from history.
    pub(crate) stats: FairnessStats,
    /// Mean point total across the roster, absent for an empty roster.
    pub(crate) roster_mean_points: Option<f32>,
    /// Point totals of every member.
    pub(crate) members: Vec<FairnessStats>,
}

pub(super) fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_stats_with(args, &mut stdout)
}

pub(super) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.source.validate()?;
    let report = execute_stats(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_stats(config: &StatsConfig) -> Result<StatsReport, CliError> {
    let inputs = config.source.gather(&config.space, &config.user, None)?;
    let roster_mean_points = inputs.roster_mean_points();
    Ok(StatsReport {
        stats: inputs.context.stats,
        roster_mean_points,
        members: inputs.roster,
    })
}
