//! Command-line interface for Dutyshare's chore recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod prefer;
mod recommend;
mod source;
mod stats;

pub use error::CliError;

use prefer::{PreferArgs, run_prefer};
use recommend::{RecommendArgs, run_recommend};
use stats::{StatsArgs, run_stats};

const ARG_SPACE: &str = "space";
const ARG_USER: &str = "user";
const ARG_DATABASE: &str = "database";
const ARG_SNAPSHOT: &str = "snapshot";
const ARG_PREFERENCES: &str = "preferences";
const ARG_LIMIT: &str = "limit";
const ARG_PREFER: &str = "prefer";
const ARG_AVOID: &str = "avoid";
const ENV_RECOMMEND_SPACE: &str = "DUTYSHARE_CMDS_RECOMMEND_SPACE";
const ENV_RECOMMEND_USER: &str = "DUTYSHARE_CMDS_RECOMMEND_USER";
const ENV_STATS_SPACE: &str = "DUTYSHARE_CMDS_STATS_SPACE";
const ENV_STATS_USER: &str = "DUTYSHARE_CMDS_STATS_USER";
const ENV_PREFER_PREFERENCES: &str = "DUTYSHARE_CMDS_PREFER_PREFERENCES";

/// Run the Dutyshare CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// space data cannot be read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Stats(args) => run_stats(args),
        Command::Prefer(args) => run_prefer(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dutyshare",
    about = "Fair chore recommendations for shared living spaces",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a space's open chores for one member.
    Recommend(RecommendArgs),
    /// Show a member's fairness statistics.
    Stats(StatsArgs),
    /// Write a member's category preferences.
    Prefer(PreferArgs),
}

#[cfg(test)]
mod tests;
