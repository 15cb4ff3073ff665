//! Prefer command implementation for the Dutyshare CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use dutyshare_core::{Category, Preferences};
use dutyshare_scorer::write_preferences;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_AVOID, ARG_PREFER, ARG_PREFERENCES, CliError, ENV_PREFER_PREFERENCES, source::write_json,
};

/// CLI arguments for the `prefer` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Record which chore categories a member likes or would \
                  rather skip. The file is replaced on every run; pass \
                  neither list to clear it.",
    about = "Write a member's category preferences"
)]
#[ortho_config(prefix = "DUTYSHARE")]
pub(crate) struct PreferArgs {
    /// Path to the member's preference file.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Comma-separated categories the member prefers.
    #[arg(long = ARG_PREFER, value_name = "categories")]
    #[serde(default)]
    pub(crate) prefer: Option<String>,
    /// Comma-separated categories the member avoids.
    #[arg(long = ARG_AVOID, value_name = "categories")]
    #[serde(default)]
    pub(crate) avoid: Option<String>,
}

impl PreferArgs {
    pub(crate) fn into_config(self) -> Result<PreferConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PreferConfig::try_from(merged)
    }
}

/// Resolved `prefer` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreferConfig {
    pub(crate) path: Utf8PathBuf,
    pub(crate) preferences: Preferences,
}

impl TryFrom<PreferArgs> for PreferConfig {
    type Error = CliError;

    fn try_from(args: PreferArgs) -> Result<Self, Self::Error> {
        let path = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_PREFER_PREFERENCES,
        })?;
        let preferred = parse_categories(args.prefer.as_deref(), ARG_PREFER)?;
        let avoided = parse_categories(args.avoid.as_deref(), ARG_AVOID)?;
        let preferences = avoided.into_iter().fold(
            preferred
                .into_iter()
                .fold(Preferences::new(), Preferences::prefer),
            Preferences::avoid,
        );
        Ok(Self { path, preferences })
    }
}

/// Split a comma-separated list into categories.
///
/// Unlike stored data, names typed by the member must match a known
/// category; blank entries are skipped.
pub(crate) fn parse_categories(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Vec<Category>, CliError> {
    raw.into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            Category::ALL
                .into_iter()
                .find(|category| category.as_str().eq_ignore_ascii_case(name))
                .ok_or_else(|| CliError::UnknownCategory {
                    field,
                    raw: name.to_owned(),
                })
        })
        .collect()
}

pub(super) fn run_prefer(args: PreferArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_prefer_with(args, &mut stdout)
}

pub(super) fn run_prefer_with(args: PreferArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_preferences(&config.path, &config.preferences)?;
    log::debug!("wrote preferences to {}", config.path);
    write_json(writer, &config.preferences)
}
