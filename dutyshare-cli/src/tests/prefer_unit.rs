//! Unit tests for category parsing and the prefer command.

use super::helpers::SpaceFiles;
use super::*;
use crate::prefer::{PreferArgs, PreferConfig, parse_categories};
use dutyshare_core::{Category, Preferences};
use rstest::rstest;

#[rstest]
#[case::single(Some("kitchen"), vec![Category::Kitchen])]
#[case::mixed_case_and_spaces(Some(" Laundry ,DISHES"), vec![Category::Laundry, Category::Dishes])]
#[case::blank_entries(Some("trash,,"), vec![Category::Trash])]
#[case::absent(None, vec![])]
fn parses_comma_separated_categories(#[case] raw: Option<&str>, #[case] expected: Vec<Category>) {
    let parsed = parse_categories(raw, ARG_PREFER).expect("valid list");
    assert_eq!(parsed, expected);
}

#[rstest]
fn unknown_names_are_rejected() {
    let err = parse_categories(Some("kitchen,gardening"), ARG_AVOID).expect_err("unknown");
    match err {
        CliError::UnknownCategory { field, raw } => {
            assert_eq!(field, ARG_AVOID);
            assert_eq!(raw, "gardening");
        }
        other => panic!("expected UnknownCategory, found {other:?}"),
    }
}

#[rstest]
fn missing_path_names_the_environment_variable() {
    let args = PreferArgs {
        prefer: Some("kitchen".to_owned()),
        ..PreferArgs::default()
    };
    let err = PreferConfig::try_from(args).expect_err("missing path");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PREFERENCES);
            assert_eq!(env, ENV_PREFER_PREFERENCES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn duplicates_collapse() {
    let files = SpaceFiles::new();
    let args = PreferArgs {
        preferences: Some(files.preferences()),
        prefer: Some("kitchen,kitchen".to_owned()),
        avoid: Some("washroom".to_owned()),
    };
    let config = PreferConfig::try_from(args).expect("config");
    assert_eq!(
        config.preferences,
        Preferences::new()
            .prefer(Category::Kitchen)
            .avoid(Category::Washroom)
    );
}
