//! Behavioural tests for gathering recommendation inputs from SQLite.

use std::cell::RefCell;

use dutyshare_core::{
    Category, RecommendationInputs, SpaceSnapshot, SqliteSpaceStore, SqliteSpaceStoreError,
    test_support::{sample_snapshot, write_space_database},
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Shared state for space store scenarios.
struct SpaceWorld {
    temp_dir: TempDir,
    inputs: RefCell<Option<RecommendationInputs>>,
    error: RefCell<Option<SqliteSpaceStoreError>>,
}

impl SpaceWorld {
    fn database_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("space.db")
    }

    fn inputs(&self) -> std::cell::Ref<'_, Option<RecommendationInputs>> {
        self.inputs.borrow()
    }
}

#[fixture]
fn world() -> SpaceWorld {
    SpaceWorld {
        temp_dir: TempDir::new().expect("create temp dir"),
        inputs: RefCell::new(None),
        error: RefCell::new(None),
    }
}

#[given("a space database for flat-9 with three members")]
fn given_database(world: &SpaceWorld) {
    let SpaceSnapshot { tasks, members } = sample_snapshot();
    write_space_database(&world.database_path(), &tasks, &members).expect("persist database");
}

#[given("no space database exists")]
fn given_no_database(world: &SpaceWorld) {
    assert!(!world.database_path().exists());
}

fn gather_for(world: &SpaceWorld, user_id: &str) {
    let store = SqliteSpaceStore::open(world.database_path()).expect("open store");
    let inputs = RecommendationInputs::gather(&store, "flat-9", user_id, None).expect("gather");
    world.inputs.replace(Some(inputs));
}

#[when("I gather inputs for ana in flat-9")]
fn gather_ana(world: &SpaceWorld) {
    gather_for(world, "ana");
}

#[when("I gather inputs for cy in flat-9")]
fn gather_cy(world: &SpaceWorld) {
    gather_for(world, "cy");
}

#[when("I open the space database")]
fn open_database(world: &SpaceWorld) {
    if let Err(err) = SqliteSpaceStore::open(world.database_path()) {
        world.error.replace(Some(err));
    }
}

#[then("three open tasks are gathered newest first")]
fn then_open_tasks(world: &SpaceWorld) {
    let inputs = world.inputs();
    let inputs = inputs.as_ref().expect("inputs gathered");
    let ids: Vec<&str> = inputs.tasks.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, ["bins", "hob", "loo"]);
}

#[then("the roster holds three members")]
fn then_roster(world: &SpaceWorld) {
    let inputs = world.inputs();
    let inputs = inputs.as_ref().expect("inputs gathered");
    assert_eq!(inputs.roster.len(), 3);
    assert_eq!(inputs.roster_mean_points(), Some(24.0));
}

#[then("ana's most recent task is the kitchen oven")]
fn then_recent(world: &SpaceWorld) {
    let inputs = world.inputs();
    let context = &inputs.as_ref().expect("inputs gathered").context;
    let recent = context.most_recent().expect("ana has history");
    assert_eq!(recent.id, "oven");
    assert_eq!(recent.category, Category::Kitchen);
    assert_eq!(context.stats.total_points, 12);
}

#[then("cy is treated as a new member")]
fn then_new_member(world: &SpaceWorld) {
    let inputs = world.inputs();
    let context = &inputs.as_ref().expect("inputs gathered").context;
    assert!(context.is_new_member());
    assert!(context.recent_tasks.is_empty());
}

#[then("opening fails with an open database error")]
fn then_open_error(world: &SpaceWorld) {
    let error = world.error.borrow();
    assert!(matches!(
        error.as_ref(),
        Some(SqliteSpaceStoreError::OpenDatabase { .. })
    ));
}

#[scenario(path = "tests/features/space_store.feature", index = 0)]
fn inputs_from_database(world: SpaceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/space_store.feature", index = 1)]
fn new_member_inputs(world: SpaceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/space_store.feature", index = 2)]
fn missing_database(world: SpaceWorld) {
    let _ = world;
}
