//! Unit coverage for ranking whole candidate lists.

use dutyshare_core::{
    Category, FairnessContext, FairnessStats, Preferences, Reason, Recommender, Task,
    TaskRecommendation,
};
use rstest::{fixture, rstest};

use crate::{FairnessScorer, FairnessWeights, calculate_task_recommendations};

const SPACE: &str = "flat-9";

fn open(id: &str, category: Category, difficulty: u8) -> Task {
    Task::new(id, SPACE, id, category, difficulty)
}

fn done(category: Category, difficulty: u8, at: i64) -> Task {
    Task::new(format!("done-{at}"), SPACE, "Done", category, difficulty).completed_by("ana", at)
}

fn roster(points: &[u32]) -> Vec<FairnessStats> {
    points
        .iter()
        .enumerate()
        .map(|(index, &total)| FairnessStats::with_points(format!("m{index}"), SPACE, total))
        .collect()
}

fn ids(ranked: &[TaskRecommendation]) -> Vec<&str> {
    ranked.iter().map(|rec| rec.task.id.as_str()).collect()
}

fn score_of(ranked: &[TaskRecommendation], id: &str) -> f32 {
    ranked
        .iter()
        .find(|rec| rec.task.id == id)
        .map(|rec| rec.score)
        .expect("task is ranked")
}

/// Member with no points in a space averaging 100, fresh from a hard
/// kitchen job.
#[fixture]
fn behind_after_hard_kitchen() -> FairnessContext {
    FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 0))
        .with_recent_tasks(vec![done(Category::Kitchen, 8, 100)])
}

#[rstest]
fn kitchen_then_trash_scenario(behind_after_hard_kitchen: FairnessContext) {
    let tasks = [open("1", Category::Kitchen, 5), open("2", Category::Trash, 2)];

    let ranked =
        calculate_task_recommendations(&tasks, &behind_after_hard_kitchen, &roster(&[0, 200]));

    assert_eq!(ids(&ranked), ["2", "1"]);
    assert_eq!(score_of(&ranked, "2"), 95.0);
    assert_eq!(score_of(&ranked, "1"), 71.25);
    let top = ranked.first().expect("two tasks ranked");
    assert!(matches!(
        top.reason,
        Reason::ChangeOfPace | Reason::FreshChore
    ));
    assert_eq!(top.breakdown.workload, 25.0);
}

#[rstest]
fn identical_tasks_without_history_tie_in_input_order() {
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 20));
    let tasks = [
        open("newer", Category::Dishes, 3),
        open("older", Category::Dishes, 3),
    ];

    let ranked = calculate_task_recommendations(&tasks, &context, &roster(&[20, 60]));

    assert_eq!(ids(&ranked), ["newer", "older"]);
    assert_eq!(score_of(&ranked, "newer"), score_of(&ranked, "older"));
    assert!(ranked
        .iter()
        .all(|rec| rec.reason == Reason::BalancesWorkload));
}

#[rstest]
fn history_free_member_at_average_gets_started() {
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 40));
    let ranked = calculate_task_recommendations(
        &[open("a", Category::Laundry, 6)],
        &context,
        &roster(&[40, 40]),
    );
    let only = ranked.first().expect("one task");
    assert_eq!(only.reason, Reason::GettingStarted);
    assert_eq!(only.score, 45.0);
}

#[rstest]
fn established_member_ahead_with_nothing_positive_is_up_for_grabs() {
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 200))
        .with_recent_tasks(vec![done(Category::Dishes, 2, 10)]);
    let ranked = calculate_task_recommendations(
        &[open("a", Category::Dishes, 1), open("b", Category::Trash, 3)],
        &context,
        &roster(&[200, 0]),
    );
    let dishes = ranked
        .iter()
        .find(|rec| rec.task.id == "a")
        .expect("dishes ranked");
    assert_eq!(dishes.reason, Reason::UpForGrabs);
}

#[rstest]
fn preferred_category_breaks_ties_but_avoided_stays_in_the_list() {
    let preferences = Preferences::new()
        .prefer(Category::Laundry)
        .avoid(Category::Washroom);
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 0))
        .with_preferences(preferences);
    let tasks = [
        open("loo", Category::Washroom, 5),
        open("plain", Category::Dusting, 5),
        open("wash", Category::Laundry, 5),
    ];

    let ranked = calculate_task_recommendations(&tasks, &context, &roster(&[0, 100]));

    assert_eq!(ids(&ranked), ["wash", "plain", "loo"]);
    let top = ranked.first().expect("ranked");
    assert_eq!(top.reason, Reason::MatchesPreference);
    // Avoidance is a nudge: a member far behind still sees the chore well
    // above the baseline.
    assert!(score_of(&ranked, "loo") > FairnessWeights::default().baseline);
}

#[rstest]
fn missing_user_id_neutralises_workload(behind_after_hard_kitchen: FairnessContext) {
    let context = FairnessContext {
        user_id: String::new(),
        ..behind_after_hard_kitchen
    };
    let ranked = calculate_task_recommendations(
        &[open("a", Category::Trash, 2)],
        &context,
        &roster(&[0, 200]),
    );
    assert!(ranked.iter().all(|rec| rec.breakdown.workload == 0.0));
}

#[rstest]
fn empty_roster_neutralises_workload(behind_after_hard_kitchen: FairnessContext) {
    let ranked =
        calculate_task_recommendations(&[open("a", Category::Trash, 2)], &behind_after_hard_kitchen, &[]);
    assert_eq!(ranked.first().map(|rec| rec.breakdown.workload), Some(0.0));
}

#[rstest]
fn only_the_latest_ten_tasks_count_for_freshness() {
    let mut history: Vec<Task> = (0..10)
        .map(|at| done(Category::Dishes, 2, 100 - at))
        .collect();
    history.push(done(Category::Laundry, 2, 1));
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 10))
        .with_recent_tasks(history);

    let ranked = calculate_task_recommendations(
        &[open("wash", Category::Laundry, 2)],
        &context,
        &roster(&[10]),
    );

    let wash = ranked.first().expect("ranked");
    assert_eq!(wash.breakdown.repetition, 10.0);
    assert_eq!(wash.reason, Reason::FreshChore);
}

#[rstest]
fn custom_weights_change_the_scale() {
    let scorer = FairnessScorer::new(FairnessWeights {
        baseline: 50.0,
        workload: 50.0,
        rotation: 0.0,
        repetition: 0.0,
        preference: 0.0,
    })
    .expect("valid weights");
    let context = FairnessContext::new("ana", FairnessStats::with_points("ana", SPACE, 0));

    let ranked = scorer.recommend(&[open("a", Category::Trash, 2)], &context, &roster(&[0, 100]));

    assert_eq!(ranked.first().map(|rec| rec.score), Some(100.0));
}
