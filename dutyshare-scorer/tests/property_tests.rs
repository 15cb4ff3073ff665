//! Property-based tests for the fairness scorer.
//!
//! # Invariants tested
//!
//! - **Identity preservation:** every candidate comes back exactly once.
//! - **Ordering:** scores are non-increasing, ties keep input order.
//! - **Determinism:** identical inputs give identical output.
//! - **Bounds:** scores are finite and within `0.0..=100.0`.
//! - **Workload monotonicity:** trailing further behind never lowers a score.
//! - **Repetition discouragement:** repeating the last category never wins.
//! - **Preference nudge:** a preferred task beats an otherwise equal one.


use std::collections::HashMap;

use dutyshare_core::{Preferences, Task};
use dutyshare_scorer::calculate_task_recommendations;
use proptest::prelude::*;

use proptest_support::{
    SPACE, category_strategy, context_for, history_strategy, preferences_strategy, roster_rows,
    roster_strategy, tasks_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn output_preserves_task_identities(
        tasks in tasks_strategy(0, 12),
        history in history_strategy(),
        preferences in preferences_strategy(),
        points in 0_u32..=500,
        others in roster_strategy(),
    ) {
        let context = context_for(points, history, preferences);
        let ranked = calculate_task_recommendations(&tasks, &context, &roster_rows(points, &others));

        prop_assert_eq!(ranked.len(), tasks.len());
        let mut input_ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        let mut output_ids: Vec<&str> = ranked.iter().map(|rec| rec.task.id.as_str()).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn output_is_sorted_and_stable(
        tasks in tasks_strategy(1, 12),
        history in history_strategy(),
        preferences in preferences_strategy(),
        points in 0_u32..=500,
        others in roster_strategy(),
    ) {
        let context = context_for(points, history, preferences);
        let ranked = calculate_task_recommendations(&tasks, &context, &roster_rows(points, &others));
        let position: HashMap<&str, usize> = tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| (task.id.as_str(), idx))
            .collect();

        for pair in ranked.windows(2) {
            let [higher, lower] = pair else { continue };
            prop_assert!(higher.score >= lower.score);
            if higher.score.total_cmp(&lower.score).is_eq() {
                prop_assert!(position[higher.task.id.as_str()] < position[lower.task.id.as_str()]);
            }
        }
    }

    #[test]
    fn scoring_is_deterministic_and_bounded(
        tasks in tasks_strategy(1, 12),
        history in history_strategy(),
        preferences in preferences_strategy(),
        points in 0_u32..=500,
        others in roster_strategy(),
    ) {
        let context = context_for(points, history, preferences);
        let roster = roster_rows(points, &others);

        let first = calculate_task_recommendations(&tasks, &context, &roster);
        let second = calculate_task_recommendations(&tasks, &context, &roster);

        prop_assert_eq!(&first, &second);
        for rec in &first {
            prop_assert!(rec.score.is_finite());
            prop_assert!((0.0..=100.0).contains(&rec.score));
        }
    }

    #[test]
    fn trailing_further_behind_never_lowers_a_score(
        tasks in tasks_strategy(1, 8),
        history in history_strategy(),
        preferences in preferences_strategy(),
        behind in 0_u32..=250,
        gap in 0_u32..=250,
        others in proptest::collection::vec(0_u32..=500, 1..=6),
    ) {
        let ahead = behind + gap;
        // Same roster for both runs so only the member's own points move.
        let roster = roster_rows(behind, &others);
        let lagging = calculate_task_recommendations(
            &tasks,
            &context_for(behind, history.clone(), preferences.clone()),
            &roster,
        );
        let leading = calculate_task_recommendations(
            &tasks,
            &context_for(ahead, history, preferences),
            &roster,
        );

        let leading_scores: HashMap<&str, f32> = leading
            .iter()
            .map(|rec| (rec.task.id.as_str(), rec.score))
            .collect();
        for rec in &lagging {
            prop_assert!(rec.score >= leading_scores[rec.task.id.as_str()]);
        }
    }

    #[test]
    fn repeating_the_last_category_never_scores_higher(
        last in category_strategy(),
        other in category_strategy(),
        difficulty in 1_u8..=10,
        history in history_strategy(),
        points in 0_u32..=500,
        others in roster_strategy(),
    ) {
        prop_assume!(last != other);
        let mut recent = vec![
            Task::new("latest", SPACE, "Latest", last, 5).completed_by("ana", 2_000),
        ];
        recent.extend(history);
        let context = context_for(points, recent, None);
        let tasks = [
            Task::new("repeat", SPACE, "Repeat", last, difficulty),
            Task::new("switch", SPACE, "Switch", other, difficulty),
        ];

        let ranked = calculate_task_recommendations(&tasks, &context, &roster_rows(points, &others));
        let score = |id: &str| ranked.iter().find(|rec| rec.task.id == id).map(|rec| rec.score);

        prop_assert!(score("repeat") <= score("switch"));
    }

    #[test]
    fn preferred_task_outranks_an_equivalent_one(
        preferred in category_strategy(),
        plain in category_strategy(),
        difficulty in 1_u8..=10,
        points in 0_u32..=500,
        others in roster_strategy(),
    ) {
        prop_assume!(preferred != plain);
        let context = context_for(points, Vec::new(), Some(Preferences::new().prefer(preferred)));
        let tasks = [
            Task::new("plain", SPACE, "Plain", plain, difficulty),
            Task::new("preferred", SPACE, "Preferred", preferred, difficulty),
        ];

        let ranked = calculate_task_recommendations(&tasks, &context, &roster_rows(points, &others));

        prop_assert_eq!(ranked.first().map(|rec| rec.task.id.as_str()), Some("preferred"));
    }
}

#[test]
fn empty_candidates_return_nothing() {
    let context = context_for(0, Vec::new(), None);
    let ranked = calculate_task_recommendations(&[], &context, &roster_rows(0, &[100]));
    assert!(ranked.is_empty());
}
