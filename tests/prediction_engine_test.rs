// ABOUTME: End-to-end tests for the prediction orchestrator
// ABOUTME: Reference scenarios, boundary validation, determinism, batch order and output properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, Duration, Utc};
use common::{
    active_cutting_user, body_scans, day, experience, init_test_logging, input_with_weight,
    session, weigh_ins,
};
use progress_engine::config::PredictionConfig;
use progress_engine::errors::ErrorCode;
use progress_engine::parse_prediction_input;
use progress_engine::intelligence::plateau_detector::WEIGHT_STAGNATION_FACTOR;
use progress_engine::intelligence::{
    GoalTargetKind, PlateauRisk, PredictionEngine, PredictionResult, ProgressPredictor,
    Trajectory,
};
use progress_engine::models::{
    ContextFactors, ExperienceLevel, GoalType, PredictionInput, StrengthLevels,
};
use uuid::Uuid;

fn predict(input: &PredictionInput) -> PredictionResult {
    PredictionEngine::new().generate_predictions(input).unwrap()
}

fn scenario_a() -> PredictionInput {
    let mut input = input_with_weight(78.0, day(28));
    input.historical_data.body_metrics = weigh_ins(&[(0, 80.0), (28, 78.0)]);
    input.historical_data.adherence_rate = 0.9;
    input.current_metrics.consistency_score = 85.0;
    input.goals.goal_type = GoalType::WeightLoss;
    input.goals.target_weight = Some(70.0);
    input
}

fn assert_result_properties(result: &PredictionResult) {
    assert!((0.0..=1.0).contains(&result.confidence));
    assert!((0.0..=0.95).contains(&result.goal_achievement.probability_of_success));
    for pair in result.milestones.windows(2) {
        assert!(pair[0].predicted_date <= pair[1].predicted_date);
    }
    let rate = result.weight.adjusted_weekly_rate;
    for pair in result.weight.projections.windows(2) {
        if rate > 0.0 {
            assert!(pair[1].weight >= pair[0].weight);
        } else if rate < 0.0 {
            assert!(pair[1].weight <= pair[0].weight);
        }
    }
}

#[test]
fn test_scenario_a_steady_weight_loss() {
    init_test_logging();
    let result = predict(&scenario_a());

    assert!((result.weight.weekly_rate - -0.5).abs() < 1e-9);
    assert!(matches!(
        result.goal_achievement.current_trajectory,
        Trajectory::OnTrack | Trajectory::Ahead
    ));
    let probability = result.goal_achievement.probability_of_success;
    assert!((0.79..=0.95).contains(&probability), "got {probability}");
    assert_eq!(result.generated_at, day(28));
    assert_result_properties(&result);
}

#[test]
fn test_scenario_a_with_generous_deadline_is_ahead() {
    let mut input = scenario_a();
    input.goals.target_date = Some(day(28) + Duration::weeks(24));

    let result = predict(&input);

    assert_eq!(result.goal_achievement.current_trajectory, Trajectory::Ahead);
}

#[test]
fn test_scenario_b_beginner_without_workouts() {
    let mut input = input_with_weight(75.0, day(0));
    input.current_metrics.strength_levels = StrengthLevels::new().with("bench", 60.0);
    input.context = Some(experience(ExperienceLevel::Beginner));

    let result = predict(&input);
    let bench = result.strength.get("bench").unwrap();

    assert!((bench.base_monthly_rate - 2.0).abs() < f64::EPSILON);
    assert_eq!(bench.projections.len(), 6);
    for pair in bench.projections.windows(2) {
        assert!(pair[1].load > pair[0].load);
    }
}

#[test]
fn test_scenario_c_flat_weight_and_volume() {
    let mut input = input_with_weight(80.0, day(49));
    input.historical_data.body_metrics =
        weigh_ins(&(0..8).map(|week| (week * 7, 80.0)).collect::<Vec<_>>());
    input.historical_data.workouts = (0..8).map(|week| session(week * 7, 6000.0)).collect();

    let result = predict(&input);

    assert_eq!(result.plateau.risk, PlateauRisk::High);
    assert!(result
        .plateau
        .factors
        .contains(&WEIGHT_STAGNATION_FACTOR.to_owned()));
    // High plateau risk feeds the deload recommendation
    assert!(result
        .recommendations
        .iter()
        .any(|text| text.contains("deload week")));
}

#[test]
fn test_scenario_d_no_goals() {
    let result = predict(&input_with_weight(80.0, day(0)));
    let goal = &result.goal_achievement;

    assert_eq!(goal.estimated_achievement_date, None);
    assert!(goal.probability_of_success.abs() < f64::EPSILON);
    assert!(goal
        .adjustments_needed
        .iter()
        .any(|text| text.to_lowercase().contains("no goals set")));
}

#[test]
fn test_missing_weight_is_rejected() {
    let mut input = input_with_weight(80.0, day(0));
    input.current_metrics.weight = None;

    let error = PredictionEngine::new()
        .generate_predictions(&input)
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(
        error.context.resource_id.as_deref(),
        Some("current_metrics.weight")
    );
}

#[test]
fn test_non_positive_weight_is_rejected() {
    for weight in [0.0, -70.0, f64::NAN] {
        let input = input_with_weight(weight, day(0));
        let error = PredictionEngine::new()
            .generate_predictions(&input)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let mut input = scenario_a();
    input.historical_data.adherence_rate = 1.7;
    input.current_metrics.consistency_score = 140.0;
    input.context = Some(ContextFactors {
        sleep_quality: Some(42),
        ..ContextFactors::default()
    });

    let result = predict(&input);

    assert!((0.0..=1.0).contains(&result.confidence));
    assert!((result.goal_achievement.probability_of_success - 0.95).abs() < 1e-9);
    assert!(!result
        .recommendations
        .iter()
        .any(|text| text.contains("sleep quality")));
}

#[test]
fn test_history_order_does_not_matter() {
    let sorted = active_cutting_user();
    let mut shuffled = sorted.clone();
    shuffled.historical_data.body_metrics.reverse();
    shuffled.historical_data.workouts.rotate_left(5);

    assert_eq!(predict(&sorted), predict(&shuffled));
}

#[test]
fn test_predictions_are_deterministic() {
    let input = active_cutting_user();

    let first = predict(&input);
    let second = predict(&input);

    assert_eq!(first, second);
    assert_result_properties(&first);
}

#[test]
fn test_body_fat_goal_uses_body_fat_series() {
    let mut input = input_with_weight(82.0, day(42));
    input.historical_data.body_metrics =
        body_scans(&[(0, 84.0, 22.0), (21, 83.0, 21.0), (42, 82.0, 20.0)]);
    input.goals.target_body_fat = Some(17.0);

    let result = predict(&input);
    let goal = &result.goal_achievement;

    assert_eq!(goal.target_kind, Some(GoalTargetKind::BodyFat));
    // -2% over 6 weeks: 3% more takes 9 weeks
    assert!((goal.weeks_to_target.unwrap() - 9.0).abs() < 1e-9);
}

#[test]
fn test_batch_preserves_input_order() {
    let engine = PredictionEngine::new();
    let mut broken = input_with_weight(80.0, day(3));
    broken.current_metrics.weight = None;
    let mut first = active_cutting_user();
    first.user_id = Some(Uuid::new_v4());
    let inputs = vec![first, broken, input_with_weight(64.0, day(9))];

    let results = engine.generate_batch(&inputs);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().generated_at, day(56));
    assert_eq!(
        results[1].as_ref().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(results[2].as_ref().unwrap().generated_at, day(9));
    assert_eq!(
        results[0].as_ref().unwrap(),
        &engine.generate_predictions(&inputs[0]).unwrap()
    );
}

#[test]
fn test_custom_config_changes_prior() {
    let mut config = PredictionConfig::default();
    config.strength.default_monthly_rate = 4.0;
    let engine = PredictionEngine::with_config(config).unwrap();
    let mut input = input_with_weight(75.0, day(0));
    input.current_metrics.strength_levels = StrengthLevels::new().with("squat", 100.0);
    input.context = Some(experience(ExperienceLevel::Beginner));

    let result = engine.generate_predictions(&input).unwrap();

    assert!((result.strength.get("squat").unwrap().monthly_progression_rate - 6.0).abs() < 1e-12);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = PredictionConfig::default();
    config.goals.ahead_ratio = 2.0;

    let error = PredictionEngine::with_config(config).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_result_serializes_with_snake_case_names() {
    let result = predict(&scenario_a());

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["goal_achievement"]["current_trajectory"], "on_track");
    assert_eq!(json["plateau"]["risk"], "low");
    assert_eq!(json["weight"]["trend"], "losing");
    assert!(json["milestones"].is_array());
}

#[test]
fn test_properties_hold_across_varied_users() {
    let mut sparse = input_with_weight(95.0, day(0));
    sparse.goals.goal_type = GoalType::Endurance;

    let mut gaining = input_with_weight(70.0, day(35));
    gaining.historical_data.body_metrics = weigh_ins(&[(0, 68.0), (14, 69.0), (35, 70.0)]);
    gaining.historical_data.adherence_rate = 0.6;
    gaining.current_metrics.consistency_score = 65.0;
    gaining.goals.goal_type = GoalType::MuscleGain;
    gaining.goals.target_weight = Some(75.0);
    gaining.goals.target_date = Some(day(35 + 7 * 30));
    gaining.historical_data.streak_history = vec![3, 29];

    for input in [sparse, gaining, scenario_a(), active_cutting_user()] {
        assert_result_properties(&predict(&input));
    }
}

#[test]
fn test_as_of_near_calendar_limits_is_rejected() {
    init_test_logging();
    let engine = PredictionEngine::new();

    for as_of in [
        DateTime::<Utc>::MAX_UTC - Duration::days(10),
        DateTime::<Utc>::MIN_UTC + Duration::days(10),
    ] {
        let mut input = active_cutting_user();
        input.as_of = as_of;

        let error = engine.generate_predictions(&input).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_far_future_as_of_from_json_fails_only_its_batch_entry() {
    let far_future = parse_prediction_input(
        r#"{ "as_of": "+262142-12-01T00:00:00Z", "current_metrics": { "weight": 80.0 } }"#,
    )
    .unwrap();

    let results = PredictionEngine::new().generate_batch(&[active_cutting_user(), far_future]);

    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}
