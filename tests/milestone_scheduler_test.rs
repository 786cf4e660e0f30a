// ABOUTME: Integration tests for milestone scheduling
// ABOUTME: Covers weight thresholds, strength ladder rungs, streak rungs and date ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{day, init_test_logging};
use progress_engine::config::PredictionConfig;
use progress_engine::intelligence::{
    MilestoneInputs, MilestoneKind, MilestoneScheduler, StrengthPrediction, StrengthPredictor,
};
use progress_engine::models::{ExperienceLevel, StrengthLevels};

fn inputs(strength: &StrengthPrediction) -> MilestoneInputs<'_> {
    MilestoneInputs {
        current_weight: 87.0,
        weight_weekly_rate: -0.5,
        strength,
        current_streak: 45,
        adherence_rate: 0.8,
        as_of: day(0),
    }
}

#[test]
fn test_weight_targets_are_next_lower_multiples() {
    init_test_logging();
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);

    assert_eq!(scheduler.weight_targets(87.0), vec![85.0, 80.0]);
    assert_eq!(scheduler.weight_targets(83.0), vec![80.0]);
    assert_eq!(scheduler.weight_targets(80.0), vec![75.0, 70.0]);
    assert!(scheduler.weight_targets(4.0).is_empty());
}

#[test]
fn test_weight_milestones_follow_losing_trend() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPrediction::default();

    let milestones = scheduler.schedule(&inputs(&strength));
    let weight: Vec<_> = milestones
        .iter()
        .filter(|milestone| milestone.kind == MilestoneKind::Weight)
        .collect();

    assert_eq!(weight.len(), 2);
    assert_eq!(weight[0].title, "Reach 85 kg");
    assert!((weight[0].days_from_now - 28.0).abs() < 1e-9);
    assert_eq!(weight[0].predicted_date, day(28));
    assert!((weight[1].target_value - 80.0).abs() < f64::EPSILON);
    assert!((weight[1].days_from_now - 98.0).abs() < 1e-9);
    assert!(weight[0].confidence > weight[1].confidence);
}

#[test]
fn test_no_weight_milestones_when_gaining_or_flat() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPrediction::default();

    for rate in [0.4, 0.0] {
        let mut gaining = inputs(&strength);
        gaining.weight_weekly_rate = rate;
        let milestones = scheduler.schedule(&gaining);
        assert!(milestones
            .iter()
            .all(|milestone| milestone.kind != MilestoneKind::Weight));
    }
}

#[test]
fn test_streak_milestone_is_next_rung() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPrediction::default();

    let milestones = scheduler.schedule(&inputs(&strength));
    let streak = milestones
        .iter()
        .find(|milestone| milestone.kind == MilestoneKind::Streak)
        .unwrap();

    assert_eq!(streak.title, "60-day streak");
    assert!((streak.days_from_now - 15.0).abs() < f64::EPSILON);
    assert_eq!(streak.predicted_date, day(15));
    assert!((streak.confidence - 0.72).abs() < 1e-9);
}

#[test]
fn test_streak_beyond_ladder_has_no_milestone() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPrediction::default();
    let mut veteran = inputs(&strength);
    veteran.current_streak = 400;

    let milestones = scheduler.schedule(&veteran);

    assert!(milestones
        .iter()
        .all(|milestone| milestone.kind != MilestoneKind::Streak));
}

#[test]
fn test_strength_milestone_inverts_compounding() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPredictor::new(&config.strength).predict(
        &StrengthLevels::new().with("Bench", 95.0),
        &[],
        ExperienceLevel::Beginner,
        day(0),
    );

    let milestones = scheduler.schedule(&inputs(&strength));
    let bench = milestones
        .iter()
        .find(|milestone| milestone.kind == MilestoneKind::Strength)
        .unwrap();

    let expected_days = (100.0f64 / 95.0).ln() / 1.03f64.ln() * 30.44;
    assert_eq!(bench.title, "Bench 100 kg");
    assert_eq!(bench.exercise.as_deref(), Some("Bench"));
    assert!((bench.target_value - 100.0).abs() < f64::EPSILON);
    assert!((bench.days_from_now - expected_days).abs() < 1e-6);
}

#[test]
fn test_strength_above_ladder_has_no_milestone() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPredictor::new(&config.strength).predict(
        &StrengthLevels::new().with("deadlift", 320.0),
        &[],
        ExperienceLevel::Elite,
        day(0),
    );

    let milestones = scheduler.schedule(&inputs(&strength));

    assert!(milestones
        .iter()
        .all(|milestone| milestone.kind != MilestoneKind::Strength));
}

#[test]
fn test_milestones_are_sorted_by_date() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);
    let strength = StrengthPredictor::new(&config.strength).predict(
        &StrengthLevels::new()
            .with("bench", 95.0)
            .with("squat", 139.0)
            .with("row", 61.0),
        &[],
        ExperienceLevel::Intermediate,
        day(0),
    );

    let milestones = scheduler.schedule(&inputs(&strength));

    assert!(milestones.len() >= 5);
    for pair in milestones.windows(2) {
        assert!(pair[0].predicted_date <= pair[1].predicted_date);
    }
    assert!(milestones[0].predicted_date >= day(0));
    assert!(milestones.last().unwrap().predicted_date > day(0) + Duration::days(15));
}

#[test]
fn test_horizon_confidence_bounds() {
    let config = PredictionConfig::default();
    let scheduler = MilestoneScheduler::new(&config.milestones);

    assert!((scheduler.horizon_confidence(0.0) - 0.9).abs() < 1e-12);
    assert!((scheduler.horizon_confidence(365.0) - 0.1).abs() < 1e-12);
    assert!((scheduler.horizon_confidence(2000.0) - 0.1).abs() < 1e-12);
}
