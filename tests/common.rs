// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup, fixed dates, and history/input constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `progress_engine`
//!
//! Every fixture is anchored to a fixed calendar date so results are
//! reproducible regardless of when the suite runs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use progress_engine::models::{
    BodyMetricEntry, ContextFactors, CurrentMetrics, ExerciseRecord, ExperienceLevel,
    HistoricalData, PredictionInput, UserGoals, WorkoutEntry,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Day zero of every fixture history
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 7, 0, 0).unwrap()
}

/// `start()` plus `days`
pub fn day(days: i64) -> DateTime<Utc> {
    start() + Duration::days(days)
}

/// Body-metric series from `(day, weight)` pairs
pub fn weigh_ins(points: &[(i64, f64)]) -> Vec<BodyMetricEntry> {
    points
        .iter()
        .map(|&(offset, weight)| BodyMetricEntry {
            date: day(offset),
            weight,
            body_fat_percentage: None,
        })
        .collect()
}

/// Body-metric series from `(day, weight, body_fat)` triples
pub fn body_scans(points: &[(i64, f64, f64)]) -> Vec<BodyMetricEntry> {
    points
        .iter()
        .map(|&(offset, weight, body_fat)| BodyMetricEntry {
            date: day(offset),
            weight,
            body_fat_percentage: Some(body_fat),
        })
        .collect()
}

/// Session with a single exercise at `load` for 5x5
pub fn lift(offset: i64, exercise: &str, load: f64) -> WorkoutEntry {
    WorkoutEntry {
        date: day(offset),
        exercises: vec![ExerciseRecord {
            name: exercise.to_owned(),
            weight: load,
            reps: 5,
            sets: 5,
        }],
        duration_minutes: Some(60),
        total_volume: None,
    }
}

/// Session known only by its total volume
pub fn session(offset: i64, volume: f64) -> WorkoutEntry {
    WorkoutEntry {
        date: day(offset),
        exercises: Vec::new(),
        duration_minutes: Some(45),
        total_volume: Some(volume),
    }
}

/// Minimal valid input: a current weight and nothing else
pub fn input_with_weight(weight: f64, as_of: DateTime<Utc>) -> PredictionInput {
    PredictionInput {
        user_id: None,
        as_of,
        historical_data: HistoricalData::default(),
        current_metrics: CurrentMetrics {
            weight: Some(weight),
            ..CurrentMetrics::default()
        },
        goals: UserGoals::default(),
        context: None,
    }
}

/// Context carrying only an experience tier
pub fn experience(level: ExperienceLevel) -> ContextFactors {
    ContextFactors {
        experience_level: level,
        ..ContextFactors::default()
    }
}

/// A well-populated weight-loss user used by property tests
pub fn active_cutting_user() -> PredictionInput {
    let mut input = input_with_weight(86.2, day(56));
    input.historical_data = HistoricalData {
        workouts: (0..16)
            .map(|i| lift(i * 3 + 8, "Squat", 5.0f64.mul_add((i / 4) as f64, 100.0)))
            .collect(),
        nutrition: Vec::new(),
        body_metrics: weigh_ins(&[
            (0, 90.0),
            (7, 89.4),
            (14, 89.1),
            (21, 88.5),
            (28, 88.0),
            (35, 87.6),
            (42, 87.1),
            (49, 86.7),
            (56, 86.2),
        ]),
        adherence_rate: 0.85,
        streak_history: vec![12, 20, 41],
    };
    input.current_metrics.consistency_score = 78.0;
    input.current_metrics.strength_levels = [("Squat", 115.0)].into_iter().collect();
    input.goals.goal_type = progress_engine::models::GoalType::WeightLoss;
    input.goals.target_weight = Some(80.0);
    input.goals.target_date = Some(day(56 + 7 * 20));
    input.context = Some(experience(ExperienceLevel::Intermediate));
    input
}
