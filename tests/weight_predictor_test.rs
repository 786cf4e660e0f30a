// ABOUTME: Integration tests for decayed linear weight projection
// ABOUTME: Covers flat histories, reliability discounting, decay, confidence and intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, init_test_logging, weigh_ins};
use progress_engine::config::PredictionConfig;
use progress_engine::intelligence::{WeightPredictor, WeightTrend};

#[test]
fn test_single_point_history_is_flat() {
    init_test_logging();
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);

    let prediction = predictor.predict(&weigh_ins(&[(0, 80.0)]), 80.0, 0.9, 90.0, day(0));

    assert!(prediction.weekly_rate.abs() < f64::EPSILON);
    assert_eq!(prediction.trend, WeightTrend::Stable);
    assert!(prediction.confidence_interval.width().abs() < f64::EPSILON);
    assert_eq!(prediction.projections.len(), 25);
    assert!(prediction
        .projections
        .iter()
        .all(|point| (point.weight - 80.0).abs() < f64::EPSILON));
}

#[test]
fn test_empty_history_is_flat() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);

    let prediction = predictor.predict(&[], 72.5, 0.0, 0.0, day(0));

    assert!((prediction.predicted_30_days - 72.5).abs() < f64::EPSILON);
    assert!((prediction.predicted_90_days - 72.5).abs() < f64::EPSILON);
    assert!(prediction.confidence_interval.width().abs() < f64::EPSILON);
}

#[test]
fn test_losing_trend_projects_downward_with_decay() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);
    let history = weigh_ins(&[(0, 80.0), (28, 78.0)]);

    let prediction = predictor.predict(&history, 78.0, 1.0, 100.0, day(28));

    assert!((prediction.weekly_rate - -0.5).abs() < 1e-9);
    assert!((prediction.adjusted_weekly_rate - -0.5).abs() < 1e-9);
    assert_eq!(prediction.trend, WeightTrend::Losing);

    for pair in prediction.projections.windows(2) {
        assert!(pair[1].weight < pair[0].weight);
    }
    assert!(prediction.predicted_30_days < 78.0);
    assert!(prediction.predicted_90_days < prediction.predicted_30_days);
    // Thirteen undecayed weeks would land at 71.5
    assert!(prediction.predicted_90_days > 71.5);
}

#[test]
fn test_headline_points_are_nearest_projection_days() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);
    let history = weigh_ins(&[(0, 80.0), (28, 78.0)]);

    let prediction = predictor.predict(&history, 78.0, 1.0, 100.0, day(28));

    let day_28 = prediction
        .projections
        .iter()
        .find(|point| point.days_from_now == 28)
        .unwrap();
    let day_91 = prediction
        .projections
        .iter()
        .find(|point| point.days_from_now == 91)
        .unwrap();
    assert!((prediction.predicted_30_days - day_28.weight).abs() < f64::EPSILON);
    assert!((prediction.predicted_90_days - day_91.weight).abs() < f64::EPSILON);
    assert_eq!(day_28.date, day(56));
}

#[test]
fn test_unreliable_logging_discounts_rate() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);
    let history = weigh_ins(&[(0, 80.0), (28, 78.0)]);

    let prediction = predictor.predict(&history, 78.0, 0.5, 50.0, day(28));

    assert!((predictor.reliability(0.5, 50.0) - 0.5).abs() < 1e-12);
    assert!((prediction.adjusted_weekly_rate - -0.25).abs() < 1e-9);
}

#[test]
fn test_gaining_projection_is_weakly_monotonic() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);
    let history = weigh_ins(&[(0, 70.0), (14, 70.4), (35, 71.0)]);

    let prediction = predictor.predict(&history, 71.0, 0.7, 60.0, day(35));

    assert_eq!(prediction.trend, WeightTrend::Gaining);
    for pair in prediction.projections.windows(2) {
        assert!(pair[1].weight >= pair[0].weight);
    }
}

#[test]
fn test_confidence_decays_to_floor() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);

    assert!((predictor.point_confidence(0) - 1.0).abs() < 1e-12);
    assert!((predictor.point_confidence(180) - 0.3).abs() < 1e-12);
    assert!((predictor.point_confidence(400) - 0.3).abs() < 1e-12);

    let prediction = predictor.predict(&weigh_ins(&[(0, 80.0)]), 80.0, 1.0, 100.0, day(0));
    for pair in prediction.projections.windows(2) {
        assert!(pair[1].confidence <= pair[0].confidence);
    }
    assert!(prediction
        .projections
        .iter()
        .all(|point| (0.3..=1.0).contains(&point.confidence)));
}

#[test]
fn test_decay_factor_shrinks_by_at_most_thirty_percent() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);

    assert!((predictor.decay_factor(0) - 1.0).abs() < 1e-12);
    assert!((predictor.decay_factor(179) - 0.7).abs() < 1e-9);
    assert!(predictor.decay_factor(90) > 0.7 && predictor.decay_factor(90) < 1.0);
}

#[test]
fn test_interval_uses_historical_weight_spread() {
    let config = PredictionConfig::default();
    let predictor = WeightPredictor::new(&config.weight);
    let history = weigh_ins(&[(0, 80.0), (28, 78.0)]);

    let prediction = predictor.predict(&history, 78.0, 1.0, 100.0, day(28));

    // Population std dev of [80, 78] is 1.0
    assert!((prediction.confidence_interval.width() - 2.0 * 1.96).abs() < 1e-9);
    let midpoint =
        (prediction.confidence_interval.lower + prediction.confidence_interval.upper) / 2.0;
    assert!((midpoint - prediction.predicted_90_days).abs() < 1e-9);
}
