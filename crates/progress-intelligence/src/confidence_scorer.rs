// ABOUTME: Overall prediction confidence from data volume, consistency and adherence
// ABOUTME: Produces the single 0-1 score attached to every prediction result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: entry counts are far below 2^52

use crate::config::prediction::ConfidenceWeights;
use progress_core::constants::ratings::MAX_CONSISTENCY_SCORE;
use progress_core::models::HistoricalData;

/// Overall confidence scorer
pub struct ConfidenceScorer<'a> {
    config: &'a ConfidenceWeights,
}

impl<'a> ConfidenceScorer<'a> {
    /// Create a scorer bound to `config`
    #[must_use]
    pub const fn new(config: &'a ConfidenceWeights) -> Self {
        Self { config }
    }

    /// Weighted count of logged entries across the three series
    #[must_use]
    pub fn weighted_data_points(&self, history: &HistoricalData) -> f64 {
        let config = self.config;
        config.workout_point_weight * history.workouts.len() as f64
            + config.nutrition_point_weight * history.nutrition.len() as f64
            + config.body_metric_point_weight * history.body_metrics.len() as f64
    }

    /// Confidence in [0, 1]
    #[must_use]
    pub fn score(&self, history: &HistoricalData, consistency_score: f64) -> f64 {
        let config = self.config;
        let data_volume =
            (self.weighted_data_points(history) / config.saturation_points).clamp(0.0, 1.0);
        let consistency = (consistency_score / MAX_CONSISTENCY_SCORE).clamp(0.0, 1.0);
        let adherence = history.adherence_rate.clamp(0.0, 1.0);

        config
            .adherence_weight
            .mul_add(
                adherence,
                config
                    .data_volume_weight
                    .mul_add(data_volume, config.consistency_weight * consistency),
            )
            .clamp(0.0, 1.0)
    }
}
