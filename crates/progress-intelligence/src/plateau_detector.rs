// ABOUTME: Plateau risk classification from recent weight and training-volume variance
// ABOUTME: Names stagnation factors, prevention strategies, overtraining risk and plateau date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::prediction::PlateauConfig;
use crate::trend_analyzer::TrendAnalyzer;
use chrono::{DateTime, Duration, Utc};
use progress_core::models::{BodyMetricEntry, WorkoutEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Factor named when body weight has stalled
pub const WEIGHT_STAGNATION_FACTOR: &str = "Weight has been stable for 2+ weeks";
/// Factor named when training volume has stalled
pub const VOLUME_STAGNATION_FACTOR: &str = "Training volume has not varied recently";
/// Factor named when training frequency is high
pub const OVERTRAINING_FACTOR: &str = "High training frequency may lead to overtraining";

/// Plateau risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauRisk {
    /// No stagnation signal
    Low,
    /// Training volume stagnating
    Medium,
    /// Body weight stagnating
    High,
}

impl fmt::Display for PlateauRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// Plateau forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauPrediction {
    /// Risk classification
    pub risk: PlateauRisk,
    /// Projected start of the plateau for non-low risk
    pub estimated_plateau_date: Option<DateTime<Utc>>,
    /// Signals that contributed to the classification
    pub factors: Vec<String>,
    /// One prevention strategy per factor, same order
    pub prevention_strategies: Vec<String>,
    /// Variance of the inspected weights
    pub recent_weight_variance: f64,
    /// Variance of the inspected session volumes
    pub recent_volume_variance: f64,
}

/// Plateau risk detector
pub struct PlateauDetector<'a> {
    config: &'a PlateauConfig,
}

impl<'a> PlateauDetector<'a> {
    /// Create a detector bound to `config`
    #[must_use]
    pub const fn new(config: &'a PlateauConfig) -> Self {
        Self { config }
    }

    /// Classify plateau risk from date-sorted histories
    #[must_use]
    pub fn detect(
        &self,
        body_metrics: &[BodyMetricEntry],
        workouts: &[WorkoutEntry],
        as_of: DateTime<Utc>,
    ) -> PlateauPrediction {
        let config = self.config;
        let mut factors = Vec::new();
        let mut prevention_strategies = Vec::new();

        let recent_metrics = TrendAnalyzer::recent(body_metrics, config.sample_window);
        let weights: Vec<f64> = recent_metrics.iter().map(|entry| entry.weight).collect();
        let weight_samples: Vec<_> = recent_metrics
            .iter()
            .map(BodyMetricEntry::weight_sample)
            .collect();
        let recent_weight_variance = TrendAnalyzer::variance(&weights);
        let recent_weekly_rate = TrendAnalyzer::weekly_rate(&weight_samples);

        let weight_stagnant = weights.len() >= config.min_samples
            && recent_weight_variance < config.weight_variance_threshold
            && recent_weekly_rate.abs() < config.weekly_rate_threshold;
        if weight_stagnant {
            factors.push(WEIGHT_STAGNATION_FACTOR.to_owned());
            prevention_strategies.push(
                "Schedule a refeed day or a 1-2 week diet break to counter metabolic adaptation"
                    .to_owned(),
            );
        }

        let volumes: Vec<f64> = TrendAnalyzer::recent(workouts, config.sample_window)
            .iter()
            .map(WorkoutEntry::volume)
            .filter(|volume| volume.is_finite())
            .collect();
        let recent_volume_variance = TrendAnalyzer::variance(&volumes);

        let volume_stagnant = volumes.len() >= config.min_samples
            && recent_volume_variance < config.volume_variance_threshold;
        if volume_stagnant {
            factors.push(VOLUME_STAGNATION_FACTOR.to_owned());
            prevention_strategies.push(
                "Vary training intensity and volume - change rep ranges, tempo, or exercise selection"
                    .to_owned(),
            );
        }

        let window_start = as_of - Duration::days(config.overtraining_window_days);
        let recent_sessions = workouts
            .iter()
            .filter(|workout| workout.date > window_start && workout.date <= as_of)
            .count();
        if recent_sessions > config.overtraining_session_threshold {
            factors.push(OVERTRAINING_FACTOR.to_owned());
            prevention_strategies
                .push("Plan a deload week every 4-6 weeks to manage fatigue".to_owned());
        }

        let (risk, estimated_plateau_date) = if weight_stagnant {
            (
                PlateauRisk::High,
                Some(as_of + Duration::days(config.high_risk_plateau_days)),
            )
        } else if volume_stagnant {
            (
                PlateauRisk::Medium,
                Some(as_of + Duration::days(config.medium_risk_plateau_days)),
            )
        } else {
            (PlateauRisk::Low, None)
        };

        debug!(
            %risk,
            recent_weight_variance,
            recent_volume_variance,
            recent_sessions,
            "Plateau risk classified"
        );

        PlateauPrediction {
            risk,
            estimated_plateau_date,
            factors,
            prevention_strategies,
            recent_weight_variance,
            recent_volume_variance,
        }
    }
}
