// ABOUTME: Body weight forecasting with decayed linear extrapolation
// ABOUTME: Adherence-adjusted weekly rate projected in weekly steps with shrinking confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight projection.
//!
//! The weekly rate from the trend analyzer is discounted by how reliably the
//! user logs (adherence and consistency, blended), then extrapolated in fixed
//! steps. A logarithmic decay trims each increment as the horizon grows, so
//! the curve flattens but never changes direction.

use crate::config::prediction::WeightModelConfig;
use crate::trend_analyzer::TrendAnalyzer;
use chrono::{DateTime, Duration, Utc};
use progress_core::constants::{ratings::MAX_CONSISTENCY_SCORE, time::DAYS_PER_WEEK};
use progress_core::models::BodyMetricEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Weight going up
    Gaining,
    /// Weight going down
    Losing,
    /// No meaningful change
    Stable,
}

/// One projected point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProjectionPoint {
    /// Projected date
    pub date: DateTime<Utc>,
    /// Days after the evaluation instant
    pub days_from_now: u32,
    /// Projected weight (kg)
    pub weight: f64,
    /// Confidence in this point, 0-1
    pub confidence: f64,
}

/// Symmetric interval around an estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Interval width
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Weight forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPrediction {
    /// Weight at the evaluation instant (kg)
    pub current_weight: f64,
    /// Projected weight nearest to the short-range headline day
    pub predicted_30_days: f64,
    /// Projected weight nearest to the long-range headline day
    pub predicted_90_days: f64,
    /// Raw historical rate (kg/week)
    pub weekly_rate: f64,
    /// Rate after the reliability discount (kg/week)
    pub adjusted_weekly_rate: f64,
    /// Trend direction of the adjusted rate
    pub trend: WeightTrend,
    /// 95% interval around the 90-day estimate
    pub confidence_interval: ConfidenceInterval,
    /// Full projection series
    pub projections: Vec<WeightProjectionPoint>,
}

/// Weight forecaster
pub struct WeightPredictor<'a> {
    config: &'a WeightModelConfig,
}

impl<'a> WeightPredictor<'a> {
    /// Create a predictor bound to `config`
    #[must_use]
    pub const fn new(config: &'a WeightModelConfig) -> Self {
        Self { config }
    }

    /// Blend of adherence and consistency used to discount the raw rate, 0-1
    #[must_use]
    pub fn reliability(&self, adherence_rate: f64, consistency_score: f64) -> f64 {
        let blend = self.config.adherence_blend;
        blend
            .mul_add(
                adherence_rate,
                (1.0 - blend) * (consistency_score / MAX_CONSISTENCY_SCORE),
            )
            .clamp(0.0, 1.0)
    }

    /// Fraction of the weekly increment kept at `days_elapsed`
    ///
    /// Shrinks logarithmically from 1.0 towards `1 - max_decay_shrink` at the horizon.
    #[must_use]
    pub fn decay_factor(&self, days_elapsed: u32) -> f64 {
        let horizon = f64::from(self.config.horizon_days.max(2));
        let progress = (f64::from(days_elapsed) + 1.0).ln() / horizon.ln();
        self.config
            .max_decay_shrink
            .mul_add(-progress.clamp(0.0, 1.0), 1.0)
    }

    /// Confidence of a point `days_elapsed` out: linear from 1.0 to the floor
    #[must_use]
    pub fn point_confidence(&self, days_elapsed: u32) -> f64 {
        let floor = self.config.confidence_floor;
        let progress = f64::from(days_elapsed) / f64::from(self.config.horizon_days.max(1));
        (1.0 - floor).mul_add(-progress, 1.0).clamp(floor, 1.0)
    }

    /// Forecast weight from `history` (sorted ascending)
    #[must_use]
    pub fn predict(
        &self,
        history: &[BodyMetricEntry],
        current_weight: f64,
        adherence_rate: f64,
        consistency_score: f64,
        as_of: DateTime<Utc>,
    ) -> WeightPrediction {
        let samples: Vec<_> = history.iter().map(BodyMetricEntry::weight_sample).collect();
        let weekly_rate = TrendAnalyzer::weekly_rate(&samples);
        let adjusted_weekly_rate =
            weekly_rate * self.reliability(adherence_rate, consistency_score);

        let projections = self.project(current_weight, adjusted_weekly_rate, as_of);

        let predicted_30_days = Self::nearest(&projections, self.config.short_range_days)
            .unwrap_or(current_weight);
        let predicted_90_days = Self::nearest(&projections, self.config.long_range_days)
            .unwrap_or(current_weight);

        let weights: Vec<f64> = history.iter().map(|entry| entry.weight).collect();
        let margin = self.config.interval_z_score * TrendAnalyzer::std_dev(&weights);

        let trend = if adjusted_weekly_rate.abs() < self.config.stable_rate_threshold {
            WeightTrend::Stable
        } else if adjusted_weekly_rate > 0.0 {
            WeightTrend::Gaining
        } else {
            WeightTrend::Losing
        };

        debug!(
            weekly_rate,
            adjusted_weekly_rate,
            predicted_90_days,
            "Weight projection computed"
        );

        WeightPrediction {
            current_weight,
            predicted_30_days,
            predicted_90_days,
            weekly_rate,
            adjusted_weekly_rate,
            trend,
            confidence_interval: ConfidenceInterval {
                lower: predicted_90_days - margin,
                upper: predicted_90_days + margin,
            },
            projections,
        }
    }

    fn project(
        &self,
        current_weight: f64,
        adjusted_weekly_rate: f64,
        as_of: DateTime<Utc>,
    ) -> Vec<WeightProjectionPoint> {
        let step = self.config.step_days.max(1);
        let weeks_per_step = f64::from(step) / DAYS_PER_WEEK;
        let mut weight = current_weight;

        (step..=self.config.horizon_days)
            .step_by(step as usize)
            .map(|days| {
                weight += adjusted_weekly_rate * weeks_per_step * self.decay_factor(days);
                WeightProjectionPoint {
                    date: as_of + Duration::days(i64::from(days)),
                    days_from_now: days,
                    weight,
                    confidence: self.point_confidence(days),
                }
            })
            .collect()
    }

    fn nearest(projections: &[WeightProjectionPoint], target_day: u32) -> Option<f64> {
        projections
            .iter()
            .min_by_key(|point| point.days_from_now.abs_diff(target_day))
            .map(|point| point.weight)
    }
}
