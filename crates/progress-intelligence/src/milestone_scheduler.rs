// ABOUTME: Upcoming milestone enumeration for weight, strength and streak ladders
// ABOUTME: Predicts arrival dates from current trends and merges everything into one dated list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Milestone scheduling.
//!
//! Weight milestones are the next round numbers below the current weight and
//! only appear while weight is trending down. Strength milestones are the next
//! ladder rung per exercise, timed by inverting the compounding formula used by
//! the strength predictor. Streak milestones are the next rung above the
//! current streak.

use crate::config::prediction::MilestoneConfig;
use crate::strength_predictor::{StrengthPrediction, StrengthPredictor};
use crate::timeline::days_after;
use chrono::{DateTime, Utc};
use progress_core::constants::time::{AVERAGE_DAYS_PER_MONTH, DAYS_PER_WEEK};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Milestone category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// Round-number body weight
    Weight,
    /// Round-number exercise load
    Strength,
    /// Consecutive-day streak length
    Streak,
}

/// A predicted upcoming milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestonePrediction {
    /// Category
    pub kind: MilestoneKind,
    /// Short human-readable label
    pub title: String,
    /// Exercise the milestone belongs to (strength only)
    pub exercise: Option<String>,
    /// Milestone value (kg for weight and strength, days for streaks)
    pub target_value: f64,
    /// Predicted arrival date
    pub predicted_date: DateTime<Utc>,
    /// Days from the evaluation instant
    pub days_from_now: f64,
    /// Confidence in the date, 0-1
    pub confidence: f64,
}

/// What the scheduler reads
#[derive(Debug, Clone, Copy)]
pub struct MilestoneInputs<'b> {
    /// Current weight (kg)
    pub current_weight: f64,
    /// Weight trend (kg/week)
    pub weight_weekly_rate: f64,
    /// Strength forecast
    pub strength: &'b StrengthPrediction,
    /// Current streak (days)
    pub current_streak: u32,
    /// Historical adherence, 0-1
    pub adherence_rate: f64,
    /// Evaluation instant
    pub as_of: DateTime<Utc>,
}

/// Milestone scheduler
pub struct MilestoneScheduler<'a> {
    config: &'a MilestoneConfig,
}

impl<'a> MilestoneScheduler<'a> {
    /// Create a scheduler bound to `config`
    #[must_use]
    pub const fn new(config: &'a MilestoneConfig) -> Self {
        Self { config }
    }

    /// All upcoming milestones, sorted ascending by predicted date
    #[must_use]
    pub fn schedule(&self, inputs: &MilestoneInputs<'_>) -> Vec<MilestonePrediction> {
        let mut milestones = self.weight_milestones(inputs);
        milestones.extend(self.strength_milestones(inputs));
        milestones.extend(self.streak_milestone(inputs));

        milestones.sort_by(|a, b| a.predicted_date.cmp(&b.predicted_date));

        debug!(count = milestones.len(), "Milestones scheduled");
        milestones
    }

    /// Confidence that decays linearly with horizon length
    #[must_use]
    pub fn horizon_confidence(&self, days: f64) -> f64 {
        let config = self.config;
        let progress = days / config.confidence_horizon_days;
        (config.max_confidence - config.min_confidence)
            .mul_add(-progress, config.max_confidence)
            .clamp(config.min_confidence, config.max_confidence)
    }

    /// Next lower multiples of each weight step, deduplicated, highest first
    #[must_use]
    pub fn weight_targets(&self, current_weight: f64) -> Vec<f64> {
        let mut targets: Vec<f64> = self
            .config
            .weight_steps
            .iter()
            .filter(|step| **step > 0.0)
            .map(|step| {
                let floor = (current_weight / step).floor() * step;
                if current_weight - floor < 1e-9 {
                    floor - step
                } else {
                    floor
                }
            })
            .filter(|target| *target > 0.0)
            .collect();
        targets.sort_by(|a, b| b.total_cmp(a));
        targets.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        targets
    }

    fn weight_milestones(&self, inputs: &MilestoneInputs<'_>) -> Vec<MilestonePrediction> {
        let rate = inputs.weight_weekly_rate;
        if !(rate < 0.0 && rate.is_finite()) {
            return Vec::new();
        }

        self.weight_targets(inputs.current_weight)
            .into_iter()
            .filter_map(|target| {
                let days = (inputs.current_weight - target) / rate.abs() * DAYS_PER_WEEK;
                let predicted_date = days_after(inputs.as_of, days)?;
                Some(MilestonePrediction {
                    kind: MilestoneKind::Weight,
                    title: format!("Reach {target:.0} kg"),
                    exercise: None,
                    target_value: target,
                    predicted_date,
                    days_from_now: days,
                    confidence: self.horizon_confidence(days),
                })
            })
            .collect()
    }

    fn strength_milestones(&self, inputs: &MilestoneInputs<'_>) -> Vec<MilestonePrediction> {
        inputs
            .strength
            .exercises
            .values()
            .filter_map(|projection| {
                let rung = self
                    .config
                    .strength_ladder
                    .iter()
                    .copied()
                    .find(|rung| *rung > projection.current)?;
                let months = StrengthPredictor::months_to_reach(
                    projection.current,
                    rung,
                    projection.monthly_progression_rate,
                )?;
                let days = months * AVERAGE_DAYS_PER_MONTH;
                let predicted_date = days_after(inputs.as_of, days)?;
                Some(MilestonePrediction {
                    kind: MilestoneKind::Strength,
                    title: format!("{} {rung:.0} kg", projection.exercise),
                    exercise: Some(projection.exercise.clone()),
                    target_value: rung,
                    predicted_date,
                    days_from_now: days,
                    confidence: self.horizon_confidence(days),
                })
            })
            .collect()
    }

    fn streak_milestone(&self, inputs: &MilestoneInputs<'_>) -> Option<MilestonePrediction> {
        let rung = self
            .config
            .streak_ladder
            .iter()
            .copied()
            .find(|rung| *rung > inputs.current_streak)?;
        let days = f64::from(rung - inputs.current_streak);
        let predicted_date = days_after(inputs.as_of, days)?;
        Some(MilestonePrediction {
            kind: MilestoneKind::Streak,
            title: format!("{rung}-day streak"),
            exercise: None,
            target_value: f64::from(rung),
            predicted_date,
            days_from_now: days,
            confidence: (self.config.max_confidence * inputs.adherence_rate).clamp(0.0, 1.0),
        })
    }
}
