// ABOUTME: Projection model configuration for weight and strength forecasts
// ABOUTME: Horizon, decay, confidence floor, progression priors and experience multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Projection Model Configuration
//!
//! The defaults encode heuristic assumptions (novice progression prior,
//! diminishing returns by training age) rather than fitted parameters, so they
//! are exposed here for recalibration.

use progress_core::models::ExperienceLevel;
use serde::{Deserialize, Serialize};

/// Weight projection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightModelConfig {
    /// Furthest projected day
    pub horizon_days: u32,
    /// Spacing between projected points
    pub step_days: u32,
    /// Largest fraction by which the weekly increment shrinks at the horizon
    pub max_decay_shrink: f64,
    /// Confidence of the furthest projected point
    pub confidence_floor: f64,
    /// Z-score for the confidence interval around the 90-day estimate
    pub interval_z_score: f64,
    /// Share of the reliability blend given to adherence (rest goes to consistency)
    pub adherence_blend: f64,
    /// Headline short-range day
    pub short_range_days: u32,
    /// Headline long-range day
    pub long_range_days: u32,
    /// |weekly rate| below which the trend reads as stable (kg/week)
    pub stable_rate_threshold: f64,
}

impl Default for WeightModelConfig {
    fn default() -> Self {
        Self {
            horizon_days: 180,
            step_days: 7,
            max_decay_shrink: 0.3,
            confidence_floor: 0.3,
            interval_z_score: 1.96,
            adherence_blend: 0.5,
            short_range_days: 30,
            long_range_days: 90,
            stable_rate_threshold: 0.05,
        }
    }
}

/// Strength-gain multiplier per experience tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceMultipliers {
    /// Beginner multiplier
    pub beginner: f64,
    /// Intermediate multiplier
    pub intermediate: f64,
    /// Advanced multiplier
    pub advanced: f64,
    /// Elite multiplier
    pub elite: f64,
}

impl ExperienceMultipliers {
    /// Multiplier for `level`
    #[must_use]
    pub const fn for_level(&self, level: ExperienceLevel) -> f64 {
        match level {
            ExperienceLevel::Beginner => self.beginner,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
            ExperienceLevel::Elite => self.elite,
        }
    }
}

impl Default for ExperienceMultipliers {
    fn default() -> Self {
        Self {
            beginner: 1.5,
            intermediate: 1.0,
            advanced: 0.5,
            elite: 0.25,
        }
    }
}

/// Strength projection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthModelConfig {
    /// Monthly progression (%) assumed when history has fewer than two points
    pub default_monthly_rate: f64,
    /// Lower clamp for a history-derived monthly rate (%)
    pub min_monthly_rate: f64,
    /// Upper clamp for a history-derived monthly rate (%)
    pub max_monthly_rate: f64,
    /// Diminishing factor step: month `i` uses `1 / (1 + i * step)`
    pub diminishing_step: f64,
    /// Number of monthly projections
    pub projection_months: u32,
    /// Training-age multipliers
    pub experience_multipliers: ExperienceMultipliers,
}

impl Default for StrengthModelConfig {
    fn default() -> Self {
        Self {
            default_monthly_rate: 2.0,
            min_monthly_rate: -10.0,
            max_monthly_rate: 10.0,
            diminishing_step: 0.1,
            projection_months: 6,
            experience_multipliers: ExperienceMultipliers::default(),
        }
    }
}
