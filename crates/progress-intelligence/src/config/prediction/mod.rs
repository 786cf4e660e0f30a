// ABOUTME: Prediction model configuration with environment overrides and validation
// ABOUTME: Aggregates projection and evaluation parameters into one typed PredictionConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction Configuration Module
//!
//! Provides type-safe, validated configuration for every predictor. Values
//! start from the built-in defaults and can be overridden through `PREDICTION_*`
//! environment variables.
//!
//! # Examples
//!
//! ```rust
//! use progress_intelligence::config::PredictionConfig;
//!
//! let config = PredictionConfig::default();
//! assert!((config.strength.default_monthly_rate - 2.0).abs() < f64::EPSILON);
//! ```

mod error;
mod evaluation;
mod projection;

pub use error::ConfigError;
pub use evaluation::{
    ConfidenceWeights, GoalEvaluationConfig, MilestoneConfig, PlateauConfig,
    RecommendationThresholds,
};
pub use projection::{ExperienceMultipliers, StrengthModelConfig, WeightModelConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Main prediction configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Weight projection
    pub weight: WeightModelConfig,
    /// Strength projection
    pub strength: StrengthModelConfig,
    /// Goal achievement
    pub goals: GoalEvaluationConfig,
    /// Plateau risk
    pub plateau: PlateauConfig,
    /// Milestone ladders
    pub milestones: MilestoneConfig,
    /// Overall confidence blend
    pub confidence: ConfidenceWeights,
    /// Recommendation rule thresholds
    pub recommendations: RecommendationThresholds,
}

/// Longest projection or lookback window any section may configure (days)
pub const MAX_WINDOW_DAYS: u32 = 3_650;

/// Longest strength projection (months)
pub const MAX_PROJECTION_MONTHS: u32 = 120;

/// Global configuration, immutable once initialized
static PREDICTION_CONFIG: OnceLock<PredictionConfig> = OnceLock::new();

/// Overwrite `target` with the parsed value of `name` when it is set
fn override_from_env<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}")))?;
    }
    Ok(())
}

impl PredictionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PREDICTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load prediction config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;

        let weight = &self.weight;
        if weight.step_days == 0 || weight.horizon_days < weight.step_days {
            return Err(ConfigError::InvalidRange(
                "weight step_days must be positive and no larger than horizon_days",
            ));
        }
        if weight.horizon_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::ValueOutOfRange(
                "weight horizon_days must not exceed 3650",
            ));
        }
        if weight.interval_z_score < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight interval_z_score must be non-negative",
            ));
        }
        if !(0.0..1.0).contains(&weight.max_decay_shrink) {
            return Err(ConfigError::ValueOutOfRange(
                "weight max_decay_shrink must be within [0, 1)",
            ));
        }
        if !(0.0..=1.0).contains(&weight.confidence_floor)
            || !(0.0..=1.0).contains(&weight.adherence_blend)
        {
            return Err(ConfigError::ValueOutOfRange(
                "weight confidence_floor and adherence_blend must be within [0, 1]",
            ));
        }

        let strength = &self.strength;
        if strength.min_monthly_rate > strength.max_monthly_rate {
            return Err(ConfigError::InvalidRange(
                "strength min_monthly_rate must be <= max_monthly_rate",
            ));
        }
        if strength.min_monthly_rate <= -100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "strength min_monthly_rate must be above -100%",
            ));
        }
        if strength.diminishing_step < 0.0
            || strength.projection_months == 0
            || strength.projection_months > MAX_PROJECTION_MONTHS
        {
            return Err(ConfigError::ValueOutOfRange(
                "strength diminishing_step must be >= 0 and projection_months within 1..=120",
            ));
        }
        let multipliers = &strength.experience_multipliers;
        if [
            multipliers.beginner,
            multipliers.intermediate,
            multipliers.advanced,
            multipliers.elite,
        ]
        .iter()
        .any(|m| *m < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "experience multipliers must be non-negative",
            ));
        }

        let goals = &self.goals;
        if !(goals.ahead_ratio < goals.on_track_ratio && goals.on_track_ratio < goals.behind_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "trajectory ratios must satisfy ahead < on_track < behind",
            ));
        }
        let probability_sum =
            goals.adherence_weight + goals.consistency_weight + goals.base_probability;
        if (probability_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "goal probability weights must sum to 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&goals.max_probability) {
            return Err(ConfigError::ValueOutOfRange(
                "goal max_probability must be within [0, 1]",
            ));
        }

        let plateau = &self.plateau;
        if plateau.sample_window < plateau.min_samples || plateau.min_samples < 2 {
            return Err(ConfigError::InvalidRange(
                "plateau min_samples must be >= 2 and no larger than sample_window",
            ));
        }
        let max_window = i64::from(MAX_WINDOW_DAYS);
        if [
            plateau.overtraining_window_days,
            plateau.high_risk_plateau_days,
            plateau.medium_risk_plateau_days,
        ]
        .iter()
        .any(|days| !(0..=max_window).contains(days))
        {
            return Err(ConfigError::ValueOutOfRange(
                "plateau day offsets and windows must be within 0..=3650",
            ));
        }

        let milestones = &self.milestones;
        if !milestones.strength_ladder.windows(2).all(|w| w[0] < w[1])
            || !milestones.streak_ladder.windows(2).all(|w| w[0] < w[1])
        {
            return Err(ConfigError::InvalidRange(
                "milestone ladders must be strictly ascending",
            ));
        }
        if milestones.weight_steps.iter().any(|step| *step <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "milestone weight steps must be positive",
            ));
        }
        if milestones.min_confidence > milestones.max_confidence
            || milestones.confidence_horizon_days <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "milestone confidence bounds are inverted or horizon is not positive",
            ));
        }

        let confidence = &self.confidence;
        let blend_sum = confidence.data_volume_weight
            + confidence.consistency_weight
            + confidence.adherence_weight;
        if (blend_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "confidence weights must sum to 1.0",
            ));
        }
        if confidence.saturation_points <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "confidence saturation_points must be positive",
            ));
        }

        Ok(())
    }

    /// Days past `as_of` the furthest projected date can land
    #[must_use]
    pub fn max_forward_days(&self) -> i64 {
        let strength_days = (f64::from(self.strength.projection_months)
            * progress_core::constants::time::AVERAGE_DAYS_PER_MONTH)
            .ceil() as i64;
        i64::from(self.weight.horizon_days)
            .max(strength_days)
            .max(self.plateau.high_risk_plateau_days)
            .max(self.plateau.medium_risk_plateau_days)
    }

    /// Days before `as_of` any lookback window reaches
    #[must_use]
    pub const fn max_lookback_days(&self) -> i64 {
        self.plateau.overtraining_window_days
    }

    /// Reject NaN and infinite parameters
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let weight = &self.weight;
        let strength = &self.strength;
        let multipliers = &strength.experience_multipliers;
        let goals = &self.goals;
        let plateau = &self.plateau;
        let milestones = &self.milestones;
        let confidence = &self.confidence;
        let recommendations = &self.recommendations;

        let scalars = [
            (weight.max_decay_shrink, "weight.max_decay_shrink"),
            (weight.confidence_floor, "weight.confidence_floor"),
            (weight.interval_z_score, "weight.interval_z_score"),
            (weight.adherence_blend, "weight.adherence_blend"),
            (weight.stable_rate_threshold, "weight.stable_rate_threshold"),
            (strength.default_monthly_rate, "strength.default_monthly_rate"),
            (strength.min_monthly_rate, "strength.min_monthly_rate"),
            (strength.max_monthly_rate, "strength.max_monthly_rate"),
            (strength.diminishing_step, "strength.diminishing_step"),
            (multipliers.beginner, "strength.experience_multipliers.beginner"),
            (multipliers.intermediate, "strength.experience_multipliers.intermediate"),
            (multipliers.advanced, "strength.experience_multipliers.advanced"),
            (multipliers.elite, "strength.experience_multipliers.elite"),
            (goals.trend_epsilon, "goals.trend_epsilon"),
            (goals.adherence_weight, "goals.adherence_weight"),
            (goals.consistency_weight, "goals.consistency_weight"),
            (goals.base_probability, "goals.base_probability"),
            (goals.max_probability, "goals.max_probability"),
            (goals.ahead_ratio, "goals.ahead_ratio"),
            (goals.on_track_ratio, "goals.on_track_ratio"),
            (goals.behind_ratio, "goals.behind_ratio"),
            (goals.alternative_timeline_threshold, "goals.alternative_timeline_threshold"),
            (goals.alternative_timeline_spread_days, "goals.alternative_timeline_spread_days"),
            (goals.target_tolerance, "goals.target_tolerance"),
            (plateau.weight_variance_threshold, "plateau.weight_variance_threshold"),
            (plateau.weekly_rate_threshold, "plateau.weekly_rate_threshold"),
            (plateau.volume_variance_threshold, "plateau.volume_variance_threshold"),
            (milestones.confidence_horizon_days, "milestones.confidence_horizon_days"),
            (milestones.max_confidence, "milestones.max_confidence"),
            (milestones.min_confidence, "milestones.min_confidence"),
            (confidence.data_volume_weight, "confidence.data_volume_weight"),
            (confidence.consistency_weight, "confidence.consistency_weight"),
            (confidence.adherence_weight, "confidence.adherence_weight"),
            (confidence.saturation_points, "confidence.saturation_points"),
            (confidence.workout_point_weight, "confidence.workout_point_weight"),
            (confidence.nutrition_point_weight, "confidence.nutrition_point_weight"),
            (confidence.body_metric_point_weight, "confidence.body_metric_point_weight"),
            (recommendations.weight_loss_rate, "recommendations.weight_loss_rate"),
            (recommendations.muscle_gain_rate, "recommendations.muscle_gain_rate"),
            (recommendations.consistency_score, "recommendations.consistency_score"),
            (recommendations.protein_grams_per_kg, "recommendations.protein_grams_per_kg"),
            (
                recommendations.endurance_min_weekly_sessions,
                "recommendations.endurance_min_weekly_sessions",
            ),
            (recommendations.maintenance_drift_rate, "recommendations.maintenance_drift_rate"),
        ];
        if let Some((_, field)) = scalars.iter().find(|(value, _)| !value.is_finite()) {
            return Err(ConfigError::NonFinite(*field));
        }

        if !milestones.weight_steps.iter().all(|step| step.is_finite()) {
            return Err(ConfigError::NonFinite("milestones.weight_steps"));
        }
        if !milestones.strength_ladder.iter().all(|rung| rung.is_finite()) {
            return Err(ConfigError::NonFinite("milestones.strength_ladder"));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Weight projection
        override_from_env("PREDICTION_WEIGHT_HORIZON_DAYS", &mut self.weight.horizon_days)?;
        override_from_env(
            "PREDICTION_WEIGHT_MAX_DECAY_SHRINK",
            &mut self.weight.max_decay_shrink,
        )?;
        override_from_env(
            "PREDICTION_WEIGHT_CONFIDENCE_FLOOR",
            &mut self.weight.confidence_floor,
        )?;

        // Strength projection
        override_from_env(
            "PREDICTION_STRENGTH_DEFAULT_MONTHLY_RATE",
            &mut self.strength.default_monthly_rate,
        )?;
        let multipliers = &mut self.strength.experience_multipliers;
        override_from_env(
            "PREDICTION_STRENGTH_BEGINNER_MULTIPLIER",
            &mut multipliers.beginner,
        )?;
        override_from_env(
            "PREDICTION_STRENGTH_INTERMEDIATE_MULTIPLIER",
            &mut multipliers.intermediate,
        )?;
        override_from_env(
            "PREDICTION_STRENGTH_ADVANCED_MULTIPLIER",
            &mut multipliers.advanced,
        )?;
        override_from_env("PREDICTION_STRENGTH_ELITE_MULTIPLIER", &mut multipliers.elite)?;

        // Goal trajectory
        override_from_env("PREDICTION_GOAL_AHEAD_RATIO", &mut self.goals.ahead_ratio)?;
        override_from_env(
            "PREDICTION_GOAL_ON_TRACK_RATIO",
            &mut self.goals.on_track_ratio,
        )?;
        override_from_env("PREDICTION_GOAL_BEHIND_RATIO", &mut self.goals.behind_ratio)?;

        // Plateau detection
        override_from_env(
            "PREDICTION_PLATEAU_WEIGHT_VARIANCE",
            &mut self.plateau.weight_variance_threshold,
        )?;
        override_from_env(
            "PREDICTION_PLATEAU_VOLUME_VARIANCE",
            &mut self.plateau.volume_variance_threshold,
        )?;
        override_from_env(
            "PREDICTION_PLATEAU_OVERTRAINING_SESSIONS",
            &mut self.plateau.overtraining_session_threshold,
        )?;

        // Confidence
        override_from_env(
            "PREDICTION_CONFIDENCE_SATURATION_POINTS",
            &mut self.confidence.saturation_points,
        )?;

        Ok(self)
    }
}
