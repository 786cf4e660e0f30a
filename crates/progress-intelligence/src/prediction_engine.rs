// ABOUTME: Prediction orchestrator sequencing every forecasting component for one user
// ABOUTME: Validates input at the boundary, normalizes history, and assembles PredictionResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction orchestration.
//!
//! [`PredictionEngine`] is the public entry point. It owns an immutable copy of
//! the model configuration and holds no per-user state, so one engine can serve
//! any number of concurrent callers.

use crate::config::PredictionConfig;
use crate::confidence_scorer::ConfidenceScorer;
use crate::goal_evaluator::{GoalAchievementPrediction, GoalEvaluator, GoalInputs};
use crate::milestone_scheduler::{MilestoneInputs, MilestonePrediction, MilestoneScheduler};
use crate::plateau_detector::{PlateauDetector, PlateauPrediction};
use crate::recommendation_synthesizer::{RecommendationInputs, RecommendationSynthesizer};
use crate::strength_predictor::{StrengthPrediction, StrengthPredictor};
use crate::trend_analyzer::TrendAnalyzer;
use crate::weight_predictor::{WeightPrediction, WeightPredictor};
use chrono::{DateTime, Duration, Utc};
use progress_core::constants::ratings::{MAX_CONSISTENCY_SCORE, MAX_SELF_RATING};
use progress_core::errors::{AppError, AppResult};
use progress_core::models::{ContextFactors, CurrentMetrics, HistoricalData, PredictionInput};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Complete forecast for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Body weight forecast
    pub weight: WeightPrediction,
    /// Per-exercise strength forecast
    pub strength: StrengthPrediction,
    /// Goal achievement forecast
    pub goal_achievement: GoalAchievementPrediction,
    /// Plateau risk forecast
    pub plateau: PlateauPrediction,
    /// Upcoming milestones, ascending by predicted date
    pub milestones: Vec<MilestonePrediction>,
    /// Ordered, deterministic guidance
    pub recommendations: Vec<String>,
    /// Overall confidence, 0-1
    pub confidence: f64,
    /// Evaluation instant the forecast is relative to
    pub generated_at: DateTime<Utc>,
}

/// Anything that can turn a prediction input into a forecast
pub trait ProgressPredictor {
    /// Forecast a single user
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing required fields or holds
    /// out-of-range values, including an `as_of` so close to the calendar
    /// limits that projected dates could not be represented.
    fn generate_predictions(&self, input: &PredictionInput) -> AppResult<PredictionResult>;
}

/// Default prediction engine
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    config: PredictionConfig,
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionEngine {
    /// Engine using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PredictionConfig::global().clone(),
        }
    }

    /// Engine using an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the configuration fails validation.
    pub fn with_config(config: PredictionConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Forecast many users in parallel; results are returned in input order
    #[must_use]
    pub fn generate_batch(&self, inputs: &[PredictionInput]) -> Vec<AppResult<PredictionResult>> {
        inputs
            .par_iter()
            .map(|input| self.generate_predictions(input))
            .collect()
    }

    fn validated_weight(metrics: &CurrentMetrics) -> AppResult<f64> {
        let weight = metrics
            .weight
            .ok_or_else(|| AppError::missing_field("current_metrics.weight"))?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::out_of_range(
                "current_metrics.weight",
                format!("Current weight must be a positive number of kilograms, got {weight}"),
            ));
        }
        Ok(weight)
    }

    /// `as_of` must leave room for every projected date and lookback window
    fn validated_as_of(&self, as_of: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        let forward = Duration::try_days(self.config.max_forward_days());
        let back = Duration::try_days(self.config.max_lookback_days());
        let representable = forward.zip(back).is_some_and(|(forward, back)| {
            as_of.checked_add_signed(forward).is_some()
                && as_of.checked_sub_signed(back).is_some()
        });
        if !representable {
            return Err(AppError::out_of_range(
                "as_of",
                format!("Evaluation instant {as_of} is too close to the supported date range limit"),
            ));
        }
        Ok(as_of)
    }

    fn clamped(value: f64, max: f64, field: &'static str) -> f64 {
        if !value.is_finite() {
            warn!(field, value, "Non-finite input replaced with 0");
            return 0.0;
        }
        let clamped = value.clamp(0.0, max);
        if (clamped - value).abs() > f64::EPSILON {
            warn!(field, value, clamped, "Input clamped into range");
        }
        clamped
    }

    fn normalized_context(context: Option<&ContextFactors>) -> Option<ContextFactors> {
        let clamp_rating = |rating: Option<u8>, field: &'static str| {
            rating.map(|value| {
                if value > MAX_SELF_RATING {
                    warn!(field, value, "Self-rating clamped into range");
                    MAX_SELF_RATING
                } else {
                    value
                }
            })
        };
        context.map(|context| ContextFactors {
            sleep_quality: clamp_rating(context.sleep_quality, "context.sleep_quality"),
            stress_level: clamp_rating(context.stress_level, "context.stress_level"),
            ..context.clone()
        })
    }

    fn normalized_history(history: &HistoricalData) -> HistoricalData {
        let mut normalized = history.normalized();
        normalized.adherence_rate =
            Self::clamped(history.adherence_rate, 1.0, "historical_data.adherence_rate");
        normalized
    }
}

impl ProgressPredictor for PredictionEngine {
    fn generate_predictions(&self, input: &PredictionInput) -> AppResult<PredictionResult> {
        let current_weight = Self::validated_weight(&input.current_metrics)?;
        let history = Self::normalized_history(&input.historical_data);
        let consistency_score = Self::clamped(
            input.current_metrics.consistency_score,
            MAX_CONSISTENCY_SCORE,
            "current_metrics.consistency_score",
        );
        let adherence_rate = history.adherence_rate;
        let context = Self::normalized_context(input.context.as_ref());
        let experience = input.experience_level();
        let as_of = self.validated_as_of(input.as_of)?;
        let config = &self.config;

        let weight = WeightPredictor::new(&config.weight).predict(
            &history.body_metrics,
            current_weight,
            adherence_rate,
            consistency_score,
            as_of,
        );

        let strength = StrengthPredictor::new(&config.strength).predict(
            &input.current_metrics.strength_levels,
            &history.workouts,
            experience,
            as_of,
        );

        let body_fat_samples = history.body_fat_samples();
        let current_body_fat = input
            .current_metrics
            .body_fat_percentage
            .filter(|bf| bf.is_finite())
            .or_else(|| body_fat_samples.last().map(|sample| sample.value));

        let goal_achievement = GoalEvaluator::new(&config.goals).evaluate(&GoalInputs {
            goals: &input.goals,
            current_weight,
            current_body_fat,
            weight_weekly_rate: weight.weekly_rate,
            body_fat_weekly_rate: TrendAnalyzer::weekly_rate(&body_fat_samples),
            strength: &strength,
            adherence_rate,
            consistency_score,
            as_of,
        });

        let plateau = PlateauDetector::new(&config.plateau).detect(
            &history.body_metrics,
            &history.workouts,
            as_of,
        );

        let milestones = MilestoneScheduler::new(&config.milestones).schedule(&MilestoneInputs {
            current_weight,
            weight_weekly_rate: weight.weekly_rate,
            strength: &strength,
            current_streak: history.current_streak(),
            adherence_rate,
            as_of,
        });

        let confidence = ConfidenceScorer::new(&config.confidence).score(&history, consistency_score);

        let recommendations =
            RecommendationSynthesizer::new(&config.recommendations).synthesize(
                &RecommendationInputs {
                    goal_type: input.goals.goal_type,
                    weight_weekly_rate: weight.weekly_rate,
                    plateau_risk: plateau.risk,
                    trajectory: goal_achievement.current_trajectory,
                    consistency_score,
                    experience,
                    current_weight,
                    average_daily_protein: input.current_metrics.average_daily_protein,
                    weekly_workout_frequency: input.current_metrics.weekly_workout_frequency,
                    context: context.as_ref(),
                },
            );

        info!(
            user_id = ?input.user_id,
            confidence,
            trajectory = %goal_achievement.current_trajectory,
            plateau_risk = %plateau.risk,
            milestones = milestones.len(),
            "Progress prediction generated"
        );

        Ok(PredictionResult {
            weight,
            strength,
            goal_achievement,
            plateau,
            milestones,
            recommendations,
            confidence,
            generated_at: as_of,
        })
    }
}
