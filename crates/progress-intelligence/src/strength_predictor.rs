// ABOUTME: Per-exercise load forecasting with diminishing-returns compounding
// ABOUTME: History-derived monthly rates scaled by training age and projected six months out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength projection.
//!
//! Each exercise in the current strength map gets a monthly progression rate
//! from its logged load history (or the novice prior when history is too
//! short), scaled by an experience multiplier. Month `i` (0-based) compounds
//! the running load by `1 + rate * 1/(1 + i * step) / 100`.

use crate::config::prediction::StrengthModelConfig;
use crate::trend_analyzer::TrendAnalyzer;
use chrono::{DateTime, Duration, Utc};
use progress_core::constants::time::{AVERAGE_DAYS_PER_MONTH, DAYS_PER_WEEK};
use progress_core::models::{ExperienceLevel, StrengthLevels, TrendSample, WorkoutEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthProjectionPoint {
    /// Month number, starting at 1
    pub month: u32,
    /// Approximate calendar date of the projection
    pub date: DateTime<Utc>,
    /// Projected load (kg)
    pub load: f64,
}

/// Forecast for a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProjection {
    /// Exercise name as it appears in the current strength map
    pub exercise: String,
    /// Current best load (kg)
    pub current: f64,
    /// Projected load after one month
    pub predicted_30_days: f64,
    /// Projected load after three months
    pub predicted_90_days: f64,
    /// `predicted_30_days - current`
    pub gain_30_days: f64,
    /// `predicted_90_days - current`
    pub gain_90_days: f64,
    /// Unscaled monthly rate from history or the prior (%)
    pub base_monthly_rate: f64,
    /// Experience-scaled monthly rate (%)
    pub monthly_progression_rate: f64,
    /// Number of logged sessions the rate was derived from
    pub history_points: usize,
    /// Monthly projections
    pub projections: Vec<StrengthProjectionPoint>,
}

/// Forecast for every tracked exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthPrediction {
    /// Per-exercise forecasts, ordered by exercise name
    pub exercises: BTreeMap<String, ExerciseProjection>,
    /// Mean scaled monthly rate across exercises (%), 0 when none
    pub average_monthly_rate: f64,
}

impl StrengthPrediction {
    /// Forecast for `exercise`, matched case-insensitively
    #[must_use]
    pub fn get(&self, exercise: &str) -> Option<&ExerciseProjection> {
        self.exercises.get(exercise).or_else(|| {
            self.exercises
                .values()
                .find(|projection| projection.exercise.eq_ignore_ascii_case(exercise.trim()))
        })
    }
}

/// Strength forecaster
pub struct StrengthPredictor<'a> {
    config: &'a StrengthModelConfig,
}

impl<'a> StrengthPredictor<'a> {
    /// Create a predictor bound to `config`
    #[must_use]
    pub const fn new(config: &'a StrengthModelConfig) -> Self {
        Self { config }
    }

    /// Top load per session for `exercise`, in workout order
    #[must_use]
    pub fn load_history(workouts: &[WorkoutEntry], exercise: &str) -> Vec<TrendSample> {
        workouts
            .iter()
            .filter_map(|workout| {
                workout
                    .top_load(exercise)
                    .map(|load| TrendSample::new(workout.date, load))
            })
            .collect()
    }

    /// Unscaled monthly progression (%) from an ordered load history
    ///
    /// Falls back to the configured prior for fewer than two points, a zero
    /// time span, or a non-positive starting load.
    #[must_use]
    pub fn monthly_rate(&self, history: &[TrendSample]) -> f64 {
        let (Some(first), Some(last)) = (history.first(), history.last()) else {
            return self.config.default_monthly_rate;
        };
        if history.len() < 2 || first.value <= 0.0 {
            return self.config.default_monthly_rate;
        }

        let months =
            TrendAnalyzer::weeks_between(first, last) * DAYS_PER_WEEK / AVERAGE_DAYS_PER_MONTH;
        if months <= f64::EPSILON {
            return self.config.default_monthly_rate;
        }

        let growth_percent = (last.value - first.value) / first.value * 100.0;
        (growth_percent / months).clamp(self.config.min_monthly_rate, self.config.max_monthly_rate)
    }

    /// Experience-scaled monthly rate (%)
    #[must_use]
    pub fn scaled_rate(&self, base_rate: f64, experience: ExperienceLevel) -> f64 {
        base_rate * self.config.experience_multipliers.for_level(experience)
    }

    /// Months for `current` to compound up to `target` at `monthly_rate` percent
    ///
    /// `ln(target / current) / ln(1 + rate / 100)`. `Some(0.0)` when the target
    /// is already met; `None` when the rate cannot get there.
    #[must_use]
    pub fn months_to_reach(current: f64, target: f64, monthly_rate: f64) -> Option<f64> {
        if current <= 0.0 || !target.is_finite() {
            return None;
        }
        if target <= current {
            return Some(0.0);
        }
        if monthly_rate <= 0.0 {
            return None;
        }
        let months = (target / current).ln() / (monthly_rate / 100.0).ln_1p();
        months.is_finite().then_some(months)
    }

    /// Forecast every exercise with a positive current load
    #[must_use]
    pub fn predict(
        &self,
        current_levels: &StrengthLevels,
        workouts: &[WorkoutEntry],
        experience: ExperienceLevel,
        as_of: DateTime<Utc>,
    ) -> StrengthPrediction {
        let exercises: BTreeMap<String, ExerciseProjection> = current_levels
            .iter()
            .filter(|(_, current)| current.is_finite() && *current > 0.0)
            .map(|(exercise, current)| {
                let history = Self::load_history(workouts, exercise);
                let projection =
                    self.project_exercise(exercise, current, &history, experience, as_of);
                (exercise.to_owned(), projection)
            })
            .collect();

        let rates: Vec<f64> = exercises
            .values()
            .map(|projection| projection.monthly_progression_rate)
            .collect();
        let average_monthly_rate = TrendAnalyzer::mean(&rates);

        debug!(
            exercises = exercises.len(),
            average_monthly_rate, "Strength projection computed"
        );

        StrengthPrediction {
            exercises,
            average_monthly_rate,
        }
    }

    fn project_exercise(
        &self,
        exercise: &str,
        current: f64,
        history: &[TrendSample],
        experience: ExperienceLevel,
        as_of: DateTime<Utc>,
    ) -> ExerciseProjection {
        let base_monthly_rate = self.monthly_rate(history);
        let monthly_progression_rate = self.scaled_rate(base_monthly_rate, experience);

        let mut load = current;
        let projections: Vec<StrengthProjectionPoint> = (0..self.config.projection_months)
            .map(|month_index| {
                let diminishing =
                    1.0 / f64::from(month_index).mul_add(self.config.diminishing_step, 1.0);
                load *= (monthly_progression_rate * diminishing / 100.0) + 1.0;
                let month = month_index + 1;
                let days = (f64::from(month) * AVERAGE_DAYS_PER_MONTH).round() as i64;
                StrengthProjectionPoint {
                    month,
                    date: as_of + Duration::days(days),
                    load,
                }
            })
            .collect();

        let snapshot = |month: u32| {
            projections
                .iter()
                .find(|point| point.month == month)
                .or_else(|| projections.last())
                .map_or(current, |point| point.load)
        };
        let predicted_30_days = snapshot(1);
        let predicted_90_days = snapshot(3);

        ExerciseProjection {
            exercise: exercise.to_owned(),
            current,
            predicted_30_days,
            predicted_90_days,
            gain_30_days: predicted_30_days - current,
            gain_90_days: predicted_90_days - current,
            base_monthly_rate,
            monthly_progression_rate,
            history_points: history.len(),
            projections,
        }
    }
}
