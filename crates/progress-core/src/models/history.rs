// ABOUTME: Historical log records supplied by the external data store
// ABOUTME: Workout, nutrition and body-metric entries plus the HistoricalData aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped numeric observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    /// When the observation was recorded
    pub date: DateTime<Utc>,
    /// Observed value
    pub value: f64,
}

impl TrendSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// One exercise performed within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Exercise name as logged by the user ("Bench Press", "squat", ...)
    pub name: String,
    /// Working load in kilograms
    pub weight: f64,
    /// Repetitions per set
    #[serde(default = "default_one")]
    pub reps: u32,
    /// Number of sets
    #[serde(default = "default_one")]
    pub sets: u32,
}

const fn default_one() -> u32 {
    1
}

impl ExerciseRecord {
    /// Tonnage contributed by this exercise (load x reps x sets)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps) * f64::from(self.sets)
    }

    /// Case-insensitive exercise name match
    #[must_use]
    pub fn matches(&self, exercise: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(exercise.trim())
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Session date
    pub date: DateTime<Utc>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    /// Session duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Pre-computed session volume; derived from `exercises` when absent
    #[serde(default)]
    pub total_volume: Option<f64>,
}

impl WorkoutEntry {
    /// Session tonnage, preferring the logged total when present
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.total_volume
            .unwrap_or_else(|| self.exercises.iter().map(ExerciseRecord::volume).sum())
    }

    /// Heaviest load logged for `exercise` in this session
    #[must_use]
    pub fn top_load(&self, exercise: &str) -> Option<f64> {
        self.exercises
            .iter()
            .filter(|record| record.matches(exercise) && record.weight.is_finite())
            .map(|record| record.weight)
            .reduce(f64::max)
    }
}

/// A logged day of nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Day of the entry
    pub date: DateTime<Utc>,
    /// Total calories consumed
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein_grams: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_grams: Option<f64>,
    /// Fat in grams
    #[serde(default)]
    pub fat_grams: Option<f64>,
}

/// A body-composition measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetricEntry {
    /// Measurement date
    pub date: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body fat percentage, when measured
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
}

impl BodyMetricEntry {
    /// Weight as a trend sample
    #[must_use]
    pub const fn weight_sample(&self) -> TrendSample {
        TrendSample::new(self.date, self.weight)
    }

    /// Body fat as a trend sample, when measured
    #[must_use]
    pub fn body_fat_sample(&self) -> Option<TrendSample> {
        self.body_fat_percentage
            .map(|body_fat| TrendSample::new(self.date, body_fat))
    }
}

/// Everything the data store knows about a user's past
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    /// Training sessions
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    /// Nutrition logs
    #[serde(default)]
    pub nutrition: Vec<NutritionEntry>,
    /// Body-composition measurements
    #[serde(default)]
    pub body_metrics: Vec<BodyMetricEntry>,
    /// Fraction of days with a qualifying logged action, 0.0-1.0
    #[serde(default)]
    pub adherence_rate: f64,
    /// Streak lengths in days, most recent last
    #[serde(default)]
    pub streak_history: Vec<u32>,
}

impl HistoricalData {
    /// Body weight series in stored order
    #[must_use]
    pub fn weight_samples(&self) -> Vec<TrendSample> {
        self.body_metrics
            .iter()
            .map(BodyMetricEntry::weight_sample)
            .collect()
    }

    /// Body fat series in stored order, skipping unmeasured entries
    #[must_use]
    pub fn body_fat_samples(&self) -> Vec<TrendSample> {
        self.body_metrics
            .iter()
            .filter_map(BodyMetricEntry::body_fat_sample)
            .collect()
    }

    /// Current streak length (last entry of the streak history)
    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.streak_history.last().copied().unwrap_or(0)
    }

    /// Copy of this history with every series sorted by date ascending and
    /// non-finite measurements removed
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut workouts = self.workouts.clone();
        workouts.sort_by_key(|entry| entry.date);

        let mut nutrition: Vec<NutritionEntry> = self
            .nutrition
            .iter()
            .filter(|entry| entry.calories.is_finite() && entry.protein_grams.is_finite())
            .cloned()
            .collect();
        nutrition.sort_by_key(|entry| entry.date);

        let mut body_metrics: Vec<BodyMetricEntry> = self
            .body_metrics
            .iter()
            .filter(|entry| entry.weight.is_finite())
            .map(|entry| BodyMetricEntry {
                body_fat_percentage: entry.body_fat_percentage.filter(|bf| bf.is_finite()),
                ..entry.clone()
            })
            .collect();
        body_metrics.sort_by_key(|entry| entry.date);

        Self {
            workouts,
            nutrition,
            body_metrics,
            adherence_rate: self.adherence_rate,
            streak_history: self.streak_history.clone(),
        }
    }
}
