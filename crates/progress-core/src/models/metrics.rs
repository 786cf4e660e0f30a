// ABOUTME: Snapshot of a user's current metrics and per-exercise strength levels
// ABOUTME: StrengthLevels is an ordered exercise -> load map with case-insensitive lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exercise name -> best working load (kg)
///
/// Backed by a `BTreeMap` so iteration order, and everything derived from it,
/// is stable across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrengthLevels(BTreeMap<String, f64>);

impl StrengthLevels {
    /// Empty mapping
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace the load for `exercise`
    pub fn insert(&mut self, exercise: impl Into<String>, load: f64) {
        self.0.insert(exercise.into(), load);
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, exercise: impl Into<String>, load: f64) -> Self {
        self.insert(exercise, load);
        self
    }

    /// Load for `exercise`, matched case-insensitively
    #[must_use]
    pub fn get(&self, exercise: &str) -> Option<f64> {
        self.0.get(exercise).copied().or_else(|| {
            self.0
                .iter()
                .find(|(name, _)| name.trim().eq_ignore_ascii_case(exercise.trim()))
                .map(|(_, load)| *load)
        })
    }

    /// Iterate `(exercise, load)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, load)| (name.as_str(), *load))
    }

    /// Number of exercises tracked
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no exercise is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for StrengthLevels {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, load)| (name.into(), load)).collect())
    }
}

/// Current snapshot assembled upstream from the latest logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentMetrics {
    /// Current body weight in kg. Required; absence is rejected by the engine.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Current body fat percentage
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Best current load per exercise
    #[serde(default)]
    pub strength_levels: StrengthLevels,
    /// Average daily calories over the recent window
    #[serde(default)]
    pub average_daily_calories: f64,
    /// Average daily protein in grams over the recent window
    #[serde(default)]
    pub average_daily_protein: f64,
    /// Training sessions per week
    #[serde(default)]
    pub weekly_workout_frequency: f64,
    /// Regularity of logging and training, 0-100
    #[serde(default)]
    pub consistency_score: f64,
}
