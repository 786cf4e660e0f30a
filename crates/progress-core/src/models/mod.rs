// ABOUTME: Input data model for progress predictions
// ABOUTME: Historical logs, current metrics, goals, context, and the PredictionInput aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input data model.
//!
//! Every type here is produced by the caller (usually from a persisted log
//! store) and is read-only to the engine.

/// User goals and context modifiers
pub mod goals;
/// Timestamped historical records
pub mod history;
/// Current snapshot metrics
pub mod metrics;

pub use goals::{ActivityLevel, ContextFactors, ExperienceLevel, GoalType, Sex, UserGoals};
pub use history::{
    BodyMetricEntry, ExerciseRecord, HistoricalData, NutritionEntry, TrendSample, WorkoutEntry,
};
pub use metrics::{CurrentMetrics, StrengthLevels};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything one prediction call needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Optional user identifier, used only for log correlation
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Instant treated as "now" for every date the engine produces
    #[serde(default = "Utc::now")]
    pub as_of: DateTime<Utc>,
    /// Historical logs
    #[serde(default)]
    pub historical_data: HistoricalData,
    /// Current snapshot
    pub current_metrics: CurrentMetrics,
    /// Declared goals
    #[serde(default)]
    pub goals: UserGoals,
    /// Optional context modifiers
    #[serde(default)]
    pub context: Option<ContextFactors>,
}

impl PredictionInput {
    /// Experience tier from context, intermediate when unknown
    #[must_use]
    pub fn experience_level(&self) -> ExperienceLevel {
        self.context
            .as_ref()
            .map_or_else(ExperienceLevel::default, |context| context.experience_level)
    }
}
