// ABOUTME: User-declared goals and optional personal context modifiers
// ABOUTME: GoalType, UserGoals, ExperienceLevel and ContextFactors definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metrics::StrengthLevels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary objective the user is training for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body weight
    WeightLoss,
    /// Add lean mass
    MuscleGain,
    /// Increase lifting loads
    Strength,
    /// Improve aerobic capacity
    Endurance,
    /// Hold current body composition
    #[default]
    Maintenance,
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Maintenance => "maintenance",
        };
        f.write_str(name)
    }
}

/// Goals declared by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    /// Primary goal
    #[serde(default)]
    pub goal_type: GoalType,
    /// Target body weight in kg
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// Target body fat percentage
    #[serde(default)]
    pub target_body_fat: Option<f64>,
    /// Deadline for the targets
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
    /// Per-exercise target loads
    #[serde(default)]
    pub strength_goals: StrengthLevels,
}

impl UserGoals {
    /// True when at least one measurable target is set
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target_weight.is_some()
            || self.target_body_fat.is_some()
            || !self.strength_goals.is_empty()
    }
}

/// Training age tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than roughly a year of structured training
    Beginner,
    /// One to three years
    #[default]
    Intermediate,
    /// Several years, slow linear progress
    Advanced,
    /// Competitive lifter near genetic ceiling
    Elite,
}

/// Biological sex, used only as an optional modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Not disclosed / other
    Other,
}

/// Daily activity outside of training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk-bound
    Sedentary,
    /// Light daily movement
    Light,
    /// Moderate daily movement
    Moderate,
    /// Physically demanding routine
    Active,
    /// Manual labour or multiple daily sessions
    VeryActive,
}

/// Optional personal modifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFactors {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Biological sex
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Height in centimetres
    #[serde(default)]
    pub height_cm: Option<u32>,
    /// Daily activity outside training
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Training experience tier
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Self-rated sleep quality, 1-10
    #[serde(default)]
    pub sleep_quality: Option<u8>,
    /// Self-rated stress, 1-10
    #[serde(default)]
    pub stress_level: Option<u8>,
}
