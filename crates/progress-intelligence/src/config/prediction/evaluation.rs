// ABOUTME: Evaluation configuration for goals, plateau risk, milestones, confidence and advice
// ABOUTME: Provisional thresholds carried as tunable defaults rather than literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Evaluation Configuration
//!
//! Trajectory ratios and plateau variance thresholds have no empirical
//! derivation behind them. Treat them as provisional defaults.

use serde::{Deserialize, Serialize};

/// Goal achievement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEvaluationConfig {
    /// |trend| at or below which no progress is assumed (units per week)
    pub trend_epsilon: f64,
    /// Weight of historical adherence in the success probability
    pub adherence_weight: f64,
    /// Weight of the consistency score in the success probability
    pub consistency_weight: f64,
    /// Flat base probability
    pub base_probability: f64,
    /// Success probability never exceeds this
    pub max_probability: f64,
    /// Estimated/target time ratio below which the user is ahead
    pub ahead_ratio: f64,
    /// Ratio below which the user is on track
    pub on_track_ratio: f64,
    /// Ratio below which the user is behind; at or above is off track
    pub behind_ratio: f64,
    /// Probability at or below which an alternative timeline is produced
    pub alternative_timeline_threshold: f64,
    /// Days added per unit of missing probability for the alternative timeline
    pub alternative_timeline_spread_days: f64,
    /// Distance to target treated as already reached (kg or %)
    pub target_tolerance: f64,
}

impl Default for GoalEvaluationConfig {
    fn default() -> Self {
        Self {
            trend_epsilon: 0.01,
            adherence_weight: 0.4,
            consistency_weight: 0.4,
            base_probability: 0.2,
            max_probability: 0.95,
            ahead_ratio: 0.8,
            on_track_ratio: 1.2,
            behind_ratio: 1.5,
            alternative_timeline_threshold: 0.7,
            alternative_timeline_spread_days: 30.0,
            target_tolerance: 0.1,
        }
    }
}

/// Plateau risk parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Most recent samples inspected per series
    pub sample_window: usize,
    /// Minimum samples before a series can flag stagnation
    pub min_samples: usize,
    /// Weight variance below which weight reads as stagnant
    pub weight_variance_threshold: f64,
    /// |weekly rate| below which weight reads as stagnant (kg/week)
    pub weekly_rate_threshold: f64,
    /// Volume variance below which training reads as stagnant
    pub volume_variance_threshold: f64,
    /// Look-back window for the overtraining check
    pub overtraining_window_days: i64,
    /// Sessions within the window above which overtraining is flagged
    pub overtraining_session_threshold: usize,
    /// Days until a projected plateau at high risk
    pub high_risk_plateau_days: i64,
    /// Days until a projected plateau at medium risk
    pub medium_risk_plateau_days: i64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            sample_window: 8,
            min_samples: 2,
            weight_variance_threshold: 0.5,
            weekly_rate_threshold: 0.1,
            volume_variance_threshold: 100.0,
            overtraining_window_days: 30,
            overtraining_session_threshold: 5,
            high_risk_plateau_days: 14,
            medium_risk_plateau_days: 28,
        }
    }
}

/// Milestone ladders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneConfig {
    /// Round-number weight steps (kg); the next lower multiple of each is a milestone
    pub weight_steps: Vec<f64>,
    /// Strength ladder (kg), ascending
    pub strength_ladder: Vec<f64>,
    /// Streak ladder (days), ascending
    pub streak_ladder: Vec<u32>,
    /// Horizon over which milestone confidence decays to its floor (days)
    pub confidence_horizon_days: f64,
    /// Highest milestone confidence
    pub max_confidence: f64,
    /// Lowest milestone confidence
    pub min_confidence: f64,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            weight_steps: vec![5.0, 10.0],
            strength_ladder: vec![
                60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0, 220.0, 250.0, 300.0,
            ],
            streak_ladder: vec![30, 60, 90, 180, 365],
            confidence_horizon_days: 365.0,
            max_confidence: 0.9,
            min_confidence: 0.1,
        }
    }
}

/// Overall confidence blend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    /// Weight of data volume
    pub data_volume_weight: f64,
    /// Weight of the consistency score
    pub consistency_weight: f64,
    /// Weight of adherence
    pub adherence_weight: f64,
    /// Weighted data-point count at which data volume saturates
    pub saturation_points: f64,
    /// Per-workout weight in the data-point count
    pub workout_point_weight: f64,
    /// Per-nutrition-entry weight in the data-point count
    pub nutrition_point_weight: f64,
    /// Per-body-metric weight in the data-point count
    pub body_metric_point_weight: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            data_volume_weight: 0.4,
            consistency_weight: 0.3,
            adherence_weight: 0.3,
            saturation_points: 100.0,
            workout_point_weight: 0.3,
            nutrition_point_weight: 0.3,
            body_metric_point_weight: 0.4,
        }
    }
}

/// Recommendation rule thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Weight-loss rate shallower than this triggers deficit advice (kg/week)
    pub weight_loss_rate: f64,
    /// Muscle-gain rate below this triggers surplus advice (kg/week)
    pub muscle_gain_rate: f64,
    /// Consistency score below this triggers habit advice
    pub consistency_score: f64,
    /// Protein target for muscle-gain and strength goals (g per kg body weight)
    pub protein_grams_per_kg: f64,
    /// Sleep quality below this triggers sleep advice (1-10)
    pub min_sleep_quality: u8,
    /// Stress at or above this triggers stress advice (1-10)
    pub max_stress_level: u8,
    /// Weekly sessions below this trigger endurance frequency advice
    pub endurance_min_weekly_sessions: f64,
    /// |weekly rate| above which a maintenance goal reads as drifting (kg/week)
    pub maintenance_drift_rate: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            weight_loss_rate: -0.5,
            muscle_gain_rate: 0.1,
            consistency_score: 70.0,
            protein_grams_per_kg: 1.6,
            min_sleep_quality: 6,
            max_stress_level: 7,
            endurance_min_weekly_sessions: 3.0,
            maintenance_drift_rate: 0.25,
        }
    }
}
