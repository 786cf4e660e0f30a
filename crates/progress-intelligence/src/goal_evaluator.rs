// ABOUTME: Goal achievement evaluation from weight, body-fat and strength trajectories
// ABOUTME: Estimates completion date, success probability, trajectory class and adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal achievement evaluation.
//!
//! The first declared target wins: target weight, then target body fat, then
//! per-exercise strength goals. With no target at all the evaluator reports
//! `off_track` with zero probability and never infers an implicit goal.

use crate::config::prediction::GoalEvaluationConfig;
use crate::strength_predictor::{StrengthPrediction, StrengthPredictor};
use crate::timeline::{days_after, weeks_after, weeks_until};
use chrono::{DateTime, Utc};
use progress_core::constants::{
    energy::KCAL_PER_KG_BODY_MASS,
    ratings::MAX_CONSISTENCY_SCORE,
    time::{AVERAGE_DAYS_PER_MONTH, DAYS_PER_WEEK},
};
use progress_core::models::UserGoals;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Message emitted when no measurable goal exists
pub const NO_GOALS_MESSAGE: &str =
    "No goals set - add a target weight, body fat percentage, or strength goal to track achievement";

/// Progress-to-goal pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    /// Will finish well before the target date
    Ahead,
    /// Will finish around the target date
    OnTrack,
    /// Will finish late but within reach
    Behind,
    /// Will not finish in a reasonable time at the current pace
    OffTrack,
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ahead => "ahead",
            Self::OnTrack => "on_track",
            Self::Behind => "behind",
            Self::OffTrack => "off_track",
        };
        f.write_str(name)
    }
}

/// Which declared target was evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTargetKind {
    /// Target body weight
    Weight,
    /// Target body fat percentage
    BodyFat,
    /// Per-exercise strength goals
    Strength,
}

/// Goal achievement forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAchievementPrediction {
    /// Target that drove the evaluation, if any
    pub target_kind: Option<GoalTargetKind>,
    /// When the target is expected to be reached
    pub estimated_achievement_date: Option<DateTime<Utc>>,
    /// Weeks from the evaluation instant to the target
    pub weeks_to_target: Option<f64>,
    /// Probability of reaching the target, 0-0.95
    pub probability_of_success: f64,
    /// Pacing classification
    pub current_trajectory: Trajectory,
    /// Concrete changes suggested to stay on course
    pub adjustments_needed: Vec<String>,
    /// Hedged completion date for lower-probability forecasts
    pub alternative_timeline: Option<DateTime<Utc>>,
}

/// Everything the evaluator reads
#[derive(Debug, Clone, Copy)]
pub struct GoalInputs<'b> {
    /// Declared goals
    pub goals: &'b UserGoals,
    /// Current weight (kg)
    pub current_weight: f64,
    /// Current body fat (%), if known
    pub current_body_fat: Option<f64>,
    /// Weight trend (kg/week)
    pub weight_weekly_rate: f64,
    /// Body fat trend (%/week)
    pub body_fat_weekly_rate: f64,
    /// Strength forecast, used for strength goals
    pub strength: &'b StrengthPrediction,
    /// Historical adherence, 0-1
    pub adherence_rate: f64,
    /// Consistency score, 0-100
    pub consistency_score: f64,
    /// Evaluation instant
    pub as_of: DateTime<Utc>,
}

/// Outcome of the time-to-target calculation
#[derive(Debug, Clone, PartialEq)]
enum TimeToTarget {
    Reached,
    Weeks(f64),
    NoProgress,
    WrongDirection,
    Unreachable(Vec<String>),
}

/// Linear target (weight or body fat) being evaluated
struct LinearTarget<'n> {
    label: &'n str,
    unit: &'n str,
    current: f64,
    target: f64,
    weekly_rate: f64,
}

/// Goal achievement evaluator
pub struct GoalEvaluator<'a> {
    config: &'a GoalEvaluationConfig,
}

impl<'a> GoalEvaluator<'a> {
    /// Create an evaluator bound to `config`
    #[must_use]
    pub const fn new(config: &'a GoalEvaluationConfig) -> Self {
        Self { config }
    }

    /// `adherence * w_a + consistency/100 * w_c + base`, capped below certainty
    #[must_use]
    pub fn success_probability(&self, adherence_rate: f64, consistency_score: f64) -> f64 {
        let config = self.config;
        let blended = config.adherence_weight.mul_add(
            adherence_rate,
            config.consistency_weight.mul_add(
                consistency_score / MAX_CONSISTENCY_SCORE,
                config.base_probability,
            ),
        );
        blended.clamp(0.0, config.max_probability.clamp(0.0, 1.0))
    }

    /// Classify an estimated duration against the time left until the target date
    #[must_use]
    pub fn classify(&self, estimated_weeks: f64, target_weeks: f64) -> Trajectory {
        if target_weeks <= 0.0 {
            return Trajectory::OffTrack;
        }
        let ratio = estimated_weeks / target_weeks;
        if ratio < self.config.ahead_ratio {
            Trajectory::Ahead
        } else if ratio < self.config.on_track_ratio {
            Trajectory::OnTrack
        } else if ratio < self.config.behind_ratio {
            Trajectory::Behind
        } else {
            Trajectory::OffTrack
        }
    }

    /// Evaluate the first declared target
    #[must_use]
    pub fn evaluate(&self, inputs: &GoalInputs<'_>) -> GoalAchievementPrediction {
        let goals = inputs.goals;
        if !goals.has_target() {
            return GoalAchievementPrediction {
                target_kind: None,
                estimated_achievement_date: None,
                weeks_to_target: None,
                probability_of_success: 0.0,
                current_trajectory: Trajectory::OffTrack,
                adjustments_needed: vec![NO_GOALS_MESSAGE.to_owned()],
                alternative_timeline: None,
            };
        }

        let probability = self.success_probability(inputs.adherence_rate, inputs.consistency_score);

        let (kind, linear, time_to_target) = if let Some(target) = goals.target_weight {
            let linear = LinearTarget {
                label: "target weight",
                unit: "kg",
                current: inputs.current_weight,
                target,
                weekly_rate: inputs.weight_weekly_rate,
            };
            let time = self.linear_time_to_target(&linear);
            (GoalTargetKind::Weight, Some(linear), time)
        } else if let Some(target) = goals.target_body_fat {
            match inputs.current_body_fat {
                Some(current) => {
                    let linear = LinearTarget {
                        label: "target body fat",
                        unit: "%",
                        current,
                        target,
                        weekly_rate: inputs.body_fat_weekly_rate,
                    };
                    let time = self.linear_time_to_target(&linear);
                    (GoalTargetKind::BodyFat, Some(linear), time)
                }
                None => (
                    GoalTargetKind::BodyFat,
                    None,
                    TimeToTarget::Unreachable(vec![
                        "No body fat measurements logged - record body fat to track this goal"
                            .to_owned(),
                    ]),
                ),
            }
        } else {
            (
                GoalTargetKind::Strength,
                None,
                Self::strength_time_to_target(goals, inputs.strength),
            )
        };

        debug!(goal_target = ?kind, outcome = ?time_to_target, probability, "Goal evaluated");

        let mut prediction = GoalAchievementPrediction {
            target_kind: Some(kind),
            estimated_achievement_date: None,
            weeks_to_target: None,
            probability_of_success: probability,
            current_trajectory: Trajectory::OffTrack,
            adjustments_needed: Vec::new(),
            alternative_timeline: None,
        };

        match time_to_target {
            TimeToTarget::Reached => {
                prediction.estimated_achievement_date = Some(inputs.as_of);
                prediction.weeks_to_target = Some(0.0);
                prediction.current_trajectory = Trajectory::Ahead;
                prediction
                    .adjustments_needed
                    .push("Target already reached - consider setting a new goal".to_owned());
            }
            TimeToTarget::NoProgress => {
                prediction.adjustments_needed.push(
                    "No progress detected toward your target - review your nutrition and training plan"
                        .to_owned(),
                );
            }
            TimeToTarget::WrongDirection => {
                prediction.adjustments_needed.push(
                    "Current trend is moving away from target - reverse your calorie balance to head toward it"
                        .to_owned(),
                );
            }
            TimeToTarget::Unreachable(notes) => {
                prediction.adjustments_needed.extend(notes);
            }
            TimeToTarget::Weeks(weeks) => {
                let estimated = weeks_after(inputs.as_of, weeks);
                prediction.estimated_achievement_date = estimated;
                prediction.weeks_to_target = Some(weeks);
                prediction.current_trajectory = match goals.target_date {
                    Some(target_date) => {
                        let target_weeks = weeks_until(inputs.as_of, target_date);
                        let trajectory = self.classify(weeks, target_weeks);
                        prediction.adjustments_needed = Self::trajectory_adjustments(
                            trajectory,
                            linear.as_ref(),
                            target_weeks,
                            estimated,
                        );
                        trajectory
                    }
                    // Moving the right way with no deadline to compare against
                    None => Trajectory::OnTrack,
                };
            }
        }

        if probability <= self.config.alternative_timeline_threshold {
            prediction.alternative_timeline =
                prediction.estimated_achievement_date.and_then(|date| {
                    days_after(
                        date,
                        self.config.alternative_timeline_spread_days * (1.0 - probability),
                    )
                });
        }

        prediction
    }

    fn linear_time_to_target(&self, target: &LinearTarget<'_>) -> TimeToTarget {
        let delta = target.target - target.current;
        if delta.abs() <= self.config.target_tolerance {
            return TimeToTarget::Reached;
        }
        if target.weekly_rate.abs() <= self.config.trend_epsilon {
            return TimeToTarget::NoProgress;
        }
        if (delta > 0.0) != (target.weekly_rate > 0.0) {
            return TimeToTarget::WrongDirection;
        }
        TimeToTarget::Weeks((delta / target.weekly_rate).abs())
    }

    fn strength_time_to_target(goals: &UserGoals, strength: &StrengthPrediction) -> TimeToTarget {
        let mut slowest_months: f64 = 0.0;
        let mut notes = Vec::new();

        for (exercise, target) in goals.strength_goals.iter() {
            let Some(projection) = strength.get(exercise) else {
                notes.push(format!(
                    "No current {exercise} level logged - record a working set to track this goal"
                ));
                continue;
            };
            match StrengthPredictor::months_to_reach(
                projection.current,
                target,
                projection.monthly_progression_rate,
            ) {
                Some(months) => slowest_months = slowest_months.max(months),
                None => notes.push(format!(
                    "{exercise} is not progressing - adjust programming to move toward {target:.1} kg"
                )),
            }
        }

        if !notes.is_empty() {
            return TimeToTarget::Unreachable(notes);
        }
        if slowest_months <= 0.0 {
            return TimeToTarget::Reached;
        }
        TimeToTarget::Weeks(slowest_months * AVERAGE_DAYS_PER_MONTH / DAYS_PER_WEEK)
    }

    fn trajectory_adjustments(
        trajectory: Trajectory,
        linear: Option<&LinearTarget<'_>>,
        target_weeks: f64,
        estimated: Option<DateTime<Utc>>,
    ) -> Vec<String> {
        match trajectory {
            Trajectory::Ahead | Trajectory::OnTrack => Vec::new(),
            Trajectory::Behind => {
                let mut adjustments = Vec::new();
                match linear {
                    Some(linear) if linear.unit == "kg" && target_weeks > 0.0 => {
                        let required_rate = (linear.target - linear.current) / target_weeks;
                        let extra_kg_per_week =
                            (required_rate.abs() - linear.weekly_rate.abs()).max(0.0);
                        let daily_kcal =
                            extra_kg_per_week * KCAL_PER_KG_BODY_MASS / DAYS_PER_WEEK;
                        let balance = if required_rate < 0.0 {
                            "deficit"
                        } else {
                            "surplus"
                        };
                        adjustments.push(format!(
                            "Increase your daily calorie {balance} by about {daily_kcal:.0} kcal to reach {:.1} {} on time",
                            linear.target, linear.unit
                        ));
                    }
                    Some(linear) => adjustments.push(format!(
                        "Increase training intensity or tighten nutrition to close the gap on your {}",
                        linear.label
                    )),
                    None => adjustments.push(
                        "Add one heavy top set per lift each week to speed up strength progress"
                            .to_owned(),
                    ),
                }
                adjustments.push("Add one extra training session per week".to_owned());
                adjustments
            }
            Trajectory::OffTrack => {
                if target_weeks <= 0.0 {
                    return vec!["Target date has passed - set a new target date".to_owned()];
                }
                let suggestion = estimated.map_or_else(
                    || "Revisit your target date - the current pace cannot reach it".to_owned(),
                    |date| {
                        format!(
                            "Revisit your target date - at the current pace you will arrive around {}",
                            date.format("%Y-%m-%d")
                        )
                    },
                );
                vec![suggestion]
            }
        }
    }
}
