// ABOUTME: Deterministic recommendation synthesis from predictor outputs
// ABOUTME: Fixed-order rule list where every matching rule appends its guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation synthesis.
//!
//! Rules are evaluated in a fixed order and every rule that matches appends
//! its guidance; nothing short-circuits. There is no randomness, so identical
//! inputs always produce the identical ordered list.

use crate::config::prediction::RecommendationThresholds;
use crate::goal_evaluator::Trajectory;
use crate::plateau_detector::PlateauRisk;
use progress_core::models::{ContextFactors, ExperienceLevel, GoalType};
use tracing::debug;

/// What the synthesizer reads
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInputs<'b> {
    /// Primary goal
    pub goal_type: GoalType,
    /// Weight trend (kg/week)
    pub weight_weekly_rate: f64,
    /// Plateau classification
    pub plateau_risk: PlateauRisk,
    /// Goal pacing
    pub trajectory: Trajectory,
    /// Consistency score, 0-100
    pub consistency_score: f64,
    /// Training age tier
    pub experience: ExperienceLevel,
    /// Current weight (kg)
    pub current_weight: f64,
    /// Average daily protein (g)
    pub average_daily_protein: f64,
    /// Sessions per week
    pub weekly_workout_frequency: f64,
    /// Optional context modifiers
    pub context: Option<&'b ContextFactors>,
}

/// Recommendation synthesizer
pub struct RecommendationSynthesizer<'a> {
    thresholds: &'a RecommendationThresholds,
}

impl<'a> RecommendationSynthesizer<'a> {
    /// Create a synthesizer bound to `thresholds`
    #[must_use]
    pub const fn new(thresholds: &'a RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    /// Ordered recommendation list
    #[must_use]
    pub fn synthesize(&self, inputs: &RecommendationInputs<'_>) -> Vec<String> {
        let thresholds = self.thresholds;
        let mut recommendations = Vec::new();
        let mut push = |text: &str| recommendations.push(text.to_owned());

        if inputs.goal_type == GoalType::WeightLoss
            && inputs.weight_weekly_rate > thresholds.weight_loss_rate
        {
            push("Increase your calorie deficit by 200-300 kcal per day to reach a sustainable 0.5 kg/week loss");
        }

        if inputs.goal_type == GoalType::MuscleGain
            && inputs.weight_weekly_rate < thresholds.muscle_gain_rate
        {
            push("Increase your calorie surplus by 200-300 kcal per day to support lean mass gain");
        }

        if inputs.plateau_risk == PlateauRisk::High {
            push("Take a deload week at roughly 60% of your usual training volume");
            push("Change your routine - swap exercises, rep ranges, or training split");
        }

        if inputs.trajectory == Trajectory::Behind {
            push("Increase training frequency by one session per week");
            push("Tighten nutrition tracking - log every meal, including weekends");
        }

        if inputs.consistency_score < thresholds.consistency_score {
            push("Build consistency first - schedule fixed training days and set daily logging reminders");
        }

        push(match inputs.experience {
            ExperienceLevel::Beginner => {
                "Focus on mastering form on compound lifts before adding load quickly"
            }
            ExperienceLevel::Intermediate => {
                "Introduce periodization - alternate volume and intensity blocks every 4-6 weeks"
            }
            ExperienceLevel::Advanced => {
                "Use block periodization with planned deloads to keep progressing"
            }
            ExperienceLevel::Elite => {
                "Individualize programming around competition peaks and prioritize recovery"
            }
        });

        if matches!(inputs.goal_type, GoalType::MuscleGain | GoalType::Strength)
            && inputs.current_weight > 0.0
        {
            let target_protein = thresholds.protein_grams_per_kg * inputs.current_weight;
            if inputs.average_daily_protein < target_protein {
                recommendations.push(format!(
                    "Raise protein intake to about {target_protein:.0} g per day ({:.1} g/kg) to support muscle growth",
                    thresholds.protein_grams_per_kg
                ));
            }
        }

        if let Some(context) = inputs.context {
            if context
                .sleep_quality
                .is_some_and(|quality| quality < thresholds.min_sleep_quality)
            {
                recommendations.push(
                    "Improve sleep quality - aim for 7-9 hours with a consistent bedtime".to_owned(),
                );
            }
            if context
                .stress_level
                .is_some_and(|stress| stress >= thresholds.max_stress_level)
            {
                recommendations.push(
                    "High stress slows recovery - add stress management such as walks or breathing work"
                        .to_owned(),
                );
            }
        }

        if inputs.goal_type == GoalType::Endurance
            && inputs.weekly_workout_frequency < thresholds.endurance_min_weekly_sessions
        {
            recommendations.push(format!(
                "Build aerobic base with at least {:.0} sessions per week",
                thresholds.endurance_min_weekly_sessions
            ));
        }

        if inputs.goal_type == GoalType::Maintenance
            && inputs.weight_weekly_rate.abs() > thresholds.maintenance_drift_rate
        {
            let direction = if inputs.weight_weekly_rate > 0.0 {
                "reduce"
            } else {
                "increase"
            };
            recommendations.push(format!(
                "Weight is drifting - {direction} daily calories slightly to hold your current weight"
            ));
        }

        debug!(count = recommendations.len(), "Recommendations synthesized");
        recommendations
    }
}
