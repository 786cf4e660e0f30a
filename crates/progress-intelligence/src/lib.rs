// ABOUTME: Progress prediction algorithms for weight, strength, goals, plateaus and milestones
// ABOUTME: Stateless heuristic models plus the orchestrator that sequences them per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Intelligence
//!
//! Closed-form forecasting over a user's recent history. Every component is a
//! pure function of its inputs; data flows one way through the list below and
//! nothing is cached between calls.
//!
//! ## Modules
//!
//! - **`trend_analyzer`**: weekly rate, variance and standard deviation helpers
//! - **`weight_predictor`**: decayed linear weight extrapolation
//! - **`strength_predictor`**: diminishing-returns load compounding
//! - **`goal_evaluator`**: completion date, probability and trajectory
//! - **`plateau_detector`**: variance-based stagnation risk
//! - **`milestone_scheduler`**: weight, strength and streak milestones
//! - **`confidence_scorer`**: overall 0-1 confidence
//! - **`recommendation_synthesizer`**: ordered, deterministic guidance
//! - **`prediction_engine`**: the public entry point

/// Tunable model parameters
pub mod config;

/// Trend statistics shared by every predictor
pub mod trend_analyzer;

/// Calendar arithmetic for fractional day and week offsets
pub mod timeline;

/// Body weight forecasting
pub mod weight_predictor;

/// Per-exercise strength forecasting
pub mod strength_predictor;

/// Goal achievement evaluation
pub mod goal_evaluator;

/// Plateau risk detection
pub mod plateau_detector;

/// Milestone scheduling
pub mod milestone_scheduler;

/// Overall confidence scoring
pub mod confidence_scorer;

/// Recommendation synthesis
pub mod recommendation_synthesizer;

/// Orchestration of all components for one user
pub mod prediction_engine;

pub use config::PredictionConfig;
pub use confidence_scorer::ConfidenceScorer;
pub use goal_evaluator::{
    GoalAchievementPrediction, GoalEvaluator, GoalInputs, GoalTargetKind, Trajectory,
    NO_GOALS_MESSAGE,
};
pub use milestone_scheduler::{
    MilestoneInputs, MilestoneKind, MilestonePrediction, MilestoneScheduler,
};
pub use plateau_detector::{PlateauDetector, PlateauPrediction, PlateauRisk};
pub use prediction_engine::{PredictionEngine, PredictionResult, ProgressPredictor};
pub use recommendation_synthesizer::{RecommendationInputs, RecommendationSynthesizer};
pub use strength_predictor::{
    ExerciseProjection, StrengthPrediction, StrengthPredictor, StrengthProjectionPoint,
};
pub use trend_analyzer::TrendAnalyzer;
pub use weight_predictor::{
    ConfidenceInterval, WeightPrediction, WeightPredictor, WeightProjectionPoint, WeightTrend,
};
