// ABOUTME: Configuration module for progress-intelligence crate
// ABOUTME: Re-exports prediction model configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Prediction model configuration (projections, goals, plateau, milestones, confidence)
pub mod prediction;

pub use prediction::PredictionConfig;
