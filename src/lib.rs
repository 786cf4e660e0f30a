// ABOUTME: Main library entry point for the progress prediction engine
// ABOUTME: Re-exports the core model and intelligence crates plus logging and input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Engine
//!
//! Forecasts body weight and strength, evaluates goal achievement, flags
//! plateau risk, schedules milestones and synthesizes recommendations from a
//! user's logged history. Every prediction is a pure function of its
//! [`PredictionInput`](models::PredictionInput).
//!
//! ## Architecture
//!
//! - **`progress-core`**: errors, constants and the input data model
//! - **`progress-intelligence`**: the forecasting components and orchestrator
//! - **this crate**: logging setup, JSON input loading and the `progress-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use progress_engine::intelligence::{PredictionEngine, ProgressPredictor};
//! use progress_engine::models::{CurrentMetrics, PredictionInput};
//!
//! let input = PredictionInput {
//!     user_id: None,
//!     as_of: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
//!     historical_data: Default::default(),
//!     current_metrics: CurrentMetrics {
//!         weight: Some(80.0),
//!         ..CurrentMetrics::default()
//!     },
//!     goals: Default::default(),
//!     context: None,
//! };
//!
//! let result = PredictionEngine::new().generate_predictions(&input).unwrap();
//! assert!((0.0..=1.0).contains(&result.confidence));
//! ```

/// Unified error handling (`AppError`, `ErrorCode`, `AppResult`)
pub use progress_core::errors;

/// Shared domain constants
pub use progress_core::constants;

/// Input data model
pub use progress_core::models;

/// Forecasting components and the prediction orchestrator
pub use progress_intelligence as intelligence;

/// Prediction model configuration
pub use progress_intelligence::config;

/// JSON input loading
pub mod input;

/// Structured logging setup
pub mod logging;

pub use input::{load_batch_input, load_prediction_input, parse_batch_input, parse_prediction_input};
pub use progress_intelligence::{PredictionConfig, PredictionEngine, PredictionResult, ProgressPredictor};
