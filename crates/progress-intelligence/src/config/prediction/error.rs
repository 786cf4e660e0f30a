// ABOUTME: Configuration error types for prediction model validation
// ABOUTME: Defines error variants for invalid ranges, weights, and environment parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for prediction model validation.

use progress_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds in the wrong order (e.g. on-track ratio above behind ratio)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Blend weights don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// NaN or infinite parameter
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
