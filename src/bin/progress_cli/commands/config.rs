// ABOUTME: Configuration display command for progress-cli
// ABOUTME: Prints the validated model configuration after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::print_json;
use anyhow::{Context, Result};
use progress_engine::config::PredictionConfig;

/// Print the configuration `PredictionEngine::new()` would use
pub fn show() -> Result<()> {
    let config = PredictionConfig::load().context("Prediction configuration is invalid")?;
    print_json(&config, true)
}
