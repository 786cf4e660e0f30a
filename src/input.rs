// ABOUTME: Prediction input loading from JSON text and files
// ABOUTME: Maps parse and I/O failures onto AppError codes with the offending path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::PredictionInput;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a single prediction input from JSON text
///
/// # Errors
///
/// Returns `INVALID_FORMAT` if the text is not a valid `PredictionInput`
pub fn parse_prediction_input(json: &str) -> AppResult<PredictionInput> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of prediction inputs
///
/// # Errors
///
/// Returns `INVALID_FORMAT` if the text is not an array of `PredictionInput`
pub fn parse_batch_input(json: &str) -> AppResult<Vec<PredictionInput>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a single prediction input from a JSON file
///
/// # Errors
///
/// Returns `STORAGE_ERROR` if the file cannot be read, or `INVALID_FORMAT`
/// if its contents do not parse
pub fn load_prediction_input(path: &Path) -> AppResult<PredictionInput> {
    let contents = read(path)?;
    let input =
        parse_prediction_input(&contents).map_err(|e| e.with_resource_id(path.display().to_string()))?;
    debug!(path = %path.display(), "Loaded prediction input");
    Ok(input)
}

/// Load a JSON array of prediction inputs from a file
///
/// # Errors
///
/// Returns `STORAGE_ERROR` if the file cannot be read, or `INVALID_FORMAT`
/// if its contents do not parse
pub fn load_batch_input(path: &Path) -> AppResult<Vec<PredictionInput>> {
    let contents = read(path)?;
    let inputs =
        parse_batch_input(&contents).map_err(|e| e.with_resource_id(path.display().to_string()))?;
    debug!(path = %path.display(), count = inputs.len(), "Loaded batch input");
    Ok(inputs)
}

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_resource_id(path.display().to_string())
    })
}
