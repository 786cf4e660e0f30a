// ABOUTME: Prediction commands for progress-cli
// ABOUTME: Loads inputs from disk, runs the engine, and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::print_json;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use progress_engine::errors::ErrorCode;
use progress_engine::{
    load_batch_input, load_prediction_input, PredictionEngine, PredictionResult, ProgressPredictor,
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// One line of batch output: either a result or the error that replaced it
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Ok(Box<PredictionResult>),
    Err { code: ErrorCode, message: String },
}

/// Forecast a single user
pub fn single(path: &Path, as_of: Option<DateTime<Utc>>, pretty: bool) -> Result<()> {
    let mut input = load_prediction_input(path)
        .with_context(|| format!("Failed to load input from {}", path.display()))?;
    if let Some(as_of) = as_of {
        input.as_of = as_of;
    }

    let result = PredictionEngine::new()
        .generate_predictions(&input)
        .context("Prediction failed")?;
    print_json(&result, pretty)
}

/// Forecast every user in a batch file
pub fn batch(path: &Path, pretty: bool) -> Result<()> {
    let inputs = load_batch_input(path)
        .with_context(|| format!("Failed to load batch input from {}", path.display()))?;

    let results = PredictionEngine::new().generate_batch(&inputs);
    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(total = results.len(), failed, "Batch prediction finished");

    let entries: Vec<BatchEntry> = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(result) => BatchEntry::Ok(Box::new(result)),
            Err(error) => {
                warn!(index, %error, "Prediction failed for batch entry");
                BatchEntry::Err {
                    code: error.code,
                    message: error.message,
                }
            }
        })
        .collect();

    print_json(&entries, pretty)
}
