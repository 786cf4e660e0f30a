// ABOUTME: Command modules for progress-cli
// ABOUTME: Prediction (single and batch) and configuration display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod config;
pub mod predict;

use anyhow::Result;
use serde::Serialize;

/// Write `value` as JSON to stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
