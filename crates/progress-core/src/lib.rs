// ABOUTME: Core types and constants for the progress prediction engine
// ABOUTME: Foundation crate with error handling, input data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Core
//!
//! Foundation crate providing shared types for the progress prediction engine.
//! It is designed to change infrequently so the heavier intelligence crate
//! benefits from incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Historical logs, current metrics, goals and the `PredictionInput` aggregate
//! - **constants**: Calendar and energy constants

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Input data models
pub mod models;
