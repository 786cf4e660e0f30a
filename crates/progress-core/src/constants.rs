// ABOUTME: Domain constants shared by the progress prediction crates
// ABOUTME: Calendar conversions, energy density of body mass, and rating scales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fixed domain constants. Tunable model parameters live in the intelligence
//! crate's configuration instead.

/// Calendar conversions
pub mod time {
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Seconds per day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Seconds per week
    pub const SECONDS_PER_WEEK: f64 = SECONDS_PER_DAY * DAYS_PER_WEEK;

    /// Mean Gregorian month length in days
    pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;
}

/// Energy balance
pub mod energy {
    /// Approximate energy stored in one kilogram of body mass change (kcal)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7_700.0;
}

/// Self-rating scales
pub mod ratings {
    /// Upper bound of the sleep / stress self-rating scale
    pub const MAX_SELF_RATING: u8 = 10;

    /// Upper bound of the consistency score
    pub const MAX_CONSISTENCY_SCORE: f64 = 100.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the engine in log output
    pub const PROGRESS_ENGINE: &str = "progress-engine";
}
