// ABOUTME: Calendar offset helpers for projected dates
// ABOUTME: Converts fractional day/week offsets into dates without overflow panics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use progress_core::constants::time::{SECONDS_PER_DAY, SECONDS_PER_WEEK};

/// `as_of` shifted by a fractional number of days; `None` if not representable
#[must_use]
pub fn days_after(as_of: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    seconds_after(as_of, days * SECONDS_PER_DAY)
}

/// `as_of` shifted by a fractional number of weeks; `None` if not representable
#[must_use]
pub fn weeks_after(as_of: DateTime<Utc>, weeks: f64) -> Option<DateTime<Utc>> {
    seconds_after(as_of, weeks * SECONDS_PER_WEEK)
}

/// Fractional weeks from `as_of` until `date` (negative when in the past)
#[must_use]
pub fn weeks_until(as_of: DateTime<Utc>, date: DateTime<Utc>) -> f64 {
    (date - as_of).num_seconds() as f64 / SECONDS_PER_WEEK
}

fn seconds_after(as_of: DateTime<Utc>, seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    // Saturating float-to-int cast; out-of-range values fail the checks below
    let delta = Duration::try_seconds(seconds.round() as i64)?;
    as_of.checked_add_signed(delta)
}
