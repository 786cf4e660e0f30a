// ABOUTME: Rate-of-change and dispersion statistics over ordered time series
// ABOUTME: Shared by every predictor; all helpers return 0 instead of failing on sparse input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use progress_core::constants::time::SECONDS_PER_WEEK;
use progress_core::models::TrendSample;

/// Stateless statistics over time series
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Endpoint rate of change per week
    ///
    /// `(last.value - first.value) / weeks_between(first, last)`. Returns 0.0
    /// for fewer than two samples or when both endpoints share a timestamp.
    /// Samples must already be ordered by date.
    #[must_use]
    pub fn weekly_rate(series: &[TrendSample]) -> f64 {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return 0.0;
        };
        if series.len() < 2 {
            return 0.0;
        }

        let weeks = Self::weeks_between(first, last);
        if weeks.abs() < f64::EPSILON {
            return 0.0;
        }

        let rate = (last.value - first.value) / weeks;
        if rate.is_finite() {
            rate
        } else {
            0.0
        }
    }

    /// Fractional weeks from `first` to `last`
    #[must_use]
    pub fn weeks_between(first: &TrendSample, last: &TrendSample) -> f64 {
        (last.date - first.date).num_seconds() as f64 / SECONDS_PER_WEEK
    }

    /// Arithmetic mean, 0.0 for empty input
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population variance, 0.0 for empty input
    #[must_use]
    pub fn variance(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / values.len() as f64
    }

    /// Population standard deviation, 0.0 for empty input
    #[must_use]
    pub fn std_dev(values: &[f64]) -> f64 {
        Self::variance(values).sqrt()
    }

    /// The last `count` samples of an ordered series
    #[must_use]
    pub fn recent<T>(series: &[T], count: usize) -> &[T] {
        &series[series.len().saturating_sub(count)..]
    }
}
