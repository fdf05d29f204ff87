// ABOUTME: Chart bucket pre-allocation and wearable sample accumulation per window
// ABOUTME: Buckets are right-aligned to "now" and keyed at hour/day/month granularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Chart bucketing.
//!
//! Every bucket for the full span is pre-created, even when no sample falls in
//! it, so chart rendering has a stable x-axis. Bucket `i` for `i` from
//! `count-1` down to `0` represents `now - i` units, i.e. the series is
//! right-aligned to the present. Samples are keyed with the same granularity
//! rule used for pre-creation; heart rate stays a sample list until reduced to
//! a mean at emission.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, Utc};

use stride_core::constants::windows;
use stride_core::models::{Chart, ChartBucket, Period, SampleMetric, WearableSampleRaw};

/// Bucket granularity chosen from the selected window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Granularity {
    /// One bucket per hour (day window)
    Hour,
    /// One bucket per day (week and month windows)
    Day,
    /// One bucket per month (year and all windows)
    Month,
}

impl Granularity {
    /// Granularity and bucket count for a window
    const fn for_period(period: Period) -> (Self, usize) {
        match period {
            Period::Day => (Self::Hour, windows::DAY_HOURLY_BUCKETS),
            Period::Week => (Self::Day, windows::WEEK_DAILY_BUCKETS),
            Period::Month => (Self::Day, windows::MONTH_DAILY_BUCKETS),
            Period::Year | Period::All => (Self::Month, windows::YEAR_MONTHLY_BUCKETS),
        }
    }

    /// The timestamp `units` steps before `now` at this granularity
    fn step_back(self, now: DateTime<Utc>, units: usize) -> DateTime<Utc> {
        match self {
            Self::Hour => now - Duration::hours(units as i64),
            Self::Day => now - Duration::days(units as i64),
            Self::Month => now
                .checked_sub_months(Months::new(units as u32))
                .unwrap_or(now),
        }
    }

    /// Canonical bucket key for a timestamp
    fn key(self, timestamp: DateTime<Utc>) -> String {
        let pattern = match self {
            Self::Hour => "%Y-%m-%d %H",
            Self::Day => "%Y-%m-%d",
            Self::Month => "%Y-%m",
        };
        timestamp.format(pattern).to_string()
    }

    /// Human-readable tick label for a timestamp
    fn label(self, timestamp: DateTime<Utc>) -> String {
        let pattern = match self {
            Self::Hour => "%-I:00 %p",
            Self::Day => "%b %-d",
            Self::Month => "%b",
        };
        timestamp.format(pattern).to_string()
    }
}

/// Build the chart for one window from raw wearable samples.
///
/// Empty input yields a fully-zeroed chart: every bucket present, all sums
/// zero, all filtered out of the display series.
#[must_use]
pub fn build_chart(samples: &[WearableSampleRaw], period: Period, now: DateTime<Utc>) -> Chart {
    let (granularity, count) = Granularity::for_period(period);

    let mut buckets: Vec<ChartBucket> = Vec::with_capacity(count);
    let mut index_by_key: HashMap<String, usize> = HashMap::with_capacity(count);
    for units_back in (0..count).rev() {
        let slot_time = granularity.step_back(now, units_back);
        let key = granularity.key(slot_time);
        index_by_key.insert(key.clone(), buckets.len());
        buckets.push(ChartBucket::new(key, granularity.label(slot_time)));
    }

    for sample in samples {
        let Some(timestamp) = sample.timestamp else {
            continue;
        };
        let Some(&index) = index_by_key.get(&granularity.key(timestamp)) else {
            continue;
        };
        let bucket = &mut buckets[index];
        match sample.metric {
            SampleMetric::Steps => bucket.steps += sample.value,
            SampleMetric::Distance => bucket.distance += sample.value,
            SampleMetric::Calories => bucket.calories += sample.value,
            SampleMetric::HeartRate => bucket.heart_rate.push(sample.value),
        }
    }

    Chart { buckets }
}
