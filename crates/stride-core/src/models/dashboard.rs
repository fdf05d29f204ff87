// ABOUTME: Dashboard view models: windows, windowed counts, personal records, and chart buckets
// ABOUTME: Presentation-ready aggregates produced by the aggregator and merge layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::workout::{RecordSource, WorkoutRecord};

/// Named time span used to filter and bucket records relative to "now"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Local midnight of the reference day onward
    Day,
    /// Most recent Sunday at midnight onward
    Week,
    /// First of the current month onward
    Month,
    /// January 1 of the current year onward
    Year,
    /// Two years before January 1 of the current year onward
    All,
}

impl Period {
    /// Stable string key for this period
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

/// Record counts per window, all computed against the same reference "now".
///
/// Windows nest, so for any record set `week <= month <= year <= all`.
/// `total` counts every record including timestamp-less ones; the named
/// windows only count records carrying a timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WindowedCounts {
    /// Every record, timestamp or not
    pub total: u64,
    /// Records since midnight today
    pub day: u64,
    /// Records since the most recent Sunday midnight
    pub week: u64,
    /// Records since the first of the month
    pub month: u64,
    /// Records since January 1
    pub year: u64,
    /// Records since January 1 two years back
    pub all: u64,
}

/// The single best record observed for one event category.
///
/// `source` is the display provenance tag. The primary-source aggregation
/// leaves it unset and the wearable aggregation tags it `Wearable` - the
/// merge layer's override rule depends on this asymmetry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalRecordEntry {
    /// Event category this record belongs to
    pub category: String,
    /// The best record observed for the category
    pub record: WorkoutRecord,
    /// Display provenance tag, set only for wearable-derived entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RecordSource>,
}

/// A labeled time-slot accumulating raw health samples for chart display.
///
/// Buckets are pre-allocated for the full window so the chart has a stable
/// x-axis; heart-rate samples stay a list until reduced to a mean at emission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartBucket {
    /// Canonical bucket key derived from the timestamp at window granularity
    pub key: String,
    /// Human-readable tick label (e.g. `"3:00 PM"`, `"Jan 5"`, `"Mar"`)
    pub label: String,
    /// Accumulated steps
    pub steps: f64,
    /// Accumulated distance in meters
    pub distance: f64,
    /// Accumulated energy in kilocalories
    pub calories: f64,
    /// Raw heart-rate samples, reduced to a mean at emission
    pub heart_rate: Vec<f64>,
}

impl ChartBucket {
    /// Creates an empty bucket for the given key and label
    #[must_use]
    pub const fn new(key: String, label: String) -> Self {
        Self {
            key,
            label,
            steps: 0.0,
            distance: 0.0,
            calories: 0.0,
            heart_rate: Vec::new(),
        }
    }

    /// Whether nothing accumulated into this bucket
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps == 0.0 && self.distance == 0.0 && self.calories == 0.0 && self.heart_rate.is_empty()
    }

    /// Mean of the accumulated heart-rate samples, when any exist
    #[must_use]
    pub fn mean_heart_rate(&self) -> Option<f64> {
        if self.heart_rate.is_empty() {
            return None;
        }
        let sum: f64 = self.heart_rate.iter().sum();
        Some(sum / self.heart_rate.len() as f64)
    }
}

/// One emitted chart tick with heart rate already reduced to a mean
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// Human-readable tick label
    pub label: String,
    /// Accumulated steps
    pub steps: f64,
    /// Accumulated distance in meters
    pub distance: f64,
    /// Accumulated energy in kilocalories
    pub calories: f64,
    /// Mean heart rate over the bucket, when samples exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
}

/// A full chart for one window: every bucket, oldest first, right-aligned to
/// "now". Empty buckets stay in `buckets` (stable x-axis) and are filtered
/// only from the emitted display series.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Chart {
    /// Every pre-allocated bucket in chronological order
    pub buckets: Vec<ChartBucket>,
}

impl Chart {
    /// Emit the display series: all-zero buckets skipped, heart rate averaged
    #[must_use]
    pub fn display_series(&self) -> Vec<ChartPoint> {
        self.buckets
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .map(|bucket| ChartPoint {
                label: bucket.label.clone(),
                steps: bucket.steps,
                distance: bucket.distance,
                calories: bucket.calories,
                heart_rate: bucket.mean_heart_rate(),
            })
            .collect()
    }
}

/// Presentation-ready aggregation over a single source.
///
/// The personal-record map is ordered (`BTreeMap`) so merge iteration is
/// deterministic regardless of input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    /// Best record per distinct event category
    pub personal_records: BTreeMap<String, PersonalRecordEntry>,
    /// Counts per nested window
    pub windowed_counts: WindowedCounts,
    /// Most recent workouts, newest first, timestamp-less last
    pub recent_workouts: Vec<WorkoutRecord>,
    /// Chart buckets for the selected window
    pub chart: Chart,
}

/// Reconciled view over the primary and wearable dashboards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MergedView {
    /// De-duplicated personal records across both sources
    pub personal_records: BTreeMap<String, PersonalRecordEntry>,
    /// Time-ordered recent performances across both sources
    pub recent_performances: Vec<WorkoutRecord>,
}
