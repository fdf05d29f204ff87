// ABOUTME: Single-source aggregation: personal records, windowed counts, recency ordering
// ABOUTME: All window boundaries computed from an injected reference "now", never the ambient clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Aggregation over one normalized source.
//!
//! Personal records keep the numerically smallest `result` per category -
//! lower-is-better is the load-bearing invariant for every category currently
//! modeled, and categories are never cross-compared. Records without a
//! timestamp count in no named window and sort last in recency order, but are
//! never excluded from totals or PR grouping.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use stride_core::constants::windows;
use stride_core::models::{
    Dashboard, Period, PersonalRecordEntry, RecordSource, WearableSampleRaw, WindowedCounts,
    WorkoutRecord,
};

use crate::chart::build_chart;

/// Start of the given window relative to `now`.
///
/// Day: midnight of `now`'s date. Week: the most recent Sunday at midnight.
/// Month: first of the current month. Year: January 1. All: January 1 two
/// years back.
#[must_use]
pub fn window_start(period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let start_date = match period {
        Period::Day => today,
        Period::Week => {
            let days_back = i64::from(now.weekday().num_days_from_sunday());
            today - Duration::days(days_back)
        }
        Period::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today),
        Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        Period::All => {
            NaiveDate::from_ymd_opt(today.year() - windows::ALL_WINDOW_YEARS_BACK, 1, 1)
                .unwrap_or(today)
        }
    };
    start_date.and_time(NaiveTime::MIN).and_utc()
}

/// Aggregate one normalized source into a presentation-ready dashboard.
///
/// `records` drives personal records, windowed counts, and recency ordering;
/// `samples` drives the chart (the primary source passes an empty slice -
/// chart data comes from wearable health samples). `recent_limit` is
/// caller-supplied: 5 for the home screen, 20 for the stats screen.
#[must_use]
pub fn compute_dashboard(
    records: &[WorkoutRecord],
    samples: &[WearableSampleRaw],
    period: Period,
    now: DateTime<Utc>,
    recent_limit: usize,
) -> Dashboard {
    let personal_records = personal_records(records);
    let windowed_counts = windowed_counts(records, now);
    let recent_workouts = recent_workouts(records, recent_limit);
    let chart = build_chart(samples, period, now);

    debug!(
        records = records.len(),
        samples = samples.len(),
        categories = personal_records.len(),
        period = period.as_str(),
        "aggregated source dashboard"
    );

    Dashboard {
        personal_records,
        windowed_counts,
        recent_workouts,
        chart,
    }
}

/// Best record per distinct category: smallest `result` wins.
///
/// Every category observed claims exactly one entry, so the map's size is the
/// number of distinct categories, not records. The first record of a category
/// holds the slot; a later record replaces it only when both carry a `result`
/// and the newcomer's is strictly smaller - a comparison against a result-less
/// incumbent never succeeds, so result-less efforts (wearable sessions) can
/// hold a slot but never steal one. Wearable-derived entries carry a source
/// tag; primary entries leave it unset, which the merge layer's override rule
/// relies on.
#[must_use]
pub fn personal_records(records: &[WorkoutRecord]) -> BTreeMap<String, PersonalRecordEntry> {
    let mut best: BTreeMap<String, PersonalRecordEntry> = BTreeMap::new();
    for record in records {
        let source_tag = match record.source() {
            RecordSource::Primary => None,
            RecordSource::Wearable => Some(RecordSource::Wearable),
        };
        match best.get_mut(record.event_category()) {
            Some(entry) => {
                if let (Some(result), Some(current)) = (record.result(), entry.record.result()) {
                    if result < current {
                        entry.record = record.clone();
                        entry.source = source_tag;
                    }
                }
            }
            None => {
                best.insert(
                    record.event_category().to_owned(),
                    PersonalRecordEntry {
                        category: record.event_category().to_owned(),
                        record: record.clone(),
                        source: source_tag,
                    },
                );
            }
        }
    }
    best
}

/// Counts per nested window against the same reference `now`.
#[must_use]
pub fn windowed_counts(records: &[WorkoutRecord], now: DateTime<Utc>) -> WindowedCounts {
    let count_since = |start: DateTime<Utc>| -> u64 {
        records
            .iter()
            .filter(|record| record.timestamp().is_some_and(|ts| ts >= start))
            .count() as u64
    };

    WindowedCounts {
        total: records.len() as u64,
        day: count_since(window_start(Period::Day, now)),
        week: count_since(window_start(Period::Week, now)),
        month: count_since(window_start(Period::Month, now)),
        year: count_since(window_start(Period::Year, now)),
        all: count_since(window_start(Period::All, now)),
    }
}

/// Most recent records first; missing timestamps sort as earliest (last).
#[must_use]
pub fn recent_workouts(records: &[WorkoutRecord], limit: usize) -> Vec<WorkoutRecord> {
    let mut ordered: Vec<WorkoutRecord> = records.to_vec();
    ordered.sort_by_key(|record| std::cmp::Reverse(record.sort_timestamp()));
    ordered.truncate(limit);
    ordered
}
