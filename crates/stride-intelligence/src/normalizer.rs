// ABOUTME: Converts raw primary-store documents and wearable sessions into WorkoutRecords
// ABOUTME: Defaults malformed fields, derives pace, and resolves the ranking direction once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Event normalization.
//!
//! One function per raw variant. Normalization never fails: absent numeric
//! fields default to zero or `None` per field, an absent category defaults to
//! `"unknown"` (primary) or `"Workout"` (wearable), and an absent timestamp
//! stays `None` so downstream ordering treats the record as earliest.

use uuid::Uuid;

use stride_core::constants::defaults;
use stride_core::models::{
    PrimaryWorkoutRaw, RecordSource, SampleMetric, ScoreDirection, WearableSampleRaw,
    WearableSessionRaw, WorkoutRecord, WorkoutRecordBuilder,
};

/// Ranking direction for a category.
///
/// All categories currently modeled rank lower-is-better, including
/// distance-style field events - the comparator and the formatting dispatch
/// are independent classification paths. The per-category resolution point
/// lives here so a future direction change is a single-site edit.
#[must_use]
pub fn direction_for_category(_category: &str) -> ScoreDirection {
    ScoreDirection::LowerIsBetter
}

/// Normalize a primary-store workout document.
#[must_use]
pub fn normalize_primary(raw: &PrimaryWorkoutRaw, user_id: Uuid) -> WorkoutRecord {
    let category = raw
        .event_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| defaults::UNKNOWN_CATEGORY.to_owned());

    let pace = derive_pace(raw.duration, raw.distance);

    WorkoutRecordBuilder::new(raw.id.clone(), user_id, &category, RecordSource::Primary)
        .result_opt(raw.result)
        .timestamp_opt(raw.timestamp)
        .distance_meters_opt(raw.distance)
        .duration_seconds_opt(raw.duration)
        .steps_opt(raw.steps)
        .pace_opt(pace)
        .direction(direction_for_category(&category))
        .build()
}

/// Normalize a wearable activity session.
///
/// The platform sends the activity type under `activity_type` or `type`
/// depending on payload age; both fall back to `"Workout"`.
#[must_use]
pub fn normalize_wearable(raw: &WearableSessionRaw, user_id: Uuid) -> WorkoutRecord {
    let category = raw
        .activity_type
        .clone()
        .or_else(|| raw.session_type.clone())
        .filter(|kind| !kind.is_empty())
        .unwrap_or_else(|| defaults::WEARABLE_CATEGORY.to_owned());

    let pace = derive_pace(raw.duration, raw.total_distance);

    WorkoutRecordBuilder::new(raw.id.clone(), user_id, &category, RecordSource::Wearable)
        .timestamp_opt(raw.start_date)
        .distance_meters_opt(raw.total_distance)
        .duration_seconds_opt(raw.duration)
        .energy_burned_opt(raw.total_energy_burned)
        .pace_opt(pace)
        .direction(direction_for_category(&category))
        .build()
}

/// Surface session-level energy as calorie samples for the chart.
///
/// Sessions carry a single `total_energy_burned` figure rather than raw
/// calorie samples; each session with both an energy value and a start time
/// contributes one calorie sample at that time, so session energy lands in
/// the same chart buckets as the platform's raw samples.
#[must_use]
pub fn energy_samples(sessions: &[WearableSessionRaw]) -> Vec<WearableSampleRaw> {
    sessions
        .iter()
        .filter_map(|session| {
            session
                .total_energy_burned
                .zip(session.start_date)
                .map(|(value, timestamp)| WearableSampleRaw {
                    metric: SampleMetric::Calories,
                    value,
                    timestamp: Some(timestamp),
                })
        })
        .collect()
}

/// Pace in seconds per meter; `None` when distance is absent or zero.
fn derive_pace(duration: Option<f64>, distance: Option<f64>) -> Option<f64> {
    match (duration, distance) {
        (Some(duration), Some(distance)) if distance > 0.0 => Some(duration / distance),
        _ => None,
    }
}
