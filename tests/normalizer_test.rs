// ABOUTME: Integration tests for raw-document normalization into WorkoutRecords
// ABOUTME: Covers category defaulting, pace derivation, and ranking direction resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use stride_core::models::{
    PrimaryWorkoutRaw, RecordSource, SampleMetric, ScoreDirection, WearableSessionRaw,
};
use stride_intelligence::normalizer::{energy_samples, normalize_primary, normalize_wearable};

fn user() -> Uuid {
    Uuid::new_v4()
}

#[test]
fn primary_document_maps_every_field() {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 19, 9, 30, 0).unwrap();
    let raw = PrimaryWorkoutRaw {
        id: "w1".into(),
        event_id: Some("sprint-100m".into()),
        event_name: Some("100m Sprint".into()),
        result: Some(11.92),
        duration: Some(600.0),
        distance: Some(2000.0),
        steps: Some(2400),
        timestamp: Some(timestamp),
    };

    let record = normalize_primary(&raw, user());

    assert_eq!(record.id(), "w1");
    assert_eq!(record.event_category(), "sprint-100m");
    assert_eq!(record.result(), Some(11.92));
    assert_eq!(record.timestamp(), Some(timestamp));
    assert_eq!(record.distance_meters(), Some(2000.0));
    assert_eq!(record.duration_seconds(), Some(600.0));
    assert_eq!(record.steps(), Some(2400));
    assert_eq!(record.source(), RecordSource::Primary);
    // 600s over 2000m
    assert_eq!(record.pace(), Some(0.3));
}

#[test]
fn primary_without_event_id_falls_back_to_unknown() {
    let raw = PrimaryWorkoutRaw {
        id: "w2".into(),
        ..PrimaryWorkoutRaw::default()
    };
    let record = normalize_primary(&raw, user());
    assert_eq!(record.event_category(), "unknown");
    assert!(record.result().is_none());
    assert!(record.timestamp().is_none());
}

#[test]
fn primary_empty_event_id_is_treated_as_absent() {
    let raw = PrimaryWorkoutRaw {
        id: "w3".into(),
        event_id: Some(String::new()),
        ..PrimaryWorkoutRaw::default()
    };
    assert_eq!(normalize_primary(&raw, user()).event_category(), "unknown");
}

#[test]
fn pace_is_none_when_distance_is_zero_or_absent() {
    let zero_distance = PrimaryWorkoutRaw {
        id: "w4".into(),
        duration: Some(300.0),
        distance: Some(0.0),
        ..PrimaryWorkoutRaw::default()
    };
    assert!(normalize_primary(&zero_distance, user()).pace().is_none());

    let no_distance = PrimaryWorkoutRaw {
        id: "w5".into(),
        duration: Some(300.0),
        ..PrimaryWorkoutRaw::default()
    };
    assert!(normalize_primary(&no_distance, user()).pace().is_none());
}

#[test]
fn wearable_session_prefers_activity_type_over_type() {
    let raw = WearableSessionRaw {
        id: "s1".into(),
        activity_type: Some("Running".into()),
        session_type: Some("Cycling".into()),
        ..WearableSessionRaw::default()
    };
    let record = normalize_wearable(&raw, user());
    assert_eq!(record.event_category(), "Running");
    assert_eq!(record.source(), RecordSource::Wearable);
}

#[test]
fn wearable_session_falls_back_to_type_then_workout() {
    let legacy = WearableSessionRaw {
        id: "s2".into(),
        session_type: Some("Cycling".into()),
        ..WearableSessionRaw::default()
    };
    assert_eq!(normalize_wearable(&legacy, user()).event_category(), "Cycling");

    let bare = WearableSessionRaw {
        id: "s3".into(),
        ..WearableSessionRaw::default()
    };
    assert_eq!(normalize_wearable(&bare, user()).event_category(), "Workout");
}

#[test]
fn wearable_session_carries_energy_and_no_result() {
    let raw = WearableSessionRaw {
        id: "s4".into(),
        activity_type: Some("Running".into()),
        total_distance: Some(5000.0),
        duration: Some(1500.0),
        total_energy_burned: Some(420.0),
        ..WearableSessionRaw::default()
    };
    let record = normalize_wearable(&raw, user());
    assert!(record.result().is_none());
    assert_eq!(record.energy_burned(), Some(420.0));
    assert_eq!(record.pace(), Some(0.3));
}

#[test]
fn session_energy_becomes_a_timestamped_calorie_sample() {
    let timestamp = Utc.with_ymd_and_hms(2025, 3, 19, 8, 0, 0).unwrap();
    let sessions = vec![
        WearableSessionRaw {
            id: "s1".into(),
            total_energy_burned: Some(420.0),
            start_date: Some(timestamp),
            ..WearableSessionRaw::default()
        },
        // Missing energy or start time contributes nothing
        WearableSessionRaw {
            id: "s2".into(),
            total_energy_burned: Some(300.0),
            ..WearableSessionRaw::default()
        },
        WearableSessionRaw {
            id: "s3".into(),
            start_date: Some(timestamp),
            ..WearableSessionRaw::default()
        },
    ];

    let samples = energy_samples(&sessions);
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].metric, SampleMetric::Calories);
    assert_eq!(samples[0].value, 420.0);
    assert_eq!(samples[0].timestamp, Some(timestamp));
}

#[test]
fn every_category_ranks_lower_is_better() {
    let field_event = PrimaryWorkoutRaw {
        id: "w6".into(),
        event_id: Some("long-jump-field".into()),
        result: Some(6.34),
        ..PrimaryWorkoutRaw::default()
    };
    let record = normalize_primary(&field_event, user());
    assert_eq!(record.direction(), ScoreDirection::LowerIsBetter);
}
