// ABOUTME: End-to-end tests for the dashboard refresh service over synthetic providers
// ABOUTME: Covers both-source refresh, failure degradation, authorization, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use stride::{DashboardService, ServiceConfig};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{
    Period, PrimaryWorkoutRaw, RecordSource, SampleMetric, WearableSampleRaw, WearableSessionRaw,
};
use stride_providers::{FixedClock, SyntheticProvider, WearableSource, WorkoutRepository};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 19, 15, 30, 0).unwrap()
}

fn primary_workout(id: &str, timestamp: DateTime<Utc>) -> PrimaryWorkoutRaw {
    PrimaryWorkoutRaw {
        id: id.into(),
        event_id: Some("sprint-100m".into()),
        result: Some(11.9),
        duration: Some(1200.0),
        distance: Some(2000.0),
        steps: Some(2400),
        timestamp: Some(timestamp),
        ..PrimaryWorkoutRaw::default()
    }
}

fn wearable_session(id: &str, timestamp: DateTime<Utc>) -> WearableSessionRaw {
    WearableSessionRaw {
        id: id.into(),
        activity_type: Some("Running".into()),
        total_distance: Some(5000.0),
        duration: Some(1500.0),
        start_date: Some(timestamp),
        total_energy_burned: Some(420.0),
        ..WearableSessionRaw::default()
    }
}

fn service(provider: SyntheticProvider) -> DashboardService {
    let provider = Arc::new(provider);
    DashboardService::new(
        provider.clone(),
        provider,
        Arc::new(FixedClock(now())),
        ServiceConfig::default(),
    )
}

/// Repository that always fails, for degradation tests
struct FailingRepository;

#[async_trait]
impl WorkoutRepository for FailingRepository {
    async fn fetch_workouts_for_user(&self, _user_id: Uuid) -> AppResult<Vec<PrimaryWorkoutRaw>> {
        Err(AppError::external_service("store unreachable"))
    }
}

/// Wearable source that authorizes but fails every fetch
struct FailingWearable;

#[async_trait]
impl WearableSource for FailingWearable {
    async fn is_authorized(&self) -> bool {
        true
    }

    async fn fetch_sessions(
        &self,
        _user_id: Uuid,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSessionRaw>> {
        Err(AppError::external_service("platform timeout"))
    }

    async fn fetch_samples(
        &self,
        _user_id: Uuid,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSampleRaw>> {
        Err(AppError::external_service("platform timeout"))
    }
}

#[tokio::test]
async fn refresh_builds_a_view_from_both_sources() {
    let user = Uuid::new_v4();
    let provider = SyntheticProvider::new()
        .with_workout(user, primary_workout("w1", now() - Duration::hours(2)))
        .with_session(wearable_session("s1", now() - Duration::hours(3)))
        .with_sample(WearableSampleRaw {
            metric: SampleMetric::Steps,
            value: 900.0,
            timestamp: Some(now() - Duration::hours(1)),
        });

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    assert!(view.primary.personal_records.contains_key("sprint-100m"));
    assert_eq!(view.primary.windowed_counts.week, 1);
    assert_eq!(view.wearable.recent_workouts.len(), 1);
    assert_eq!(view.wearable.chart.buckets.len(), 7);
    let series = view.wearable.chart.display_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].steps, 900.0);
    // Session energy surfaces as chart calories alongside raw samples
    assert_eq!(series[0].calories, 420.0);
    assert_eq!(view.merged.personal_records.len(), 2);
    assert_eq!(view.merged.recent_performances.len(), 2);
    assert_eq!(view.home_performances.len(), 2);
}

#[tokio::test]
async fn merged_recents_fill_the_stats_limit_across_sources() {
    let user = Uuid::new_v4();
    let mut provider = SyntheticProvider::new();
    for i in 0..12_i64 {
        provider = provider
            .with_workout(
                user,
                primary_workout(&format!("p{i}"), now() - Duration::minutes(i * 10)),
            )
            .with_session(wearable_session(
                &format!("s{i}"),
                now() - Duration::minutes(i * 10 + 5),
            ));
    }

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    // 24 recents across the two sources: the stats screen gets its full 20
    assert_eq!(view.merged.recent_performances.len(), 20);
    // and the home screen its 5, cut from the same merged ordering
    assert_eq!(view.home_performances.len(), 5);
    assert_eq!(
        view.home_performances,
        view.merged.recent_performances[..5].to_vec()
    );
    assert_eq!(view.primary.recent_workouts.len(), 12);
}

#[tokio::test]
async fn session_energy_feeds_the_wearable_calorie_chart() {
    let user = Uuid::new_v4();
    let provider =
        SyntheticProvider::new().with_session(wearable_session("s1", now() - Duration::hours(3)));

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    let series = view.wearable.chart.display_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].calories, 420.0);
}

#[tokio::test]
async fn other_users_workouts_never_leak_into_the_view() {
    let user = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let provider =
        SyntheticProvider::new().with_workout(stranger, primary_workout("w1", now()));

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();
    assert!(view.primary.personal_records.is_empty());
}

#[tokio::test]
async fn unauthorized_wearable_contributes_nothing() {
    let user = Uuid::new_v4();
    let provider = SyntheticProvider::new()
        .with_workout(user, primary_workout("w1", now()))
        .with_session(wearable_session("s1", now()))
        .with_authorization(false);

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(view.primary.windowed_counts.total, 1);
    assert_eq!(view.wearable.windowed_counts.total, 0);
    assert!(view.wearable.recent_workouts.is_empty());
}

#[tokio::test]
async fn failed_fetches_degrade_to_an_empty_view() {
    let user = Uuid::new_v4();
    let service = DashboardService::new(
        Arc::new(FailingRepository),
        Arc::new(FailingWearable),
        Arc::new(FixedClock(now())),
        ServiceConfig::default(),
    );

    let view = service
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    assert!(view.primary.personal_records.is_empty());
    assert!(view.wearable.personal_records.is_empty());
    assert!(view.merged.recent_performances.is_empty());
    // The chart axis is still fully pre-created
    assert_eq!(view.wearable.chart.buckets.len(), 7);
}

#[tokio::test]
async fn sequential_refreshes_reuse_the_gate() {
    let user = Uuid::new_v4();
    let service = service(SyntheticProvider::new().with_workout(user, primary_workout("w1", now())));

    let first = service.refresh_dashboard(user, Period::Week).await.unwrap();
    let second = service.refresh_dashboard(user, Period::Week).await.unwrap();
    assert!(first.is_some());
    assert!(second.is_some());
}

#[tokio::test]
async fn sessions_outside_the_selected_window_are_filtered_by_range() {
    let user = Uuid::new_v4();
    let provider = SyntheticProvider::new()
        .with_session(wearable_session("old", now() - Duration::days(30)));

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();
    assert!(view.wearable.recent_workouts.is_empty());
}

#[tokio::test]
async fn score_refresh_uses_the_primary_source_only() {
    let user = Uuid::new_v4();
    let provider = SyntheticProvider::new()
        .with_workout(user, primary_workout("w1", now() - Duration::hours(2)))
        .with_session(wearable_session("s1", now() - Duration::hours(1)));

    let snapshot = service(provider).refresh_score(user).await.unwrap().unwrap();
    assert_eq!(snapshot.details.workout_count, 1);
    assert_eq!(snapshot.overall, 64);
    assert_eq!(snapshot.label(), "Good");
}

#[tokio::test]
async fn score_is_none_when_nothing_was_logged_today() {
    let user = Uuid::new_v4();
    let provider = SyntheticProvider::new()
        .with_workout(user, primary_workout("old", now() - Duration::days(3)));

    let snapshot = service(provider).refresh_score(user).await.unwrap();
    assert!(snapshot.is_none());
}

#[tokio::test]
async fn merged_view_prefers_wearable_presence_on_shared_categories() {
    let user = Uuid::new_v4();
    // A primary workout logged against the wearable's default category name
    let shared = PrimaryWorkoutRaw {
        id: "p1".into(),
        event_id: Some("Running".into()),
        result: Some(1500.0),
        timestamp: Some(now() - Duration::hours(4)),
        ..PrimaryWorkoutRaw::default()
    };
    let provider = SyntheticProvider::new()
        .with_workout(user, shared)
        .with_session(wearable_session("s1", now() - Duration::hours(2)));

    let view = service(provider)
        .refresh_dashboard(user, Period::Week)
        .await
        .unwrap()
        .unwrap();

    let slot = &view.merged.personal_records["Running"];
    assert_eq!(slot.source, Some(RecordSource::Wearable));
}
