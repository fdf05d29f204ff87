// ABOUTME: Integration tests for chart bucket pre-allocation and sample accumulation
// ABOUTME: Pins bucket counts, label formats, right-alignment, and zero-bucket filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use stride_core::models::{Period, SampleMetric, WearableSampleRaw};
use stride_intelligence::chart::build_chart;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 19, 15, 30, 0).unwrap()
}

fn sample(metric: SampleMetric, value: f64, timestamp: DateTime<Utc>) -> WearableSampleRaw {
    WearableSampleRaw {
        metric,
        value,
        timestamp: Some(timestamp),
    }
}

#[test]
fn week_window_pre_creates_exactly_seven_daily_buckets() {
    let chart = build_chart(&[], Period::Week, now());
    assert_eq!(chart.buckets.len(), 7);
    assert_eq!(chart.buckets[0].label, "Mar 13");
    assert_eq!(chart.buckets[6].label, "Mar 19");
}

#[test]
fn day_window_has_24_hourly_buckets_ending_at_now() {
    let chart = build_chart(&[], Period::Day, now());
    assert_eq!(chart.buckets.len(), 24);
    assert_eq!(chart.buckets[23].label, "3:00 PM");
    assert_eq!(chart.buckets[22].label, "2:00 PM");
    // 24 hours back lands on the same clock hour yesterday
    assert_eq!(chart.buckets[0].label, "4:00 PM");
}

#[test]
fn month_window_has_30_daily_buckets() {
    let chart = build_chart(&[], Period::Month, now());
    assert_eq!(chart.buckets.len(), 30);
    assert_eq!(chart.buckets[0].label, "Feb 18");
    assert_eq!(chart.buckets[29].label, "Mar 19");
}

#[test]
fn year_and_all_windows_share_12_monthly_buckets() {
    for period in [Period::Year, Period::All] {
        let chart = build_chart(&[], period, now());
        assert_eq!(chart.buckets.len(), 12);
        assert_eq!(chart.buckets[0].label, "Apr");
        assert_eq!(chart.buckets[11].label, "Mar");
    }
}

#[test]
fn samples_accumulate_into_their_hourly_bucket() {
    let now = now();
    let samples = vec![
        sample(SampleMetric::Steps, 500.0, now - Duration::minutes(10)),
        sample(SampleMetric::Steps, 250.0, now - Duration::minutes(20)),
        sample(SampleMetric::Distance, 800.0, now - Duration::minutes(5)),
        sample(SampleMetric::Calories, 90.0, now - Duration::hours(1)),
    ];
    let chart = build_chart(&samples, Period::Day, now);

    let last = &chart.buckets[23];
    assert_eq!(last.steps, 750.0);
    assert_eq!(last.distance, 800.0);
    assert_eq!(last.calories, 0.0);

    let previous = &chart.buckets[22];
    assert_eq!(previous.calories, 90.0);
}

#[test]
fn heart_rate_reduces_to_a_mean_at_emission() {
    let now = now();
    let samples = vec![
        sample(SampleMetric::HeartRate, 140.0, now),
        sample(SampleMetric::HeartRate, 160.0, now),
    ];
    let chart = build_chart(&samples, Period::Day, now);

    assert_eq!(chart.buckets[23].heart_rate.len(), 2);
    let series = chart.display_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].heart_rate, Some(150.0));
}

#[test]
fn zero_buckets_survive_in_buckets_but_not_in_the_display_series() {
    let now = now();
    let samples = vec![sample(SampleMetric::Steps, 1200.0, now - Duration::days(2))];
    let chart = build_chart(&samples, Period::Week, now);

    assert_eq!(chart.buckets.len(), 7);
    let series = chart.display_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "Mar 17");
    assert_eq!(series[0].steps, 1200.0);
}

#[test]
fn samples_outside_the_window_or_undated_are_ignored() {
    let now = now();
    let samples = vec![
        sample(SampleMetric::Steps, 999.0, now - Duration::days(30)),
        WearableSampleRaw {
            metric: SampleMetric::Steps,
            value: 500.0,
            timestamp: None,
        },
    ];
    let chart = build_chart(&samples, Period::Week, now);
    assert!(chart.display_series().is_empty());
}
