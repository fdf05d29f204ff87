// ABOUTME: Application constants organized by domain for scoring, windowing, and defaults
// ABOUTME: Every tunable threshold in the aggregation and scoring pipeline is named here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Application-wide constants organized by domain.
//!
//! The score formulas and label thresholds are exact contract, not tunable
//! defaults - tests pin every boundary value.

/// Composite performance score weights and sub-score caps
pub mod scoring {
    /// Weight of the volume sub-score in the composite
    pub const VOLUME_WEIGHT: f64 = 0.25;
    /// Weight of the intensity sub-score in the composite
    pub const INTENSITY_WEIGHT: f64 = 0.30;
    /// Weight of the consistency sub-score in the composite
    pub const CONSISTENCY_WEIGHT: f64 = 0.20;
    /// Weight of the efficiency sub-score in the composite
    pub const EFFICIENCY_WEIGHT: f64 = 0.15;
    /// Weight of the variety sub-score in the composite
    pub const VARIETY_WEIGHT: f64 = 0.10;

    /// Points per workout in the volume count term (five workouts cap it alone)
    pub const VOLUME_POINTS_PER_WORKOUT: f64 = 20.0;
    /// Points per kilometer in the volume distance booster
    pub const VOLUME_POINTS_PER_KM: f64 = 10.0;
    /// Points per hour in the volume time booster
    pub const VOLUME_POINTS_PER_HOUR: f64 = 20.0;
    /// Cap on each volume booster term
    pub const VOLUME_BOOSTER_CAP: f64 = 40.0;

    /// Cap on the pace term of the intensity sub-score
    pub const INTENSITY_PACE_CAP: f64 = 40.0;
    /// Cap on the steps term of the intensity sub-score
    pub const INTENSITY_STEPS_CAP: f64 = 30.0;
    /// Steps-per-workout divisor in the intensity steps term
    pub const INTENSITY_STEPS_BASELINE: f64 = 200.0;
    /// Cap on the personal-record term of the intensity sub-score
    pub const INTENSITY_PR_CAP: f64 = 30.0;
    /// Absolute tolerance when matching a result against the all-time best
    pub const PR_MATCH_TOLERANCE: f64 = 0.01;

    /// Consistency base awarded to any scored day
    pub const CONSISTENCY_BASE: f64 = 50.0;
    /// Points per hour of spread between first and last workout of the day
    pub const CONSISTENCY_SPREAD_POINTS_PER_HOUR: f64 = 2.0;
    /// Cap on the hour-spread term
    pub const CONSISTENCY_SPREAD_CAP: f64 = 30.0;
    /// Flat bonus for training more than once in a day
    pub const CONSISTENCY_MULTI_WORKOUT_BONUS: f64 = 20.0;
    /// Hour-of-day assumed when a workout has no timestamp
    pub const DEFAULT_WORKOUT_HOUR: u32 = 12;

    /// Efficiency base when pace consistency cannot be assessed
    pub const EFFICIENCY_SINGLE_BASE: f64 = 50.0;
    /// Efficiency base when pace consistency is assessed
    pub const EFFICIENCY_MULTI_BASE: f64 = 30.0;
    /// Pace-variance multiplier subtracted from the consistency term
    pub const EFFICIENCY_VARIANCE_PENALTY: f64 = 100.0;
    /// Cap on the pace-consistency term
    pub const EFFICIENCY_CONSISTENCY_CAP: f64 = 50.0;
    /// Flat bonus when mean workout duration falls in the ideal band
    pub const EFFICIENCY_DURATION_BONUS: f64 = 20.0;
    /// Lower bound of the ideal mean-duration band (15 minutes)
    pub const EFFICIENCY_IDEAL_DURATION_MIN_SECS: f64 = 900.0;
    /// Upper bound of the ideal mean-duration band (60 minutes)
    pub const EFFICIENCY_IDEAL_DURATION_MAX_SECS: f64 = 3600.0;

    /// Points per distinct event category in the variety sub-score
    pub const VARIETY_POINTS_PER_CATEGORY: f64 = 20.0;

    /// Composite threshold for the "Elite Performance" label
    pub const LABEL_ELITE_THRESHOLD: i32 = 90;
    /// Composite threshold for the "Excellent" label
    pub const LABEL_EXCELLENT_THRESHOLD: i32 = 75;
    /// Composite threshold for the "Good" label
    pub const LABEL_GOOD_THRESHOLD: i32 = 60;
    /// Composite threshold for the "Average" label
    pub const LABEL_AVERAGE_THRESHOLD: i32 = 45;
}

/// Time-window and chart-bucket sizing
pub mod windows {
    /// Hourly buckets rendered for the day window
    pub const DAY_HOURLY_BUCKETS: usize = 24;
    /// Daily buckets rendered for the week window
    pub const WEEK_DAILY_BUCKETS: usize = 7;
    /// Daily buckets rendered for the month window
    pub const MONTH_DAILY_BUCKETS: usize = 30;
    /// Monthly buckets rendered for the year and all windows
    pub const YEAR_MONTHLY_BUCKETS: usize = 12;
    /// Years before January 1 of the current year covered by the all window
    pub const ALL_WINDOW_YEARS_BACK: i32 = 2;
}

/// Default values applied during normalization and presentation
pub mod defaults {
    /// Category assigned to wearable sessions without an activity type
    pub const WEARABLE_CATEGORY: &str = "Workout";
    /// Category assigned to primary records without an event id
    pub const UNKNOWN_CATEGORY: &str = "unknown";
    /// Recent-workout slice size for the home screen
    pub const RECENT_HOME_LIMIT: usize = 5;
    /// Recent-workout slice size for the stats screen and merged view
    pub const RECENT_STATS_LIMIT: usize = 20;
}
