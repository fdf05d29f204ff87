// ABOUTME: Result formatting with the category-substring time/distance dispatch
// ABOUTME: Formats timed results as M:SS.ss and field-event results in meters or centimeters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Result-unit inference and display formatting.
//!
//! The substring test in [`ResultKind::for_category`] is the sole unit-dispatch
//! mechanism in the system. The personal-record comparator never consults it -
//! PR ranking and display formatting are two independent classification paths,
//! preserved as such.

use serde::{Deserialize, Serialize};

/// Substrings marking a category as a distance-style (field) event
const DISTANCE_CATEGORY_MARKERS: [&str; 4] = ["field", "jump", "put", "discus"];

/// How a category's result value is interpreted and rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Result is elapsed seconds, rendered `M:SS.ss` (or `SS.ss` under a minute)
    TimeStyle,
    /// Result is meters, rendered in meters or centimeters
    DistanceStyle,
}

impl ResultKind {
    /// Infer the result kind from a category key.
    ///
    /// A category containing any of `field`, `jump`, `put`, or `discus`
    /// (case-insensitive) is distance-style; everything else is time-style.
    #[must_use]
    pub fn for_category(category: &str) -> Self {
        let lowered = category.to_lowercase();
        if DISTANCE_CATEGORY_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            Self::DistanceStyle
        } else {
            Self::TimeStyle
        }
    }
}

/// Format a result value for display according to its kind.
///
/// Time-style: `75.2` → `"1:15.20"`, `45.2` → `"45.20"`.
/// Distance-style: `0.5` → `"50cm"`, `6.34` → `"6.34m"`.
#[must_use]
pub fn format_result(value: f64, kind: ResultKind) -> String {
    match kind {
        ResultKind::TimeStyle => format_time(value),
        ResultKind::DistanceStyle => format_distance(value),
    }
}

/// Infer the kind from the category and format in one step
#[must_use]
pub fn format_result_for_category(value: f64, category: &str) -> String {
    format_result(value, ResultKind::for_category(category))
}

fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.2}");
    }
    let minutes = (seconds / 60.0).floor();
    let remainder = seconds - minutes * 60.0;
    format!("{minutes:.0}:{remainder:05.2}")
}

fn format_distance(meters: f64) -> String {
    if meters < 1.0 {
        let centimeters = (meters * 100.0).round();
        return format!("{centimeters:.0}cm");
    }
    format!("{meters:.2}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_style_under_a_minute() {
        assert_eq!(format_result(45.2, ResultKind::TimeStyle), "45.20");
        assert_eq!(format_result(9.58, ResultKind::TimeStyle), "9.58");
    }

    #[test]
    fn time_style_over_a_minute_zero_pads_seconds() {
        assert_eq!(format_result(75.2, ResultKind::TimeStyle), "1:15.20");
        assert_eq!(format_result(125.0, ResultKind::TimeStyle), "2:05.00");
        assert_eq!(format_result(60.0, ResultKind::TimeStyle), "1:00.00");
    }

    #[test]
    fn distance_style_centimeters_under_one_meter() {
        assert_eq!(format_result(0.5, ResultKind::DistanceStyle), "50cm");
        assert_eq!(format_result(0.995, ResultKind::DistanceStyle), "100cm");
    }

    #[test]
    fn distance_style_meters() {
        assert_eq!(format_result(6.34, ResultKind::DistanceStyle), "6.34m");
        assert_eq!(format_result(1.0, ResultKind::DistanceStyle), "1.00m");
    }

    #[test]
    fn category_substring_dispatch() {
        assert_eq!(
            ResultKind::for_category("long-jump"),
            ResultKind::DistanceStyle
        );
        assert_eq!(
            ResultKind::for_category("shot-put"),
            ResultKind::DistanceStyle
        );
        assert_eq!(ResultKind::for_category("Discus"), ResultKind::DistanceStyle);
        assert_eq!(
            ResultKind::for_category("field-event"),
            ResultKind::DistanceStyle
        );
        assert_eq!(ResultKind::for_category("sprint-100m"), ResultKind::TimeStyle);
        assert_eq!(ResultKind::for_category("hurdles-110m"), ResultKind::TimeStyle);
        assert_eq!(ResultKind::for_category("Workout"), ResultKind::TimeStyle);
    }
}
