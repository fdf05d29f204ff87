// ABOUTME: Normalized workout record model with builder and source/direction enums
// ABOUTME: The immutable value object every pipeline stage consumes and never mutates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Origin of a normalized workout record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Manually logged in the application's own store
    Primary,
    /// Synced from an external health-data platform
    Wearable,
}

/// Which numeric direction counts as "better" for a category's results.
///
/// Resolved once during normalization and carried on the record. Every
/// category currently modeled resolves to `LowerIsBetter`; the variant for
/// higher-is-better categories exists so that a future change to the personal
/// record comparator is localized rather than re-derived at call sites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDirection {
    /// Smaller results rank higher (timed events)
    LowerIsBetter,
    /// Larger results rank higher (distance and height field events)
    HigherIsBetter,
}

/// Represents one completed athletic effort, normalized from either source.
///
/// A record is an immutable value object once constructed - the pipeline only
/// derives new aggregate objects from it. Fields are private to ensure data
/// integrity; use accessor methods to read and [`WorkoutRecordBuilder`] to
/// construct new instances.
///
/// # Examples
///
/// ```rust
/// use stride_core::models::{RecordSource, WorkoutRecordBuilder};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let record = WorkoutRecordBuilder::new("w1", Uuid::new_v4(), "sprint-100m", RecordSource::Primary)
///     .result(11.92)
///     .timestamp(Utc::now())
///     .build();
///
/// assert_eq!(record.event_category(), "sprint-100m");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Opaque identifier, unique within its source
    id: String,
    /// Owner reference (external identity)
    user_id: Uuid,
    /// Discipline key used for PR bucketing and result-unit inference
    event_category: String,
    /// Primary numeric outcome (seconds for timed events, meters for field events)
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
    /// When the effort occurred; absent timestamps sort last, never excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    /// Distance covered in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_meters: Option<f64>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<f64>,
    /// Steps taken during the effort
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<u32>,
    /// Active energy burned in kilocalories (wearable sessions)
    #[serde(skip_serializing_if = "Option::is_none")]
    energy_burned: Option<f64>,
    /// Pace in seconds per meter, derived; None when distance is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pace: Option<f64>,
    /// Origin of this record
    source: RecordSource,
    /// Ranking direction for this record's category
    direction: ScoreDirection,
}

impl WorkoutRecord {
    /// Returns the opaque record identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the owning user's identifier
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the discipline key for this record
    #[must_use]
    pub fn event_category(&self) -> &str {
        &self.event_category
    }

    /// Returns the primary numeric outcome, when present
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.result
    }

    /// Returns when the effort occurred, when known
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the distance covered in meters
    #[must_use]
    pub const fn distance_meters(&self) -> Option<f64> {
        self.distance_meters
    }

    /// Returns the duration in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> Option<f64> {
        self.duration_seconds
    }

    /// Returns the steps taken
    #[must_use]
    pub const fn steps(&self) -> Option<u32> {
        self.steps
    }

    /// Returns the active energy burned in kilocalories
    #[must_use]
    pub const fn energy_burned(&self) -> Option<f64> {
        self.energy_burned
    }

    /// Returns the derived pace in seconds per meter
    #[must_use]
    pub const fn pace(&self) -> Option<f64> {
        self.pace
    }

    /// Returns the origin of this record
    #[must_use]
    pub const fn source(&self) -> RecordSource {
        self.source
    }

    /// Returns the ranking direction for this record's category
    #[must_use]
    pub const fn direction(&self) -> ScoreDirection {
        self.direction
    }

    /// Timestamp used for ordering: epoch zero when absent, so records without
    /// a timestamp sort last in a descending sort but are never excluded.
    #[must_use]
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Builder for constructing [`WorkoutRecord`] instances.
///
/// Required fields are set in `new()`; optional metrics are set with builder
/// methods. The normalizer is the intended construction site - it resolves
/// the category, derives pace, and assigns the ranking direction.
#[derive(Debug, Clone)]
pub struct WorkoutRecordBuilder {
    record: WorkoutRecord,
}

impl WorkoutRecordBuilder {
    /// Creates a new builder with the required fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: Uuid,
        event_category: impl Into<String>,
        source: RecordSource,
    ) -> Self {
        Self {
            record: WorkoutRecord {
                id: id.into(),
                user_id,
                event_category: event_category.into(),
                result: None,
                timestamp: None,
                distance_meters: None,
                duration_seconds: None,
                steps: None,
                energy_burned: None,
                pace: None,
                source,
                direction: ScoreDirection::LowerIsBetter,
            },
        }
    }

    /// Sets the primary numeric outcome
    #[must_use]
    pub const fn result(mut self, value: f64) -> Self {
        self.record.result = Some(value);
        self
    }

    /// Sets the primary numeric outcome (optional)
    #[must_use]
    pub const fn result_opt(mut self, value: Option<f64>) -> Self {
        self.record.result = value;
        self
    }

    /// Sets the effort timestamp
    #[must_use]
    pub const fn timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.record.timestamp = Some(value);
        self
    }

    /// Sets the effort timestamp (optional)
    #[must_use]
    pub const fn timestamp_opt(mut self, value: Option<DateTime<Utc>>) -> Self {
        self.record.timestamp = value;
        self
    }

    /// Sets the distance in meters
    #[must_use]
    pub const fn distance_meters(mut self, value: f64) -> Self {
        self.record.distance_meters = Some(value);
        self
    }

    /// Sets the distance in meters (optional)
    #[must_use]
    pub const fn distance_meters_opt(mut self, value: Option<f64>) -> Self {
        self.record.distance_meters = value;
        self
    }

    /// Sets the duration in seconds
    #[must_use]
    pub const fn duration_seconds(mut self, value: f64) -> Self {
        self.record.duration_seconds = Some(value);
        self
    }

    /// Sets the duration in seconds (optional)
    #[must_use]
    pub const fn duration_seconds_opt(mut self, value: Option<f64>) -> Self {
        self.record.duration_seconds = value;
        self
    }

    /// Sets the steps taken
    #[must_use]
    pub const fn steps(mut self, value: u32) -> Self {
        self.record.steps = Some(value);
        self
    }

    /// Sets the steps taken (optional)
    #[must_use]
    pub const fn steps_opt(mut self, value: Option<u32>) -> Self {
        self.record.steps = value;
        self
    }

    /// Sets the active energy burned in kilocalories
    #[must_use]
    pub const fn energy_burned(mut self, value: f64) -> Self {
        self.record.energy_burned = Some(value);
        self
    }

    /// Sets the active energy burned (optional)
    #[must_use]
    pub const fn energy_burned_opt(mut self, value: Option<f64>) -> Self {
        self.record.energy_burned = value;
        self
    }

    /// Sets the derived pace in seconds per meter (optional)
    #[must_use]
    pub const fn pace_opt(mut self, value: Option<f64>) -> Self {
        self.record.pace = value;
        self
    }

    /// Sets the ranking direction
    #[must_use]
    pub const fn direction(mut self, value: ScoreDirection) -> Self {
        self.record.direction = value;
        self
    }

    /// Builds the `WorkoutRecord` instance
    #[must_use]
    pub fn build(self) -> WorkoutRecord {
        self.record
    }
}
