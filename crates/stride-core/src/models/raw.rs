// ABOUTME: Tagged raw-source record variants for the primary store and the wearable platform
// ABOUTME: Field-level serde defaults make malformed documents degrade to zero/None, never error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workout document as stored in the primary (manually logged) store.
///
/// Every field is optional or defaulted: missing numerics become zero/None
/// during normalization rather than raising a validation error.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrimaryWorkoutRaw {
    /// Document identifier
    #[serde(default)]
    pub id: String,
    /// Discipline code the athlete logged against (e.g. a sprint/hurdle code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Human-readable event name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Primary outcome: seconds for timed events, meters for field events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Steps recorded with the effort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// When the effort occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// An activity session as returned by the wearable health-data platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WearableSessionRaw {
    /// Session identifier assigned by the platform
    #[serde(default)]
    pub id: String,
    /// Activity type string; some platforms send `type` instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Fallback activity type field used by older platform payloads
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    /// Total distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Session start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Active energy burned in kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_energy_burned: Option<f64>,
}

/// The metric a wearable health sample measures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SampleMetric {
    /// Step count
    Steps,
    /// Distance in meters
    Distance,
    /// Active energy in kilocalories
    Calories,
    /// Heart rate in beats per minute
    HeartRate,
}

/// A single time-stamped numeric sample from the wearable platform.
///
/// Samples without a timestamp are tolerated but never land in a chart
/// bucket, matching the aggregator's "numeric value and a timestamp" rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WearableSampleRaw {
    /// Which metric this sample measures
    pub metric: SampleMetric,
    /// Sample value in the metric's native unit
    #[serde(default)]
    pub value: f64,
    /// When the sample was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}
