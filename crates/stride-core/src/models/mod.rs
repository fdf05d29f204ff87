// ABOUTME: Core data models for the Stride aggregation and scoring pipeline
// ABOUTME: Re-exports WorkoutRecord, raw source variants, dashboard views, and score models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Data Models
//!
//! Unified representations of fitness data from the primary store and the
//! wearable platform.
//!
//! ## Design Principles
//!
//! - **Source Agnostic**: `WorkoutRecord` abstracts away raw document shapes
//! - **Immutable**: records are value objects; stages derive, never mutate
//! - **Tolerant**: raw variants default malformed fields instead of erroring
//! - **Serializable**: every model supports JSON serialization

// Domain modules
mod dashboard;
mod raw;
mod score;
mod workout;

// Workout domain
pub use workout::{RecordSource, ScoreDirection, WorkoutRecord, WorkoutRecordBuilder};

// Raw source variants
pub use raw::{PrimaryWorkoutRaw, SampleMetric, WearableSampleRaw, WearableSessionRaw};

// Dashboard domain
pub use dashboard::{
    Chart, ChartBucket, ChartPoint, Dashboard, MergedView, Period, PersonalRecordEntry,
    WindowedCounts,
};

// Score domain
pub use score::{label_for, ScoreBreakdown, ScoreDetails, ScoreSnapshot};
