// ABOUTME: Core collaborator traits for unified fitness data access
// ABOUTME: Typed models in, AppResult out, for both stores and the insight generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Shared request/response contract for data collaborators.
//!
//! All collaborators accept typed identifiers and date ranges and return the
//! shared raw models from `stride-core`, with `AppResult` for consistent
//! error handling. No pagination contract is assumed - each call returns the
//! full set for the user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use stride_core::errors::AppResult;
use stride_core::models::{
    PrimaryWorkoutRaw, WearableSampleRaw, WearableSessionRaw, WindowedCounts, WorkoutRecord,
};

/// The primary (manually logged) workout store.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Fetch every workout document owned by the user.
    async fn fetch_workouts_for_user(&self, user_id: Uuid) -> AppResult<Vec<PrimaryWorkoutRaw>>;
}

/// The external wearable health-data platform.
#[async_trait]
pub trait WearableSource: Send + Sync {
    /// Whether the platform currently authorizes reads for this app.
    async fn is_authorized(&self) -> bool;

    /// Fetch activity sessions in the given range.
    async fn fetch_sessions(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSessionRaw>>;

    /// Fetch raw time-stamped health samples in the given range.
    async fn fetch_samples(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSampleRaw>>;
}

/// The generative insight collaborator.
///
/// Takes a stats snapshot and returns free text; the core only splits the
/// text on the numbered-list convention for display and never parses further.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Generate free-text insights for the given workouts and stats.
    async fn generate(
        &self,
        workouts: &[WorkoutRecord],
        stats: &WindowedCounts,
    ) -> AppResult<String>;
}
