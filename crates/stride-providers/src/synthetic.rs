// ABOUTME: Deterministic in-memory provider implementing both source traits
// ABOUTME: Seeds tests and demos without a database or a wearable platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use stride_core::errors::AppResult;
use stride_core::models::{PrimaryWorkoutRaw, WearableSampleRaw, WearableSessionRaw};

use crate::core::{WearableSource, WorkoutRepository};

/// In-memory provider returning pre-seeded data, filtered per call.
///
/// Sessions and samples are range-filtered on their timestamps the way the
/// real platform filters server-side; workouts are owner-filtered. Everything
/// else is returned verbatim, making refresh cycles fully deterministic.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    workouts: Vec<(Uuid, PrimaryWorkoutRaw)>,
    sessions: Vec<WearableSessionRaw>,
    samples: Vec<WearableSampleRaw>,
    authorized: bool,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticProvider {
    /// Create an empty, authorized provider
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workouts: Vec::new(),
            sessions: Vec::new(),
            samples: Vec::new(),
            authorized: true,
        }
    }

    /// Seed a primary workout for a user
    #[must_use]
    pub fn with_workout(mut self, user_id: Uuid, workout: PrimaryWorkoutRaw) -> Self {
        self.workouts.push((user_id, workout));
        self
    }

    /// Seed a wearable session
    #[must_use]
    pub fn with_session(mut self, session: WearableSessionRaw) -> Self {
        self.sessions.push(session);
        self
    }

    /// Seed a wearable health sample
    #[must_use]
    pub fn with_sample(mut self, sample: WearableSampleRaw) -> Self {
        self.samples.push(sample);
        self
    }

    /// Set the authorization state reported to callers
    #[must_use]
    pub const fn with_authorization(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }
}

#[async_trait]
impl WorkoutRepository for SyntheticProvider {
    async fn fetch_workouts_for_user(&self, user_id: Uuid) -> AppResult<Vec<PrimaryWorkoutRaw>> {
        let workouts: Vec<PrimaryWorkoutRaw> = self
            .workouts
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, workout)| workout.clone())
            .collect();
        debug!(%user_id, count = workouts.len(), "synthetic workout fetch");
        Ok(workouts)
    }
}

#[async_trait]
impl WearableSource for SyntheticProvider {
    async fn is_authorized(&self) -> bool {
        self.authorized
    }

    async fn fetch_sessions(
        &self,
        _user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSessionRaw>> {
        Ok(self
            .sessions
            .iter()
            .filter(|session| {
                session
                    .start_date
                    .is_none_or(|date| date >= start && date <= end)
            })
            .cloned()
            .collect())
    }

    async fn fetch_samples(
        &self,
        _user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WearableSampleRaw>> {
        Ok(self
            .samples
            .iter()
            .filter(|sample| {
                sample
                    .timestamp
                    .is_none_or(|ts| ts >= start && ts <= end)
            })
            .cloned()
            .collect())
    }
}
