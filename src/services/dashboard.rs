// ABOUTME: Dashboard refresh orchestration over the primary store and the wearable platform
// ABOUTME: Fetch failures degrade to empty sets; concurrent refreshes are skipped, not queued
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use stride_core::errors::AppResult;
use stride_core::models::{
    Dashboard, MergedView, Period, ScoreSnapshot, WearableSampleRaw, WearableSessionRaw,
    WorkoutRecord,
};
use stride_intelligence::aggregator::{compute_dashboard, window_start};
use stride_intelligence::merge::merge_sources;
use stride_intelligence::normalizer::{energy_samples, normalize_primary, normalize_wearable};
use stride_intelligence::score::compute_score;
use stride_providers::{Clock, WearableSource, WorkoutRepository};

use crate::config::ServiceConfig;
use crate::services::refresh::RefreshGate;

/// Presentation view produced by one refresh cycle.
///
/// Both per-source dashboards and the merge run at the stats-screen recency
/// limit; the home screen reads the shorter `home_performances` slice cut
/// from the merged list.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Primary-source aggregation (manually logged workouts)
    pub primary: Dashboard,
    /// Wearable-source aggregation (sessions and health samples)
    pub wearable: Dashboard,
    /// Cross-source merged records and recents
    pub merged: MergedView,
    /// Home-screen slice of the merged recent performances
    pub home_performances: Vec<WorkoutRecord>,
}

/// Orchestrates fetch, normalize, aggregate, and merge for one user view.
///
/// The service owns no state beyond its collaborators and the refresh gate;
/// every cycle recomputes from scratch. A collaborator failure never fails
/// the cycle - the failed source contributes an empty set and the view is
/// built from whatever did arrive.
pub struct DashboardService {
    repository: Arc<dyn WorkoutRepository>,
    wearable: Arc<dyn WearableSource>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
    gate: RefreshGate,
}

impl DashboardService {
    /// Create a service over the given collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn WorkoutRepository>,
        wearable: Arc<dyn WearableSource>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repository,
            wearable,
            clock,
            config,
            gate: RefreshGate::new(),
        }
    }

    /// Run one full refresh cycle for the user.
    ///
    /// Returns `Ok(None)` when a refresh is already in flight on this
    /// instance; the caller keeps its previous view.
    ///
    /// # Errors
    ///
    /// Currently never fails: every fetch failure is logged and degraded to
    /// an empty set. The `AppResult` stays in the signature for callers that
    /// layer persistence on top.
    pub async fn refresh_dashboard(
        &self,
        user_id: Uuid,
        period: Period,
    ) -> AppResult<Option<DashboardView>> {
        let Some(_permit) = self.gate.acquire() else {
            debug!(%user_id, "refresh already in flight, skipping");
            return Ok(None);
        };

        let now = self.clock.now();
        let primary_records = self.fetch_primary_records(user_id).await;
        let (sessions, mut samples) = self.fetch_wearable_data(user_id, period, now).await;
        samples.extend(energy_samples(&sessions));
        let wearable_records: Vec<WorkoutRecord> = sessions
            .iter()
            .map(|session| normalize_wearable(session, user_id))
            .collect();

        // Aggregate at the stats limit so the merge can fill its full slice;
        // the home screen takes its shorter cut from the merged list.
        let primary = compute_dashboard(
            &primary_records,
            &[],
            period,
            now,
            self.config.recent_stats_limit,
        );
        let wearable = compute_dashboard(
            &wearable_records,
            &samples,
            period,
            now,
            self.config.recent_stats_limit,
        );
        let merged = merge_sources(&primary, &wearable, self.config.recent_stats_limit);
        let home_performances: Vec<WorkoutRecord> = merged
            .recent_performances
            .iter()
            .take(self.config.recent_home_limit)
            .cloned()
            .collect();

        debug!(
            %user_id,
            period = period.as_str(),
            primary_records = primary_records.len(),
            wearable_records = wearable_records.len(),
            merged_categories = merged.personal_records.len(),
            "dashboard refresh complete"
        );

        Ok(Some(DashboardView {
            primary,
            wearable,
            merged,
            home_performances,
        }))
    }

    /// Recompute the performance score from the primary source only.
    ///
    /// Wearable sessions carry no `result` and would not move the score's PR
    /// term; they are left out of the scoring inputs entirely.
    ///
    /// # Errors
    ///
    /// Currently never fails; a failed fetch degrades to an empty set, which
    /// yields `Ok(None)` (no workouts today means no score).
    pub async fn refresh_score(&self, user_id: Uuid) -> AppResult<Option<ScoreSnapshot>> {
        let now = self.clock.now();
        let records = self.fetch_primary_records(user_id).await;

        let day_start = window_start(Period::Day, now);
        let today: Vec<WorkoutRecord> = records
            .iter()
            .filter(|record| record.timestamp().is_some_and(|ts| ts >= day_start))
            .cloned()
            .collect();

        Ok(compute_score(&today, &records))
    }

    async fn fetch_primary_records(&self, user_id: Uuid) -> Vec<WorkoutRecord> {
        match self.repository.fetch_workouts_for_user(user_id).await {
            Ok(raw) => raw
                .iter()
                .map(|workout| normalize_primary(workout, user_id))
                .collect(),
            Err(err) => {
                warn!(%user_id, error = %err, "primary workout fetch failed, using empty set");
                Vec::new()
            }
        }
    }

    async fn fetch_wearable_data(
        &self,
        user_id: Uuid,
        period: Period,
        now: chrono::DateTime<chrono::Utc>,
    ) -> (Vec<WearableSessionRaw>, Vec<WearableSampleRaw>) {
        if !self.wearable.is_authorized().await {
            debug!(%user_id, "wearable source not authorized, skipping");
            return (Vec::new(), Vec::new());
        }

        let start = window_start(period, now);
        let sessions = match self.wearable.fetch_sessions(user_id, start, now).await {
            Ok(sessions) => sessions,
            Err(err) => {
                warn!(%user_id, error = %err, "wearable session fetch failed, using empty set");
                Vec::new()
            }
        };
        let samples = match self.wearable.fetch_samples(user_id, start, now).await {
            Ok(samples) => samples,
            Err(err) => {
                warn!(%user_id, error = %err, "wearable sample fetch failed, using empty set");
                Vec::new()
            }
        };

        (sessions, samples)
    }
}
