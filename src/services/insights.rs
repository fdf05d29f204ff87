// ABOUTME: Insight generation orchestration over the generative collaborator
// ABOUTME: Splits numbered free text into display items; failures degrade to no items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use stride_core::models::{WindowedCounts, WorkoutRecord};
use stride_intelligence::insights::split_numbered;
use stride_providers::InsightGenerator;

/// Drives the insight generator and shapes its output for display.
///
/// The generator's text is treated as opaque apart from the numbered-list
/// convention; a generation failure yields an empty list, never an error
/// surfaced to the view.
pub struct InsightService {
    generator: Arc<dyn InsightGenerator>,
}

impl InsightService {
    /// Create a service over the given generator.
    #[must_use]
    pub fn new(generator: Arc<dyn InsightGenerator>) -> Self {
        Self { generator }
    }

    /// Generate daily insight items for the user's current stats.
    pub async fn daily_insights(
        &self,
        user_id: Uuid,
        workouts: &[WorkoutRecord],
        stats: &WindowedCounts,
    ) -> Vec<String> {
        match self.generator.generate(workouts, stats).await {
            Ok(text) => {
                let items = split_numbered(&text);
                debug!(%user_id, items = items.len(), "insights generated");
                items
            }
            Err(err) => {
                warn!(%user_id, error = %err, "insight generation failed, returning no items");
                Vec::new()
            }
        }
    }
}
