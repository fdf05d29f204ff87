// ABOUTME: Integration tests for the insight service over stub generators
// ABOUTME: Covers numbered-list splitting, prose passthrough, and failure degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use stride::InsightService;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{WindowedCounts, WorkoutRecord};
use stride_providers::InsightGenerator;

/// Generator returning a canned response
struct StaticGenerator(String);

#[async_trait]
impl InsightGenerator for StaticGenerator {
    async fn generate(
        &self,
        _workouts: &[WorkoutRecord],
        _stats: &WindowedCounts,
    ) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// Generator that always fails
struct FailingGenerator;

#[async_trait]
impl InsightGenerator for FailingGenerator {
    async fn generate(
        &self,
        _workouts: &[WorkoutRecord],
        _stats: &WindowedCounts,
    ) -> AppResult<String> {
        Err(AppError::external_service("model endpoint unavailable"))
    }
}

fn service(generator: impl InsightGenerator + 'static) -> InsightService {
    InsightService::new(Arc::new(generator))
}

#[tokio::test]
async fn numbered_text_splits_into_items() {
    let text = "1. Increase weekly mileage gradually.\n2. Add a recovery day.\n3. Sleep more.";
    let items = service(StaticGenerator(text.into()))
        .daily_insights(Uuid::new_v4(), &[], &WindowedCounts::default())
        .await;
    assert_eq!(
        items,
        vec![
            "Increase weekly mileage gradually.",
            "Add a recovery day.",
            "Sleep more.",
        ]
    );
}

#[tokio::test]
async fn prose_passes_through_as_a_single_item() {
    let items = service(StaticGenerator("Keep up the solid training week.".into()))
        .daily_insights(Uuid::new_v4(), &[], &WindowedCounts::default())
        .await;
    assert_eq!(items, vec!["Keep up the solid training week."]);
}

#[tokio::test]
async fn blank_text_yields_no_items() {
    let items = service(StaticGenerator("   \n ".into()))
        .daily_insights(Uuid::new_v4(), &[], &WindowedCounts::default())
        .await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn generation_failure_degrades_to_no_items() {
    let items = service(FailingGenerator)
        .daily_insights(Uuid::new_v4(), &[], &WindowedCounts::default())
        .await;
    assert!(items.is_empty());
}
