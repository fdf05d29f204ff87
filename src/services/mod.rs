// ABOUTME: Orchestration services tying collaborator traits to the pure pipeline
// ABOUTME: Dashboard refresh, insight generation, and in-flight serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

/// Dashboard refresh orchestration
pub mod dashboard;

/// Insight generation orchestration
pub mod insights;

/// In-flight refresh serialization
pub mod refresh;

pub use dashboard::{DashboardService, DashboardView};
pub use insights::InsightService;
pub use refresh::{RefreshGate, RefreshPermit};
