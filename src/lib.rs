// ABOUTME: Stride orchestration crate wiring data sources to the aggregation core
// ABOUTME: Service layer, runtime configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride
//!
//! Workout performance aggregation and scoring. The pure pipeline lives in
//! `stride-intelligence`, shared models in `stride-core`, and collaborator
//! traits in `stride-providers`; this crate owns the orchestration that ties
//! them together: fetching from both sources, degrading failures to empty
//! sets, and serializing refresh cycles.

/// Runtime configuration from environment variables
pub mod config;

/// Structured logging setup
pub mod logging;

/// Orchestration services
pub mod services;

pub use config::ServiceConfig;
pub use services::dashboard::{DashboardService, DashboardView};
pub use services::insights::InsightService;
pub use services::refresh::RefreshGate;
