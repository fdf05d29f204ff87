// ABOUTME: Core types and constants for the Stride fitness platform
// ABOUTME: Foundation crate with workout models, error handling, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride fitness
//! platform. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring weights, window sizes, and defaults organized by domain
//! - **models**: Core data models (`WorkoutRecord`, raw source variants, dashboards, scores)
//! - **formatters**: Result formatting (time-style vs distance-style dispatch)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRecord`, raw variants, dashboard and score views)
pub mod models;

/// Result formatting and time/distance unit dispatch
pub mod formatters;
