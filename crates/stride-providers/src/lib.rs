// ABOUTME: Collaborator abstractions: workout repository, wearable source, insight generator, clock
// ABOUTME: The aggregation core consumes these traits; all I/O stays behind them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Providers
//!
//! Abstract collaborator interfaces consumed by the orchestration layer. The
//! pure pipeline never performs I/O; everything asynchronous lives behind the
//! traits in this crate. A failed fetch is expected to degrade to an empty
//! set at the orchestration layer, so the aggregation functions never need a
//! failure branch of their own.

/// Core collaborator traits
pub mod core;

/// Injectable clock for testable window and bucket boundaries
pub mod clock;

/// Deterministic in-memory provider for tests and demos
pub mod synthetic;

pub use clock::{Clock, FixedClock, SystemClock};
pub use self::core::{InsightGenerator, WearableSource, WorkoutRepository};
pub use synthetic::SyntheticProvider;
