// ABOUTME: Workout aggregation and performance scoring engine for the Stride platform
// ABOUTME: A pure, synchronous pipeline: normalize, aggregate, score, merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! The computation core of the Stride platform. Every function here is pure
//! given its inputs - no I/O, no ambient clock, no hidden state. Data flows
//! one-directional:
//!
//! ```text
//! raw records -> normalizer -> aggregator (once per source) -> merge -> views
//! ```
//!
//! The score engine consumes normalizer output for the primary source
//! directly, bypassing the merge layer. A reference "now" is an explicit
//! parameter to every window and bucket computation, making the whole
//! pipeline referentially transparent.

/// Raw source documents to normalized workout records
pub mod normalizer;

/// Personal records, windowed counts, recency ordering
pub mod aggregator;

/// Chart bucket pre-allocation and sample accumulation
pub mod chart;

/// Composite 0-100 performance score from a day of training
pub mod score;

/// Two-source reconciliation of personal records and recent performances
pub mod merge;

/// Presentation splitting of generated insight text
pub mod insights;

pub use aggregator::compute_dashboard;
pub use merge::merge_sources;
pub use normalizer::{normalize_primary, normalize_wearable};
pub use score::compute_score;
