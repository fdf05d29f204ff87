// ABOUTME: Injectable clock trait so window and bucket boundaries are testable
// ABOUTME: SystemClock for production, FixedClock for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};

/// Source of the reference "now" injected into every window computation.
///
/// The pipeline never reads the ambient clock; callers resolve `now()` once
/// per refresh and pass it down, keeping the computation referentially
/// transparent.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
