// ABOUTME: Composite performance score models: snapshot, breakdown, and echoed inputs
// ABOUTME: Constructed fresh on every scoring pass and never persisted by the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};

use crate::constants::scoring;

/// The five rounded sub-scores backing the composite, each 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Training volume: workout count plus distance and time boosters
    pub volume: u8,
    /// Intensity: pace, steps-per-workout, and PR-matching terms
    pub intensity: u8,
    /// Consistency: base plus hour-spread and multi-workout bonus
    pub consistency: u8,
    /// Efficiency: pace consistency across workouts plus duration bonus
    pub efficiency: u8,
    /// Variety: distinct event categories trained
    pub variety: u8,
}

/// Raw inputs echoed alongside the score for display and debugging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreDetails {
    /// Workouts scored today
    pub workout_count: usize,
    /// Total distance covered today in meters
    pub total_distance_meters: f64,
    /// Total time trained today in seconds
    pub total_duration_seconds: f64,
    /// Average pace in seconds per meter, zero when no distance was covered
    pub average_pace: f64,
    /// Total steps today
    pub total_steps: u64,
    /// Distinct event categories trained today
    pub distinct_categories: usize,
    /// Today's workouts matching an all-time category best
    pub pr_count: usize,
}

/// A computed 0-100 composite performance score for one day of training.
///
/// `overall` carries the un-clamped lower bound on purpose: each sub-score has
/// its own non-negative floor, so a negative composite is unreachable in
/// practice, and the formula is preserved as specified rather than defensively
/// clamped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreSnapshot {
    /// Weighted composite, rounded and capped at 100
    pub overall: i32,
    /// The five rounded sub-scores
    pub breakdown: ScoreBreakdown,
    /// Raw inputs that produced this score
    pub details: ScoreDetails,
}

impl ScoreSnapshot {
    /// Human-readable label for the composite. Thresholds are exact contract.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        label_for(self.overall)
    }
}

/// Label for a composite value at the contract thresholds (90/75/60/45)
#[must_use]
pub const fn label_for(overall: i32) -> &'static str {
    if overall >= scoring::LABEL_ELITE_THRESHOLD {
        "Elite Performance"
    } else if overall >= scoring::LABEL_EXCELLENT_THRESHOLD {
        "Excellent"
    } else if overall >= scoring::LABEL_GOOD_THRESHOLD {
        "Good"
    } else if overall >= scoring::LABEL_AVERAGE_THRESHOLD {
        "Average"
    } else {
        "Needs Improvement"
    }
}
