// ABOUTME: Composite 0-100 performance score from one day of training plus PR history
// ABOUTME: Five weighted sub-scores: volume, intensity, consistency, efficiency, variety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Score engine.
//!
//! `compute_score` is a pure function over today's normalized workouts and the
//! full historical collection (used only to locate each category's all-time
//! best for PR matching). Each sub-score is clamped to [0,100]; the rounded
//! values populate the breakdown while the un-rounded values feed the weighted
//! composite. The composite is capped at 100 with no explicit lower clamp -
//! every term carries its own non-negative floor.

use std::collections::{HashMap, HashSet};

use chrono::Timelike;
use tracing::debug;

use stride_core::constants::scoring;
use stride_core::models::{ScoreBreakdown, ScoreDetails, ScoreSnapshot, WorkoutRecord};

/// Compute the composite performance score for a day of training.
///
/// Returns `None` when `today` is empty - the caller must treat this as
/// "nothing to show", not as a zero score.
#[must_use]
pub fn compute_score(today: &[WorkoutRecord], history: &[WorkoutRecord]) -> Option<ScoreSnapshot> {
    if today.is_empty() {
        return None;
    }

    let totals = DayTotals::from_records(today, history);

    let volume = volume_score(&totals).clamp(0.0, 100.0);
    let intensity = intensity_score(&totals).clamp(0.0, 100.0);
    let consistency = consistency_score(today).clamp(0.0, 100.0);
    let efficiency = efficiency_score(today, &totals).clamp(0.0, 100.0);
    let variety = variety_score(&totals).clamp(0.0, 100.0);

    let overall = compose_overall(volume, intensity, consistency, efficiency, variety);

    debug!(
        overall,
        workouts = totals.workout_count,
        pr_count = totals.pr_count,
        "computed performance score"
    );

    Some(ScoreSnapshot {
        overall,
        breakdown: ScoreBreakdown {
            volume: volume.round() as u8,
            intensity: intensity.round() as u8,
            consistency: consistency.round() as u8,
            efficiency: efficiency.round() as u8,
            variety: variety.round() as u8,
        },
        details: ScoreDetails {
            workout_count: totals.workout_count,
            total_distance_meters: totals.total_distance,
            total_duration_seconds: totals.total_duration,
            average_pace: totals.average_pace,
            total_steps: totals.total_steps,
            distinct_categories: totals.distinct_categories,
            pr_count: totals.pr_count,
        },
    })
}

/// Weighted composite: 0.25 volume, 0.30 intensity, 0.20 consistency,
/// 0.15 efficiency, 0.10 variety; rounded, then capped at 100.
#[must_use]
pub fn compose_overall(
    volume: f64,
    intensity: f64,
    consistency: f64,
    efficiency: f64,
    variety: f64,
) -> i32 {
    let weighted = volume * scoring::VOLUME_WEIGHT
        + intensity * scoring::INTENSITY_WEIGHT
        + consistency * scoring::CONSISTENCY_WEIGHT
        + efficiency * scoring::EFFICIENCY_WEIGHT
        + variety * scoring::VARIETY_WEIGHT;
    (weighted.round() as i32).min(100)
}

/// Precomputed totals shared across sub-scores
struct DayTotals {
    workout_count: usize,
    total_distance: f64,
    total_duration: f64,
    total_steps: u64,
    distinct_categories: usize,
    /// Duration over distance; zero when no distance was covered
    average_pace: f64,
    pr_count: usize,
}

impl DayTotals {
    fn from_records(today: &[WorkoutRecord], history: &[WorkoutRecord]) -> Self {
        let workout_count = today.len();
        let total_distance: f64 = today
            .iter()
            .map(|w| w.distance_meters().unwrap_or(0.0))
            .sum();
        let total_duration: f64 = today
            .iter()
            .map(|w| w.duration_seconds().unwrap_or(0.0))
            .sum();
        let total_steps: u64 = today.iter().map(|w| u64::from(w.steps().unwrap_or(0))).sum();
        let distinct_categories = today
            .iter()
            .map(WorkoutRecord::event_category)
            .collect::<HashSet<_>>()
            .len();
        let average_pace = if total_distance > 0.0 {
            total_duration / total_distance
        } else {
            0.0
        };

        Self {
            workout_count,
            total_distance,
            total_duration,
            total_steps,
            distinct_categories,
            average_pace,
            pr_count: pr_match_count(today, history),
        }
    }
}

/// Today's workouts whose result sits within tolerance of the category's
/// all-time best in the historical collection.
fn pr_match_count(today: &[WorkoutRecord], history: &[WorkoutRecord]) -> usize {
    let mut best_by_category: HashMap<&str, f64> = HashMap::new();
    for record in history {
        if let Some(result) = record.result() {
            best_by_category
                .entry(record.event_category())
                .and_modify(|best| {
                    if result < *best {
                        *best = result;
                    }
                })
                .or_insert(result);
        }
    }

    today
        .iter()
        .filter(|workout| {
            workout.result().zip(best_by_category.get(workout.event_category())).is_some_and(
                |(result, best)| (result - best).abs() <= scoring::PR_MATCH_TOLERANCE,
            )
        })
        .count()
}

/// Five workouts alone cap the count term; distance and time are secondary
/// boosters each capped at 40.
fn volume_score(totals: &DayTotals) -> f64 {
    let count_term = totals.workout_count as f64 * scoring::VOLUME_POINTS_PER_WORKOUT;
    let distance_term = ((totals.total_distance / 1000.0) * scoring::VOLUME_POINTS_PER_KM)
        .min(scoring::VOLUME_BOOSTER_CAP);
    let time_term = ((totals.total_duration / 3600.0) * scoring::VOLUME_POINTS_PER_HOUR)
        .min(scoring::VOLUME_BOOSTER_CAP);
    (count_term + distance_term + time_term).min(100.0)
}

/// Faster pace scores higher (inverted then capped); steps and PR matches are
/// the remaining terms. Terms max out at 40 + 30 + 30.
fn intensity_score(totals: &DayTotals) -> f64 {
    let pace_term = if totals.average_pace > 0.0 {
        ((1.0 / totals.average_pace) * 100.0).min(scoring::INTENSITY_PACE_CAP)
    } else {
        0.0
    };

    let avg_steps = totals.total_steps as f64 / totals.workout_count as f64;
    let steps_term = ((avg_steps / scoring::INTENSITY_STEPS_BASELINE) * scoring::INTENSITY_STEPS_CAP)
        .min(scoring::INTENSITY_STEPS_CAP);

    let pr_term = ((totals.pr_count as f64 / totals.workout_count as f64)
        * scoring::INTENSITY_PR_CAP)
        .min(scoring::INTENSITY_PR_CAP);

    pace_term + steps_term + pr_term
}

/// Base 50, plus up to 30 for the hour spread between the first and last
/// workout of the day, plus a flat 20 for training more than once.
fn consistency_score(today: &[WorkoutRecord]) -> f64 {
    let mut score = scoring::CONSISTENCY_BASE;
    if today.len() < 2 {
        return score;
    }

    let mut hours: Vec<u32> = today
        .iter()
        .map(|w| w.timestamp().map_or(scoring::DEFAULT_WORKOUT_HOUR, |ts| ts.hour()))
        .collect();
    hours.sort_unstable();

    if let (Some(first), Some(last)) = (hours.first(), hours.last()) {
        let spread = f64::from(last - first);
        score += (spread * scoring::CONSISTENCY_SPREAD_POINTS_PER_HOUR)
            .min(scoring::CONSISTENCY_SPREAD_CAP);
    }

    score + scoring::CONSISTENCY_MULTI_WORKOUT_BONUS
}

/// Pace consistency across workouts with both distance and duration, plus a
/// flat bonus when the mean workout duration falls in the 15-60 minute band.
fn efficiency_score(today: &[WorkoutRecord], totals: &DayTotals) -> f64 {
    let paces: Vec<f64> = today
        .iter()
        .filter_map(|w| match (w.distance_meters(), w.duration_seconds()) {
            (Some(distance), Some(duration)) if distance > 0.0 && duration > 0.0 => {
                Some(duration / distance)
            }
            _ => None,
        })
        .collect();

    // A single workout (or none with usable paces) has no variance to assess.
    let mut score = if totals.workout_count <= 1 || paces.is_empty() {
        scoring::EFFICIENCY_SINGLE_BASE
    } else {
        let mean = paces.iter().sum::<f64>() / paces.len() as f64;
        let variance =
            paces.iter().map(|pace| (pace - mean).powi(2)).sum::<f64>() / paces.len() as f64;
        let consistency_term = (scoring::EFFICIENCY_CONSISTENCY_CAP
            - variance * scoring::EFFICIENCY_VARIANCE_PENALTY)
            .max(0.0);
        scoring::EFFICIENCY_MULTI_BASE + consistency_term
    };

    let mean_duration = totals.total_duration / totals.workout_count as f64;
    if (scoring::EFFICIENCY_IDEAL_DURATION_MIN_SECS..=scoring::EFFICIENCY_IDEAL_DURATION_MAX_SECS)
        .contains(&mean_duration)
    {
        score += scoring::EFFICIENCY_DURATION_BONUS;
    }

    score
}

fn variety_score(totals: &DayTotals) -> f64 {
    (totals.distinct_categories as f64 * scoring::VARIETY_POINTS_PER_CATEGORY).min(100.0)
}
