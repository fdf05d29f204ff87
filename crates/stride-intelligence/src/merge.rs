// ABOUTME: Reconciles aggregator output computed independently over the two sources
// ABOUTME: Presence-based PR override isolated behind one named function, recomputed from scratch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Merge layer.
//!
//! Pure over its two input snapshots: invoked with the same snapshots it
//! yields the same merged view, and it is designed to be re-invoked whenever
//! either source's underlying data changes, recomputing rather than patching
//! incrementally.

use std::collections::BTreeMap;

use tracing::debug;

use stride_core::models::{
    Dashboard, MergedView, PersonalRecordEntry, RecordSource, WorkoutRecord,
};

/// Whether an incoming entry claims an already-occupied PR slot.
///
/// This is a presence-based override, not a minimum-finding merge: a wearable
/// entry takes a slot whose source tag is still unset, and numeric results are
/// never re-compared across sources. Changing this rule changes displayed PRs,
/// so it is preserved verbatim and kept to this one function.
#[must_use]
pub fn wearable_presence_override(
    existing: &PersonalRecordEntry,
    incoming: &PersonalRecordEntry,
) -> bool {
    existing.source.is_none() && incoming.source == Some(RecordSource::Wearable)
}

/// Reconcile the two sources' dashboards into one view.
///
/// Personal records: primary entries first, then wearable; for each category
/// the first-seen entry stays unless [`wearable_presence_override`] applies.
/// Recent performances: both recency lists concatenated, re-sorted descending
/// by timestamp (missing timestamps last), truncated to `recent_limit`.
#[must_use]
pub fn merge_sources(
    primary: &Dashboard,
    wearable: &Dashboard,
    recent_limit: usize,
) -> MergedView {
    let mut personal_records: BTreeMap<String, PersonalRecordEntry> = BTreeMap::new();
    let entries = primary
        .personal_records
        .values()
        .chain(wearable.personal_records.values());
    for entry in entries {
        match personal_records.get_mut(&entry.category) {
            Some(existing) => {
                if wearable_presence_override(existing, entry) {
                    *existing = entry.clone();
                }
            }
            None => {
                personal_records.insert(entry.category.clone(), entry.clone());
            }
        }
    }

    let mut recent_performances: Vec<WorkoutRecord> = primary
        .recent_workouts
        .iter()
        .chain(wearable.recent_workouts.iter())
        .cloned()
        .collect();
    recent_performances.sort_by_key(|record| std::cmp::Reverse(record.sort_timestamp()));
    recent_performances.truncate(recent_limit);

    debug!(
        categories = personal_records.len(),
        recents = recent_performances.len(),
        "merged source snapshots"
    );

    MergedView {
        personal_records,
        recent_performances,
    }
}
