// ABOUTME: Splits generated insight text on the leading "N. " numbering convention
// ABOUTME: Presentation detail only; non-numbered prose falls back to zero or one item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Insight text splitting.
//!
//! The insight generator returns free text; by convention it numbers its
//! suggestions `1. ... 2. ...`. This splitter is resilient to the generator
//! ignoring the convention: blank input yields no items, non-numbered prose
//! yields the whole string as a single item.

use std::sync::OnceLock;

use regex::Regex;

static NUMBERED_ITEM: OnceLock<Regex> = OnceLock::new();

fn numbered_item() -> &'static Regex {
    // Pattern is a literal and always compiles.
    NUMBERED_ITEM.get_or_init(|| {
        #[allow(clippy::unwrap_used)]
        let pattern = Regex::new(r"(?m)^\s*\d+\.\s+").unwrap();
        pattern
    })
}

/// Split generated insight text into display items on leading `N. ` markers.
#[must_use]
pub fn split_numbered(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let pattern = numbered_item();
    if !pattern.is_match(trimmed) {
        return vec![trimmed.to_owned()];
    }

    pattern
        .split(trimmed)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
