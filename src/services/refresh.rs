// ABOUTME: Atomic in-flight flag serializing dashboard refreshes per service instance
// ABOUTME: Permit clears the flag on drop, including the early-return and error paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::atomic::{AtomicBool, Ordering};

/// One-refresh-at-a-time gate.
///
/// A refresh cycle acquires a permit before touching any source; a second
/// caller gets `None` and skips the cycle instead of queueing. The permit
/// releases the gate on drop, so every exit path clears the flag.
#[derive(Debug, Default)]
pub struct RefreshGate {
    in_flight: AtomicBool,
}

impl RefreshGate {
    /// Create an open gate
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Try to claim the gate; `None` when a refresh is already running.
    #[must_use]
    pub fn acquire(&self) -> Option<RefreshPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshPermit { gate: self })
    }

    /// Whether a refresh currently holds the gate
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one refresh cycle
#[derive(Debug)]
pub struct RefreshPermit<'a> {
    gate: &'a RefreshGate,
}

impl Drop for RefreshPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_held() {
        let gate = RefreshGate::new();
        let permit = gate.acquire();
        assert!(permit.is_some());
        assert!(gate.acquire().is_none());
        assert!(gate.is_in_flight());
    }

    #[test]
    fn drop_reopens_the_gate() {
        let gate = RefreshGate::new();
        drop(gate.acquire());
        assert!(!gate.is_in_flight());
        assert!(gate.acquire().is_some());
    }
}
