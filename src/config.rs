// ABOUTME: Runtime configuration resolved from environment variables with sane defaults
// ABOUTME: Recency limits for the home and stats screens plus the log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::env;

use stride_core::constants::defaults;

/// Service-level knobs for the orchestration layer.
///
/// Every field has a compiled-in default so the service runs with no
/// environment at all; unparseable values fall back to the default rather
/// than failing startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Recent-workout slice for the home screen
    pub recent_home_limit: usize,
    /// Recent-workout slice for the stats screen and the merged view
    pub recent_stats_limit: usize,
    /// Log level directive for the tracing subscriber
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            recent_home_limit: defaults::RECENT_HOME_LIMIT,
            recent_stats_limit: defaults::RECENT_STATS_LIMIT,
            log_level: "info".into(),
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from `STRIDE_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            recent_home_limit: env_usize("STRIDE_RECENT_HOME_LIMIT", defaults.recent_home_limit),
            recent_stats_limit: env_usize("STRIDE_RECENT_STATS_LIMIT", defaults.recent_stats_limit),
            log_level: env::var("STRIDE_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
