// ABOUTME: Centralized constants for cache keys, TTLs, API defaults, and statistics thresholds
// ABOUTME: Single source of truth shared by the cache, client, and intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Centralized constants for the FitLife client.

/// Cache-related constants for key namespacing, obfuscation, and TTL defaults
pub mod cache {
    /// Storage key prefix for namespacing; `clear()` only touches keys with
    /// this prefix so unrelated persisted data survives
    pub const CACHE_KEY_PREFIX: &str = "fitlife_secure_";

    /// Salt marker prepended to every payload before encoding; a decoded
    /// value missing this marker is treated as tampered and ignored
    pub const OBFUSCATION_SALT: &str = "fitlife_salt_v1_";

    /// Health record list cache TTL (15 minutes) - needs to be fresh for new entries
    pub const TTL_RECORDS_SECS: u64 = 900;

    /// Fitness routine list cache TTL (1 hour) - routines change rarely
    pub const TTL_ROUTINES_SECS: u64 = 3_600;

    /// Goal list cache TTL (1 hour)
    pub const TTL_GOALS_SECS: u64 = 3_600;

    /// Calendar events cache TTL (15 minutes)
    pub const TTL_CALENDAR_SECS: u64 = 900;

    /// User profile cache TTL (24 hours) - profiles change infrequently
    pub const TTL_PROFILE_SECS: u64 = 86_400;

    /// Dashboard summary cache TTL (5 minutes) - aggregates over live data
    pub const TTL_DASHBOARD_SECS: u64 = 300;
}

/// Remote API defaults
pub mod api {
    /// Base URL of the FitLife backend
    pub const DEFAULT_BASE_URL: &str = "https://fitlife-ai-api.vercel.app/api";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Display and aggregation limits
pub mod limits {
    /// Maximum number of items in the recent-activity feed
    pub const RECENT_ACTIVITY_LIMIT: usize = 5;

    /// Number of trailing calendar days in the weekly activity histogram
    pub const WEEKLY_WINDOW_DAYS: u64 = 7;
}

/// BMI classification thresholds (WHO adult ranges)
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;

    /// Below this value (and at least `UNDERWEIGHT_MAX`): healthy
    pub const HEALTHY_MAX: f64 = 25.0;

    /// Below this value (and at least `HEALTHY_MAX`): overweight; above: obese
    pub const OVERWEIGHT_MAX: f64 = 30.0;
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name reported in startup logs
    pub const FITLIFE_CLIENT: &str = "fitlife-client";
}
