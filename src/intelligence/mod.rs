// ABOUTME: Derived statistics engine over raw FitLife records
// ABOUTME: Pure transforms producing the dashboard summary: streak, weekly histogram, BMI, feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Derived statistics engine.
//!
//! Pure, deterministic transforms from raw record arrays into display-ready
//! aggregates. No I/O; "today" is always an explicit parameter.

/// Recent-activity feed assembly
pub mod activity_feed;
/// Streak, weekly histogram, and BMI calculations
pub mod metrics;

pub use activity_feed::{recent_activity, ActivityItem, ActivityKind};
pub use metrics::{
    calculate_bmi, calculate_streak, weekly_activity, BmiResult, BmiStatus, StreakResult,
    WeeklyActivityPoint,
};

use crate::constants::limits::RECENT_ACTIVITY_LIMIT;
use crate::models::{Goal, HealthRecord, Routine};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display-ready dashboard aggregates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    /// Total number of health records
    pub total_records: usize,
    /// Consecutive-day activity streak
    pub streak: StreakResult,
    /// Trailing 7-day activity histogram, oldest first
    pub weekly: Vec<WeeklyActivityPoint>,
    /// BMI from the most recent weight and height
    pub bmi: BmiResult,
    /// Five most recent activities across all collections
    pub recent: Vec<ActivityItem>,
}

/// Assemble the full dashboard summary from raw collections
#[must_use]
pub fn dashboard_summary(
    records: &[HealthRecord],
    routines: &[Routine],
    goals: &[Goal],
    today: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        total_records: records.len(),
        streak: calculate_streak(records, today),
        weekly: weekly_activity(records, today),
        bmi: calculate_bmi(records),
        recent: recent_activity(records, routines, goals, RECENT_ACTIVITY_LIMIT),
    }
}
