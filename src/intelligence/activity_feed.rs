// ABOUTME: Merged recent-activity feed over health records, routines, and goals
// ABOUTME: Newest first, capped, with per-kind human-readable descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Recent-activity feed assembly.

use crate::models::{Goal, HealthRecord, MetricType, Routine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source collection an activity item came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Health record entry
    Health,
    /// Fitness routine
    Routine,
    /// Goal
    Goal,
}

/// One entry in the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    /// Source collection
    pub kind: ActivityKind,
    /// Human-readable description
    pub description: String,
    /// Creation timestamp used for ordering
    pub timestamp: DateTime<Utc>,
}

/// Merge health records, routines, and goals into one feed.
///
/// Sorted by timestamp descending and truncated to `limit`. The sort is
/// stable, so items with equal timestamps keep merge order: health records,
/// then routines, then goals.
#[must_use]
pub fn recent_activity(
    records: &[HealthRecord],
    routines: &[Routine],
    goals: &[Goal],
    limit: usize,
) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = Vec::with_capacity(records.len() + routines.len() + goals.len());

    items.extend(records.iter().map(|record| ActivityItem {
        kind: ActivityKind::Health,
        description: describe_record(record),
        timestamp: record.created_at,
    }));
    items.extend(routines.iter().map(|routine| ActivityItem {
        kind: ActivityKind::Routine,
        description: format!("Created routine: {}", routine.name),
        timestamp: routine.created_at,
    }));
    items.extend(goals.iter().map(|goal| ActivityItem {
        kind: ActivityKind::Goal,
        description: format!("Set goal: {}", goal.label()),
        timestamp: goal.created_at,
    }));

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(limit);
    items
}

fn describe_record(record: &HealthRecord) -> String {
    match record.metric {
        MetricType::Weight => format!("Logged weight: {}kg", record.value),
        MetricType::Steps => format!("Walked {} steps", record.value),
        MetricType::HeartRate => format!("Heart Rate: {} bpm", record.value),
        MetricType::Height => format!("Recorded height: {}cm", record.value),
        other => format!("Logged {}: {}", other.as_str(), record.value),
    }
}
