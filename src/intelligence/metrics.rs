// ABOUTME: Pure health metrics calculations: activity streak, weekly histogram, and BMI
// ABOUTME: Deterministic given the input records and an explicit "today" parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Health metrics calculations.
//!
//! All functions are pure transforms over record slices: no I/O, no clock
//! reads. "Today" is an explicit parameter so results are reproducible in
//! tests and stable across midnight during a render.

use crate::constants::bmi::{HEALTHY_MAX, OVERWEIGHT_MAX, UNDERWEIGHT_MAX};
use crate::constants::limits::WEEKLY_WINDOW_DAYS;
use crate::models::{HealthRecord, MetricType};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Consecutive-day activity streak
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakResult {
    /// Number of consecutive calendar days (ending today or yesterday)
    /// with at least one record
    pub streak: u32,
}

/// One day of the trailing weekly activity histogram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyActivityPoint {
    /// Short weekday label (e.g. "Mon")
    pub day: String,
    /// Human-readable date label (e.g. "Aug 7")
    pub full_date: String,
    /// Number of records on this day
    pub count: u32,
    /// Whether any record landed on this day
    pub is_active: bool,
    /// The calendar day itself
    pub date: NaiveDate,
}

/// BMI classification per WHO adult ranges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiStatus {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Healthy,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

/// BMI computation result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to one decimal; `None` without both weight and height
    pub bmi: Option<f64>,
    /// Classification of `bmi`; `None` whenever `bmi` is
    pub status: Option<BmiStatus>,
    /// Most recent weight in kg; `None` without any weight record
    pub latest_weight: Option<f64>,
}

/// Count consecutive calendar days with at least one record.
///
/// The streak is seeded at `today` when it has a record, otherwise at
/// yesterday, then extended backward one day at a time until the first gap.
/// Future-dated records are ignored; multiple records on one day count once.
#[must_use]
pub fn calculate_streak(records: &[HealthRecord], today: NaiveDate) -> StreakResult {
    let days: HashSet<NaiveDate> = records
        .iter()
        .map(|record| record.date)
        .filter(|date| *date <= today)
        .collect();

    let seed = if days.contains(&today) {
        Some(today)
    } else {
        today
            .checked_sub_days(Days::new(1))
            .filter(|yesterday| days.contains(yesterday))
    };

    let Some(mut cursor) = seed else {
        return StreakResult { streak: 0 };
    };

    let mut streak = 1;
    while let Some(previous) = cursor.checked_sub_days(Days::new(1)) {
        if !days.contains(&previous) {
            break;
        }
        streak += 1;
        cursor = previous;
    }

    StreakResult { streak }
}

/// Build the trailing 7-day activity histogram, oldest day first.
///
/// Always returns exactly 7 points covering `today` and the 6 preceding
/// days; the last point is dated `today`.
#[must_use]
pub fn weekly_activity(records: &[HealthRecord], today: NaiveDate) -> Vec<WeeklyActivityPoint> {
    (0..WEEKLY_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let count = records
                .iter()
                .filter(|record| record.date == date)
                .count() as u32;
            WeeklyActivityPoint {
                day: date.format("%a").to_string(),
                full_date: format!("{} {}", date.format("%b"), date.day()),
                count,
                is_active: count > 0,
                date,
            }
        })
        .collect()
}

/// Compute BMI from the single most recent weight and height records.
///
/// Records with non-finite or non-positive values are ignored. Without any
/// weight record every field is `None`; with weight but no height only
/// `latest_weight` is reported.
#[must_use]
pub fn calculate_bmi(records: &[HealthRecord]) -> BmiResult {
    let latest_weight = latest_metric_value(records, MetricType::Weight);
    let latest_height = latest_metric_value(records, MetricType::Height);

    let Some(weight_kg) = latest_weight else {
        return BmiResult {
            bmi: None,
            status: None,
            latest_weight: None,
        };
    };

    let Some(height_cm) = latest_height else {
        return BmiResult {
            bmi: None,
            status: None,
            latest_weight: Some(weight_kg),
        };
    };

    let height_m = height_cm / 100.0;
    let bmi = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;

    BmiResult {
        bmi: Some(bmi),
        status: Some(classify_bmi(bmi)),
        latest_weight: Some(weight_kg),
    }
}

/// Most recent valid value for a metric, by creation timestamp
fn latest_metric_value(records: &[HealthRecord], metric: MetricType) -> Option<f64> {
    records
        .iter()
        .filter(|record| {
            record.metric == metric && record.value.is_finite() && record.value > 0.0
        })
        .max_by_key(|record| record.created_at)
        .map(|record| record.value)
}

fn classify_bmi(bmi: f64) -> BmiStatus {
    if bmi < UNDERWEIGHT_MAX {
        BmiStatus::Underweight
    } else if bmi < HEALTHY_MAX {
        BmiStatus::Healthy
    } else if bmi < OVERWEIGHT_MAX {
        BmiStatus::Overweight
    } else {
        BmiStatus::Obese
    }
}
