// ABOUTME: Tests for streak, weekly histogram, and BMI calculations
// ABOUTME: Fixed "today" throughout; results must be deterministic and panic-free
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

use chrono::{Days, NaiveDate};
use fitlife_client::intelligence::{
    calculate_bmi, calculate_streak, weekly_activity, BmiStatus,
};
use fitlife_client::models::{HealthRecord, MetricType};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

fn record_on(date: NaiveDate) -> HealthRecord {
    record_at(MetricType::Steps, 5000.0, date, 12)
}

/// Record with an hour-of-day so creation timestamps order deterministically
fn record_at(metric: MetricType, value: f64, date: NaiveDate, hour: u32) -> HealthRecord {
    let created_at = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();
    HealthRecord::new("test", metric, value, date, created_at)
}

// ── Streak ──────────────────────────────────────────────────────────

#[test]
fn test_streak_empty_input_is_zero() {
    assert_eq!(calculate_streak(&[], today()).streak, 0);
}

#[test]
fn test_streak_three_consecutive_days() {
    let records = vec![
        record_on(today()),
        record_on(days_ago(1)),
        record_on(days_ago(2)),
    ];
    assert_eq!(calculate_streak(&records, today()).streak, 3);
}

#[test]
fn test_streak_stops_at_first_gap() {
    let records = vec![record_on(today()), record_on(days_ago(3))];
    assert_eq!(calculate_streak(&records, today()).streak, 1);
}

#[test]
fn test_streak_can_seed_at_yesterday() {
    let records = vec![record_on(days_ago(1)), record_on(days_ago(2))];
    assert_eq!(calculate_streak(&records, today()).streak, 2);
}

#[test]
fn test_streak_prefers_today_over_yesterday_seed() {
    let records = vec![record_on(today()), record_on(days_ago(1))];
    assert_eq!(calculate_streak(&records, today()).streak, 2);
}

#[test]
fn test_streak_zero_when_neither_today_nor_yesterday() {
    let records = vec![record_on(days_ago(2)), record_on(days_ago(3))];
    assert_eq!(calculate_streak(&records, today()).streak, 0);
}

#[test]
fn test_streak_ignores_future_dates() {
    let future = today().checked_add_days(Days::new(2)).unwrap();
    let records = vec![record_on(future)];
    assert_eq!(calculate_streak(&records, today()).streak, 0);
}

#[test]
fn test_streak_counts_duplicate_days_once() {
    let records = vec![
        record_on(today()),
        record_on(today()),
        record_on(days_ago(1)),
    ];
    assert_eq!(calculate_streak(&records, today()).streak, 2);
}

// ── Weekly histogram ────────────────────────────────────────────────

#[test]
fn test_weekly_always_seven_points_ending_today() {
    let points = weekly_activity(&[], today());
    assert_eq!(points.len(), 7);
    assert_eq!(points[0].date, days_ago(6));
    assert_eq!(points[6].date, today());
    assert!(points.iter().all(|p| p.count == 0 && !p.is_active));
}

#[test]
fn test_weekly_counts_and_activity_flags() {
    let records = vec![
        record_on(today()),
        record_on(today()),
        record_on(days_ago(3)),
        // Outside the window, must not appear
        record_on(days_ago(9)),
    ];
    let points = weekly_activity(&records, today());

    assert_eq!(points[6].count, 2);
    assert!(points[6].is_active);
    assert_eq!(points[3].count, 1);
    assert!(points[3].is_active);
    assert_eq!(points.iter().map(|p| p.count).sum::<u32>(), 3);
}

#[test]
fn test_weekly_labels() {
    let points = weekly_activity(&[], today());
    // 2026-08-07 is a Friday
    assert_eq!(points[6].day, "Fri");
    assert_eq!(points[6].full_date, "Aug 7");
}

// ── BMI ─────────────────────────────────────────────────────────────

#[test]
fn test_bmi_healthy() {
    let records = vec![
        record_at(MetricType::Weight, 70.0, today(), 10),
        record_at(MetricType::Height, 175.0, today(), 10),
    ];
    let result = calculate_bmi(&records);
    assert_eq!(result.bmi, Some(22.9));
    assert_eq!(result.status, Some(BmiStatus::Healthy));
    assert_eq!(result.latest_weight, Some(70.0));
}

#[test]
fn test_bmi_obese() {
    let records = vec![
        record_at(MetricType::Weight, 100.0, today(), 10),
        record_at(MetricType::Height, 160.0, today(), 10),
    ];
    let result = calculate_bmi(&records);
    assert_eq!(result.bmi, Some(39.1));
    assert_eq!(result.status, Some(BmiStatus::Obese));
}

#[test]
fn test_bmi_without_height_reports_weight_only() {
    let records = vec![record_at(MetricType::Weight, 70.0, today(), 10)];
    let result = calculate_bmi(&records);
    assert_eq!(result.bmi, None);
    assert_eq!(result.status, None);
    assert_eq!(result.latest_weight, Some(70.0));
}

#[test]
fn test_bmi_without_weight_is_empty() {
    let records = vec![record_at(MetricType::Height, 175.0, today(), 10)];
    let result = calculate_bmi(&records);
    assert_eq!(result.bmi, None);
    assert_eq!(result.status, None);
    assert_eq!(result.latest_weight, None);
}

#[test]
fn test_bmi_uses_most_recent_records_not_extremes() {
    let records = vec![
        record_at(MetricType::Weight, 90.0, days_ago(30), 8),
        record_at(MetricType::Weight, 70.0, today(), 18),
        record_at(MetricType::Height, 175.0, today(), 10),
    ];
    let result = calculate_bmi(&records);
    assert_eq!(result.latest_weight, Some(70.0));
    assert_eq!(result.bmi, Some(22.9));
}

#[test]
fn test_bmi_skips_invalid_values() {
    let records = vec![
        record_at(MetricType::Weight, f64::NAN, today(), 18),
        record_at(MetricType::Weight, 0.0, today(), 16),
        record_at(MetricType::Weight, 70.0, days_ago(2), 10),
        record_at(MetricType::Height, 175.0, today(), 10),
    ];
    let result = calculate_bmi(&records);
    assert_eq!(result.latest_weight, Some(70.0));
    assert_eq!(result.status, Some(BmiStatus::Healthy));
}
