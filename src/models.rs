// ABOUTME: Typed data model for FitLife entities with a lenient deserialization boundary
// ABOUTME: Malformed remote entries are skipped and logged before reaching the statistics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Data model for the FitLife client.
//!
//! The remote API is loosely typed; everything it returns passes through the
//! lenient parsers in this module ([`parse_health_records`], [`lenient_list`])
//! which skip and log malformed entries. Code downstream of this boundary can
//! rely on every field being present and well-formed.

use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Kind of health metric a record tracks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Body weight in kilograms
    Weight,
    /// Body height in centimeters
    Height,
    /// Step count for the day
    Steps,
    /// Heart rate in beats per minute
    HeartRate,
    /// Blood pressure reading
    BloodPressure,
    /// Blood sugar reading
    BloodSugar,
    /// Hours of sleep
    SleepHours,
    /// Menstruation tracking flag
    Menstruation,
}

impl MetricType {
    /// Every metric kind, for exhaustive iteration
    pub const ALL: [Self; 8] = [
        Self::Weight,
        Self::Height,
        Self::Steps,
        Self::HeartRate,
        Self::BloodPressure,
        Self::BloodSugar,
        Self::SleepHours,
        Self::Menstruation,
    ];

    /// Wire identifier for this metric, as the remote API spells it
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Steps => "steps",
            Self::HeartRate => "heart_rate",
            Self::BloodPressure => "blood_pressure",
            Self::BloodSugar => "blood_sugar",
            Self::SleepHours => "sleep_hours",
            Self::Menstruation => "menstruation",
        }
    }

    /// Display unit for this metric
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height => "cm",
            Self::Steps => "steps",
            Self::HeartRate => "bpm",
            Self::BloodPressure => "mmHg",
            Self::BloodSugar => "mg/dL",
            Self::SleepHours => "hours",
            Self::Menstruation => "",
        }
    }
}

impl FromStr for MetricType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            "steps" => Ok(Self::Steps),
            "heart_rate" => Ok(Self::HeartRate),
            "blood_pressure" => Ok(Self::BloodPressure),
            "blood_sugar" => Ok(Self::BloodSugar),
            "sleep_hours" => Ok(Self::SleepHours),
            "menstruation" => Ok(Self::Menstruation),
            other => Err(AppError::invalid_input(format!(
                "unknown metric type: {other}"
            ))),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single time-stamped health measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    /// Record identifier assigned by the backend
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Owning user, when the backend includes it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    /// Metric kind
    #[serde(rename = "type")]
    pub metric: MetricType,
    /// Measured value in the metric's unit
    pub value: f64,
    /// Calendar day of the measurement; datetime inputs are truncated to the day
    #[serde(deserialize_with = "date_from_prefix")]
    pub date: NaiveDate,
    /// Creation timestamp assigned by the backend
    pub created_at: DateTime<Utc>,
}

impl HealthRecord {
    /// Construct a record with an explicit creation timestamp
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            metric,
            value,
            date,
            created_at,
        }
    }
}

/// A single exercise within a fitness routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(default = "default_sets")]
    pub sets: u32,
    /// Repetitions per set
    #[serde(default = "default_reps")]
    pub reps: u32,
}

const fn default_sets() -> u32 {
    3
}

const fn default_reps() -> u32 {
    10
}

/// A named workout routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    /// Routine identifier assigned by the backend
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Owning user, when the backend includes it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    /// Routine name
    pub name: String,
    /// Exercises in execution order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Creation timestamp assigned by the backend
    pub created_at: DateTime<Utc>,
}

/// A fitness goal with a numeric target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Goal identifier assigned by the backend
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Owning user, when the backend includes it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    /// Goal kind identifier (e.g. `weight_loss`, `steps`)
    #[serde(rename = "type")]
    pub goal_type: String,
    /// Target value in the goal kind's unit
    pub target: f64,
    /// Creation timestamp assigned by the backend
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Human-readable label for the goal kind; falls back to the raw identifier
    #[must_use]
    pub fn label(&self) -> &str {
        match self.goal_type.as_str() {
            "weight_loss" => "Weight Loss",
            "weight_gain" => "Weight Gain",
            "muscle_gain" => "Muscle Gain",
            "body_fat" => "Body Fat %",
            "workout_days" => "Workout Days",
            "steps" => "Daily Steps",
            other => other,
        }
    }
}

/// A scheduled calendar event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// Event identifier assigned by the backend
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Owning user, when the backend includes it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<Uuid>,
    /// Event title
    pub title: String,
    /// Event kind identifier (e.g. `workout`, `meal`)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Calendar day of the event
    #[serde(deserialize_with = "date_from_prefix")]
    pub date: NaiveDate,
    /// Whether the event has been completed
    #[serde(default)]
    pub completed: bool,
}

/// User profile as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<u32>,
    /// Self-reported gender
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<String>,
    /// City of residence
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub city: Option<String>,
    /// State or region of residence
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
    /// Country of residence
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
}

/// Authenticated session returned by signup/signin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Authenticated user identifier
    pub user_id: Uuid,
    /// Account email
    pub email: String,
    /// Bearer token for subsequent requests
    pub access_token: String,
}

impl AuthSession {
    /// Extract a session from the auth endpoint's `{ user, session }` response
    #[must_use]
    pub fn from_response(value: &Value) -> Option<Self> {
        let user = value.get("user")?;
        let user_id = user
            .get("id")
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())?;
        let email = user.get("email").and_then(Value::as_str)?.to_owned();
        let access_token = value
            .get("session")?
            .get("access_token")
            .and_then(Value::as_str)?
            .to_owned();
        Some(Self {
            user_id,
            email,
            access_token,
        })
    }
}

/// Parse the date portion of an ISO date or datetime string
pub(crate) fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn date_from_prefix<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_prefix(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// Numeric field that may arrive as a JSON number or a numeric string
fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Pull the entry array out of a list response (bare array or `{ records: [...] }`)
fn entry_array<'v>(value: &'v Value, key: &str) -> Option<&'v Vec<Value>> {
    value
        .as_array()
        .or_else(|| value.get(key).and_then(Value::as_array))
}

/// Parse a health record list response, skipping malformed entries.
///
/// Each entry needs a parsable id, a known metric type, a finite numeric
/// value, and an ISO date. Entries failing any of those are dropped with a
/// debug log; the statistics engine never sees them.
#[must_use]
pub fn parse_health_records(value: &Value) -> Vec<HealthRecord> {
    let Some(entries) = entry_array(value, "records") else {
        debug!("health record response is not a list, treating as empty");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match parse_health_record(entry) {
            Some(record) => records.push(record),
            None => debug!(entry = %entry, "skipping malformed health record"),
        }
    }
    records
}

fn parse_health_record(entry: &Value) -> Option<HealthRecord> {
    let id = match entry.get("id")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let metric: MetricType = entry.get("type")?.as_str()?.parse().ok()?;
    let value = lenient_number(entry.get("value")?)?;
    if !value.is_finite() {
        return None;
    }
    let date = parse_date_prefix(entry.get("date")?.as_str()?)?;
    let created_at = entry
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map_or_else(
            || {
                date.and_hms_opt(0, 0, 0)
                    .map(|dt| dt.and_utc())
                    .unwrap_or_else(Utc::now)
            },
            |dt| dt.with_timezone(&Utc),
        );
    let user_id = entry
        .get("user_id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok());

    Some(HealthRecord {
        id,
        user_id,
        metric,
        value,
        date,
        created_at,
    })
}

/// Parse a typed entity list, skipping entries that fail deserialization.
///
/// `key` names the wrapper field checked when the response is not a bare
/// array (e.g. `routines`, `goals`, `events`).
#[must_use]
pub fn lenient_list<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    let Some(entries) = entry_array(value, key) else {
        debug!(key, "list response is not a list, treating as empty");
        return Vec::new();
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(item) => items.push(item),
            Err(error) => debug!(%error, entry = %entry, "skipping malformed entry"),
        }
    }
    items
}
