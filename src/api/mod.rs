// ABOUTME: Remote API seam: typed error enum and the FitlifeApi trait
// ABOUTME: The trait lets the cached layer and tests run against stub backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Remote FitLife API boundary.
//!
//! [`FitlifeApi`] describes the full REST surface the client consumes;
//! [`client::ApiClient`] is the `reqwest` implementation and
//! [`cached::CachedClient`] decorates any implementation with read-through
//! caching and mutation invalidation.

/// Read-through caching decorator
pub mod cached;
/// HTTP implementation of the API seam
pub mod client;

use crate::errors::{AppError, ErrorCode};
use crate::models::{
    AuthSession, CalendarEvent, Exercise, Goal, HealthRecord, MetricType, Routine, UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Errors from the remote API boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("FitLife API error ({status_code}): {message}")]
    Api {
        /// HTTP status code returned
        status_code: u16,
        /// Error message extracted from the response body
        message: String,
        /// Whether retrying later may succeed (server-side errors)
        retryable: bool,
    },

    /// The response body failed to deserialize
    #[error("failed to parse {field}: {source}")]
    Parse {
        /// Which response the parse was for
        field: &'static str,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The response was syntactically valid JSON but missing expected fields
    #[error("unexpected response shape for {field}")]
    UnexpectedResponse {
        /// Which response the extraction was for
        field: &'static str,
    },
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        match &error {
            ApiError::Network(message) => Self::new(
                ErrorCode::ExternalServiceUnavailable,
                message.clone(),
            ),
            ApiError::Api {
                status_code,
                message,
                ..
            } => Self::new(ErrorCode::from_http_status(*status_code), message.clone()),
            ApiError::Parse { .. } | ApiError::UnexpectedResponse { .. } => {
                Self::serialization(error.to_string())
            }
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// The FitLife REST surface consumed by this client.
///
/// Mutations return `()`: the backend's echo of the mutated entity is
/// unused because callers refetch (and the cached layer invalidates) after
/// every write.
#[async_trait]
pub trait FitlifeApi: Send + Sync {
    /// Create an account and return the authenticated session
    async fn sign_up(&self, email: &str, password: &str) -> ApiResult<AuthSession>;

    /// Authenticate and return the session
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthSession>;

    /// List health records, optionally filtered to one metric
    async fn health_records(
        &self,
        user_id: Uuid,
        metric: Option<MetricType>,
    ) -> ApiResult<Vec<HealthRecord>>;

    /// Create a health record
    async fn create_health_record(
        &self,
        user_id: Uuid,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()>;

    /// Update a health record
    async fn update_health_record(
        &self,
        id: &str,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()>;

    /// Delete a health record
    async fn delete_health_record(&self, id: &str) -> ApiResult<()>;

    /// List fitness routines
    async fn routines(&self, user_id: Uuid) -> ApiResult<Vec<Routine>>;

    /// Create a fitness routine
    async fn create_routine(
        &self,
        user_id: Uuid,
        name: &str,
        exercises: &[Exercise],
    ) -> ApiResult<()>;

    /// Update a fitness routine
    async fn update_routine(&self, id: &str, name: &str, exercises: &[Exercise]) -> ApiResult<()>;

    /// List goals
    async fn goals(&self, user_id: Uuid) -> ApiResult<Vec<Goal>>;

    /// Set a goal
    async fn set_goal(&self, user_id: Uuid, goal_type: &str, target: f64) -> ApiResult<()>;

    /// Update a goal's target
    async fn update_goal(&self, id: &str, target: f64) -> ApiResult<()>;

    /// List calendar events for one day
    async fn calendar_events(&self, user_id: Uuid, date: NaiveDate)
        -> ApiResult<Vec<CalendarEvent>>;

    /// Create a calendar event
    async fn create_calendar_event(
        &self,
        user_id: Uuid,
        title: &str,
        event_type: &str,
        date: NaiveDate,
    ) -> ApiResult<()>;

    /// Mark a calendar event completed or not
    async fn update_calendar_event(&self, id: &str, completed: bool) -> ApiResult<()>;

    /// Fetch the user profile
    async fn profile(&self, user_id: Uuid) -> ApiResult<UserProfile>;

    /// Update the user profile
    async fn update_profile(&self, user_id: Uuid, profile: &UserProfile) -> ApiResult<()>;

    /// Request AI nutrition analysis of a base64-encoded food photo
    async fn analyze_food_image(&self, image_base64: &str) -> ApiResult<serde_json::Value>;

    /// Look up nutrition facts by product barcode
    async fn nutrition_by_barcode(&self, barcode: &str) -> ApiResult<serde_json::Value>;

    /// Request AI analysis of a set of health metrics
    async fn analyze_health(&self, metrics: &serde_json::Value) -> ApiResult<serde_json::Value>;
}
