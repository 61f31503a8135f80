// ABOUTME: reqwest implementation of the FitlifeApi trait against the action-style REST API
// ABOUTME: Bearer-token auth, JSON bodies only when present, status-to-error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! HTTP client for the FitLife backend.

use super::{ApiError, ApiResult, FitlifeApi};
use crate::config::environment::ApiSettings;
use crate::models::{
    lenient_list, parse_health_records, AuthSession, CalendarEvent, Exercise, Goal, HealthRecord,
    MetricType, Routine, UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// HTTP client for the FitLife REST API
pub struct ApiClient {
    settings: ApiSettings,
    client: Client,
    /// Bearer token captured from signin/signup
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client with the given settings
    #[must_use]
    pub fn new(settings: ApiSettings) -> Self {
        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .unwrap_or_default();

        Self {
            settings,
            client,
            token: RwLock::new(None),
        }
    }

    /// Install a bearer token for subsequent requests
    pub async fn set_access_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().await;
        *guard = Some(token.into());
    }

    /// Whether a bearer token is currently installed
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// `Content-Type` is only set when a body is present, and the bearer
    /// token is attached once a session is established. Non-2xx statuses
    /// map to [`ApiError::Api`] with the message extracted from the body.
    async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let url = format!("{}{path_and_query}", self.settings.base_url);
        debug!(http.method = %method, http.url = %url, "FitLife API request");

        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message: extract_error_message(&text),
                retryable: status.is_server_error(),
            });
        }

        if text.is_empty() {
            return Ok(json!({}));
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| json!({ "message": text })))
    }

    async fn authenticate(&self, action: &str, email: &str, password: &str) -> ApiResult<AuthSession> {
        let data = self
            .request(
                Method::POST,
                &format!("/auth?action={action}"),
                Some(json!({ "email": email, "password": password })),
            )
            .await?;
        let session = AuthSession::from_response(&data)
            .ok_or(ApiError::UnexpectedResponse { field: "session" })?;
        self.set_access_token(session.access_token.clone()).await;
        Ok(session)
    }
}

/// Pull the most specific error message out of an error body
fn extract_error_message(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|data| {
            data.get("error")
                .or_else(|| data.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| text.to_owned())
}

#[async_trait]
impl FitlifeApi for ApiClient {
    async fn sign_up(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        self.authenticate("signup", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        self.authenticate("signin", email, password).await
    }

    async fn health_records(
        &self,
        user_id: Uuid,
        metric: Option<MetricType>,
    ) -> ApiResult<Vec<HealthRecord>> {
        let type_param = metric.map_or_else(String::new, |m| format!("&type={m}"));
        let data = self
            .request(
                Method::GET,
                &format!("/health?action=records&user_id={user_id}{type_param}"),
                None,
            )
            .await?;
        Ok(parse_health_records(&data))
    }

    async fn create_health_record(
        &self,
        user_id: Uuid,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.request(
            Method::POST,
            "/health?action=create",
            Some(json!({
                "user_id": user_id,
                "type": metric,
                "value": value,
                "date": date,
            })),
        )
        .await?;
        Ok(())
    }

    async fn update_health_record(
        &self,
        id: &str,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.request(
            Method::PUT,
            "/health?action=update",
            Some(json!({
                "id": id,
                "type": metric,
                "value": value,
                "date": date,
            })),
        )
        .await?;
        Ok(())
    }

    async fn delete_health_record(&self, id: &str) -> ApiResult<()> {
        self.request(
            Method::DELETE,
            &format!("/health?action=delete&id={}", urlencoding::encode(id)),
            None,
        )
        .await?;
        Ok(())
    }

    async fn routines(&self, user_id: Uuid) -> ApiResult<Vec<Routine>> {
        let data = self
            .request(
                Method::GET,
                &format!("/fitness?action=list&user_id={user_id}"),
                None,
            )
            .await?;
        Ok(lenient_list(&data, "routines"))
    }

    async fn create_routine(
        &self,
        user_id: Uuid,
        name: &str,
        exercises: &[Exercise],
    ) -> ApiResult<()> {
        self.request(
            Method::POST,
            "/fitness?action=create",
            Some(json!({
                "user_id": user_id,
                "name": name,
                "exercises": exercises,
            })),
        )
        .await?;
        Ok(())
    }

    async fn update_routine(&self, id: &str, name: &str, exercises: &[Exercise]) -> ApiResult<()> {
        self.request(
            Method::PUT,
            "/fitness?action=update",
            Some(json!({
                "id": id,
                "name": name,
                "exercises": exercises,
            })),
        )
        .await?;
        Ok(())
    }

    async fn goals(&self, user_id: Uuid) -> ApiResult<Vec<Goal>> {
        let data = self
            .request(
                Method::GET,
                &format!("/goals?action=list&user_id={user_id}"),
                None,
            )
            .await?;
        Ok(lenient_list(&data, "goals"))
    }

    async fn set_goal(&self, user_id: Uuid, goal_type: &str, target: f64) -> ApiResult<()> {
        self.request(
            Method::POST,
            "/goals?action=set",
            Some(json!({
                "user_id": user_id,
                "type": goal_type,
                "target": target,
            })),
        )
        .await?;
        Ok(())
    }

    async fn update_goal(&self, id: &str, target: f64) -> ApiResult<()> {
        self.request(
            Method::PUT,
            "/goals?action=update",
            Some(json!({ "id": id, "target": target })),
        )
        .await?;
        Ok(())
    }

    async fn calendar_events(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> ApiResult<Vec<CalendarEvent>> {
        let data = self
            .request(
                Method::GET,
                &format!("/calendar?action=list&user_id={user_id}&date={date}"),
                None,
            )
            .await?;
        Ok(lenient_list(&data, "events"))
    }

    async fn create_calendar_event(
        &self,
        user_id: Uuid,
        title: &str,
        event_type: &str,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.request(
            Method::POST,
            "/calendar?action=create",
            Some(json!({
                "user_id": user_id,
                "title": title,
                "type": event_type,
                "date": date,
            })),
        )
        .await?;
        Ok(())
    }

    async fn update_calendar_event(&self, id: &str, completed: bool) -> ApiResult<()> {
        self.request(
            Method::PUT,
            "/calendar?action=update",
            Some(json!({ "id": id, "completed": completed })),
        )
        .await?;
        Ok(())
    }

    async fn profile(&self, user_id: Uuid) -> ApiResult<UserProfile> {
        let data = self
            .request(
                Method::GET,
                &format!("/users?action=profile&user_id={user_id}"),
                None,
            )
            .await?;
        serde_json::from_value(data).map_err(|source| ApiError::Parse {
            field: "profile",
            source,
        })
    }

    async fn update_profile(&self, user_id: Uuid, profile: &UserProfile) -> ApiResult<()> {
        let mut body = serde_json::to_value(profile).map_err(|source| ApiError::Parse {
            field: "profile",
            source,
        })?;
        if let Some(fields) = body.as_object_mut() {
            fields.insert("user_id".to_owned(), json!(user_id));
        }
        self.request(Method::PUT, "/users?action=profile", Some(body))
            .await?;
        Ok(())
    }

    async fn analyze_food_image(&self, image_base64: &str) -> ApiResult<Value> {
        self.request(
            Method::POST,
            "/ai?action=analyze",
            Some(json!({ "image": image_base64 })),
        )
        .await
    }

    async fn nutrition_by_barcode(&self, barcode: &str) -> ApiResult<Value> {
        self.request(
            Method::GET,
            &format!("/ai?action=nutrition&barcode={}", urlencoding::encode(barcode)),
            None,
        )
        .await
    }

    async fn analyze_health(&self, metrics: &Value) -> ApiResult<Value> {
        self.request(Method::POST, "/ai?action=analyze-health", Some(metrics.clone()))
            .await
    }
}
