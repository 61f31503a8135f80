// ABOUTME: Tests for the read-through cached client against a stub API
// ABOUTME: Cache hits skip the remote, mutations invalidate, dashboard memoizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

use async_trait::async_trait;
use chrono::NaiveDate;
use fitlife_client::api::cached::CachedClient;
use fitlife_client::api::{ApiResult, FitlifeApi};
use fitlife_client::cache::memory::MemoryStore;
use fitlife_client::cache::CacheService;
use fitlife_client::models::{
    AuthSession, CalendarEvent, Exercise, Goal, HealthRecord, MetricType, Routine, UserProfile,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

/// Stub backend that counts list fetches and returns canned data
#[derive(Default)]
struct StubApi {
    records_calls: AtomicUsize,
    routines_calls: AtomicUsize,
    goals_calls: AtomicUsize,
    events_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl StubApi {
    fn canned_records() -> Vec<HealthRecord> {
        vec![HealthRecord::new(
            "rec-1",
            MetricType::Weight,
            72.5,
            today(),
            today().and_hms_opt(8, 0, 0).unwrap().and_utc(),
        )]
    }
}

#[async_trait]
impl FitlifeApi for StubApi {
    async fn sign_up(&self, email: &str, _password: &str) -> ApiResult<AuthSession> {
        Ok(AuthSession {
            user_id: Uuid::new_v4(),
            email: email.to_owned(),
            access_token: "stub-token".to_owned(),
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        self.sign_up(email, password).await
    }

    async fn health_records(
        &self,
        _user_id: Uuid,
        _metric: Option<MetricType>,
    ) -> ApiResult<Vec<HealthRecord>> {
        self.records_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::canned_records())
    }

    async fn create_health_record(
        &self,
        _user_id: Uuid,
        _metric: MetricType,
        _value: f64,
        _date: NaiveDate,
    ) -> ApiResult<()> {
        Ok(())
    }

    async fn update_health_record(
        &self,
        _id: &str,
        _metric: MetricType,
        _value: f64,
        _date: NaiveDate,
    ) -> ApiResult<()> {
        Ok(())
    }

    async fn delete_health_record(&self, _id: &str) -> ApiResult<()> {
        Ok(())
    }

    async fn routines(&self, _user_id: Uuid) -> ApiResult<Vec<Routine>> {
        self.routines_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn create_routine(
        &self,
        _user_id: Uuid,
        _name: &str,
        _exercises: &[Exercise],
    ) -> ApiResult<()> {
        Ok(())
    }

    async fn update_routine(
        &self,
        _id: &str,
        _name: &str,
        _exercises: &[Exercise],
    ) -> ApiResult<()> {
        Ok(())
    }

    async fn goals(&self, _user_id: Uuid) -> ApiResult<Vec<Goal>> {
        self.goals_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn set_goal(&self, _user_id: Uuid, _goal_type: &str, _target: f64) -> ApiResult<()> {
        Ok(())
    }

    async fn update_goal(&self, _id: &str, _target: f64) -> ApiResult<()> {
        Ok(())
    }

    async fn calendar_events(
        &self,
        _user_id: Uuid,
        _date: NaiveDate,
    ) -> ApiResult<Vec<CalendarEvent>> {
        self.events_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn create_calendar_event(
        &self,
        _user_id: Uuid,
        _title: &str,
        _event_type: &str,
        _date: NaiveDate,
    ) -> ApiResult<()> {
        Ok(())
    }

    async fn update_calendar_event(&self, _id: &str, _completed: bool) -> ApiResult<()> {
        Ok(())
    }

    async fn profile(&self, _user_id: Uuid) -> ApiResult<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserProfile {
            name: "Stub".to_owned(),
            ..UserProfile::default()
        })
    }

    async fn update_profile(&self, _user_id: Uuid, _profile: &UserProfile) -> ApiResult<()> {
        Ok(())
    }

    async fn analyze_food_image(&self, _image_base64: &str) -> ApiResult<Value> {
        Ok(json!({}))
    }

    async fn nutrition_by_barcode(&self, _barcode: &str) -> ApiResult<Value> {
        Ok(json!({}))
    }

    async fn analyze_health(&self, _metrics: &Value) -> ApiResult<Value> {
        Ok(json!({}))
    }
}

fn cached_stub() -> CachedClient<StubApi> {
    let cache = CacheService::new(Arc::new(MemoryStore::new()));
    CachedClient::new(StubApi::default(), cache)
}

#[tokio::test]
async fn test_second_read_is_served_from_cache() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    let first = client.health_records(user_id, None).await?;
    let second = client.health_records(user_id, None).await?;

    assert_eq!(first, second);
    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_metric_filters_cache_independently() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client.health_records(user_id, None).await?;
    client
        .health_records(user_id, Some(MetricType::Weight))
        .await?;

    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_mutation_invalidates_record_cache() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client.health_records(user_id, None).await?;
    client
        .create_health_record(user_id, MetricType::Weight, 71.0, today())
        .await?;
    client.health_records(user_id, None).await?;

    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_delete_invalidates_filtered_caches_too() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client
        .health_records(user_id, Some(MetricType::Steps))
        .await?;
    client.delete_health_record(user_id, "rec-1").await?;
    client
        .health_records(user_id, Some(MetricType::Steps))
        .await?;

    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_is_memoized() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    let first = client.dashboard(user_id, today()).await?;
    let second = client.dashboard(user_id, today()).await?;

    assert_eq!(first, second);
    assert_eq!(first.total_records, 1);
    assert_eq!(first.streak.streak, 1);
    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.inner().routines_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.inner().goals_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_health_mutation_invalidates_dashboard() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client.dashboard(user_id, today()).await?;
    client
        .create_health_record(user_id, MetricType::Steps, 8000.0, today())
        .await?;
    client.dashboard(user_id, today()).await?;

    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_goal_mutation_invalidates_goals_and_dashboard() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client.dashboard(user_id, today()).await?;
    client.set_goal(user_id, "steps", 10000.0).await?;
    client.goals(user_id).await?;
    client.dashboard(user_id, today()).await?;

    assert_eq!(client.inner().goals_calls.load(Ordering::SeqCst), 2);
    // Dashboard refetch reuses the still-fresh records cache
    assert_eq!(client.inner().records_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_profile_round_trip_and_invalidation() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    let profile = client.profile(user_id).await?;
    client.profile(user_id).await?;
    assert_eq!(client.inner().profile_calls.load(Ordering::SeqCst), 1);

    client.update_profile(user_id, &profile).await?;
    client.profile(user_id).await?;
    assert_eq!(client.inner().profile_calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() -> ApiResult<()> {
    let client = cached_stub();
    let user_id = Uuid::new_v4();

    client.routines(user_id).await?;
    client.clear_cache();
    client.routines(user_id).await?;

    assert_eq!(client.inner().routines_calls.load(Ordering::SeqCst), 2);
    Ok(())
}
