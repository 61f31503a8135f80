// ABOUTME: Read-through caching decorator over any FitlifeApi implementation
// ABOUTME: Serves cache hits, populates on miss, and invalidates logical keys on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Cached client.
//!
//! Wraps a [`FitlifeApi`] with the obfuscated local cache. Reads consult the
//! cache first and fall back to the remote on a miss; every mutation removes
//! the logical keys it may have staled, so the next read refetches. Cache
//! failures never fail a request.

use super::{ApiResult, FitlifeApi};
use crate::cache::{CacheKey, CacheResource, CacheService, CacheTtlConfig};
use crate::intelligence::{dashboard_summary, DashboardSummary};
use crate::models::{
    AuthSession, CalendarEvent, Exercise, Goal, HealthRecord, MetricType, Routine, UserProfile,
};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

/// FitLife client with read-through caching
pub struct CachedClient<A: FitlifeApi> {
    inner: A,
    cache: CacheService,
    ttl: CacheTtlConfig,
}

impl<A: FitlifeApi> CachedClient<A> {
    /// Wrap a client with the given cache and default TTLs
    #[must_use]
    pub fn new(inner: A, cache: CacheService) -> Self {
        Self::with_ttl(inner, cache, CacheTtlConfig::default())
    }

    /// Wrap a client with explicit TTL configuration
    #[must_use]
    pub fn with_ttl(inner: A, cache: CacheService, ttl: CacheTtlConfig) -> Self {
        Self { inner, cache, ttl }
    }

    /// The wrapped client
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Drop every cached entry for this application
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn key(user_id: Uuid, resource: CacheResource) -> CacheKey {
        CacheKey::new(user_id, resource)
    }

    fn store<T: serde::Serialize>(&self, key: &CacheKey, value: &T) {
        self.cache
            .set_with_ttl(key, value, self.ttl.ttl_for_resource(&key.resource));
    }

    /// Remove every health record key (all metric filters) plus the
    /// dashboard, which aggregates over them
    fn invalidate_health(&self, user_id: Uuid) {
        self.cache
            .remove(&Self::key(user_id, CacheResource::HealthRecords { metric: None }));
        for metric in MetricType::ALL {
            self.cache.remove(&Self::key(
                user_id,
                CacheResource::HealthRecords {
                    metric: Some(metric),
                },
            ));
        }
        self.cache.remove(&Self::key(user_id, CacheResource::Dashboard));
    }

    /// Sign up, passing straight through (sessions are never cached)
    pub async fn sign_up(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        self.inner.sign_up(email, password).await
    }

    /// Sign in, passing straight through (sessions are never cached)
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        self.inner.sign_in(email, password).await
    }

    /// List health records, served from cache when fresh
    pub async fn health_records(
        &self,
        user_id: Uuid,
        metric: Option<MetricType>,
    ) -> ApiResult<Vec<HealthRecord>> {
        let key = Self::key(user_id, CacheResource::HealthRecords { metric });
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }
        let records = self.inner.health_records(user_id, metric).await?;
        self.store(&key, &records);
        Ok(records)
    }

    /// Create a health record and invalidate dependent keys
    pub async fn create_health_record(
        &self,
        user_id: Uuid,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.inner
            .create_health_record(user_id, metric, value, date)
            .await?;
        self.invalidate_health(user_id);
        Ok(())
    }

    /// Update a health record and invalidate dependent keys
    pub async fn update_health_record(
        &self,
        user_id: Uuid,
        id: &str,
        metric: MetricType,
        value: f64,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.inner
            .update_health_record(id, metric, value, date)
            .await?;
        self.invalidate_health(user_id);
        Ok(())
    }

    /// Delete a health record and invalidate dependent keys
    pub async fn delete_health_record(&self, user_id: Uuid, id: &str) -> ApiResult<()> {
        self.inner.delete_health_record(id).await?;
        self.invalidate_health(user_id);
        Ok(())
    }

    /// List routines, served from cache when fresh
    pub async fn routines(&self, user_id: Uuid) -> ApiResult<Vec<Routine>> {
        let key = Self::key(user_id, CacheResource::Routines);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }
        let routines = self.inner.routines(user_id).await?;
        self.store(&key, &routines);
        Ok(routines)
    }

    /// Create a routine and invalidate dependent keys
    pub async fn create_routine(
        &self,
        user_id: Uuid,
        name: &str,
        exercises: &[Exercise],
    ) -> ApiResult<()> {
        self.inner.create_routine(user_id, name, exercises).await?;
        self.cache.remove(&Self::key(user_id, CacheResource::Routines));
        self.cache.remove(&Self::key(user_id, CacheResource::Dashboard));
        Ok(())
    }

    /// Update a routine and invalidate dependent keys
    pub async fn update_routine(
        &self,
        user_id: Uuid,
        id: &str,
        name: &str,
        exercises: &[Exercise],
    ) -> ApiResult<()> {
        self.inner.update_routine(id, name, exercises).await?;
        self.cache.remove(&Self::key(user_id, CacheResource::Routines));
        self.cache.remove(&Self::key(user_id, CacheResource::Dashboard));
        Ok(())
    }

    /// List goals, served from cache when fresh
    pub async fn goals(&self, user_id: Uuid) -> ApiResult<Vec<Goal>> {
        let key = Self::key(user_id, CacheResource::Goals);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }
        let goals = self.inner.goals(user_id).await?;
        self.store(&key, &goals);
        Ok(goals)
    }

    /// Set a goal and invalidate dependent keys
    pub async fn set_goal(&self, user_id: Uuid, goal_type: &str, target: f64) -> ApiResult<()> {
        self.inner.set_goal(user_id, goal_type, target).await?;
        self.cache.remove(&Self::key(user_id, CacheResource::Goals));
        self.cache.remove(&Self::key(user_id, CacheResource::Dashboard));
        Ok(())
    }

    /// Update a goal and invalidate dependent keys
    pub async fn update_goal(&self, user_id: Uuid, id: &str, target: f64) -> ApiResult<()> {
        self.inner.update_goal(id, target).await?;
        self.cache.remove(&Self::key(user_id, CacheResource::Goals));
        self.cache.remove(&Self::key(user_id, CacheResource::Dashboard));
        Ok(())
    }

    /// List calendar events for one day, served from cache when fresh
    pub async fn calendar_events(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> ApiResult<Vec<CalendarEvent>> {
        let key = Self::key(user_id, CacheResource::CalendarEvents { date });
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }
        let events = self.inner.calendar_events(user_id, date).await?;
        self.store(&key, &events);
        Ok(events)
    }

    /// Create a calendar event and invalidate that day's key
    pub async fn create_calendar_event(
        &self,
        user_id: Uuid,
        title: &str,
        event_type: &str,
        date: NaiveDate,
    ) -> ApiResult<()> {
        self.inner
            .create_calendar_event(user_id, title, event_type, date)
            .await?;
        self.cache
            .remove(&Self::key(user_id, CacheResource::CalendarEvents { date }));
        Ok(())
    }

    /// Update a calendar event and invalidate that day's key
    pub async fn update_calendar_event(
        &self,
        user_id: Uuid,
        id: &str,
        date: NaiveDate,
        completed: bool,
    ) -> ApiResult<()> {
        self.inner.update_calendar_event(id, completed).await?;
        self.cache
            .remove(&Self::key(user_id, CacheResource::CalendarEvents { date }));
        Ok(())
    }

    /// Fetch the profile, served from cache when fresh
    pub async fn profile(&self, user_id: Uuid) -> ApiResult<UserProfile> {
        let key = Self::key(user_id, CacheResource::Profile);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }
        let profile = self.inner.profile(user_id).await?;
        self.store(&key, &profile);
        Ok(profile)
    }

    /// Update the profile and invalidate its key
    pub async fn update_profile(&self, user_id: Uuid, profile: &UserProfile) -> ApiResult<()> {
        self.inner.update_profile(user_id, profile).await?;
        self.cache.remove(&Self::key(user_id, CacheResource::Profile));
        Ok(())
    }

    /// Assemble the dashboard summary, memoized in the cache.
    ///
    /// On a miss the raw collections are fetched through the read-through
    /// methods (so they get cached too), run through the statistics engine,
    /// and the result is cached under the dashboard key.
    pub async fn dashboard(&self, user_id: Uuid, today: NaiveDate) -> ApiResult<DashboardSummary> {
        let key = Self::key(user_id, CacheResource::Dashboard);
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let records = self.health_records(user_id, None).await?;
        let routines = self.routines(user_id).await?;
        let goals = self.goals(user_id).await?;

        let summary = dashboard_summary(&records, &routines, &goals, today);
        self.store(&key, &summary);
        Ok(summary)
    }
}
