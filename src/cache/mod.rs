// ABOUTME: Obfuscated key-value cache over pluggable synchronous storage backends
// ABOUTME: Typed cache keys, optional per-entry TTL, all failures degrade to cache misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Obfuscated local cache.
//!
//! Persists JSON-serializable values under namespaced keys in a
//! [`StorageBackend`], encoded by the [`codec`] transform so stored data is
//! not casually readable. The cache is an optimization, never a correctness
//! dependency: every failure mode (storage unavailable, corrupted entry,
//! expired TTL) degrades to a miss and the caller falls back to the
//! authoritative remote fetch.
//!
//! All operations are synchronous and complete without blocking; racing
//! writers get last-write-wins semantics.

mod codec;
/// File-backed storage backend
pub mod file;
/// Cache construction from configuration
pub mod factory;
/// In-memory storage backend
pub mod memory;

use crate::constants::cache::{
    CACHE_KEY_PREFIX, TTL_CALENDAR_SECS, TTL_DASHBOARD_SECS, TTL_GOALS_SECS, TTL_PROFILE_SECS,
    TTL_RECORDS_SECS, TTL_ROUTINES_SECS,
};
use crate::errors::AppResult;
use crate::models::MetricType;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Synchronous key-value storage backend the cache persists into.
///
/// Implementations store opaque strings under full storage keys (prefix
/// included) and must tolerate concurrent use from multiple handles. Every
/// operation is fallible; [`CacheService`] converts failures into misses.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value under `key`; absent keys are a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be modified
    fn delete(&self, key: &str) -> AppResult<()>;

    /// List every storage key currently present
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be enumerated
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Structured cache key scoped to a user and a logical resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Owning user
    pub user_id: Uuid,
    /// Logical resource being cached
    pub resource: CacheResource,
}

impl CacheKey {
    /// Create a new cache key
    #[must_use]
    pub const fn new(user_id: Uuid, resource: CacheResource) -> Self {
        Self { user_id, resource }
    }

    /// Full storage key including the fixed namespace prefix
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{CACHE_KEY_PREFIX}{self}")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}:{}", self.user_id, self.resource)
    }
}

/// Logical resources the client caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheResource {
    /// Health record list, optionally filtered to one metric
    HealthRecords {
        /// Metric filter; `None` caches the unfiltered list
        metric: Option<MetricType>,
    },
    /// Fitness routine list
    Routines,
    /// Goal list
    Goals,
    /// Calendar events for one day
    CalendarEvents {
        /// Day the events belong to
        date: NaiveDate,
    },
    /// User profile
    Profile,
    /// Assembled dashboard summary
    Dashboard,
}

impl fmt::Display for CacheResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HealthRecords { metric: None } => write!(f, "health_records"),
            Self::HealthRecords {
                metric: Some(metric),
            } => write!(f, "health_records:{metric}"),
            Self::Routines => write!(f, "routines"),
            Self::Goals => write!(f, "goals"),
            Self::CalendarEvents { date } => write!(f, "calendar:{date}"),
            Self::Profile => write!(f, "profile"),
            Self::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Per-resource TTL configuration
#[derive(Debug, Clone)]
pub struct CacheTtlConfig {
    /// Health record list TTL in seconds
    pub records_secs: u64,
    /// Routine list TTL in seconds
    pub routines_secs: u64,
    /// Goal list TTL in seconds
    pub goals_secs: u64,
    /// Calendar events TTL in seconds
    pub calendar_secs: u64,
    /// Profile TTL in seconds
    pub profile_secs: u64,
    /// Dashboard summary TTL in seconds
    pub dashboard_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            records_secs: TTL_RECORDS_SECS,
            routines_secs: TTL_ROUTINES_SECS,
            goals_secs: TTL_GOALS_SECS,
            calendar_secs: TTL_CALENDAR_SECS,
            profile_secs: TTL_PROFILE_SECS,
            dashboard_secs: TTL_DASHBOARD_SECS,
        }
    }
}

impl CacheTtlConfig {
    /// TTL for a specific cache resource
    #[must_use]
    pub const fn ttl_for_resource(&self, resource: &CacheResource) -> Duration {
        match resource {
            CacheResource::HealthRecords { .. } => Duration::from_secs(self.records_secs),
            CacheResource::Routines => Duration::from_secs(self.routines_secs),
            CacheResource::Goals => Duration::from_secs(self.goals_secs),
            CacheResource::CalendarEvents { .. } => Duration::from_secs(self.calendar_secs),
            CacheResource::Profile => Duration::from_secs(self.profile_secs),
            CacheResource::Dashboard => Duration::from_secs(self.dashboard_secs),
        }
    }
}

/// Stored envelope wrapping the payload with its optional expiry
#[derive(Serialize, Deserialize)]
struct Envelope {
    payload: serde_json::Value,
    /// Absolute expiry in unix milliseconds; absent means no expiry
    #[serde(skip_serializing_if = "Option::is_none", default)]
    expires_at: Option<i64>,
}

/// Obfuscated cache over an injected storage backend
#[derive(Clone)]
pub struct CacheService {
    store: Arc<dyn StorageBackend>,
}

impl CacheService {
    /// Create a cache over the given storage backend
    #[must_use]
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self { store }
    }

    /// Store a value with no expiry (stale until explicit invalidation)
    pub fn set<T: Serialize>(&self, key: &CacheKey, value: &T) {
        self.write_envelope(key, value, None);
    }

    /// Store a value that expires `ttl` from now
    pub fn set_with_ttl<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: Duration) {
        let expires_at = Utc::now().timestamp_millis() + ttl.as_millis() as i64;
        self.write_envelope(key, value, Some(expires_at));
    }

    fn write_envelope<T: Serialize>(&self, key: &CacheKey, value: &T, expires_at: Option<i64>) {
        let payload = match serde_json::to_value(value) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%key, %error, "cache serialization failed, skipping write");
                return;
            }
        };
        let envelope = Envelope {
            payload,
            expires_at,
        };
        let plaintext = match serde_json::to_string(&envelope) {
            Ok(plaintext) => plaintext,
            Err(error) => {
                warn!(%key, %error, "cache envelope serialization failed, skipping write");
                return;
            }
        };
        let encoded = codec::obfuscate(&plaintext);
        if let Err(error) = self.store.write(&key.storage_key(), &encoded) {
            warn!(%key, %error, "cache write failed");
        }
    }

    /// Retrieve a previously stored value.
    ///
    /// Returns `None` when the key is absent, the entry has expired, the
    /// stored bytes fail to decode (tampered or foreign data), or the
    /// payload no longer deserializes into `T`. Never errors; callers fall
    /// back to the authoritative source on `None`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let raw = match self.store.read(&key.storage_key()) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%key, %error, "cache read failed, treating as miss");
                return None;
            }
        };
        let plaintext = codec::deobfuscate(&raw)?;
        let envelope: Envelope = match serde_json::from_str(&plaintext) {
            Ok(envelope) => envelope,
            Err(error) => {
                debug!(%key, %error, "corrupted cache envelope, treating as miss");
                return None;
            }
        };
        if let Some(expires_at) = envelope.expires_at {
            // Expired entries are ignored, not deleted; the next set overwrites
            if Utc::now().timestamp_millis() > expires_at {
                debug!(%key, "cache entry expired");
                return None;
            }
        }
        match serde_json::from_value(envelope.payload) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(%key, %error, "cached payload no longer deserializes, treating as miss");
                None
            }
        }
    }

    /// Delete the entry for `key`; absent entries are a no-op
    pub fn remove(&self, key: &CacheKey) {
        if let Err(error) = self.store.delete(&key.storage_key()) {
            warn!(%key, %error, "cache remove failed");
        }
    }

    /// Delete every entry carrying the cache prefix, leaving unrelated
    /// data in the same backend untouched
    pub fn clear(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(error) => {
                warn!(%error, "cache clear failed to enumerate keys");
                return;
            }
        };
        for key in keys {
            if key.starts_with(CACHE_KEY_PREFIX) {
                if let Err(error) = self.store.delete(&key) {
                    warn!(key, %error, "cache clear failed to delete entry");
                }
            }
        }
    }
}
