// ABOUTME: Environment variable based configuration with sensible defaults
// ABOUTME: Covers API base URL and timeouts, cache backend selection, and TTL overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Environment-based configuration.
//!
//! Every setting has a default so `ClientConfig::from_env()` never fails;
//! unparsable values fall back to the default. Validation that can actually
//! reject (the base URL) lives in [`ApiSettings::validate`].

use crate::cache::CacheTtlConfig;
use crate::constants::api::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Remote API settings
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base URL of the FitLife backend, without a trailing slash
    pub base_url: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ApiSettings {
    /// Verify the base URL parses as an absolute http(s) URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a malformed or non-http base URL
    pub fn validate(&self) -> AppResult<()> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|error| AppError::config(format!("invalid API base URL: {error}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::config(format!(
                "API base URL must be http(s), got {}",
                parsed.scheme()
            )));
        }
        Ok(())
    }
}

/// Which storage backend the cache persists into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackendKind {
    /// Process-local memory, no persistence
    Memory,
    /// One file per entry under the cache directory
    File,
}

/// Local cache settings
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Selected storage backend
    pub backend: CacheBackendKind,
    /// Cache directory for the file backend; `None` uses the platform default
    pub directory_override: Option<PathBuf>,
    /// Per-resource TTLs
    pub ttl: CacheTtlConfig,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::File,
            directory_override: None,
            ttl: CacheTtlConfig::default(),
        }
    }
}

impl CacheSettings {
    /// Effective cache directory: the override, or the platform-local data
    /// directory, or a relative fallback when neither resolves
    #[must_use]
    pub fn directory(&self) -> PathBuf {
        self.directory_override.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fitlife")
                .join("cache")
        })
    }
}

/// Full client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Remote API settings
    pub api: ApiSettings,
    /// Local cache settings
    pub cache: CacheSettings,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `FITLIFE_API_BASE_URL`
    /// - `FITLIFE_API_TIMEOUT_SECS`, `FITLIFE_API_CONNECT_TIMEOUT_SECS`
    /// - `FITLIFE_CACHE_BACKEND` (`file` or `memory`)
    /// - `FITLIFE_CACHE_DIR`
    /// - `FITLIFE_CACHE_TTL_RECORDS_SECS`, `FITLIFE_CACHE_TTL_DASHBOARD_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        let api = ApiSettings {
            base_url: env::var("FITLIFE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout: env_duration_secs("FITLIFE_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout: env_duration_secs(
                "FITLIFE_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        let backend = match env::var("FITLIFE_CACHE_BACKEND").as_deref() {
            Ok("memory") => CacheBackendKind::Memory,
            _ => CacheBackendKind::File,
        };

        let mut ttl = CacheTtlConfig::default();
        if let Some(secs) = env_u64("FITLIFE_CACHE_TTL_RECORDS_SECS") {
            ttl.records_secs = secs;
        }
        if let Some(secs) = env_u64("FITLIFE_CACHE_TTL_DASHBOARD_SECS") {
            ttl.dashboard_secs = secs;
        }

        let cache = CacheSettings {
            backend,
            directory_override: env::var("FITLIFE_CACHE_DIR").ok().map(PathBuf::from),
            ttl,
        };

        Self { api, cache }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}

fn env_duration_secs(name: &str, default_secs: u64) -> Duration {
    Duration::from_secs(env_u64(name).unwrap_or(default_secs))
}
