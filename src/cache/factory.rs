// ABOUTME: Cache construction from configuration with backend selection
// ABOUTME: Picks the file or in-memory storage backend and wraps it in a CacheService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

use super::{file::FileStore, memory::MemoryStore, CacheService};
use crate::config::environment::{CacheBackendKind, CacheSettings, ClientConfig};
use crate::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Build a cache service for the configured backend
///
/// # Errors
///
/// Returns an error if the file backend's directory cannot be created
pub fn build(settings: &CacheSettings) -> AppResult<CacheService> {
    match settings.backend {
        CacheBackendKind::Memory => {
            info!("Initializing in-memory cache");
            Ok(CacheService::new(Arc::new(MemoryStore::new())))
        }
        CacheBackendKind::File => {
            let dir = settings.directory();
            info!(dir = %dir.display(), "Initializing file-backed cache");
            let store = FileStore::new(dir)?;
            Ok(CacheService::new(Arc::new(store)))
        }
    }
}

/// Build a cache service from environment variables
///
/// # Errors
///
/// Returns an error if the file backend's directory cannot be created
pub fn from_env() -> AppResult<CacheService> {
    build(&ClientConfig::from_env().cache)
}
