// ABOUTME: Configuration management for the FitLife client
// ABOUTME: Environment-based settings for the API client and the local cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! Configuration management.

/// Environment-based configuration
pub mod environment;

pub use environment::{ApiSettings, CacheBackendKind, CacheSettings, ClientConfig};
