// ABOUTME: Main library entry point for the FitLife client core
// ABOUTME: Obfuscated offline cache, derived health statistics, and REST client for FitLife
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

#![deny(unsafe_code)]

//! # FitLife Client Core
//!
//! Client-side core for the FitLife fitness and health tracking platform.
//! The remote FitLife REST API is the system of record; this crate provides
//! everything the presentation layer needs between the network and the
//! screen:
//!
//! - **Obfuscated local cache**: a synchronous key-value cache over a
//!   pluggable storage backend, storing values in a reversible
//!   (non-cryptographic) encoding with optional per-entry TTL.
//! - **Derived statistics engine**: pure transforms from raw records into
//!   the activity streak, the trailing 7-day histogram, BMI, and the
//!   recent-activity feed.
//! - **Typed models** with a lenient deserialization boundary that skips and
//!   logs malformed remote entries.
//! - **REST client** for the FitLife backend, plus a cached read-through
//!   decorator that honors the invalidation contract (every mutation removes
//!   the logical keys it staled).
//!
//! ## Example
//!
//! ```rust
//! use fitlife_client::cache::{memory::MemoryStore, CacheKey, CacheResource, CacheService};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! let cache = CacheService::new(Arc::new(MemoryStore::new()));
//! let key = CacheKey::new(Uuid::new_v4(), CacheResource::Routines);
//!
//! cache.set(&key, &vec!["push day", "pull day"]);
//! let cached: Option<Vec<String>> = cache.get(&key);
//! assert!(cached.is_some());
//! ```

/// Remote API boundary: seam trait, HTTP client, cached decorator
pub mod api;

/// Obfuscated local cache over pluggable storage backends
pub mod cache;

/// Environment-based configuration
pub mod config;

/// Centralized constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Derived statistics engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Typed data model and deserialization boundary
pub mod models;
