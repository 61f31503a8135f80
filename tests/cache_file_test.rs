// ABOUTME: Tests for the file-backed cache storage: persistence, tamper tolerance, clear scoping
// ABOUTME: Uses temporary directories; every failure mode must degrade to a cache miss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

use anyhow::Result;
use fitlife_client::cache::file::FileStore;
use fitlife_client::cache::{CacheKey, CacheResource, CacheService, StorageBackend};
use std::fs;
use std::sync::Arc;
use uuid::Uuid;

fn goals_key(user_id: Uuid) -> CacheKey {
    CacheKey::new(user_id, CacheResource::Goals)
}

#[test]
fn test_file_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;
    let cache = CacheService::new(Arc::new(store));
    let key = goals_key(Uuid::new_v4());

    cache.set(&key, &vec!["10k steps".to_owned(), "75kg".to_owned()]);
    let retrieved: Option<Vec<String>> = cache.get(&key);
    assert_eq!(
        retrieved,
        Some(vec!["10k steps".to_owned(), "75kg".to_owned()])
    );
    Ok(())
}

#[test]
fn test_values_survive_reopening_the_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let key = goals_key(Uuid::new_v4());

    {
        let cache = CacheService::new(Arc::new(FileStore::new(dir.path())?));
        cache.set(&key, &7_u32);
    }

    let reopened = CacheService::new(Arc::new(FileStore::new(dir.path())?));
    assert_eq!(reopened.get::<u32>(&key), Some(7));
    Ok(())
}

#[test]
fn test_tampered_file_is_a_miss() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;
    let cache = CacheService::new(Arc::new(store.clone()));
    let key = goals_key(Uuid::new_v4());

    cache.set(&key, &"intact");
    store.write(&key.storage_key(), "scribbled over")?;

    assert_eq!(cache.get::<String>(&key), None);
    Ok(())
}

#[test]
fn test_clear_leaves_foreign_files_alone() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;
    let cache = CacheService::new(Arc::new(store));
    let key = goals_key(Uuid::new_v4());

    cache.set(&key, &"cached");
    let foreign = dir.path().join("user_notes.txt");
    fs::write(&foreign, "not cache data")?;

    cache.clear();

    assert_eq!(cache.get::<String>(&key), None);
    assert!(foreign.exists());
    Ok(())
}

#[test]
fn test_missing_directory_reads_as_empty() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;
    let cache = CacheService::new(Arc::new(store));
    let key = goals_key(Uuid::new_v4());

    // Underlying directory vanishes after construction
    dir.close()?;

    assert_eq!(cache.get::<String>(&key), None);
    Ok(())
}

#[test]
fn test_delete_missing_file_is_a_no_op() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path())?;

    store.delete("never_written")?;
    assert_eq!(store.read("never_written")?, None);
    Ok(())
}
