// ABOUTME: Cache abstraction for activity-source implementations
// ABOUTME: Explicit get/put-with-ttl interface plus an in-memory reference backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rouleur

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Cache abstraction owned by activity-source implementations.
///
/// The planning core never caches. Sources that retrieve over HTTP use this
/// interface to bound provider traffic; expiry is explicit per entry rather
/// than inferred from file timestamps.
pub trait ActivityCache: Send + Sync {
    /// Look up a previously stored value, if present and not expired.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value under `key` for at most `ttl`.
    fn put(&self, key: &str, value: Value, ttl: Duration);
}

/// In-memory reference cache with per-entry expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivityCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: Value, ttl: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            let expires_at = Instant::now().checked_add(ttl).unwrap_or_else(far_future);
            entries.insert(key.to_owned(), CacheEntry { value, expires_at });
        }
    }
}

/// Effectively-unbounded expiry for saturating TTLs.
fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(60 * 60 * 24 * 365)
}
