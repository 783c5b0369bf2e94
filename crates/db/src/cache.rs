//! External cache service access.
//!
//! The catalog cache is a plain key/value pass-through: reads may be stale
//! because no write path invalidates entries; they age out by TTL only.
//! [`CacheStore`] is the seam -- [`RedisCache`] talks to the external
//! service, [`MemoryCache`] backs tests and single-process deployments.
//! Store errors degrade to a miss; the relational store stays the source
//! of truth.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use scherzo_core::cache::CacheKey;

/// Raw string-valued cache backend.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a raw value. Backend failures surface as `None`.
    async fn get_raw(&self, key: &str) -> Option<String>;

    /// Store a raw value with a TTL. Backend failures are swallowed.
    async fn set_raw(&self, key: &str, value: String, ttl: Duration);
}

/// Cache backend over a Redis-compatible service.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connect to the cache service at `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get_raw(&self, key: &str) -> Option<String> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Cache GET failed, treating as miss");
                None
            }
        }
    }

    async fn set_raw(&self, key: &str, value: String, ttl: Duration) {
        let mut conn = self.conn.clone();
        if let Err(e) = conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()).await {
            warn!(key, error = %e, "Cache SET failed");
        }
    }
}

/// In-process cache backend. TTLs are honored lazily on read.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get_raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Some(value.clone()),
            _ => None,
        }
    }

    async fn set_raw(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value, Instant::now() + ttl));
    }
}

/// Typed-key, JSON-valued front over a [`CacheStore`].
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl Cache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Fetch and deserialize a cached value. Any failure is a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: CacheKey) -> Option<T> {
        let raw = self.store.get_raw(&key.to_string()).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(%key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(%key, error = %e, "Cached value failed to deserialize, treating as miss");
                None
            }
        }
    }

    /// Serialize and store a value under `key` with the configured TTL.
    pub async fn put<T: Serialize>(&self, key: CacheKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set_raw(&key.to_string(), raw, self.ttl).await,
            Err(e) => warn!(%key, error = %e, "Value failed to serialize, not cached"),
        }
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").field("ttl", &self.ttl).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cache() -> Cache {
        Cache::new(Arc::new(MemoryCache::default()), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = test_cache();
        assert_eq!(cache.get::<Vec<i64>>(CacheKey::AllTracks).await, None);

        cache.put(CacheKey::AllTracks, &vec![1i64, 2, 3]).await;
        assert_eq!(
            cache.get::<Vec<i64>>(CacheKey::AllTracks).await,
            Some(vec![1, 2, 3])
        );
    }

    #[tokio::test]
    async fn keys_do_not_collide() {
        let cache = test_cache();
        cache.put(CacheKey::TrackCourses(1), &vec![10i64]).await;
        assert_eq!(cache.get::<Vec<i64>>(CacheKey::TrackCourses(2)).await, None);
    }

    #[tokio::test]
    async fn expired_entry_is_a_miss() {
        let cache = Cache::new(Arc::new(MemoryCache::default()), Duration::from_secs(0));
        cache.put(CacheKey::AllCourses, &vec![1i64]).await;
        assert_eq!(cache.get::<Vec<i64>>(CacheKey::AllCourses).await, None);
    }

    #[tokio::test]
    async fn type_mismatch_is_a_miss() {
        let cache = test_cache();
        cache.put(CacheKey::AllTracks, &"not a list").await;
        assert_eq!(cache.get::<Vec<i64>>(CacheKey::AllTracks).await, None);
    }
}
