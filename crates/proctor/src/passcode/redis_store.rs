//! Counter kept under a single Redis key, shared by every instance.

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::{CounterStore, parse_counter};
use proctor_common::constants::passcode::MAX_COUNTER;

/// Runs atomically on the Redis server. Parsing follows `parse_counter`:
/// non-digit values restart at 0, values past the limit (ARGV[1]) fail.
const INCREMENT_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
local limit = ARGV[1]
local current = 0
if raw then
    local digits = string.match(raw, '^[ \t\n\r\v\f]*(%d+)[ \t\n\r\v\f]*$')
    if digits then
        digits = string.gsub(digits, '^0+', '')
        if digits == '' then
            digits = '0'
        end
        if #digits > #limit or (#digits == #limit and digits > limit) then
            return redis.error_reply('passcode counter exhausted: stored value ' .. digits)
        end
        current = tonumber(digits)
    end
end
if current >= tonumber(limit) then
    return redis.error_reply('passcode counter exhausted at ' .. limit)
end
current = current + 1
redis.call('SET', KEYS[1], string.format('%d', current))
return current
"#;

/// Redis-backed passcode counter
pub struct RedisCounterStore {
    /// Connection manager (auto-reconnecting)
    redis: ConnectionManager,
    /// Key holding the decimal counter value
    key: String,
    script: redis::Script,
}

impl RedisCounterStore {
    /// Connect to Redis
    pub async fn connect(redis_url: &str, key: impl Into<String>) -> Result<Self> {
        let client =
            redis::Client::open(redis_url).context("Failed to create Redis client")?;

        let redis = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        Ok(Self::new(redis, key))
    }

    pub fn new(redis: ConnectionManager, key: impl Into<String>) -> Self {
        Self {
            redis,
            key: key.into(),
            script: redis::Script::new(INCREMENT_SCRIPT),
        }
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn read(&self) -> Result<u64> {
        let mut conn = self.redis.clone();
        let raw: Option<String> = conn
            .get(&self.key)
            .await
            .context("Failed to read passcode counter from Redis")?;

        let Some(raw) = raw else {
            return Ok(0);
        };

        let parsed = parse_counter(&raw)
            .with_context(|| format!("Refusing to use Redis key {}", self.key))?;

        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!(key = %self.key, contents = %raw, "Passcode counter is corrupt, treating as 0");
            0
        }))
    }

    async fn increment_and_get(&self) -> Result<u64> {
        let mut conn = self.redis.clone();
        let next: u64 = self
            .script
            .key(&self.key)
            .arg(MAX_COUNTER)
            .invoke_async(&mut conn)
            .await
            .context("Failed to increment passcode counter in Redis")?;

        tracing::debug!(key = %self.key, value = next, "Passcode counter incremented");
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.redis.clone();
        let result: Result<String, _> = redis::cmd("PING").query_async(&mut conn).await;
        result.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    // Needs a live server: REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored
    async fn store(key: &str) -> RedisCounterStore {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| proctor_common::constants::DEFAULT_REDIS_URL.to_string());
        let store = RedisCounterStore::connect(&url, key).await.unwrap();

        let mut conn = store.redis.clone();
        let _: () = conn.del(key).await.unwrap();
        store
    }

    #[tokio::test]
    #[ignore]
    async fn test_redis_counter_starts_at_zero() {
        let store = store("proctor:test:fresh").await;
        assert_eq!(store.read().await.unwrap(), 0);
        assert_eq!(store.increment_and_get().await.unwrap(), 1);
        assert_eq!(store.read().await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore]
    async fn test_redis_counter_recovers_from_corrupt_value() {
        let store = store("proctor:test:corrupt").await;
        let mut conn = store.redis.clone();
        let _: () = conn.set("proctor:test:corrupt", "garbage").await.unwrap();

        assert_eq!(store.read().await.unwrap(), 0);
        assert_eq!(store.increment_and_get().await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore]
    async fn test_redis_counter_matches_file_parsing_rules() {
        let key = "proctor:test:rules";
        let store = store(key).await;
        let mut conn = store.redis.clone();

        let _: () = conn.set(key, "+5").await.unwrap();
        assert_eq!(store.increment_and_get().await.unwrap(), 1);

        let _: () = conn.set(key, " 0041\n").await.unwrap();
        assert_eq!(store.increment_and_get().await.unwrap(), 42);

        let _: () = conn.set(key, u64::MAX.to_string()).await.unwrap();
        assert!(store.read().await.is_err());
        assert!(store.increment_and_get().await.is_err());
        let raw: String = conn.get(key).await.unwrap();
        assert_eq!(raw, u64::MAX.to_string());

        let _: () = conn.set(key, MAX_COUNTER.to_string()).await.unwrap();
        assert!(store.increment_and_get().await.is_err());
        assert_eq!(store.read().await.unwrap(), MAX_COUNTER);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    #[ignore]
    async fn test_redis_concurrent_increments_lose_nothing() {
        let store = Arc::new(store("proctor:test:concurrent").await);

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment_and_get().await.unwrap() })
            })
            .collect();

        let values: HashSet<u64> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(values, (1..=50).collect::<HashSet<u64>>());
    }
}
