use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::{CacheConfig, RedisConfig};

/// Redis-backed response cache. Reads degrade to a miss on any failure;
/// writes are fire-and-forget.
#[derive(Clone)]
pub struct Cache {
    conn: ConnectionManager,
    config: CacheConfig,
}

impl Cache {
    pub async fn connect(redis: &RedisConfig, config: CacheConfig) -> Result<Self, ::redis::RedisError> {
        let client = ::redis::Client::open(redis.url.clone())?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn, config })
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Stable cache key: `{prefix}:{sha256(payload)}`.
    pub fn key(prefix: &str, payload: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        format!("{}:{:x}", prefix, hasher.finalize())
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.config.enabled {
            return None;
        }
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(json)) => serde_json::from_str(&json).ok(),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("cache read failed: {}", err);
                None
            }
        }
    }

    pub async fn put<T: Serialize>(&self, key: &str, value: &T) {
        if !self.config.enabled {
            return;
        }
        let Ok(json) = serde_json::to_string(value) else {
            return;
        };
        let mut conn = self.conn.clone();
        if let Err(err) = conn
            .set_ex::<_, _, ()>(key, json, self.config.ttl_seconds)
            .await
        {
            tracing::warn!("cache write failed: {}", err);
        }
    }

    pub async fn health_check(&self) -> Result<(), ::redis::RedisError> {
        let mut conn = self.conn.clone();
        let _: String = ::redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_stable_for_equal_payloads() {
        let a = Cache::key("data", r#"{"metric":"gdp_growth","page":1}"#);
        let b = Cache::key("data", r#"{"metric":"gdp_growth","page":1}"#);
        assert_eq!(a, b);
        assert!(a.starts_with("data:"));
    }

    #[test]
    fn key_differs_by_prefix_and_payload() {
        let a = Cache::key("data", "x");
        let b = Cache::key("report", "x");
        let c = Cache::key("data", "y");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
