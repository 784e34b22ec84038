//! Login session storage in Redis.
//!
//! Sessions are opaque random tokens mapped to the authenticated identity.
//! The token carries no claims itself; everything about the caller is
//! resolved from this store on each request, and handler assignments are
//! re-read from the database rather than cached here.

use crate::pool::{RedisPool, RedisResult};
use guild_core::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key prefix for session tokens
const SESSION_PREFIX: &str = "session:";

/// Default session TTL (24 hours)
const DEFAULT_SESSION_TTL: u64 = 24 * 60 * 60;

/// Identity stored against a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Username at login time
    pub username: String,
    /// Role at login time
    pub role: Role,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionIdentity {
    /// Create a new session identity
    #[must_use]
    pub fn new(user_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store mapping opaque tokens to identities
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session token
    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    /// Create a session, returning the newly issued token
    pub async fn create(&self, identity: &SessionIdentity) -> RedisResult<String> {
        let token = Uuid::new_v4().to_string();
        let key = Self::key(&token);
        self.pool.set(&key, identity, Some(self.ttl_seconds)).await?;

        tracing::debug!(
            user_id = identity.user_id,
            username = %identity.username,
            role = %identity.role,
            "Created session"
        );

        Ok(token)
    }

    /// Resolve a token to its identity (None if expired or unknown)
    pub async fn get(&self, token: &str) -> RedisResult<Option<SessionIdentity>> {
        let key = Self::key(token);
        self.pool.get_value(&key).await
    }

    /// Destroy a session, returning whether it existed
    pub async fn destroy(&self, token: &str) -> RedisResult<bool> {
        let key = Self::key(token);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!("Destroyed session");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_identity_creation() {
        let identity = SessionIdentity::new(42, "alice".to_string(), Role::Moderator);

        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.role, Role::Moderator);
        assert!(identity.created_at > 0);
    }

    #[test]
    fn test_key_generation() {
        let key = SessionStore::key("abc123");
        assert_eq!(key, "session:abc123");
    }

    #[test]
    fn test_identity_serialization_round_trip() {
        let identity = SessionIdentity::new(7, "bob".to_string(), Role::Handler);
        let json = serde_json::to_string(&identity).unwrap();
        let restored: SessionIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, identity);
    }
}
