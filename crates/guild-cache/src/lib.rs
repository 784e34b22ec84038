//! # guild-cache
//!
//! Redis caching layer for login sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Opaque session tokens mapped to the caller's
//!   identity, with automatic expiration
//!
//! ## Example
//!
//! ```ignore
//! use guild_cache::{RedisPool, RedisPoolConfig, SessionIdentity, SessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = SessionStore::new(pool);
//!
//! let identity = SessionIdentity::new(user_id, "alice".to_string(), Role::Moderator);
//! let token = sessions.create(&identity).await?;
//! let restored = sessions.get(&token).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{SessionIdentity, SessionStore};
