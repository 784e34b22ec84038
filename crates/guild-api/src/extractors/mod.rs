//! Axum extractors for request handling
//!
//! Custom extractors for session authentication, the submitter IP, and
//! validated JSON bodies.

mod auth;
mod client_ip;
mod validated;

pub use auth::{CurrentUser, OptionalCurrentUser, SessionToken};
pub use client_ip::ClientIp;
pub use validated::ValidatedJson;
