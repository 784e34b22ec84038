//! Session storage

mod session_store;

pub use session_store::{SessionIdentity, SessionStore};
