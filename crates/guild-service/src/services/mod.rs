//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod attendance;
pub mod auth;
pub mod context;
pub mod error;
pub mod report;
pub mod user;

// Re-export all services for convenience
pub use access::{AccessPolicy, AuthenticatedUser};
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use report::ReportService;
pub use user::UserService;
