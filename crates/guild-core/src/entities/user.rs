//! User entity - a staff account with a role

use crate::value_objects::Role;

/// Staff user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Data for creating a new staff account; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    /// Whether this user's attendance access is scoped to assigned mains.
    #[inline]
    pub fn requires_assignment(&self) -> bool {
        self.role.requires_assignment()
    }
}
