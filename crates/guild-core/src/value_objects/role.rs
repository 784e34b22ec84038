//! Staff roles and their capability table
//!
//! Roles are a closed set. Permission decisions go through [`Capabilities`]
//! rather than string comparison, so a new call site cannot drift from the
//! role table by misspelling a role name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// What a role is allowed to do.
    ///
    /// `SCOPED_TO_ASSIGNMENTS` narrows the attendance capabilities to the
    /// caller's assigned main events instead of granting them globally.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u32 {
        /// Read attendance data for every main event
        const VIEW_ALL_ATTENDANCE = 1 << 0;
        /// Create staff attendance records
        const CREATE_ATTENDANCE = 1 << 1;
        /// Delete staff attendance records
        const DELETE_ATTENDANCE = 1 << 2;
        /// Read every user's shift reports
        const VIEW_ALL_REPORTS = 1 << 3;
        /// Create accounts, promote users, assign handlers to mains
        const MANAGE_USERS = 1 << 4;
        /// Attendance capabilities apply only to assigned mains
        const SCOPED_TO_ASSIGNMENTS = 1 << 5;
    }
}

/// Staff role. The set is fixed; the database `roles` table mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Elder,
    Moderator,
    Handler,
}

impl Role {
    /// All roles, in rank order.
    pub const ALL: [Role; 4] = [Role::Owner, Role::Elder, Role::Moderator, Role::Handler];

    /// Role name as stored in the database.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Elder => "elder",
            Self::Moderator => "moderator",
            Self::Handler => "handler",
        }
    }

    /// The capability table for this role.
    #[must_use]
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Owner | Self::Elder => {
                Capabilities::VIEW_ALL_ATTENDANCE
                    | Capabilities::CREATE_ATTENDANCE
                    | Capabilities::DELETE_ATTENDANCE
                    | Capabilities::VIEW_ALL_REPORTS
                    | Capabilities::MANAGE_USERS
            }
            Self::Moderator => {
                Capabilities::VIEW_ALL_ATTENDANCE
                    | Capabilities::CREATE_ATTENDANCE
                    | Capabilities::DELETE_ATTENDANCE
            }
            Self::Handler => {
                Capabilities::CREATE_ATTENDANCE
                    | Capabilities::DELETE_ATTENDANCE
                    | Capabilities::SCOPED_TO_ASSIGNMENTS
            }
        }
    }

    /// Check a single capability.
    #[must_use]
    pub fn can(self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }

    /// Whether attendance access must be checked against handler assignments.
    #[must_use]
    pub fn requires_assignment(self) -> bool {
        self.can(Capabilities::SCOPED_TO_ASSIGNMENTS)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "elder" => Ok(Self::Elder),
            "moderator" => Ok(Self::Moderator),
            "handler" => Ok(Self::Handler),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
