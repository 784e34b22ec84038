//! User database model

use sqlx::FromRow;

use guild_core::{DomainError, Role, User};

/// Database model for users joined with their role name
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model.role.parse()?;
        Ok(Self {
            user_id: model.user_id,
            username: model.username,
            email: model.email,
            role,
        })
    }
}
