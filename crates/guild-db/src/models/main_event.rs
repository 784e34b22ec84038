//! Main event database model

use sqlx::FromRow;

use guild_core::MainEvent;

/// Database model for the mains table
#[derive(Debug, Clone, FromRow)]
pub struct MainModel {
    pub main_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<MainModel> for MainEvent {
    fn from(model: MainModel) -> Self {
        Self {
            main_id: model.main_id,
            name: model.name,
            description: model.description,
        }
    }
}
