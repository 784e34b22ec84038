//! Main event entity - a recurring scheduled community activity

/// A main event members attend and handlers are assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainEvent {
    pub main_id: i64,
    pub name: String,
    pub description: Option<String>,
}
