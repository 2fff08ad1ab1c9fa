use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service offered on the portfolio (consulting, development, design, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    /// Name of a frontend icon, not a blob reference.
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "super::visible_default")]
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
