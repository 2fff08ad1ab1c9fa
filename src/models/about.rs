use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// "About me" section — at most one per owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub heading: String,
    pub subheading: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
