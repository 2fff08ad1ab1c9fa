use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner profile — at most one per owner.
///
/// `profile_image_url` and `cv_url` point into the blob store; the document
/// holds the reference only, never the bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub full_name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub social_links: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
