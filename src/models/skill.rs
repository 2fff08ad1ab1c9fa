use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub category: SkillCategory,
    /// 0–100, validated at the API boundary.
    pub proficiency: i32,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "super::visible_default")]
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
