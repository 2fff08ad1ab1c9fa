use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project lifecycle state. Serialized with the human-readable labels the
/// public site displays, so they round-trip through both Mongo and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "super::visible_default")]
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for (status, label) in [
            (ProjectStatus::InProgress, "\"In Progress\""),
            (ProjectStatus::Completed, "\"Completed\""),
            (ProjectStatus::Archived, "\"Archived\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), label);
            let back: ProjectStatus = serde_json::from_str(label).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn defaults_applied_to_sparse_documents() {
        let json = r#"{
            "_id": "p1",
            "owner_id": "o1",
            "title": "Side project",
            "description": "A small experiment in generative art",
            "category": "art",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.display_order, 0);
        assert!(!project.is_featured);
        assert!(project.is_visible);
        assert!(project.tags.is_empty());
        assert!(project.image_url.is_none());
    }
}
