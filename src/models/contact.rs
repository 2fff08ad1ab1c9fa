use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbox state machine for contact messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Unread,
    Read,
    Replied,
    Archived,
}

/// A message from the public contact form. Global — not owner-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Stamped once, on the first transition into `read`.
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContactStatus::Unread).unwrap(),
            "\"unread\""
        );
        assert_eq!(
            serde_json::to_string(&ContactStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn invalid_status_rejected() {
        assert!(serde_json::from_str::<ContactStatus>("\"deleted\"").is_err());
    }
}
