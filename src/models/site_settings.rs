use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Theme configuration. Known keys are typed; anything else the frontend
/// invents later lands in `extra` and survives round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_primary_color() -> String {
    "#3B82F6".to_string()
}

fn default_secondary_color() -> String {
    "#10B981".to_string()
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            dark_mode: false,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default)]
    pub meta_keywords: Vec<String>,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    #[serde(default)]
    pub google_analytics_id: Option<String>,
    #[serde(default)]
    pub facebook_pixel_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Site-wide settings — at most one document per owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub site_logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub theme_settings: ThemeSettings,
    #[serde(default)]
    pub seo_settings: SeoSettings,
    #[serde(default)]
    pub analytics_settings: AnalyticsSettings,
    #[serde(default)]
    pub maintenance_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_site_title() -> String {
    "My Portfolio".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults() {
        let theme = ThemeSettings::default();
        assert_eq!(theme.primary_color, "#3B82F6");
        assert_eq!(theme.secondary_color, "#10B981");
        assert!(!theme.dark_mode);
    }

    #[test]
    fn unknown_theme_keys_preserved() {
        let json = r#"{
            "primary_color": "#000000",
            "secondary_color": "#FFFFFF",
            "dark_mode": true,
            "accent_color": "#FF00FF",
            "font_scale": 1.25
        }"#;
        let theme: ThemeSettings = serde_json::from_str(json).unwrap();
        assert!(theme.dark_mode);
        assert_eq!(theme.extra["accent_color"], "#FF00FF");

        let back = serde_json::to_value(&theme).unwrap();
        assert_eq!(back["accent_color"], "#FF00FF");
        assert_eq!(back["font_scale"], 1.25);
    }

    #[test]
    fn sparse_settings_document_gets_defaults() {
        let json = r#"{
            "_id": "s1",
            "owner_id": "o1",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let settings: SiteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.site_title, "My Portfolio");
        assert!(!settings.maintenance_mode);
        assert!(settings.seo_settings.meta_keywords.is_empty());
    }
}
