//! Document types persisted in MongoDB and returned verbatim in responses.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod service;
pub mod site_settings;
pub mod skill;
pub mod user;

pub use about::About;
pub use contact::{ContactMessage, ContactStatus};
pub use education::Education;
pub use experience::Experience;
pub use profile::Profile;
pub use project::{Project, ProjectStatus};
pub use service::Service;
pub use site_settings::{AnalyticsSettings, SeoSettings, SiteSettings, ThemeSettings};
pub use skill::{Skill, SkillCategory};
pub use user::User;

/// Fresh identifier for a new document.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Serde default for `is_visible`: documents written before the field existed
/// count as visible.
pub(crate) fn visible_default() -> bool {
    true
}
