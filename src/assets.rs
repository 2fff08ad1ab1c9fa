//! Uploaded-asset lifecycle: validation rules, key derivation and the
//! upload-then-retire swap shared by every controller that owns an asset
//! field.

use rand::Rng;

use crate::error::AppError;
use crate::storage::{discard, BlobStore};

/// One file part read out of a multipart request.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Acceptance rules for one class of upload. Extension AND declared content
/// type must both pass.
pub struct UploadRules {
    pub label: &'static str,
    pub max_bytes: usize,
    pub extensions: &'static [&'static str],
    pub content_types: &'static [&'static str],
}

pub const IMAGE_RULES: UploadRules = UploadRules {
    label: "image",
    max_bytes: 2 * 1024 * 1024,
    extensions: &["jpeg", "jpg", "png", "gif", "webp"],
    content_types: &[
        "image/jpeg",
        "image/jpg",
        "image/png",
        "image/gif",
        "image/webp",
    ],
};

pub const PDF_RULES: UploadRules = UploadRules {
    label: "PDF",
    max_bytes: 3 * 1024 * 1024,
    extensions: &["pdf"],
    content_types: &["application/pdf"],
};

impl UploadRules {
    pub fn check(&self, file: &FilePart) -> Result<(), AppError> {
        let ext = extension(&file.filename)
            .ok_or_else(|| AppError::Validation(format!("Only {} files are allowed", self.label)))?;
        if !self.extensions.contains(&ext.as_str())
            || !self.content_types.contains(&file.content_type.as_str())
        {
            return Err(AppError::Validation(format!(
                "Only {} files are allowed ({})",
                self.label,
                self.extensions.join(", ")
            )));
        }
        if file.bytes.len() > self.max_bytes {
            return Err(AppError::Validation(format!(
                "File too large: {} uploads are limited to {} bytes",
                self.label, self.max_bytes
            )));
        }
        Ok(())
    }
}

/// A concrete asset slot: where its blobs live and how they are named.
pub struct AssetClass {
    pub tag: &'static str,
    pub folder: &'static str,
    pub rules: &'static UploadRules,
}

pub const PROFILE_IMAGE: AssetClass = AssetClass {
    tag: "profile",
    folder: "profiles",
    rules: &IMAGE_RULES,
};

pub const CV: AssetClass = AssetClass {
    tag: "cv",
    folder: "cvs",
    rules: &PDF_RULES,
};

pub const PROJECT_IMAGE: AssetClass = AssetClass {
    tag: "project",
    folder: "projects",
    rules: &IMAGE_RULES,
};

pub const SKILL_ICON: AssetClass = AssetClass {
    tag: "skill",
    folder: "skills",
    rules: &IMAGE_RULES,
};

pub const SITE_LOGO: AssetClass = AssetClass {
    tag: "logo",
    folder: "site-assets",
    rules: &IMAGE_RULES,
};

pub const FAVICON: AssetClass = AssetClass {
    tag: "favicon",
    folder: "site-assets",
    rules: &IMAGE_RULES,
};

fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Derive a collision-resistant key: tag, owner, current millis, a random
/// integer and the original extension. Uniqueness is probabilistic; a
/// collision is treated as negligible, not impossible.
fn blob_key(class: &AssetClass, owner_id: &str, filename: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::rng().random_range(100_000_000..1_000_000_000);
    let ext = extension(filename).unwrap_or_else(|| "bin".to_string());
    format!(
        "{}/{}_{}_{}_{}.{}",
        class.folder, class.tag, owner_id, millis, random, ext
    )
}

/// Validate and upload a new asset; returns its public URL.
pub async fn push(
    store: &dyn BlobStore,
    class: &AssetClass,
    owner_id: &str,
    file: &FilePart,
) -> Result<String, AppError> {
    class.rules.check(file)?;
    let key = blob_key(class, owner_id, &file.filename);
    store
        .upload(&key, file.bytes.clone(), &file.content_type)
        .await
}

/// Replace the asset in a slot: upload the new blob first, and only once
/// that succeeded, best-effort-delete the old one. A failed upload therefore
/// never destroys the previous asset, and the caller's document is only
/// touched after this returns `Ok`.
pub async fn swap(
    store: &dyn BlobStore,
    class: &AssetClass,
    owner_id: &str,
    file: &FilePart,
    old_url: Option<&str>,
) -> Result<String, AppError> {
    let url = push(store, class, owner_id, file).await?;
    discard(store, old_url).await;
    Ok(url)
}
