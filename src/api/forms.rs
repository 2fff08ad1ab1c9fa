//! Multipart form decoding: text fields into a map, at most one file part
//! under the resource's fixed field name.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::assets::FilePart;
use crate::error::AppError;

/// Text fields of a multipart form.
#[derive(Debug, Default)]
pub struct FormMap(HashMap<String, String>);

impl FormMap {
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key).filter(|value| !value.is_empty())
    }

    pub fn require(&mut self, key: &str) -> Result<String, AppError> {
        self.take(key)
            .ok_or_else(|| AppError::Validation(format!("{key} is required")))
    }

    /// Parse a scalar (number, boolean) supplied as form text.
    pub fn take_parsed<T: FromStr>(&mut self, key: &str) -> Result<Option<T>, AppError> {
        match self.take(key) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::Validation(format!("Invalid value for field '{key}'"))),
            None => Ok(None),
        }
    }

    /// Decode a JSON-encoded field (array fields travel as serialized text
    /// alongside binary parts). Malformed JSON is a validation error, never
    /// a crash.
    pub fn take_json<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, AppError> {
        match self.take(key) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|_| AppError::Validation(format!("Invalid JSON in field '{key}'"))),
            None => Ok(None),
        }
    }

    #[cfg(test)]
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Drain a multipart request into `(text fields, optional file)`.
///
/// Only `file_field` may carry a file; a file under any other name is
/// rejected rather than silently dropped.
pub async fn read_form(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<(FormMap, Option<FilePart>), AppError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if let Some(filename) = field.file_name() {
            if name != file_field {
                return Err(AppError::Validation(format!(
                    "Unexpected file field '{name}', expected '{file_field}'"
                )));
            }
            let filename = filename.to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
            file = Some(FilePart {
                filename,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
            fields.insert(name, value);
        }
    }

    Ok((FormMap(fields), file))
}
