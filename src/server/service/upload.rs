//! Image upload storage.
//!
//! Accepted files are written to the configured upload directory under a generated name
//! and served back from `/uploads`.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::server::{error::upload::UploadError, util::multipart::UploadedFile};

/// MIME types accepted for event and profile images.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Clone, Debug)]
pub struct UploadService {
    dir: PathBuf,
    max_size: usize,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>, max_size: usize) -> Self {
        Self {
            dir: dir.into(),
            max_size,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it doesn't exist.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        Ok(())
    }

    /// Validates and stores an uploaded image.
    ///
    /// # Returns
    /// - `Ok(String)` - Public path of the stored file, e.g. `/uploads/cat-1700000000000-42.png`
    /// - `Err(UploadError::UnsupportedType)` - Not an accepted image type
    /// - `Err(UploadError::TooLarge)` - File exceeds the configured limit
    /// - `Err(UploadError::Storage)` - Write failed
    pub async fn save(&self, file: UploadedFile) -> Result<String, UploadError> {
        let content_type = file
            .content_type
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(UploadError::UnsupportedType(content_type));
        }
        if file.bytes.len() > self.max_size {
            return Err(UploadError::TooLarge {
                size: file.bytes.len(),
                max: self.max_size,
            });
        }

        let file_name = stored_file_name(
            file.file_name.as_deref(),
            &content_type,
            Utc::now().timestamp_millis(),
            rand::random::<u32>(),
        );

        tokio::fs::write(self.dir.join(&file_name), &file.bytes).await?;
        tracing::debug!("Stored upload {} ({} bytes)", file_name, file.bytes.len());

        Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
    }

    /// Deletes a stored upload by its public path.
    ///
    /// Used when the row that would reference the file couldn't be written. Failures are
    /// logged and otherwise ignored.
    pub async fn discard(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .and_then(|rest| Path::new(rest).file_name())
        else {
            tracing::warn!("Not discarding {}: outside the upload directory", public_path);
            return;
        };

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => tracing::debug!("Discarded upload {}", public_path),
            Err(e) => tracing::warn!("Failed to discard upload {}: {}", public_path, e),
        }
    }
}

/// Builds `<sanitized-stem>-<millis>-<random>.<ext>` for a stored upload.
///
/// The extension comes from the client file name when present, otherwise from the
/// MIME type.
pub fn stored_file_name(
    original: Option<&str>,
    content_type: &str,
    millis: i64,
    random: u32,
) -> String {
    let path = Path::new(original.unwrap_or_default());

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string());

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| sanitize(e).to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| extension_for(content_type).to_string());

    format!("{}-{}-{}.{}", stem, millis, random, extension)
}

/// Replaces every character that isn't ASCII alphanumeric with `_`.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "jpg",
    }
}
