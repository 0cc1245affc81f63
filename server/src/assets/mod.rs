//! Image asset storage: validate the upload, pick a collision-free name,
//! push it to the object-storage bucket, and fall back to the local public
//! directory when the bucket is unreachable outside production.

pub mod local;
pub mod remote;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::{ImageFormat, ImageReader};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::Config;

pub use remote::RemoteBucket;

/// Maximum accepted upload size (5 MB).
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Image formats accepted for recipe photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

#[derive(Error, Debug)]
pub enum AssetError {
    /// The upload itself is unacceptable; message is user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("object storage error: {0}")]
    Remote(String),

    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
}

/// A successfully stored image.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoredAsset {
    /// Publicly resolvable URL for the stored image.
    pub url: String,
    pub filename: String,
}

/// Validate image data: detect the format from magic bytes and check it is
/// allowed. Returns the content type on success (e.g. "image/jpeg").
pub fn validate_image(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "File must be an image".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    Ok(format.to_mime_type().to_string())
}

/// Collision-free stored name: millisecond timestamp plus a random token,
/// keeping the original extension. Concurrent uploads of the same file name
/// land under different names without any locking.
pub fn unique_filename(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");

    format!("recipe-{timestamp}-{token}.{extension}")
}

pub struct AssetStore {
    remote: Option<RemoteBucket>,
    upload_dir: PathBuf,
    production: bool,
}

impl AssetStore {
    pub fn from_config(config: &Config) -> Self {
        let remote = match (&config.storage_url, &config.storage_key) {
            (Some(url), Some(key)) => Some(RemoteBucket::new(url, key, &config.storage_bucket)),
            _ => None,
        };

        Self {
            remote,
            upload_dir: config.upload_dir.clone(),
            production: config.production,
        }
    }

    /// Validate and store an uploaded image, returning its public URL.
    ///
    /// The bucket is tried first. Outside production a bucket failure (or a
    /// missing bucket configuration) falls back to the local uploads
    /// directory; in production the failure is surfaced instead.
    pub async fn upload(&self, original_name: &str, data: &[u8]) -> Result<StoredAsset, AssetError> {
        if data.len() > MAX_UPLOAD_SIZE {
            return Err(AssetError::Validation(format!(
                "File too large. Maximum size is {} bytes",
                MAX_UPLOAD_SIZE
            )));
        }
        let content_type = validate_image(data).map_err(AssetError::Validation)?;

        let filename = unique_filename(original_name);

        if let Some(remote) = &self.remote {
            match remote.put(&filename, &content_type, data).await {
                Ok(url) => return Ok(StoredAsset { url, filename }),
                Err(e) if self.production => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "remote upload failed, falling back to local storage");
                }
            }
        } else if self.production {
            return Err(AssetError::Remote(
                "object storage is not configured".to_string(),
            ));
        }

        let url = local::store(&self.upload_dir, &filename, data).await?;
        Ok(StoredAsset { url, filename })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn detects_png_from_magic_bytes() {
        assert_eq!(validate_image(PNG_MAGIC).unwrap(), "image/png");
    }

    #[test]
    fn rejects_non_image_data() {
        assert!(validate_image(b"not an image").is_err());
    }

    #[test]
    fn filenames_never_collide() {
        let first = unique_filename("halusky.jpg");
        let second = unique_filename("halusky.jpg");
        assert_ne!(first, second);
    }

    #[test]
    fn filename_keeps_the_extension() {
        let name = unique_filename("photo.webp");
        assert!(name.starts_with("recipe-"));
        assert!(name.ends_with(".webp"));
    }

    #[test]
    fn filename_defaults_the_extension() {
        let name = unique_filename("upload");
        assert!(name.ends_with(".jpg"));
    }
}
