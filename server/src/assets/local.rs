//! Local-filesystem fallback for development uploads.

use std::path::Path;

use tokio::fs;

use super::AssetError;

/// Write the file under the public uploads directory and return the path it
/// is served from.
pub async fn store(dir: &Path, filename: &str, data: &[u8]) -> Result<String, AssetError> {
    if !dir.exists() {
        fs::create_dir_all(dir).await?;
    }
    fs::write(dir.join(filename), data).await?;

    Ok(format!("/uploads/{filename}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_the_bytes_and_returns_the_served_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("images");

        let url = store(&target, "recipe-1-abc.png", b"fake image bytes")
            .await
            .unwrap();

        assert_eq!(url, "/uploads/recipe-1-abc.png");
        let written = std::fs::read(target.join("recipe-1-abc.png")).unwrap();
        assert_eq!(written, b"fake image bytes");
    }
}
