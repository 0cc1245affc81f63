//! Object-storage client for the remote image bucket (Supabase-compatible
//! storage API: authenticated writes, public reads).

use url::Url;

use super::AssetError;

pub struct RemoteBucket {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    bucket: String,
}

impl RemoteBucket {
    pub fn new(base_url: &str, api_key: &str, bucket: &str) -> Self {
        let base_url = Url::parse(base_url).expect("STORAGE_URL must be a valid URL");

        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
        }
    }

    /// Upload an object and return its public URL.
    pub async fn put(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, AssetError> {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/storage/v1/object/{}/{}", self.bucket, filename));

        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| AssetError::Remote(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AssetError::Remote(format!("HTTP {status}: {detail}")));
        }

        Ok(self.public_url(filename))
    }

    pub fn public_url(&self, filename: &str) -> String {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "/storage/v1/object/public/{}/{}",
            self.bucket, filename
        ));
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_points_at_the_public_object_path() {
        let bucket = RemoteBucket::new("https://storage.example.com", "key", "recipe-images");
        assert_eq!(
            bucket.public_url("recipe-1-abc.png"),
            "https://storage.example.com/storage/v1/object/public/recipe-images/recipe-1-abc.png"
        );
    }
}
