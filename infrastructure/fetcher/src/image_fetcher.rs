use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use business::domain::face_match::errors::FetchError;
use business::domain::face_match::services::ImageFetcherService;

/// Settings for candidate image downloads.
#[derive(Debug, Clone)]
pub struct ImageFetcherConfig {
    pub timeout: Duration,
    pub max_bytes: usize,
}

impl Default for ImageFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

pub struct ImageFetcherHttp {
    client: Client,
    max_bytes: usize,
}

impl ImageFetcherHttp {
    pub fn new(config: ImageFetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            max_bytes: config.max_bytes,
        }
    }
}

#[async_trait]
impl ImageFetcherService for ImageFetcherHttp {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let limit = self.max_bytes;
        if response
            .content_length()
            .is_some_and(|length| length > limit as u64)
        {
            return Err(FetchError::TooLarge { limit });
        }

        // Content-Length can be absent or wrong, so the cap is enforced while reading too.
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?
        {
            if body.len() + chunk.len() > limit {
                return Err(FetchError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}
