use std::time::Duration;

use reqwest::Client;

/// Shared DeepFace HTTP client configuration.
pub struct DeepFaceClient {
    pub client: Client,
    pub base_url: String,
}

impl DeepFaceClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the verification endpoint URL.
    pub fn verify_url(&self) -> String {
        format!("{}/verify", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_verify_url_without_double_slash() {
        let client = DeepFaceClient::new(
            "http://127.0.0.1:5005/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(client.verify_url(), "http://127.0.0.1:5005/verify");
    }
}
