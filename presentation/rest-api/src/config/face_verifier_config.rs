use std::time::Duration;

use super::env_parse;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5005";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the DeepFace verification server.
///
/// Environment variables:
/// - DEEPFACE_URL: Base URL of the server (default: "http://127.0.0.1:5005")
/// - DEEPFACE_TIMEOUT_SECS: Per-comparison timeout (default: 120)
pub struct FaceVerifierConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl FaceVerifierConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("DEEPFACE_URL").ok(),
            env_parse("DEEPFACE_TIMEOUT_SECS"),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}
