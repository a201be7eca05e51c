use std::time::Duration;

use fetcher::image_fetcher::ImageFetcherConfig;

use super::env_parse;

/// Initialize candidate download settings
///
/// Environment variables:
/// - IMAGE_FETCH_TIMEOUT_SECS: Per-download timeout (default: 10)
/// - IMAGE_FETCH_MAX_BYTES: Largest accepted image body (default: 16 MiB)
pub fn init_image_fetcher_config() -> ImageFetcherConfig {
    let defaults = ImageFetcherConfig::default();

    ImageFetcherConfig {
        timeout: env_parse("IMAGE_FETCH_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        max_bytes: env_parse("IMAGE_FETCH_MAX_BYTES").unwrap_or(defaults.max_bytes),
    }
}
