pub mod app_config;
pub mod cors_config;
pub mod face_verifier_config;
pub mod image_fetcher_config;
pub mod scan_config;
pub mod server_config;
pub mod storage_config;

/// Reads and parses an environment variable, ignoring unset or unparsable values.
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
