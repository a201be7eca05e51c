use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Largest accepted request body (16 MiB).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            body_limit: MAX_BODY_BYTES,
        }
    }
}
