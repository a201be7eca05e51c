use std::path::PathBuf;

use storage::dir::{StorageConfig, prepare_storage_dir};

/// Resolve the directory for transient images
///
/// Environment variables:
/// - TRANSIENT_IMAGE_DIR: Directory for transient images (default: system temp dir)
///
/// # Errors
/// Returns error if the directory cannot be created
pub fn init_storage_dir() -> anyhow::Result<PathBuf> {
    let config = match std::env::var("TRANSIENT_IMAGE_DIR") {
        Ok(dir) if !dir.trim().is_empty() => StorageConfig::new(dir),
        _ => StorageConfig::system_temp(),
    };
    let dir = prepare_storage_dir(&config)?;
    Ok(dir)
}
