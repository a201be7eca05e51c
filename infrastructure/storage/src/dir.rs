use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageDirError {
    #[error("storage.directory_unavailable: {0}")]
    Unavailable(String),
}

/// Where transient images are written.
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    /// Uses the system temporary directory
    pub fn system_temp() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Creates the storage directory if needed and checks that it is a directory.
pub fn prepare_storage_dir(config: &StorageConfig) -> Result<PathBuf, StorageDirError> {
    let dir: &Path = &config.dir;

    std::fs::create_dir_all(dir)
        .map_err(|e| StorageDirError::Unavailable(format!("{}: {}", dir.display(), e)))?;

    if !dir.is_dir() {
        return Err(StorageDirError::Unavailable(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("face-match").join("images");

        let dir = prepare_storage_dir(&StorageConfig::new(&nested)).unwrap();

        assert_eq!(dir, nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn should_reject_path_pointing_at_a_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let result = prepare_storage_dir(&StorageConfig::new(&file));

        assert!(matches!(result, Err(StorageDirError::Unavailable(_))));
    }
}
