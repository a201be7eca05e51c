use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use business::domain::face_match::errors::StorageError;
use business::domain::face_match::model::ImageRole;
use business::domain::face_match::services::{TransientImage, TransientImageStore};

use super::file::TempFileImage;

pub struct TempFileImageStore {
    dir: PathBuf,
}

impl TempFileImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

fn write_temp_file(
    dir: &Path,
    prefix: &str,
    suffix: &str,
    bytes: &[u8],
) -> Result<NamedTempFile, StorageError> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)
        .map_err(|e| StorageError::Write(e.to_string()))?;

    file.write_all(bytes)
        .map_err(|e| StorageError::Write(e.to_string()))?;
    file.flush()
        .map_err(|e| StorageError::Write(e.to_string()))?;

    Ok(file)
}

#[async_trait]
impl TransientImageStore for TempFileImageStore {
    async fn store(
        &self,
        role: ImageRole,
        extension: &str,
        bytes: &[u8],
    ) -> Result<Box<dyn TransientImage>, StorageError> {
        let dir = self.dir.clone();
        let suffix = format!(".{}", extension);
        let bytes = bytes.to_vec();

        let file = tokio::task::spawn_blocking(move || {
            write_temp_file(&dir, role.file_prefix(), &suffix, &bytes)
        })
        .await
        .map_err(|e| StorageError::Write(e.to_string()))??;

        Ok(Box::new(TempFileImage::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_name(image: &dyn TransientImage) -> String {
        image
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn should_write_bytes_to_prefixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempFileImageStore::new(dir.path().to_path_buf());

        let image = store
            .store(ImageRole::Captured, "jpg", &[0xFF, 0xD8, 0xFF])
            .await
            .unwrap();

        let name = file_name(image.as_ref());
        assert!(name.starts_with("temp_captured_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(image.path().parent().unwrap(), dir.path());
        assert_eq!(std::fs::read(image.path()).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn should_remove_file_when_image_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempFileImageStore::new(dir.path().to_path_buf());

        let image = store
            .store(ImageRole::Candidate, "png", b"candidate")
            .await
            .unwrap();
        let path = image.path().to_path_buf();
        assert!(path.exists());

        drop(image);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn should_give_each_image_a_unique_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempFileImageStore::new(dir.path().to_path_buf());

        let first = store
            .store(ImageRole::Candidate, "jpg", b"same")
            .await
            .unwrap();
        let second = store
            .store(ImageRole::Candidate, "jpg", b"same")
            .await
            .unwrap();

        assert_ne!(first.path(), second.path());
    }

    #[tokio::test]
    async fn should_fail_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempFileImageStore::new(dir.path().join("does-not-exist"));

        let result = store.store(ImageRole::Captured, "jpg", b"bytes").await;

        assert!(matches!(result, Err(StorageError::Write(_))));
    }
}
