use std::path::Path;

use tempfile::NamedTempFile;

use business::domain::face_match::services::TransientImage;

/// Transient image backed by a `NamedTempFile`; the file is unlinked on drop.
pub struct TempFileImage {
    file: NamedTempFile,
}

impl TempFileImage {
    pub fn new(file: NamedTempFile) -> Self {
        Self { file }
    }
}

impl TransientImage for TempFileImage {
    fn path(&self) -> &Path {
        self.file.path()
    }
}
