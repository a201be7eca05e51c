use std::path::Path;

use async_trait::async_trait;

use super::errors::{FetchError, StorageError, VerificationError};
use super::model::{ImageRole, Verification};

/// Service port for downloading candidate images.
#[async_trait]
pub trait ImageFetcherService: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Service port for the external face verification capability.
///
/// Both arguments point at transient image files that stay alive for the
/// duration of the call.
#[async_trait]
pub trait FaceVerifierService: Send + Sync {
    async fn verify(
        &self,
        captured: &Path,
        candidate: &Path,
    ) -> Result<Verification, VerificationError>;
}

/// An image materialized on local storage. The backing file is removed when
/// the value is dropped.
pub trait TransientImage: Send + Sync {
    fn path(&self) -> &Path;
}

/// Service port for materializing image bytes into uniquely named transient files.
#[async_trait]
pub trait TransientImageStore: Send + Sync {
    async fn store(
        &self,
        role: ImageRole,
        extension: &str,
        bytes: &[u8],
    ) -> Result<Box<dyn TransientImage>, StorageError>;
}
