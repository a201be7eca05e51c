/// Errors surfaced to the caller of a face comparison.
///
/// Display strings are returned verbatim in the HTTP error body, so they are
/// written for the client.
#[derive(Debug, thiserror::Error)]
pub enum CompareFacesError {
    #[error("Invalid request data. Need capturedImage and databaseUrls.")]
    MissingFields,
    #[error("Captured image is empty")]
    CapturedImageEmpty,
    #[error("No database URLs provided")]
    CandidateUrlsEmpty,
    #[error("Invalid base64 image data: {0}")]
    InvalidBase64(String),
    #[error("Captured image is not a recognised image format")]
    NotAnImage,
    #[error("Failed to store captured image: {0}")]
    Storage(#[from] StorageError),
    #[error("Face comparison did not finish within {0} seconds")]
    ScanTimedOut(u64),
}

/// Failure to download a candidate image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("fetch.request_failed: {0}")]
    Request(String),
    #[error("fetch.unexpected_status: {0}")]
    Status(u16),
    #[error("fetch.body_too_large: limit {limit} bytes")]
    TooLarge { limit: usize },
}

/// Failure reported by the face verification backend.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("verification.unreadable_image: {0}")]
    UnreadableImage(String),
    #[error("verification.request_failed: {0}")]
    Request(String),
    #[error("verification.rejected: {0}")]
    Rejected(String),
    #[error("verification.invalid_response")]
    InvalidResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.write_failed: {0}")]
    Write(String),
}

/// Anything that makes a single candidate count as "not matched".
#[derive(Debug, thiserror::Error)]
pub enum CandidateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Verification(#[from] VerificationError),
}
