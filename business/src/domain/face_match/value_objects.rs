use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::CompareFacesError;

/// Extension used when the image format cannot be sniffed.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Returns the file extension matching the magic bytes of `bytes`.
pub fn image_extension(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or(DEFAULT_IMAGE_EXTENSION)
}

/// Drops a leading `data:<mime>;base64,` marker, or anything else up to the first comma.
fn strip_data_uri(raw: &str) -> &str {
    match raw.split_once(',') {
        Some((_, payload)) => payload,
        None => raw,
    }
}

/// Decoded photo taken by the client.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    bytes: Vec<u8>,
    extension: &'static str,
}

impl CapturedImage {
    pub fn from_base64(raw: &str) -> Result<Self, CompareFacesError> {
        let payload: String = strip_data_uri(raw)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if payload.is_empty() {
            return Err(CompareFacesError::CapturedImageEmpty);
        }

        let bytes = STANDARD
            .decode(payload.as_bytes())
            .map_err(|e| CompareFacesError::InvalidBase64(e.to_string()))?;

        let format = image::guess_format(&bytes).map_err(|_| CompareFacesError::NotAnImage)?;
        let extension = format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or(DEFAULT_IMAGE_EXTENSION);

        Ok(Self { bytes, extension })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }
}

/// Ordered, non-empty list of candidate image URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateUrls(Vec<String>);

impl CandidateUrls {
    pub fn new(urls: Vec<String>) -> Result<Self, CompareFacesError> {
        if urls.is_empty() {
            return Err(CompareFacesError::CandidateUrlsEmpty);
        }
        Ok(Self(urls))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
