use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::face_match::model::CandidateMatch;
use crate::domain::face_match::value_objects::CandidateUrls;

pub struct ScanCandidatesParams {
    pub captured_image: PathBuf,
    pub candidate_urls: CandidateUrls,
}

/// Walks the candidates in order and stops at the first verified match.
/// Per-candidate failures are absorbed, so there is no error type.
#[async_trait]
pub trait ScanCandidatesUseCase: Send + Sync {
    async fn execute(&self, params: ScanCandidatesParams) -> Option<CandidateMatch>;
}
