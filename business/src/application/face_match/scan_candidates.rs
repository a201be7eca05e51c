use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::face_match::errors::CandidateError;
use crate::domain::face_match::model::{CandidateMatch, ImageRole, Verification};
use crate::domain::face_match::services::{
    FaceVerifierService, ImageFetcherService, TransientImageStore,
};
use crate::domain::face_match::use_cases::scan_candidates::{
    ScanCandidatesParams, ScanCandidatesUseCase,
};
use crate::domain::face_match::value_objects::image_extension;
use crate::domain::logger::Logger;

pub struct ScanCandidatesUseCaseImpl {
    pub fetcher: Arc<dyn ImageFetcherService>,
    pub verifier: Arc<dyn FaceVerifierService>,
    pub store: Arc<dyn TransientImageStore>,
    pub logger: Arc<dyn Logger>,
}

impl ScanCandidatesUseCaseImpl {
    /// Fetches one candidate, materializes it and verifies it against the
    /// captured photo. The candidate file is released before returning.
    async fn compare_candidate(
        &self,
        captured: &Path,
        url: &str,
    ) -> Result<Verification, CandidateError> {
        let bytes = self.fetcher.fetch(url).await?;

        let candidate = self
            .store
            .store(ImageRole::Candidate, image_extension(&bytes), &bytes)
            .await?;

        let verification = self.verifier.verify(captured, candidate.path()).await?;

        Ok(verification)
    }
}

#[async_trait]
impl ScanCandidatesUseCase for ScanCandidatesUseCaseImpl {
    async fn execute(&self, params: ScanCandidatesParams) -> Option<CandidateMatch> {
        let total = params.candidate_urls.len();

        for (index, url) in params.candidate_urls.iter().enumerate() {
            self.logger.info(&format!(
                "Comparing with candidate {}/{}: {}",
                index + 1,
                total,
                url
            ));

            match self.compare_candidate(&params.captured_image, url).await {
                Ok(verification) if verification.verified => {
                    self.logger.info(&format!("Match found with: {}", url));
                    return Some(CandidateMatch::new(url, &verification));
                }
                Ok(verification) => {
                    self.logger.debug(&format!(
                        "No match with: {} (distance: {:?})",
                        url, verification.distance
                    ));
                }
                Err(err) => {
                    self.logger
                        .warn(&format!("Skipping candidate {}: {}", url, err));
                }
            }
        }

        self.logger
            .info(&format!("No match among {} candidates", total));
        None
    }
}
