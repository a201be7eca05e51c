use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::face_match::errors::CompareFacesError;
use crate::domain::face_match::model::{ImageRole, MatchOutcome};
use crate::domain::face_match::services::TransientImageStore;
use crate::domain::face_match::use_cases::compare_faces::{
    CompareFacesParams, CompareFacesUseCase,
};
use crate::domain::face_match::use_cases::scan_candidates::{
    ScanCandidatesParams, ScanCandidatesUseCase,
};
use crate::domain::face_match::value_objects::{CandidateUrls, CapturedImage};
use crate::domain::logger::Logger;

pub struct CompareFacesUseCaseImpl {
    pub scanner: Arc<dyn ScanCandidatesUseCase>,
    pub store: Arc<dyn TransientImageStore>,
    pub logger: Arc<dyn Logger>,
    /// Upper bound for the whole candidate scan. `None` waits indefinitely.
    pub scan_timeout: Option<Duration>,
}

#[async_trait]
impl CompareFacesUseCase for CompareFacesUseCaseImpl {
    async fn execute(&self, params: CompareFacesParams) -> Result<MatchOutcome, CompareFacesError> {
        let candidate_urls = CandidateUrls::new(params.candidate_urls)?;

        self.logger.info(&format!(
            "Received comparison request with {} candidate URLs",
            candidate_urls.len()
        ));

        let captured = CapturedImage::from_base64(&params.captured_image)?;

        let captured_file = self
            .store
            .store(ImageRole::Captured, captured.extension(), captured.bytes())
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Could not store captured image: {}", err));
                CompareFacesError::from(err)
            })?;

        self.logger.debug(&format!(
            "Captured image stored at {}",
            captured_file.path().display()
        ));

        let scan = self.scanner.execute(ScanCandidatesParams {
            captured_image: captured_file.path().to_path_buf(),
            candidate_urls,
        });

        let found = match self.scan_timeout {
            Some(limit) => match tokio::time::timeout(limit, scan).await {
                Ok(found) => found,
                Err(_) => {
                    self.logger.error(&format!(
                        "Candidate scan exceeded {} seconds",
                        limit.as_secs()
                    ));
                    return Err(CompareFacesError::ScanTimedOut(limit.as_secs()));
                }
            },
            None => scan.await,
        };

        drop(captured_file);
        self.logger.debug("Removed transient captured image");

        Ok(MatchOutcome::from(found))
    }
}
