use async_trait::async_trait;

use crate::domain::face_match::errors::CompareFacesError;
use crate::domain::face_match::model::MatchOutcome;

pub struct CompareFacesParams {
    pub captured_image: String,
    pub candidate_urls: Vec<String>,
}

#[async_trait]
pub trait CompareFacesUseCase: Send + Sync {
    async fn execute(&self, params: CompareFacesParams) -> Result<MatchOutcome, CompareFacesError>;
}
