use poem_openapi::Object;

use business::domain::face_match::model::MatchOutcome;

pub const NO_MATCH_MESSAGE: &str = "No matching face found in the database";

/// Both fields are optional here so that a missing field is answered with
/// the service's own 400 body instead of a generic parse error.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CompareFacesRequest {
    /// Captured photo as base64, optionally prefixed with a data URI marker
    pub captured_image: Option<String>,
    /// Candidate image URLs, compared in order
    pub database_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CompareFacesResult {
    /// Whether any candidate depicts the captured person
    pub match_found: bool,
    /// First candidate URL that matched
    #[oai(skip_serializing_if_is_none)]
    pub matched_image_url: Option<String>,
    /// Distance reported by the verifier for the matched pair (lower is closer)
    #[oai(skip_serializing_if_is_none)]
    pub distance: Option<f64>,
    /// Distance threshold the verifier applied
    #[oai(skip_serializing_if_is_none)]
    pub threshold: Option<f64>,
    /// Explanation when nothing matched
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<MatchOutcome> for CompareFacesResult {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Matched(found) => Self {
                match_found: true,
                matched_image_url: Some(found.url),
                distance: found.distance,
                threshold: found.threshold,
                message: None,
            },
            MatchOutcome::NoMatch => Self {
                match_found: false,
                matched_image_url: None,
                distance: None,
                threshold: None,
                message: Some(NO_MATCH_MESSAGE.to_string()),
            },
        }
    }
}
