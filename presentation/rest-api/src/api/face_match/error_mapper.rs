use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::face_match::errors::CompareFacesError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompareFacesError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CompareFacesError::MissingFields
            | CompareFacesError::CapturedImageEmpty
            | CompareFacesError::CandidateUrlsEmpty
            | CompareFacesError::InvalidBase64(_)
            | CompareFacesError::NotAnImage => StatusCode::BAD_REQUEST,
            CompareFacesError::Storage(_) | CompareFacesError::ScanTimedOut(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
