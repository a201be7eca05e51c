use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::face_match::errors::CompareFacesError;
use business::domain::face_match::use_cases::compare_faces::{
    CompareFacesParams, CompareFacesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::face_match::dto::{CompareFacesRequest, CompareFacesResult};
use crate::api::tags::ApiTags;

pub struct FaceMatchApi {
    compare_use_case: Arc<dyn CompareFacesUseCase>,
}

impl FaceMatchApi {
    pub fn new(compare_use_case: Arc<dyn CompareFacesUseCase>) -> Self {
        Self { compare_use_case }
    }
}

/// Face matching API
///
/// Compares a captured photo against a list of candidate images.
#[OpenApi]
impl FaceMatchApi {
    /// Compare a captured face with candidate images
    ///
    /// Candidates are downloaded and verified one at a time, in the given
    /// order. The first verified candidate is returned. Candidates that fail
    /// to download or cannot be compared are skipped. Finding no match is a
    /// successful response with `matchFound: false`.
    #[oai(path = "/compare-faces", method = "post", tag = "ApiTags::FaceMatch")]
    async fn compare_faces(&self, body: Json<CompareFacesRequest>) -> CompareFacesResponse {
        let (captured_image, candidate_urls) = match (body.0.captured_image, body.0.database_urls)
        {
            (Some(captured_image), Some(candidate_urls)) => (captured_image, candidate_urls),
            _ => {
                let (_, json) = CompareFacesError::MissingFields.into_error_response();
                return CompareFacesResponse::BadRequest(json);
            }
        };

        match self
            .compare_use_case
            .execute(CompareFacesParams {
                captured_image,
                candidate_urls,
            })
            .await
        {
            Ok(outcome) => CompareFacesResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CompareFacesResponse::BadRequest(json),
                    _ => CompareFacesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "compare_faces_bad_request")]
pub enum CompareFacesResponse {
    #[oai(status = 200)]
    Ok(Json<CompareFacesResult>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Unparsable bodies get the same 400 shape as validation failures.
fn compare_faces_bad_request(err: poem::Error) -> CompareFacesResponse {
    CompareFacesResponse::BadRequest(Json(ErrorResponse::new(format!(
        "Invalid request data: {}",
        err
    ))))
}
