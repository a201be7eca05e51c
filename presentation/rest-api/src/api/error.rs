use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every failing response.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always false on errors
    pub match_found: bool,
    /// Human readable description of the failure
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            match_found: false,
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
