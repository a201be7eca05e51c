use poem::error::ReadBodyError;
use poem::http::StatusCode;
use poem::{Error, Request, Result};

/// Buffers the request body, rejecting anything over `limit` bytes with 413.
///
/// Works with and without a `Content-Length` header.
pub async fn limit_body(mut req: Request, limit: usize) -> Result<Request> {
    let body = req
        .take_body()
        .into_bytes_limit(limit)
        .await
        .map_err(|err| match err {
            ReadBodyError::PayloadTooLarge => Error::from_status(StatusCode::PAYLOAD_TOO_LARGE),
            _ => Error::from_status(StatusCode::BAD_REQUEST),
        })?;
    req.set_body(body);
    Ok(req)
}
