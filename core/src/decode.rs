//! Status gate and JSON decoding for archive responses.

use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Status codes treated as success. Redirects that reach the decoder pass.
pub const ACCEPTED_STATUS: RangeInclusive<u16> = 200..=399;

/// Reject responses whose status falls outside `ACCEPTED_STATUS`.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if ACCEPTED_STATUS.contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Gate on status, then decode the body into `T`.
///
/// Nothing is returned unless the whole body matches `T`. serde_json's
/// message names the missing field or mistyped value and its position.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response)?;
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
