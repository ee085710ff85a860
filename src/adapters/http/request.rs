//! Request-side helpers shared by the HTTP handlers.

use std::str::FromStr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::CommandMetadata;

use super::dto::ErrorResponse;

/// Header carrying the per-request id set by `SetRequestIdLayer`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Command metadata keyed on the request id when one is present.
pub fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

/// 400 with the given message.
pub fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

const INVALID_BODY: &str = "Invalid request body";

/// Body that is not JSON or was sent with the wrong content type.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    debug!("Rejected request body: {}", rejection.body_text());
    bad_request(INVALID_BODY)
}

/// Decodes a JSON body that must be an object.
///
/// serde's derived struct visitors also accept sequences, so `[1, 1]`
/// would otherwise decode positionally. Arrays, scalars and fields of the
/// wrong type all answer 400 "Invalid request body".
pub fn object_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, Response> {
    let Json(value) = payload.map_err(invalid_body)?;
    if !value.is_object() {
        debug!("Rejected non-object request body");
        return Err(bad_request(INVALID_BODY));
    }
    serde_json::from_value(value).map_err(|e| {
        debug!("Rejected request body: {}", e);
        bad_request(INVALID_BODY)
    })
}

pub fn invalid_query(rejection: QueryRejection) -> Response {
    debug!("Rejected query string: {}", rejection.body_text());
    bad_request("Invalid query parameters")
}

/// Parses a numeric path segment, answering 400 with `message` on failure.
pub fn parse_id<T: FromStr>(raw: &str, message: &str) -> Result<T, Response> {
    raw.parse().map_err(|_| bad_request(message))
}
