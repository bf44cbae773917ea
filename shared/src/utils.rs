use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;

/// Response advertising `application/json`. The body is sent as given, so a
/// caller can pass a bare string as well as serialized JSON.
pub fn json_response(status: &StatusCode, body: String) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(Box::new)?;

    Ok(response)
}

pub fn serialized_response<T: Serialize>(
    status: &StatusCode,
    body: &T,
) -> Result<Response<String>, Error> {
    json_response(status, serde_json::to_string(body)?)
}

/// Response with a plain message body and no headers.
pub fn message_response(status: &StatusCode, message: String) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .body(message)
        .map_err(Box::new)?;

    Ok(response)
}
