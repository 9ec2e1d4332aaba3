//! JSON-over-HTTP lookup shared by the remote service clients.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::server::error::lookup::LookupError;

/// Issues a GET request and decodes a JSON body.
///
/// An empty body, `null`, or `{}` is a successful lookup with nothing in it and
/// returns `Ok(None)`.
///
/// # Arguments
/// - `client` - Shared HTTP client
/// - `url` - Full request URL
/// - `timeout` - Timeout for the whole request including the body
///
/// # Returns
/// - `Ok(Some(T))` - Decoded payload
/// - `Ok(None)` - Well-formed empty payload
/// - `Err(LookupError::NotFound)` - Service answered 404
/// - `Err(LookupError::Unavailable)` - Connection failure or any other non-2xx status
/// - `Err(LookupError::Timeout)` - Request exceeded `timeout`
/// - `Err(LookupError::Malformed)` - Body could not be decoded as `T`
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Option<T>, LookupError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| map_transport_error(e, timeout))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(LookupError::Unavailable(format!("{} returned {}", url, status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(e, timeout))?;

    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, LookupError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    match &value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => return Ok(None),
        _ => {}
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| LookupError::Malformed(e.to_string()))
}

fn map_transport_error(err: reqwest::Error, timeout: Duration) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout(timeout)
    } else if err.is_decode() {
        LookupError::Malformed(err.to_string())
    } else {
        LookupError::Unavailable(err.to_string())
    }
}
