//! Status-code normalization for vmrest responses.
//!
//! Every call returns an [`ApiResponse`] so callers branch on the outcome
//! instead of inspecting log output. Transport and JSON failures are the
//! only cases reported through `Err`.

use crate::error::{VmrestError, VmrestResult};

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalized outcome of a vmrest request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 200 / 201 with a JSON body
    Success(Value),
    /// 204, or a success status with an empty body
    Empty,
    /// 404; body kept undecoded
    NotFound(Bytes),
    /// 401; body decoded when it is JSON
    AuthError(Option<Value>),
    /// Any other status; body kept undecoded
    UnexpectedStatus { status: u16, body: Bytes },
}

impl ApiResponse {
    /// Map a status + raw body onto a tagged response.
    pub fn from_parts(status: StatusCode, body: Bytes) -> VmrestResult<Self> {
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                log::info!("Request successful ({})", status.as_u16());
                if body.is_empty() {
                    return Ok(Self::Empty);
                }
                let value = serde_json::from_slice(&body).map_err(|e| {
                    VmrestError::parse(format!(
                        "JSON parse error: {e}, body: {}",
                        preview(&body)
                    ))
                })?;
                Ok(Self::Success(value))
            }
            StatusCode::NO_CONTENT => {
                log::info!("Request successful, no output");
                Ok(Self::Empty)
            }
            StatusCode::UNAUTHORIZED => {
                log::warn!("Server returned unauthenticated error");
                Ok(Self::AuthError(serde_json::from_slice(&body).ok()))
            }
            StatusCode::NOT_FOUND => {
                log::info!("Request returned 404");
                Ok(Self::NotFound(body))
            }
            other => {
                log::warn!("Unknown status {} for request", other.as_u16());
                Ok(Self::UnexpectedStatus {
                    status: other.as_u16(),
                    body,
                })
            }
        }
    }

    /// Read the body of a `reqwest` response and normalize it.
    pub async fn from_response(resp: reqwest::Response) -> VmrestResult<Self> {
        let status = resp.status();
        let body = resp.bytes().await.map_err(VmrestError::from)?;
        Self::from_parts(status, body)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Empty)
    }

    /// Canonical status for the variant. `Success` reports 200 even for a
    /// 201, and `Empty` reports 204 even for an empty-bodied 200.
    pub fn nominal_status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Empty => 204,
            Self::NotFound(_) => 404,
            Self::AuthError(_) => 401,
            Self::UnexpectedStatus { status, .. } => *status,
        }
    }

    /// JSON payload for successful responses; `Empty` becomes `{}`.
    pub fn into_value(self) -> VmrestResult<Value> {
        match self.into_result()? {
            Some(v) => Ok(v),
            None => Ok(Value::Object(Default::default())),
        }
    }

    /// Decode a successful payload into `T`.
    ///
    /// `Empty` decodes as the first of `null`, `[]` or `{}` that `T`
    /// accepts, so `Option`, sequences and all-default structs come back
    /// empty instead of failing.
    pub fn json<T: DeserializeOwned>(self) -> VmrestResult<T> {
        match self.into_result()? {
            Some(v) => Ok(serde_json::from_value(v)?),
            None => decode_empty(),
        }
    }

    /// `Ok(Some)` for `Success`, `Ok(None)` for `Empty`, `Err` otherwise.
    pub fn into_result(self) -> VmrestResult<Option<Value>> {
        match self {
            Self::Success(v) => Ok(Some(v)),
            Self::Empty => Ok(None),
            Self::NotFound(body) => Err(VmrestError::not_found(format!(
                "Resource not found: {}",
                preview(&body)
            ))),
            Self::AuthError(body) => Err(VmrestError::auth(match body {
                Some(v) => format!("Unauthenticated: {v}"),
                None => "Unauthenticated".to_string(),
            })),
            Self::UnexpectedStatus { status, body } => Err(VmrestError::api(
                status,
                format!("API error {status}: {}", preview(&body)),
            )),
        }
    }
}

fn decode_empty<T: DeserializeOwned>() -> VmrestResult<T> {
    let candidates = [
        Value::Null,
        Value::Array(Vec::new()),
        Value::Object(Default::default()),
    ];
    let mut last = None;
    for candidate in candidates {
        match serde_json::from_value(candidate) {
            Ok(v) => return Ok(v),
            Err(e) => last = Some(e),
        }
    }
    match last {
        Some(e) => Err(VmrestError::parse(format!("Empty response cannot be decoded: {e}"))),
        None => Err(VmrestError::parse("Empty response cannot be decoded")),
    }
}

fn preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(500).collect()
}
