//! Response envelopes.
//!
//! Every Slack Web API method answers with `{"ok": bool, "error"?: string, ...}`. The
//! decoder checks the `ok` flag first and only decodes the operation payload when the
//! call succeeded, so a failed [`Response`] never carries payload data.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DecodeError, SlackError};

/// Placeholder error code when a failed response omits `error`.
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// Decodes raw body text into a typed envelope. One per response shape.
pub type Decoder<T> = fn(&str) -> Result<Response<T>, DecodeError>;

#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub ok: bool,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub data: Option<T>,
}

impl<T> Response<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            error: None,
            warning: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            warning: None,
            data: None,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR)
    }

    /// Turn a protocol-level failure into an error.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::ApiError`] with the service's error code when `ok` is false.
    pub fn into_result(self) -> Result<T, SlackError> {
        match (self.ok, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(SlackError::ApiError("missing response payload".to_string())),
            (false, _) => Err(SlackError::ApiError(
                self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            )),
        }
    }
}

/// Payload for methods whose success carries nothing the caller needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {}

/// Decode `raw` as an envelope around `T`.
///
/// # Errors
///
/// Fails if the body is not a JSON object, lacks a boolean `ok`, or (when `ok` is true)
/// does not match `T`.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<Response<T>, DecodeError> {
    let body: Value = serde_json::from_str(raw)?;
    let Value::Object(fields) = &body else {
        return Err(DecodeError::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    let ok = fields
        .get("ok")
        .ok_or(DecodeError::MissingOk)?
        .as_bool()
        .ok_or_else(|| DecodeError::Malformed("`ok` is not a boolean".to_string()))?;

    let text_field = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);
    let warning = text_field("warning");

    if !ok {
        return Ok(Response {
            ok,
            error: Some(text_field("error").unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
            warning,
            data: None,
        });
    }

    let data = T::deserialize(body).map_err(|e| DecodeError::Payload(e.to_string()))?;
    Ok(Response {
        ok,
        error: None,
        warning,
        data: Some(data),
    })
}
