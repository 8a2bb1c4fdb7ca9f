use thiserror::Error;

use crate::slack::upload::UploadStage;

/// The network call itself could not be completed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// The service answered, but the body is not a usable response envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to parse response body: {0}")]
    Malformed(String),

    #[error("Response body is missing the mandatory `ok` field")]
    MissingOk,

    #[error("Response payload does not match the expected shape: {0}")]
    Payload(String),
}

#[derive(Debug, Error)]
pub enum SlackError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to encode request payload: {0}")]
    EncodeError(String),

    #[error("Invalid client configuration: {0}")]
    ConfigError(String),

    #[error("File upload aborted while {stage}: {error}")]
    UploadAborted { stage: UploadStage, error: String },
}

impl From<reqwest::Error> for TransportError {
    // The request URL carries the token in its query, so it is dropped from the message.
    fn from(error: reqwest::Error) -> Self {
        TransportError::Http(error.without_url().to_string())
    }
}

impl From<url::ParseError> for TransportError {
    fn from(error: url::ParseError) -> Self {
        TransportError::InvalidUrl(error.to_string())
    }
}

impl From<url::ParseError> for SlackError {
    fn from(error: url::ParseError) -> Self {
        SlackError::Transport(error.into())
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::Transport(error.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Malformed(error.to_string())
    }
}

impl SlackError {
    /// Whether the call never produced a decodable envelope.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SlackError::Transport(_))
    }
}
