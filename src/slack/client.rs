//! Slack API client module
//!
//! One generic request path serves every method: assemble [`Params`], build the method
//! URL, move it through the [`Transport`], and decode the body with the decoder the
//! caller names. Convenience wrappers for individual methods live in [`crate::slack::api`].

use tracing::debug;
use url::Url;

use crate::core::ClientConfig;
use crate::errors::SlackError;
use crate::slack::dispatch::dispatch;
use crate::slack::envelope::{Decoder, Response};
use crate::slack::params::Params;
use crate::slack::transport::{FormPart, HttpTransport, Transport, method_url};

/// Slack Web API client.
///
/// No retries and no rate-limit handling: every call is issued once and its outcome is
/// reported as-is.
pub struct SlackClient<T = HttpTransport> {
    token: String,
    base_url: String,
    transport: T,
}

impl SlackClient<HttpTransport> {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig::new(token))
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(
            config.token.clone(),
            config.base_url.clone(),
            HttpTransport::new(config.timeout),
        )
    }
}

impl<T: Transport> SlackClient<T> {
    #[must_use]
    pub fn with_transport(
        token: impl Into<String>,
        base_url: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into(),
            transport,
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `method` with `params` and decode the answer with `decode`.
    ///
    /// A response with `ok=false` is still `Ok(..)`: check [`Response::ok`] or use
    /// [`Response::into_result`].
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Transport`] if the request cannot be completed and
    /// [`SlackError::Decode`] if the body is not a valid envelope.
    pub async fn request<R>(
        &self,
        method: &str,
        params: Params,
        decode: Decoder<R>,
    ) -> Result<Response<R>, SlackError> {
        debug!(method, params = params.len(), "calling Slack method");
        let url = method_url(&self.base_url, method, &self.token, &params)?;
        let raw = self.transport.get(url).await?;
        let response = decode(&raw)?;
        if !response.ok {
            debug!(method, error = response.error_code(), "Slack method reported failure");
        }
        Ok(response)
    }

    /// [`SlackClient::request`], delivering the envelope to `continuation` instead of
    /// returning it. The continuation runs exactly once before this resolves, and never
    /// when the call fails at the transport or decode level.
    ///
    /// # Errors
    ///
    /// Same as [`SlackClient::request`].
    pub async fn request_with<R, F>(
        &self,
        method: &str,
        params: Params,
        decode: Decoder<R>,
        continuation: F,
    ) -> Result<(), SlackError>
    where
        F: FnOnce(Response<R>),
    {
        dispatch(self.request(method, params, decode).await, continuation)
    }

    /// POST a multipart form to `method` and decode the answer.
    ///
    /// # Errors
    ///
    /// Same as [`SlackClient::request`].
    pub async fn post_form<R>(
        &self,
        method: &str,
        parts: Vec<FormPart>,
        decode: Decoder<R>,
    ) -> Result<Response<R>, SlackError> {
        debug!(method, parts = parts.len(), "posting form to Slack method");
        let url = Url::parse(&format!("{}/{}", self.base_url.trim_end_matches('/'), method))?;
        let raw = self.transport.post_multipart(url, &self.token, parts).await?;
        Ok(decode(&raw)?)
    }

    /// POST a multipart form to an absolute URL and return the body as-is.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Transport`] if the URL is invalid or the request fails.
    pub async fn post_form_raw(
        &self,
        url: &str,
        parts: Vec<FormPart>,
    ) -> Result<String, SlackError> {
        let url = Url::parse(url)?;
        Ok(self.transport.post_multipart(url, &self.token, parts).await?)
    }
}
