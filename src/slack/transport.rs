//! HTTP transport.
//!
//! The [`Transport`] trait is the seam between request construction and the network:
//! the client builds complete URLs and form parts, the transport only moves bytes and
//! hands back the raw body text. [`HttpTransport`] is the reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

use crate::errors::TransportError;
use crate::slack::params::Params;
use crate::utils::mime;

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }

    /// Text value, `None` for file parts.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            FormPart::Text { value, .. } => Some(value),
            FormPart::File { .. } => None,
        }
    }
}

/// Build `{base}/{method}?token=..&k=v..`. Values are percent-encoded; duplicate keys
/// are sent as given.
///
/// # Errors
///
/// Returns an error if the base location and method do not form a valid URL.
pub fn method_url(
    base_url: &str,
    method: &str,
    token: &str,
    params: &Params,
) -> Result<Url, TransportError> {
    let target = format!("{}/{}", base_url.trim_end_matches('/'), method);
    let query = std::iter::once(("token", token)).chain(params.iter());
    Ok(Url::parse_with_params(&target, query)?)
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET and return the body text.
    async fn get(&self, url: Url) -> Result<String, TransportError>;

    /// POST a multipart body with bearer authorization and return the body text.
    async fn post_multipart(
        &self,
        url: Url,
        token: &str,
        parts: Vec<FormPart>,
    ) -> Result<String, TransportError>;
}

pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("slackapi/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http }
    }

    #[must_use]
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::core::config::DEFAULT_TIMEOUT_SECS))
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                bytes,
            } => {
                let content_type = mime::guess_content_type(&file_name);
                let file = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        debug!(path = url.path(), "GET");
        let response = self.http.get(url).send().await?;
        debug!(status = %response.status(), "response received");
        Ok(response.text().await?)
    }

    async fn post_multipart(
        &self,
        url: Url,
        token: &str,
        parts: Vec<FormPart>,
    ) -> Result<String, TransportError> {
        debug!(path = url.path(), parts = parts.len(), "POST multipart");
        // The form is consumed by the request and dropped on every exit path.
        let form = build_form(parts)?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        debug!(status = %response.status(), "response received");
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_comes_first_and_values_are_encoded() {
        let params = Params::new().push("query", "a b&c").push("count", "5");
        let url = method_url("https://slack.com/api/", "search.all", "xoxb-1", &params).unwrap();
        assert_eq!(url.path(), "/api/search.all");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("token".to_string(), "xoxb-1".to_string()),
                ("query".to_string(), "a b&c".to_string()),
                ("count".to_string(), "5".to_string()),
            ]
        );
        assert!(!url.as_str().contains("a b&c"));
    }

    #[test]
    fn test_invalid_base_is_a_transport_error() {
        let err = method_url("not a url", "auth.test", "t", &Params::new()).unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn test_form_part_accessors() {
        let text = FormPart::text("channel_id", "C1");
        assert_eq!(text.name(), "channel_id");
        assert_eq!(text.value(), Some("C1"));

        let file = FormPart::file("file", "a.txt", b"hi".to_vec());
        assert_eq!(file.name(), "file");
        assert_eq!(file.value(), None);
    }
}
