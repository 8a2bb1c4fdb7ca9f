//! External file upload.
//!
//! Slack uploads take four dependent calls:
//!
//! 1. `files.getUploadURLExternal` reserves a file id and a one-time upload URL.
//! 2. The raw bytes are POSTed to that URL as a multipart `file` part.
//! 3. `files.completeUploadExternal` registers the file and shares it.
//! 4. `files.info` fetches the finished file's metadata.
//!
//! The steps run strictly in sequence. A step that reports `ok=false` aborts the chain
//! with a single warning; transport and decode failures are returned as errors. The
//! byte transfer in step 2 answers with plain text rather than an envelope, so its body
//! is only logged and the chain always moves on to registration; a failed transfer
//! surfaces there instead.

use std::fmt;

use tracing::{debug, info, warn};

use crate::errors::SlackError;
use crate::slack::api::CompleteUploadRequest;
use crate::slack::client::SlackClient;
use crate::slack::envelope::Response;
use crate::slack::responses::{FileUpload, UploadTarget};
use crate::slack::transport::{FormPart, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    RequestingUrl,
    /// Reported in progress logs only; the transfer answers without an envelope, so it
    /// never aborts the chain.
    UploadingBytes,
    RegisteringFile,
    FetchingInfo,
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UploadStage::RequestingUrl => "requesting an upload URL",
            UploadStage::UploadingBytes => "uploading file bytes",
            UploadStage::RegisteringFile => "registering the file",
            UploadStage::FetchingInfo => "fetching file info",
        })
    }
}

/// What to upload and where to share it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub channel_ids: Vec<String>,
    /// Defaults to the file name.
    pub title: Option<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
}

impl UploadRequest {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn to_channels<S: Into<String>>(mut self, channels: impl IntoIterator<Item = S>) -> Self {
        self.channel_ids = channels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.initial_comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn in_thread(mut self, thread_ts: impl Into<String>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }
}

/// How an upload chain ended.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// All four steps succeeded; the envelope wraps the fetched file metadata.
    Done(Response<FileUpload>),
    /// A step reported `ok=false`; nothing after it ran.
    Aborted { stage: UploadStage, error: String },
}

impl UploadOutcome {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, UploadOutcome::Done(_))
    }

    /// # Errors
    ///
    /// Returns [`SlackError::UploadAborted`] for an aborted chain.
    pub fn into_result(self) -> Result<FileUpload, SlackError> {
        match self {
            UploadOutcome::Done(response) => response.into_result(),
            UploadOutcome::Aborted { stage, error } => {
                Err(SlackError::UploadAborted { stage, error })
            }
        }
    }
}

enum UploadState {
    RequestingUrl,
    UploadingBytes(UploadTarget),
    RegisteringFile { file_id: String },
    FetchingInfo { file_id: String },
    Done(Response<FileUpload>),
    Aborted { stage: UploadStage, error: String },
}

/// Ephemeral state of one upload; dropped when the chain ends.
struct UploadSession {
    file_name: String,
    bytes: Vec<u8>,
    length: usize,
    title: String,
    channel_ids: Vec<String>,
    initial_comment: Option<String>,
    thread_ts: Option<String>,
}

impl UploadState {
    fn stage(&self) -> Option<UploadStage> {
        match self {
            UploadState::RequestingUrl => Some(UploadStage::RequestingUrl),
            UploadState::UploadingBytes(_) => Some(UploadStage::UploadingBytes),
            UploadState::RegisteringFile { .. } => Some(UploadStage::RegisteringFile),
            UploadState::FetchingInfo { .. } => Some(UploadStage::FetchingInfo),
            UploadState::Done(_) | UploadState::Aborted { .. } => None,
        }
    }
}

impl UploadSession {
    fn new(request: UploadRequest) -> Self {
        let title = request
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| request.file_name.clone());
        Self {
            length: request.bytes.len(),
            file_name: request.file_name,
            bytes: request.bytes,
            title,
            channel_ids: request.channel_ids,
            initial_comment: request.initial_comment,
            thread_ts: request.thread_ts,
        }
    }

    fn abort(&self, stage: UploadStage, error: &str) -> UploadState {
        warn!(
            file_name = %self.file_name,
            stage = %stage,
            error,
            "file upload aborted"
        );
        UploadState::Aborted {
            stage,
            error: error.to_string(),
        }
    }

    /// Payload of a successful step, or the aborted state for a failed one.
    fn accept<R>(&self, stage: UploadStage, response: Response<R>) -> Result<R, UploadState> {
        match response {
            Response {
                ok: true,
                data: Some(data),
                ..
            } => Ok(data),
            failed => Err(self.abort(stage, failed.error_code())),
        }
    }

    async fn step<T: Transport>(
        &mut self,
        client: &SlackClient<T>,
        state: UploadState,
    ) -> Result<UploadState, SlackError> {
        if let Some(stage) = state.stage() {
            debug!(file_name = %self.file_name, %stage, "upload step");
        }
        let next = match state {
            UploadState::RequestingUrl => {
                let response = client.upload_url_external(&self.file_name, self.length).await?;
                match self.accept(UploadStage::RequestingUrl, response) {
                    Ok(target) => UploadState::UploadingBytes(target),
                    Err(aborted) => aborted,
                }
            }
            UploadState::UploadingBytes(target) => {
                let bytes = std::mem::take(&mut self.bytes);
                let part = FormPart::file("file", self.file_name.as_str(), bytes);
                let body = client.post_form_raw(&target.upload_url, vec![part]).await?;
                debug!(file_id = %target.file_id, body = %body.trim(), "upload URL answered");
                UploadState::RegisteringFile {
                    file_id: target.file_id,
                }
            }
            UploadState::RegisteringFile { file_id } => {
                let request = CompleteUploadRequest {
                    file_id: file_id.clone(),
                    title: self.title.clone(),
                    channel_ids: self.channel_ids.clone(),
                    initial_comment: self.initial_comment.clone(),
                    thread_ts: self.thread_ts.clone(),
                };
                let response = client.complete_upload_external(&request).await?;
                match self.accept(UploadStage::RegisteringFile, response) {
                    Ok(completed) => {
                        let file_id = completed
                            .files
                            .into_iter()
                            .next()
                            .map_or(file_id, |registered| registered.id);
                        UploadState::FetchingInfo { file_id }
                    }
                    Err(aborted) => aborted,
                }
            }
            UploadState::FetchingInfo { file_id } => {
                let response = client.file_info(&file_id, None, None).await?;
                match self.accept(UploadStage::FetchingInfo, response) {
                    Ok(info) => {
                        UploadState::Done(Response::success(FileUpload { file: info.file }))
                    }
                    Err(aborted) => aborted,
                }
            }
            terminal @ (UploadState::Done(_) | UploadState::Aborted { .. }) => terminal,
        };
        Ok(next)
    }
}

impl<T: Transport> SlackClient<T> {
    /// Upload a file and share it to `request.channel_ids`.
    ///
    /// Protocol failures at any step come back as [`UploadOutcome::Aborted`] naming the
    /// step; they are never swallowed.
    ///
    /// # Errors
    ///
    /// Returns an error if any call cannot be completed or its response cannot be
    /// decoded.
    pub async fn upload_file(&self, request: UploadRequest) -> Result<UploadOutcome, SlackError> {
        let mut session = UploadSession::new(request);
        info!(
            file_name = %session.file_name,
            length = session.length,
            targets = session.channel_ids.len(),
            "starting file upload"
        );

        let mut state = UploadState::RequestingUrl;
        loop {
            state = match session.step(self, state).await? {
                UploadState::Done(response) => {
                    info!(file_name = %session.file_name, "file upload complete");
                    return Ok(UploadOutcome::Done(response));
                }
                UploadState::Aborted { stage, error } => {
                    return Ok(UploadOutcome::Aborted { stage, error });
                }
                next => next,
            };
        }
    }

    /// Continuation-style upload.
    ///
    /// `continuation` runs once with the success envelope when every step succeeds. When
    /// a step reports `ok=false` the failure is logged and the continuation is never
    /// called, so callers that need to observe aborts should use
    /// [`SlackClient::upload_file`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if any call cannot be completed or its response cannot be
    /// decoded.
    pub async fn upload_file_with<F>(
        &self,
        request: UploadRequest,
        continuation: F,
    ) -> Result<(), SlackError>
    where
        F: FnOnce(Response<FileUpload>),
    {
        if let UploadOutcome::Done(response) = self.upload_file(request).await? {
            continuation(response);
        }
        Ok(())
    }
}
