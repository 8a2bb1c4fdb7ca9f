use crate::core::Timestamp;
use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Response, decode};
use crate::slack::params::{BoolFormat, Params};
use crate::slack::payload::{Attachment, Block};
use crate::slack::responses::{
    DeletedMessage, EphemeralMessage, PostedMessage, ScheduledMessage, UpdatedMessage,
};
use crate::slack::transport::Transport;

/// Optional presentation arguments shared by the message-posting methods.
///
/// `link_names` is sent as `1` only when set; `unfurl_links` is spelled `true`/`false`;
/// `as_user` is spelled `True`/`False`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
    pub username: Option<String>,
    pub parse: Option<String>,
    pub link_names: bool,
    pub blocks: Vec<Block>,
    pub attachments: Vec<Attachment>,
    pub unfurl_links: Option<bool>,
    pub icon_url: Option<String>,
    pub icon_emoji: Option<String>,
    pub as_user: Option<bool>,
    pub thread_ts: Option<String>,
}

impl MessageOptions {
    fn append(&self, params: Params) -> Result<Params, SlackError> {
        let params = params
            .text("username", self.username.as_deref())
            .text("parse", self.parse.as_deref())
            .switch("link_names", self.link_names)
            .payload_list("blocks", &self.blocks)?
            .payload_list("attachments", &self.attachments)?
            .flag("unfurl_links", self.unfurl_links, BoolFormat::Lowercase)
            .text("icon_url", self.icon_url.as_deref())
            .text("icon_emoji", self.icon_emoji.as_deref())
            .flag("as_user", self.as_user, BoolFormat::Capitalized)
            .text("thread_ts", self.thread_ts.as_deref());
        Ok(params)
    }
}

/// Arguments of `chat.postMessage`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostMessageRequest {
    pub channel: String,
    pub text: String,
    pub options: MessageOptions,
}

impl PostMessageRequest {
    #[must_use]
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            options: MessageOptions::default(),
        }
    }

    #[must_use]
    pub fn in_thread(mut self, thread_ts: impl Into<String>) -> Self {
        self.options.thread_ts = Some(thread_ts.into());
        self
    }

    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.options.blocks = blocks;
        self
    }

    /// # Errors
    ///
    /// Returns an error if blocks or attachments cannot be encoded.
    pub fn params(&self) -> Result<Params, SlackError> {
        let params = Params::new()
            .push("channel", self.channel.as_str())
            .push("text", self.text.as_str());
        self.options.append(params)
    }
}

/// Arguments of `chat.scheduleMessage`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMessageRequest {
    pub channel: String,
    pub text: String,
    pub post_at: Timestamp,
    pub options: MessageOptions,
}

impl ScheduleMessageRequest {
    #[must_use]
    pub fn new(channel: impl Into<String>, text: impl Into<String>, post_at: Timestamp) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            post_at,
            options: MessageOptions::default(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if blocks or attachments cannot be encoded.
    pub fn params(&self) -> Result<Params, SlackError> {
        // post_at takes whole seconds, unlike message timestamps.
        let params = Params::new()
            .push("channel", self.channel.as_str())
            .push("text", self.text.as_str())
            .push("post_at", self.post_at.unix_seconds().to_string());
        self.options.append(params)
    }
}

/// Arguments of `chat.postEphemeral`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostEphemeralRequest {
    pub channel: String,
    pub text: String,
    pub user: String,
    pub parse: Option<String>,
    pub link_names: bool,
    pub blocks: Vec<Block>,
    pub attachments: Vec<Attachment>,
    /// Always sent.
    pub as_user: bool,
    pub thread_ts: Option<String>,
}

impl PostEphemeralRequest {
    #[must_use]
    pub fn new(
        channel: impl Into<String>,
        text: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            user: user.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns an error if blocks or attachments cannot be encoded.
    pub fn params(&self) -> Result<Params, SlackError> {
        let params = Params::new()
            .push("channel", self.channel.as_str())
            .push("text", self.text.as_str())
            .push("user", self.user.as_str())
            .text("parse", self.parse.as_deref())
            .switch("link_names", self.link_names)
            .payload_list("blocks", &self.blocks)?
            .payload_list("attachments", &self.attachments)?
            .flag("as_user", Some(self.as_user), BoolFormat::Capitalized)
            .text("thread_ts", self.thread_ts.as_deref());
        Ok(params)
    }
}

/// Arguments of `chat.update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMessageRequest {
    pub ts: String,
    pub channel: String,
    pub text: String,
    pub username: Option<String>,
    pub parse: Option<String>,
    pub link_names: bool,
    pub blocks: Vec<Block>,
    pub attachments: Vec<Attachment>,
    pub as_user: Option<bool>,
}

impl UpdateMessageRequest {
    #[must_use]
    pub fn new(channel: impl Into<String>, ts: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            ts: ts.into(),
            channel: channel.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns an error if blocks or attachments cannot be encoded.
    pub fn params(&self) -> Result<Params, SlackError> {
        let params = Params::new()
            .push("ts", self.ts.as_str())
            .push("channel", self.channel.as_str())
            .push("text", self.text.as_str())
            .text("username", self.username.as_deref())
            .text("parse", self.parse.as_deref())
            .switch("link_names", self.link_names)
            .payload_list("blocks", &self.blocks)?
            .payload_list("attachments", &self.attachments)?
            .flag("as_user", self.as_user, BoolFormat::Capitalized);
        Ok(params)
    }
}

impl<T: Transport> SlackClient<T> {
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn post_message(
        &self,
        request: &PostMessageRequest,
    ) -> Result<Response<PostedMessage>, SlackError> {
        self.request("chat.postMessage", request.params()?, decode::<PostedMessage>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn post_ephemeral(
        &self,
        request: &PostEphemeralRequest,
    ) -> Result<Response<EphemeralMessage>, SlackError> {
        self.request("chat.postEphemeral", request.params()?, decode::<EphemeralMessage>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn schedule_message(
        &self,
        request: &ScheduleMessageRequest,
    ) -> Result<Response<ScheduledMessage>, SlackError> {
        self.request("chat.scheduleMessage", request.params()?, decode::<ScheduledMessage>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn update_message(
        &self,
        request: &UpdateMessageRequest,
    ) -> Result<Response<UpdatedMessage>, SlackError> {
        self.request("chat.update", request.params()?, decode::<UpdatedMessage>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn delete_message(
        &self,
        channel: &str,
        ts: Timestamp,
    ) -> Result<Response<DeletedMessage>, SlackError> {
        let params = Params::new()
            .push("ts", ts.to_string())
            .push("channel", channel);
        self.request("chat.delete", params, decode::<DeletedMessage>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::payload::TextObject;

    #[test]
    fn test_plain_post_sends_channel_and_text_only() {
        let params = PostMessageRequest::new("C1", "hello").params().unwrap();
        let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["channel", "text"]);
    }

    #[test]
    fn test_post_options_use_their_own_bool_spelling() {
        let mut request = PostMessageRequest::new("C1", "hello").in_thread("1503435956.000247");
        request.options.unfurl_links = Some(true);
        request.options.as_user = Some(false);
        request.options.link_names = true;
        let params = request.params().unwrap();
        assert_eq!(params.get("unfurl_links"), Some("true"));
        assert_eq!(params.get("as_user"), Some("False"));
        assert_eq!(params.get("link_names"), Some("1"));
        assert_eq!(params.get("thread_ts"), Some("1503435956.000247"));
    }

    #[test]
    fn test_blocks_are_encoded_compactly() {
        let request = PostMessageRequest::new("C1", "fallback")
            .with_blocks(vec![Block::section(TextObject::markdown("*deploy* done"))]);
        let params = request.params().unwrap();
        assert_eq!(
            params.get("blocks"),
            Some(r#"[{"text":{"text":"*deploy* done","type":"mrkdwn"},"type":"section"}]"#)
        );
        assert!(!params.contains("attachments"));
    }

    #[test]
    fn test_ephemeral_always_sends_as_user() {
        let params = PostEphemeralRequest::new("C1", "psst", "U1").params().unwrap();
        assert_eq!(params.get("as_user"), Some("False"));
        assert_eq!(params.get("user"), Some("U1"));
    }

    #[test]
    fn test_schedule_uses_whole_seconds() {
        let post_at: Timestamp = "1700000000.750000".parse().unwrap();
        let params = ScheduleMessageRequest::new("C1", "later", post_at)
            .params()
            .unwrap();
        assert_eq!(params.get("post_at"), Some("1700000000"));
    }

    #[test]
    fn test_update_starts_with_ts() {
        let params = UpdateMessageRequest::new("C1", "1.000001", "edited")
            .params()
            .unwrap();
        let names: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["ts", "channel", "text"]);
    }
}
