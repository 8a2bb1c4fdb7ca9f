use crate::core::Timestamp;
use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Ack, Response, decode};
use crate::slack::params::{BoolFormat, Params};
use crate::slack::responses::{
    ConversationHistory, ConversationInfo, ConversationList, ConversationMembers, PurposeChange,
    TopicChange,
};
use crate::slack::transport::Transport;

/// Arguments of `conversations.list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationListQuery {
    pub cursor: Option<String>,
    pub exclude_archived: bool,
    /// Page size; zero leaves it to the service.
    pub limit: u32,
    /// Conversation kinds such as `public_channel` or `im`; empty means the default.
    pub types: Vec<String>,
}

impl Default for ConversationListQuery {
    fn default() -> Self {
        Self {
            cursor: None,
            exclude_archived: true,
            limit: 100,
            types: Vec::new(),
        }
    }
}

impl ConversationListQuery {
    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .flag("exclude_archived", Some(self.exclude_archived), BoolFormat::Numeric)
            .number("limit", Some(self.limit).filter(|l| *l > 0))
            .list("types", &self.types)
            .text("cursor", self.cursor.as_deref())
    }
}

/// Arguments of `conversations.members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembersQuery {
    pub channel: String,
    pub cursor: Option<String>,
    pub limit: u32,
}

impl MembersQuery {
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            cursor: None,
            limit: 100,
        }
    }

    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .push("channel", self.channel.as_str())
            .number("limit", Some(self.limit).filter(|l| *l > 0))
            .text("cursor", self.cursor.as_deref())
    }
}

/// Arguments of `conversations.history`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub channel: String,
    pub latest: Option<Timestamp>,
    pub oldest: Option<Timestamp>,
    pub limit: Option<u32>,
    pub unreads: Option<bool>,
}

impl HistoryQuery {
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .push("channel", self.channel.as_str())
            .timestamp("latest", self.latest)
            .timestamp("oldest", self.oldest)
            .number("limit", self.limit)
            .flag("unreads", self.unreads, BoolFormat::Numeric)
    }
}

impl<T: Transport> SlackClient<T> {
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn conversations_list(
        &self,
        query: &ConversationListQuery,
    ) -> Result<Response<ConversationList>, SlackError> {
        self.request("conversations.list", query.params(), decode::<ConversationList>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn conversation_members(
        &self,
        query: &MembersQuery,
    ) -> Result<Response<ConversationMembers>, SlackError> {
        self.request("conversations.members", query.params(), decode::<ConversationMembers>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn conversation_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Response<ConversationHistory>, SlackError> {
        self.request("conversations.history", query.params(), decode::<ConversationHistory>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn archive_conversation(&self, channel: &str) -> Result<Response<Ack>, SlackError> {
        self.request("conversations.archive", channel_param(channel), decode::<Ack>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn unarchive_conversation(&self, channel: &str) -> Result<Response<Ack>, SlackError> {
        self.request("conversations.unarchive", channel_param(channel), decode::<Ack>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn close_conversation(&self, channel: &str) -> Result<Response<Ack>, SlackError> {
        self.request("conversations.close", channel_param(channel), decode::<Ack>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn create_conversation(
        &self,
        name: &str,
    ) -> Result<Response<ConversationInfo>, SlackError> {
        let params = Params::new().push("name", name);
        self.request("conversations.create", params, decode::<ConversationInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn invite_to_conversation<S: AsRef<str>>(
        &self,
        channel: &str,
        users: &[S],
    ) -> Result<Response<ConversationInfo>, SlackError> {
        let params = channel_param(channel).list("users", users);
        self.request("conversations.invite", params, decode::<ConversationInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn join_conversation(
        &self,
        channel: &str,
    ) -> Result<Response<ConversationInfo>, SlackError> {
        self.request("conversations.join", channel_param(channel), decode::<ConversationInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn kick_from_conversation(
        &self,
        channel: &str,
        user: &str,
    ) -> Result<Response<Ack>, SlackError> {
        let params = channel_param(channel).push("user", user);
        self.request("conversations.kick", params, decode::<Ack>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn leave_conversation(&self, channel: &str) -> Result<Response<Ack>, SlackError> {
        self.request("conversations.leave", channel_param(channel), decode::<Ack>)
            .await
    }

    /// Move the read cursor of `channel` to `ts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn mark_conversation(
        &self,
        channel: &str,
        ts: Timestamp,
    ) -> Result<Response<Ack>, SlackError> {
        let params = channel_param(channel).push("ts", ts.to_string());
        self.request("conversations.mark", params, decode::<Ack>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn open_conversation(
        &self,
        channel: &str,
    ) -> Result<Response<ConversationInfo>, SlackError> {
        self.request("conversations.open", channel_param(channel), decode::<ConversationInfo>)
            .await
    }

    /// Open (or resume) a direct message with `user`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn open_direct_message(
        &self,
        user: &str,
    ) -> Result<Response<ConversationInfo>, SlackError> {
        let params = Params::new().push("users", user);
        self.request("conversations.open", params, decode::<ConversationInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn rename_conversation(
        &self,
        channel: &str,
        name: &str,
    ) -> Result<Response<ConversationInfo>, SlackError> {
        let params = channel_param(channel).push("name", name);
        self.request("conversations.rename", params, decode::<ConversationInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn set_conversation_purpose(
        &self,
        channel: &str,
        purpose: &str,
    ) -> Result<Response<PurposeChange>, SlackError> {
        let params = channel_param(channel).push("purpose", purpose);
        self.request("conversations.setPurpose", params, decode::<PurposeChange>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn set_conversation_topic(
        &self,
        channel: &str,
        topic: &str,
    ) -> Result<Response<TopicChange>, SlackError> {
        let params = channel_param(channel).push("topic", topic);
        self.request("conversations.setTopic", params, decode::<TopicChange>)
            .await
    }
}

fn channel_param(channel: &str) -> Params {
    Params::new().push("channel", channel)
}
