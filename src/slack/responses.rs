//! Operation payloads: the fields each method returns next to `ok`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::slack::models::{
    Channel, File, FileRef, Message, Paging, ResponseMetadata, SelfInfo, Team, User,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthIdentity {
    pub url: Option<String>,
    pub team: Option<String>,
    pub user: Option<String>,
    pub team_id: String,
    pub user_id: String,
    pub bot_id: Option<String>,
}

/// `rtm.connect`: who we are and which workspace we joined.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Login {
    #[serde(rename = "self")]
    pub self_info: SelfInfo,
    pub team: Team,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInfo {
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PresenceInfo {
    pub presence: String,
    pub online: Option<bool>,
    pub auto_away: Option<bool>,
    pub manual_away: Option<bool>,
    pub last_activity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationList {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationMembers {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationHistory {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

/// Methods that answer with the affected conversation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationInfo {
    pub channel: Channel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PurposeChange {
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopicChange {
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostedMessage {
    pub channel: String,
    pub ts: String,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EphemeralMessage {
    pub message_ts: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScheduledMessage {
    pub channel: String,
    pub scheduled_message_id: String,
    pub post_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdatedMessage {
    pub channel: String,
    pub ts: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeletedMessage {
    pub channel: String,
    pub ts: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<File>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileInfo {
    pub file: File,
    #[serde(default)]
    pub comments: Vec<Value>,
    pub paging: Option<Paging>,
}

/// `files.getUploadURLExternal`: where to send the bytes and the id they will get.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadTarget {
    pub upload_url: String,
    pub file_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompletedUpload {
    #[serde(default)]
    pub files: Vec<FileRef>,
}

/// Result of the full upload pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    pub file: File,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchMatches<T> {
    #[serde(default = "Vec::new")]
    pub matches: Vec<T>,
    pub total: Option<u32>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchAll {
    pub query: Option<String>,
    pub messages: Option<SearchMatches<Message>>,
    pub files: Option<SearchMatches<File>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchMessages {
    pub query: Option<String>,
    pub messages: SearchMatches<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchFiles {
    pub query: Option<String>,
    pub files: SearchMatches<File>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StarList {
    #[serde(default)]
    pub items: Vec<Value>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublishedView {
    pub view: Value,
}
