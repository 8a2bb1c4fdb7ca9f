//! Per-method convenience wrappers.
//!
//! Each wrapper assembles its parameters and goes through [`SlackClient::request`]
//! (or [`SlackClient::post_form`]) with the decoder for its payload. Argument structs
//! expose a pure `params()` so the exact wire parameters can be checked without a
//! network.
//!
//! [`SlackClient::request`]: crate::slack::SlackClient::request
//! [`SlackClient::post_form`]: crate::slack::SlackClient::post_form

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod files;
pub mod reactions;
pub mod search;
pub mod users;
pub mod views;

pub use chat::{
    MessageOptions, PostEphemeralRequest, PostMessageRequest, ScheduleMessageRequest,
    UpdateMessageRequest,
};
pub use conversations::{ConversationListQuery, HistoryQuery, MembersQuery};
pub use files::{CompleteUploadRequest, FileListQuery};
pub use search::{SearchQuery, SortDirection};
pub use users::Presence;
