use std::fmt;

use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Ack, Response, decode};
use crate::slack::params::Params;
use crate::slack::responses::{PresenceInfo, UserInfo, UserList};
use crate::slack::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Auto,
    Away,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Presence::Auto => "auto",
            Presence::Away => "away",
        })
    }
}

impl<T: Transport> SlackClient<T> {
    /// One page of workspace members; pass the previous page's cursor to continue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn users_list(&self, cursor: Option<&str>) -> Result<Response<UserList>, SlackError> {
        let params = Params::new().text("cursor", cursor);
        self.request("users.list", params, decode::<UserList>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn user_by_email(&self, email: &str) -> Result<Response<UserInfo>, SlackError> {
        let params = Params::new().push("email", email);
        self.request("users.lookupByEmail", params, decode::<UserInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn user_info(&self, user: &str) -> Result<Response<UserInfo>, SlackError> {
        let params = Params::new().push("user", user);
        self.request("users.info", params, decode::<UserInfo>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn user_presence(&self, user: &str) -> Result<Response<PresenceInfo>, SlackError> {
        let params = Params::new().push("user", user);
        self.request("users.getPresence", params, decode::<PresenceInfo>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn set_presence(&self, presence: Presence) -> Result<Response<Ack>, SlackError> {
        let params = Params::new().push("presence", presence.to_string());
        self.request("users.setPresence", params, decode::<Ack>).await
    }
}
