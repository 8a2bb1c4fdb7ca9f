//! Workspace snapshot built from the handshake.
//!
//! A [`Session`] is an immutable value: lookups never change under a caller's feet, and
//! refreshing produces a new snapshot with a higher `version`. It is passed explicitly to
//! whatever needs id-to-entity resolution.

use std::collections::HashMap;

use tracing::info;

use crate::errors::SlackError;
use crate::slack::api::ConversationListQuery;
use crate::slack::client::SlackClient;
use crate::slack::models::{Channel, SelfInfo, Team, User};
use crate::slack::responses::Login;
use crate::slack::transport::Transport;

/// Conversation kinds requested when loading a session.
const ALL_CONVERSATION_TYPES: [&str; 4] = ["public_channel", "private_channel", "mpim", "im"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub version: u64,
    pub self_info: SelfInfo,
    pub team: Team,
    users: HashMap<String, User>,
    conversations: HashMap<String, Channel>,
}

impl Session {
    /// Version 0: identity only, empty lookups.
    #[must_use]
    pub fn from_login(login: Login) -> Self {
        Self {
            version: 0,
            self_info: login.self_info,
            team: login.team,
            users: HashMap::new(),
            conversations: HashMap::new(),
        }
    }

    /// A new snapshot with `users` merged into the user lookup.
    #[must_use]
    pub fn with_users(mut self, users: impl IntoIterator<Item = User>) -> Self {
        self.users
            .extend(users.into_iter().map(|u| (u.id.clone(), u)));
        self.version += 1;
        self
    }

    /// A new snapshot with `conversations` merged into the conversation lookup.
    #[must_use]
    pub fn with_conversations(mut self, conversations: impl IntoIterator<Item = Channel>) -> Self {
        self.conversations
            .extend(conversations.into_iter().map(|c| (c.id.clone(), c)));
        self.version += 1;
        self
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Channel> {
        self.conversations.get(id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Public channels.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.conversations
            .values()
            .filter(|c| c.is_channel && !c.is_private)
    }

    /// Private channels and multi-party direct messages.
    pub fn groups(&self) -> impl Iterator<Item = &Channel> {
        self.conversations
            .values()
            .filter(|c| c.is_group || c.is_mpim || (c.is_channel && c.is_private))
    }

    pub fn direct_messages(&self) -> impl Iterator<Item = &Channel> {
        self.conversations.values().filter(|c| c.is_im)
    }
}

impl<T: Transport> SlackClient<T> {
    /// Handshake, then page through every user and conversation visible to the token.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::ApiError`] if any call reports `ok=false`, or the transport or
    /// decode error of the first call that fails.
    pub async fn load_session(&self) -> Result<Session, SlackError> {
        let login = self.connect(None).await?.into_result()?;
        let mut session = Session::from_login(login);

        let mut users = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = self.users_list(cursor.as_deref()).await?.into_result()?;
            users.extend(page.members);
            match page.response_metadata.next() {
                Some(next) => cursor = Some(next.to_string()),
                None => break,
            }
        }
        session = session.with_users(users);

        let mut query = ConversationListQuery {
            types: ALL_CONVERSATION_TYPES.iter().map(|t| (*t).to_string()).collect(),
            ..ConversationListQuery::default()
        };
        let mut conversations = Vec::new();
        loop {
            let page = self.conversations_list(&query).await?.into_result()?;
            conversations.extend(page.channels);
            match page.response_metadata.next() {
                Some(next) => query.cursor = Some(next.to_string()),
                None => break,
            }
        }
        session = session.with_conversations(conversations);

        info!(
            team = %session.team.id,
            users = session.users.len(),
            conversations = session.conversations.len(),
            "session loaded"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> Login {
        Login {
            self_info: SelfInfo {
                id: "U0BOT".into(),
                name: "bot".into(),
            },
            team: Team {
                id: "T1".into(),
                name: "Acme".into(),
                domain: Some("acme".into()),
            },
            url: None,
        }
    }

    fn channel(id: &str, f: impl FnOnce(&mut Channel)) -> Channel {
        let mut c = Channel {
            id: id.into(),
            ..Channel::default()
        };
        f(&mut c);
        c
    }

    #[test]
    fn test_fresh_session_is_empty_version_zero() {
        let session = Session::from_login(login());
        assert_eq!(session.version, 0);
        assert_eq!(session.self_info.id, "U0BOT");
        assert!(session.user("U1").is_none());
    }

    #[test]
    fn test_each_refresh_bumps_the_version() {
        let session = Session::from_login(login())
            .with_users(vec![User {
                id: "U1".into(),
                name: "ada".into(),
                ..User::default()
            }])
            .with_conversations(vec![channel("C1", |c| c.is_channel = true)]);
        assert_eq!(session.version, 2);
        assert_eq!(session.user("U1").map(|u| u.name.as_str()), Some("ada"));
        assert!(session.conversation("C1").is_some());
    }

    #[test]
    fn test_conversations_are_split_by_kind() {
        let session = Session::from_login(login()).with_conversations(vec![
            channel("C1", |c| c.is_channel = true),
            channel("C2", |c| {
                c.is_channel = true;
                c.is_private = true;
            }),
            channel("G1", |c| c.is_group = true),
            channel("D1", |c| c.is_im = true),
        ]);
        let mut public: Vec<_> = session.channels().map(|c| c.id.as_str()).collect();
        let mut groups: Vec<_> = session.groups().map(|c| c.id.as_str()).collect();
        public.sort_unstable();
        groups.sort_unstable();
        assert_eq!(public, vec!["C1"]);
        assert_eq!(groups, vec!["C2", "G1"]);
        assert_eq!(session.direct_messages().count(), 1);
    }
}
