use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Response, decode};
use crate::slack::params::Params;
use crate::slack::responses::{AuthIdentity, Login};
use crate::slack::transport::Transport;

/// Agent string sent with the `rtm.connect` handshake.
pub const DEFAULT_AGENT: &str = concat!("slackapi/", env!("CARGO_PKG_VERSION"));

impl<T: Transport> SlackClient<T> {
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn auth_test(&self) -> Result<Response<AuthIdentity>, SlackError> {
        self.request("auth.test", Params::new(), decode::<AuthIdentity>)
            .await
    }

    /// Handshake: identify the token's user and workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn connect(&self, agent: Option<&str>) -> Result<Response<Login>, SlackError> {
        let params = Params::new().push("agent", agent.unwrap_or(DEFAULT_AGENT));
        self.request("rtm.connect", params, decode::<Login>).await
    }

    /// [`SlackClient::connect`] with the login envelope handed to `continuation`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded; the continuation
    /// is not called in that case.
    pub async fn connect_with<F>(
        &self,
        agent: Option<&str>,
        continuation: F,
    ) -> Result<(), SlackError>
    where
        F: FnOnce(Response<Login>),
    {
        let params = Params::new().push("agent", agent.unwrap_or(DEFAULT_AGENT));
        self.request_with("rtm.connect", params, decode::<Login>, continuation)
            .await
    }
}
