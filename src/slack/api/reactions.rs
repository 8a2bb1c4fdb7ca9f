use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Ack, Response, decode};
use crate::slack::params::Params;
use crate::slack::responses::StarList;
use crate::slack::transport::Transport;

impl<T: Transport> SlackClient<T> {
    /// Add the emoji `name` to the message at `timestamp` in `channel`. Empty arguments
    /// are left out of the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn add_reaction(
        &self,
        name: Option<&str>,
        channel: Option<&str>,
        timestamp: Option<&str>,
    ) -> Result<Response<Ack>, SlackError> {
        let params = Params::new()
            .text("name", name)
            .text("channel", channel)
            .text("timestamp", timestamp);
        self.request("reactions.add", params, decode::<Ack>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn stars_list(
        &self,
        user: Option<&str>,
        count: Option<u32>,
        page: Option<u32>,
    ) -> Result<Response<StarList>, SlackError> {
        let params = Params::new()
            .text("user", user)
            .number("count", count)
            .number("page", page);
        self.request("stars.list", params, decode::<StarList>).await
    }
}
