use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Ack, Response, decode};
use crate::slack::params::Params;
use crate::slack::payload::{Dialog, View, ViewType};
use crate::slack::responses::PublishedView;
use crate::slack::transport::Transport;

impl<T: Transport> SlackClient<T> {
    /// # Errors
    ///
    /// Returns an error if the dialog cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn open_dialog(
        &self,
        trigger_id: &str,
        dialog: &Dialog,
    ) -> Result<Response<Ack>, SlackError> {
        let params = Params::new()
            .push("trigger_id", trigger_id)
            .payload("dialog", Some(dialog))?;
        self.request("dialog.open", params, decode::<Ack>).await
    }

    /// Publish `view` as the App Home tab of `user_id`. The view type is forced to `home`.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot be encoded, or the request cannot be
    /// completed or decoded.
    pub async fn publish_home_tab(
        &self,
        user_id: &str,
        mut view: View,
    ) -> Result<Response<PublishedView>, SlackError> {
        view.kind = ViewType::Home;
        let params = Params::new()
            .push("user_id", user_id)
            .payload("view", Some(&view))?;
        self.request("views.publish", params, decode::<PublishedView>)
            .await
    }
}
