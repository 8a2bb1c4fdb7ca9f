use std::collections::BTreeSet;

use crate::core::Timestamp;
use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Ack, Response, decode};
use crate::slack::models::FileRef;
use crate::slack::params::{FileType, Params};
use crate::slack::payload;
use crate::slack::responses::{CompletedUpload, FileInfo, FileList, UploadTarget};
use crate::slack::transport::{FormPart, Transport};

/// Arguments of `files.list`. An empty `types` set lists every kind of file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListQuery {
    pub user: Option<String>,
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub types: BTreeSet<FileType>,
    pub count: Option<u32>,
    pub page: Option<u32>,
    pub channel: Option<String>,
}

impl FileListQuery {
    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .text("user", self.user.as_deref())
            .timestamp("ts_from", self.from)
            .timestamp("ts_to", self.to)
            .file_types("types", &self.types)
            .number("count", self.count)
            .number("page", self.page)
            .text("channel", self.channel.as_deref())
    }
}

/// Arguments of `files.completeUploadExternal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteUploadRequest {
    pub file_id: String,
    pub title: String,
    pub channel_ids: Vec<String>,
    pub initial_comment: Option<String>,
    pub thread_ts: Option<String>,
}

impl CompleteUploadRequest {
    /// Form fields for the registration call.
    ///
    /// A single target goes out as `channel_id`; two or more are comma-joined under
    /// `channels`. No target sends neither, leaving the file private.
    ///
    /// # Errors
    ///
    /// Returns an error if the file descriptor list cannot be encoded.
    pub fn form_parts(&self) -> Result<Vec<FormPart>, SlackError> {
        let files = [FileRef {
            id: self.file_id.clone(),
            title: Some(self.title.clone()),
        }];
        let mut parts = vec![FormPart::text("files", payload::encode(&files)?)];

        match self.channel_ids.as_slice() {
            [] => {}
            [only] => parts.push(FormPart::text("channel_id", only.as_str())),
            many => parts.push(FormPart::text("channels", many.join(","))),
        }
        if let Some(comment) = self.initial_comment.as_deref().filter(|c| !c.is_empty()) {
            parts.push(FormPart::text("initial_comment", comment));
        }
        if let Some(ts) = self.thread_ts.as_deref().filter(|t| !t.is_empty()) {
            parts.push(FormPart::text("thread_ts", ts));
        }
        Ok(parts)
    }
}

impl<T: Transport> SlackClient<T> {
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn files_list(
        &self,
        query: &FileListQuery,
    ) -> Result<Response<FileList>, SlackError> {
        self.request("files.list", query.params(), decode::<FileList>)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn file_info(
        &self,
        file: &str,
        page: Option<u32>,
        count: Option<u32>,
    ) -> Result<Response<FileInfo>, SlackError> {
        let params = Params::new()
            .push("file", file)
            .number("count", count)
            .number("page", page);
        self.request("files.info", params, decode::<FileInfo>).await
    }

    /// Delete a file. An empty id issues no request and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn delete_file(&self, file: &str) -> Result<Option<Response<Ack>>, SlackError> {
        if file.is_empty() {
            return Ok(None);
        }
        let params = Params::new().push("file", file);
        self.request("files.delete", params, decode::<Ack>)
            .await
            .map(Some)
    }

    /// Reserve an upload URL for `length` bytes named `file_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn upload_url_external(
        &self,
        file_name: &str,
        length: usize,
    ) -> Result<Response<UploadTarget>, SlackError> {
        let params = Params::new()
            .push("filename", file_name)
            .push("length", length.to_string());
        self.request("files.getUploadURLExternal", params, decode::<UploadTarget>)
            .await
    }

    /// Register uploaded bytes as a file and share it to the requested targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be built, or the request cannot be completed
    /// or decoded.
    pub async fn complete_upload_external(
        &self,
        request: &CompleteUploadRequest,
    ) -> Result<Response<CompletedUpload>, SlackError> {
        self.post_form(
            "files.completeUploadExternal",
            request.form_parts()?,
            decode::<CompletedUpload>,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(channels: &[&str]) -> CompleteUploadRequest {
        CompleteUploadRequest {
            file_id: "F1".into(),
            title: "report.pdf".into(),
            channel_ids: channels.iter().map(|c| (*c).to_string()).collect(),
            ..CompleteUploadRequest::default()
        }
    }

    fn names(parts: &[FormPart]) -> Vec<&str> {
        parts.iter().map(FormPart::name).collect()
    }

    #[test]
    fn test_files_descriptor_is_json() {
        let parts = request(&[]).form_parts().unwrap();
        assert_eq!(parts[0].value(), Some(r#"[{"id":"F1","title":"report.pdf"}]"#));
        assert_eq!(names(&parts), vec!["files"]);
    }

    #[test]
    fn test_one_target_uses_channel_id() {
        let parts = request(&["C1"]).form_parts().unwrap();
        assert_eq!(names(&parts), vec!["files", "channel_id"]);
        assert_eq!(parts[1].value(), Some("C1"));
    }

    #[test]
    fn test_several_targets_use_channels() {
        let parts = request(&["C1", "C2"]).form_parts().unwrap();
        assert_eq!(names(&parts), vec!["files", "channels"]);
        assert_eq!(parts[1].value(), Some("C1,C2"));
    }

    #[test]
    fn test_optional_comment_and_thread() {
        let mut req = request(&["C1"]);
        req.initial_comment = Some("here you go".into());
        req.thread_ts = Some(String::new());
        let parts = req.form_parts().unwrap();
        assert_eq!(names(&parts), vec!["files", "channel_id", "initial_comment"]);
    }

    #[test]
    fn test_list_query_orders_and_omits() {
        let query = FileListQuery {
            user: Some("U1".into()),
            types: BTreeSet::from([FileType::Zips, FileType::Images]),
            page: Some(2),
            ..FileListQuery::default()
        };
        assert_eq!(
            query.params().into_vec(),
            vec![
                ("user".to_string(), "U1".to_string()),
                ("types".to_string(), "images,zips".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }
}
