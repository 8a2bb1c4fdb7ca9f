use std::fmt;

use serde::de::DeserializeOwned;

use crate::errors::SlackError;
use crate::slack::client::SlackClient;
use crate::slack::envelope::{Response, decode};
use crate::slack::params::Params;
use crate::slack::responses::{SearchAll, SearchFiles, SearchMessages};
use crate::slack::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

/// Arguments shared by `search.all`, `search.messages` and `search.files`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    /// `score` or `timestamp`.
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
    pub highlight: bool,
    pub count: Option<u32>,
    pub page: Option<u32>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .push("query", self.query.as_str())
            .text("sort", self.sort.as_deref())
            .number("sort_dir", self.sort_dir)
            .switch("highlight", self.highlight)
            .number("count", self.count)
            .number("page", self.page)
    }
}

impl<T: Transport> SlackClient<T> {
    async fn search<R: DeserializeOwned>(
        &self,
        method: &str,
        query: &SearchQuery,
    ) -> Result<Response<R>, SlackError> {
        self.request(method, query.params(), decode::<R>).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn search_all(&self, query: &SearchQuery) -> Result<Response<SearchAll>, SlackError> {
        self.search("search.all", query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn search_messages(
        &self,
        query: &SearchQuery,
    ) -> Result<Response<SearchMessages>, SlackError> {
        self.search("search.messages", query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or decoded.
    pub async fn search_files(
        &self,
        query: &SearchQuery,
    ) -> Result<Response<SearchFiles>, SlackError> {
        self.search("search.files", query).await
    }
}
