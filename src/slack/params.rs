//! Request parameter assembly.
//!
//! Every operation turns its typed, mostly optional arguments into an ordered list of
//! string pairs. The rules are the same everywhere: empty strings, missing scalars and
//! empty lists are left out, and structured payloads are JSON-encoded into a single
//! value. Boolean spelling is *not* uniform across Slack methods, so each call site picks
//! a [`BoolFormat`].

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use serde::Serialize;

use crate::core::Timestamp;
use crate::errors::SlackError;
use crate::slack::payload;

/// How a boolean argument is spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolFormat {
    /// `"1"` / `"0"`
    Numeric,
    /// `"true"` / `"false"`
    Lowercase,
    /// `"True"` / `"False"`
    Capitalized,
}

impl BoolFormat {
    #[must_use]
    pub fn render(self, value: bool) -> &'static str {
        match (self, value) {
            (BoolFormat::Numeric, true) => "1",
            (BoolFormat::Numeric, false) => "0",
            (BoolFormat::Lowercase, true) => "true",
            (BoolFormat::Lowercase, false) => "false",
            (BoolFormat::Capitalized, true) => "True",
            (BoolFormat::Capitalized, false) => "False",
        }
    }
}

/// File categories accepted by the `types` filter of `files.list`.
///
/// Declaration order is the order values appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    Spaces,
    Snippets,
    Images,
    Gdocs,
    Zips,
    Pdfs,
}

impl FileType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Spaces => "spaces",
            FileType::Snippets => "snippets",
            FileType::Images => "images",
            FileType::Gdocs => "gdocs",
            FileType::Zips => "zips",
            FileType::Pdfs => "pdfs",
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always appends, whatever the value.
    #[must_use]
    pub fn push(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.push((name.to_string(), value.into()));
        self
    }

    /// Appends when the string is present and non-empty.
    #[must_use]
    pub fn text(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.push(name, v),
            _ => self,
        }
    }

    /// Appends a scalar when present.
    #[must_use]
    pub fn number<N: Display>(self, name: &str, value: Option<N>) -> Self {
        match value {
            Some(v) => self.push(name, v.to_string()),
            None => self,
        }
    }

    /// Appends a boolean when present, spelled per `format`.
    #[must_use]
    pub fn flag(self, name: &str, value: Option<bool>, format: BoolFormat) -> Self {
        match value {
            Some(v) => self.push(name, format.render(v)),
            None => self,
        }
    }

    /// Appends `"1"` only when the switch is on; an off switch is simply not sent.
    #[must_use]
    pub fn switch(self, name: &str, on: bool) -> Self {
        if on { self.push(name, "1") } else { self }
    }

    /// Appends the comma-joined list when it is non-empty.
    #[must_use]
    pub fn list<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, joined)
    }

    /// Appends the file-type filter; an empty set means "all types" and is not sent.
    #[must_use]
    pub fn file_types(self, name: &str, types: &BTreeSet<FileType>) -> Self {
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        self.list(name, &names)
    }

    #[must_use]
    pub fn timestamp(self, name: &str, value: Option<Timestamp>) -> Self {
        match value {
            Some(ts) => self.push(name, ts.to_string()),
            None => self,
        }
    }

    /// Appends an encoded structured value when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn payload<P: Serialize + ?Sized>(
        self,
        name: &str,
        value: Option<&P>,
    ) -> Result<Self, SlackError> {
        match value {
            Some(v) => Ok(self.push(name, payload::encode(v)?)),
            None => Ok(self),
        }
    }

    /// Appends an encoded array when it has at least one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the elements cannot be serialized.
    pub fn payload_list<P: Serialize>(self, name: &str, values: &[P]) -> Result<Self, SlackError> {
        if values.is_empty() {
            Ok(self)
        } else {
            Ok(self.push(name, payload::encode(values)?))
        }
    }

    /// First value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
