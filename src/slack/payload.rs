//! Structured request payloads and their compact encoding.
//!
//! Blocks, attachments, dialogs and views travel as a single JSON-encoded form value.
//! [`encode`] drops every `null` at any depth (so unset optional fields never reach
//! Slack) and emits no whitespace. `serde_json` maps are ordered by key, so the output
//! for a given value is byte-for-byte stable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SlackError;

/// Serialize `value` to compact JSON with absent fields removed.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, SlackError> {
    let mut tree = serde_json::to_value(value)
        .map_err(|e| SlackError::EncodeError(e.to_string()))?;
    strip_nulls(&mut tree);
    serde_json::to_string(&tree).map_err(|e| SlackError::EncodeError(e.to_string()))
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

/// Block Kit text object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub emoji: Option<bool>,
    pub verbatim: Option<bool>,
}

impl TextObject {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "plain_text".to_string(),
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A layout block. Interactive elements and accessories are passed through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    pub block_id: Option<String>,
    pub text: Option<TextObject>,
    pub fields: Option<Vec<TextObject>>,
    pub elements: Option<Vec<Value>>,
    pub accessory: Option<Value>,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
}

impl Block {
    #[must_use]
    pub fn section(text: TextObject) -> Self {
        Self {
            kind: "section".to_string(),
            text: Some(text),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn divider() -> Self {
        Self {
            kind: "divider".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: Option<bool>,
}

/// Legacy secondary message attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: Option<String>,
    pub color: Option<String>,
    pub pretext: Option<String>,
    pub author_name: Option<String>,
    pub author_link: Option<String>,
    pub title: Option<String>,
    pub title_link: Option<String>,
    pub text: Option<String>,
    pub fields: Option<Vec<AttachmentField>>,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub footer: Option<String>,
    pub ts: Option<String>,
    pub mrkdwn_in: Option<Vec<String>>,
    pub blocks: Option<Vec<Block>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub name: String,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub optional: Option<bool>,
    pub subtype: Option<String>,
    pub max_length: Option<u32>,
    pub min_length: Option<u32>,
    pub options: Option<Vec<Value>>,
}

/// Legacy `dialog.open` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub callback_id: String,
    pub title: String,
    pub submit_label: Option<String>,
    pub notify_on_cancel: Option<bool>,
    pub state: Option<String>,
    pub elements: Vec<DialogElement>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    #[default]
    Home,
    Modal,
}

/// A Block Kit surface for `views.*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(rename = "type")]
    pub kind: ViewType,
    pub blocks: Vec<Block>,
    pub title: Option<TextObject>,
    pub close: Option<TextObject>,
    pub submit: Option<TextObject>,
    pub callback_id: Option<String>,
    pub private_metadata: Option<String>,
    pub external_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_unset_fields() {
        let block = Block::section(TextObject::markdown("*hi*"));
        assert_eq!(
            encode(&block).unwrap(),
            r#"{"text":{"text":"*hi*","type":"mrkdwn"},"type":"section"}"#
        );
    }

    #[test]
    fn test_strips_nulls_inside_raw_values() {
        let value = json!({"a": null, "b": [{"c": null, "d": 1}], "e": "x"});
        assert_eq!(encode(&value).unwrap(), r#"{"b":[{"d":1}],"e":"x"}"#);
    }

    #[test]
    fn test_output_is_stable() {
        let attachment = Attachment {
            title: Some("Deploy".into()),
            color: Some("#36a64f".into()),
            fields: Some(vec![AttachmentField {
                title: "env".into(),
                value: "prod".into(),
                short: Some(true),
            }]),
            ..Attachment::default()
        };
        let first = encode(&[attachment.clone()]).unwrap();
        let second = encode(&[attachment]).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            r##"[{"color":"#36a64f","fields":[{"short":true,"title":"env","value":"prod"}],"title":"Deploy"}]"##
        );
    }

    #[test]
    fn test_view_type_is_snake_case() {
        let view = View {
            kind: ViewType::Home,
            blocks: vec![Block::divider()],
            ..View::default()
        };
        assert_eq!(
            encode(&view).unwrap(),
            r#"{"blocks":[{"type":"divider"}],"type":"home"}"#
        );
    }
}
