use serde::{Deserialize, Serialize};

use crate::types::Usage;

/// A reply from the messages endpoint.
///
/// Every field defaults so that a document with an unexpected shape still
/// decodes as far as possible; [`Message::reply_text`] reports what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique object identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The model that handled the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Content generated by the model.
    #[serde(default)]
    pub content: Vec<ContentBlock>,

    /// The reason generation stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,

    /// Billing and rate-limit usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One block of reply content.
///
/// Non-text blocks decode with `text` set to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentBlock {
    /// The block type, e.g. "text".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The text of a text block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The outcome of pulling reply text out of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyText<'a> {
    /// The first content block carried text.
    Text(&'a str),
    /// There was no first block, or it had no text.
    Missing,
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            r#type: Some("text".to_string()),
            text: Some(text.into()),
        }
    }
}

impl Message {
    /// The text of the first content block.
    pub fn reply_text(&self) -> ReplyText<'_> {
        match self.content.first().and_then(|block| block.text.as_deref()) {
            Some(text) => ReplyText::Text(text),
            None => ReplyText::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_block_is_the_reply() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4-5",
                "content": [
                    {"type": "text", "text": "first"},
                    {"type": "text", "text": "second"}
                ],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 10, "output_tokens": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(message.reply_text(), ReplyText::Text("first"));
        assert_eq!(message.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(message.usage, Some(Usage::new(10, 2)));
    }

    #[test]
    fn missing_content_is_reported() {
        let message: Message = serde_json::from_str(r#"{"id": "msg_01"}"#).unwrap();
        assert_eq!(message.reply_text(), ReplyText::Missing);

        let message: Message = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_eq!(message.reply_text(), ReplyText::Missing);
    }

    #[test]
    fn non_text_first_block_is_missing() {
        let message: Message = serde_json::from_str(
            r#"{"content": [
                {"type": "thinking", "thinking": "hmm", "signature": "sig"},
                {"type": "text", "text": "answer"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(message.reply_text(), ReplyText::Missing);
    }

    #[test]
    fn wrong_shape_fails_to_decode() {
        assert!(serde_json::from_str::<Message>(r#"{"content": "text"}"#).is_err());
    }
}
