use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the conversation as it is sent to the API.
///
/// Content is always plain text; every artifact is rendered to text before it
/// becomes a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageParam {
    /// The role of the message.
    pub role: MessageRole,

    /// The content of the message.
    pub content: String,
}

/// Role type for a message parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl MessageParam {
    /// Create a new `MessageParam` with the given content and role.
    pub fn new(content: impl Into<String>, role: MessageRole) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user `MessageParam`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::User)
    }

    /// Create a new assistant `MessageParam`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::Assistant)
    }
}

impl From<&str> for MessageParam {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for MessageParam {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn message_param_serializes_lowercase_role() {
        let message = MessageParam::user("Hello, Claude!");
        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": "Hello, Claude!"
            })
        );

        let message = MessageParam::assistant("Hi there");
        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "role": "assistant",
                "content": "Hi there"
            })
        );
    }

    #[test]
    fn message_param_from_str() {
        let message: MessageParam = "Hello".into();
        assert_eq!(message.role, MessageRole::User);
        assert_eq!(message.content, "Hello");
    }

    #[test]
    fn role_display() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Assistant.to_string(), "assistant");
    }
}
