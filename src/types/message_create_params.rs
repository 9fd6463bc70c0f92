use serde::{Deserialize, Serialize};

use crate::types::{MessageParam, Model};

/// The request body for `POST /v1/messages`.
///
/// Only the fields this client sends are modeled: the model, the output
/// budget, and the whole conversation in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageCreateParams {
    /// The model that will complete the prompt.
    pub model: Model,

    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,

    /// Input messages, oldest first.
    ///
    /// Consecutive user turns are allowed; they are sent exactly as recorded.
    pub messages: Vec<MessageParam>,
}

impl MessageCreateParams {
    /// Create a new request from a model, token budget and conversation.
    pub fn new(model: Model, max_tokens: u32, messages: Vec<MessageParam>) -> Self {
        Self {
            model,
            max_tokens,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;
    use serde_json::{json, to_value};

    #[test]
    fn request_wire_shape() {
        let params = MessageCreateParams::new(
            Model::Known(KnownModel::ClaudeSonnet45),
            800,
            vec![
                MessageParam::user("tree"),
                MessageParam::user("file"),
                MessageParam::assistant("reply"),
            ],
        );
        assert_eq!(
            to_value(&params).unwrap(),
            json!({
                "model": "claude-sonnet-4-5",
                "max_tokens": 800,
                "messages": [
                    {"role": "user", "content": "tree"},
                    {"role": "user", "content": "file"},
                    {"role": "assistant", "content": "reply"}
                ]
            })
        );
    }
}
