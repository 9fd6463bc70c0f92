use crate::types::MessageParam;

/// The conversation so far, oldest message first.
///
/// Messages are only ever appended; [`Transcript::clear`] empties the whole
/// history.  Consecutive user messages are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<MessageParam>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(MessageParam::user(content));
    }

    /// Appends an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(MessageParam::assistant(content));
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages in order.
    pub fn messages(&self) -> &[MessageParam] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("tree");
        transcript.push_user("file");
        transcript.push_assistant("reply");
        let contents: Vec<_> = transcript
            .messages()
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            contents,
            vec![
                (MessageRole::User, "tree"),
                (MessageRole::User, "file"),
                (MessageRole::Assistant, "reply"),
            ]
        );
    }

    #[test]
    fn clear_empties_regardless_of_length() {
        let mut transcript = Transcript::new();
        for i in 0..25 {
            transcript.push_user(format!("q{i}"));
            transcript.push_assistant(format!("a{i}"));
        }
        assert_eq!(transcript.len(), 50);
        transcript.clear();
        assert!(transcript.is_empty());
        transcript.push_user("fresh");
        assert_eq!(transcript.len(), 1);
    }
}
