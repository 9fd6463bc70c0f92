use serde::{Deserialize, Serialize};

/// Token usage reported alongside a reply.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// The number of input tokens which were used.
    #[serde(default)]
    pub input_tokens: u64,

    /// The number of output tokens which were used.
    #[serde(default)]
    pub output_tokens: u64,
}

impl Usage {
    /// Create a new `Usage` with the given input and output tokens.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_ignores_unknown_fields() {
        let usage: Usage = serde_json::from_str(
            r#"{"input_tokens": 12, "output_tokens": 34, "cache_read_input_tokens": 0}"#,
        )
        .unwrap();
        assert_eq!(usage, Usage::new(12, 34));
    }
}
