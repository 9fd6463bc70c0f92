use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents an Anthropic model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or private models)
    Custom(String),
}

/// Known Anthropic model versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// Claude Sonnet 4.5
    #[serde(rename = "claude-sonnet-4-5")]
    ClaudeSonnet45,

    /// Claude Haiku 4.5
    #[serde(rename = "claude-haiku-4-5")]
    ClaudeHaiku45,

    /// Claude Opus 4.1
    #[serde(rename = "claude-opus-4-1")]
    ClaudeOpus41,

    /// Claude Sonnet 4
    #[serde(rename = "claude-sonnet-4-0")]
    ClaudeSonnet40,
}

impl KnownModel {
    /// Every known model, in display order.
    pub const ALL: [KnownModel; 4] = [
        KnownModel::ClaudeSonnet45,
        KnownModel::ClaudeHaiku45,
        KnownModel::ClaudeOpus41,
        KnownModel::ClaudeSonnet40,
    ];

    /// The API identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownModel::ClaudeSonnet45 => "claude-sonnet-4-5",
            KnownModel::ClaudeHaiku45 => "claude-haiku-4-5",
            KnownModel::ClaudeOpus41 => "claude-opus-4-1",
            KnownModel::ClaudeSonnet40 => "claude-sonnet-4-0",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnownModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| format!("unknown model: {s}"))
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        match model.parse::<KnownModel>() {
            Ok(known) => Model::Known(known),
            Err(_) => Model::Custom(model),
        }
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::from(model.to_string())
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Known(KnownModel::ClaudeSonnet45)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::ClaudeSonnet45);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""claude-sonnet-4-5""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("claude-next".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""claude-next""#);
    }

    #[test]
    fn model_from_name() {
        assert_eq!(
            Model::from("claude-haiku-4-5"),
            Model::Known(KnownModel::ClaudeHaiku45)
        );
        assert_eq!(
            Model::from("claude-next"),
            Model::Custom("claude-next".to_string())
        );
    }

    #[test]
    fn default_is_sonnet() {
        assert_eq!(Model::default().to_string(), "claude-sonnet-4-5");
    }
}
