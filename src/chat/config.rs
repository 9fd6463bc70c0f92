//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! [`ChatConfig`] that the session carries for its whole lifetime.

use std::env;
use std::path::{Path, PathBuf};

use arrrg_derive::CommandLine;

use crate::client::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS};
use crate::error::{Error, Result};
use crate::types::Model;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Command-line arguments for codechat.  Every flag is optional.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Initial project root folder.
    #[arrrg(optional, "Project root folder (default: current directory)", "DIR")]
    pub root: Option<String>,

    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: claude-sonnet-4-5)", "MODEL")]
    pub model: Option<String>,

    /// Maximum tokens per response.
    #[arrrg(optional, "Max tokens per response (default: 800)", "TOKENS")]
    pub max_tokens: Option<u32>,

    /// API root URL.
    #[arrrg(optional, "API base URL (default: https://api.anthropic.com/v1/)", "URL")]
    pub api_url: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log each request and response to stderr.
    #[arrrg(flag, "Log request/response summaries to stderr")]
    pub verbose: bool,
}

/// Resolved configuration for a chat session.
///
/// Only `root` changes after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Folder that `/tree` lists and `/open` resolves against.
    pub root: PathBuf,

    /// API key, read once at startup.
    pub api_key: String,

    /// The model to use for generating responses.
    pub model: Model,

    /// Maximum tokens per response.
    pub max_tokens: u32,

    /// API root URL.
    pub api_url: String,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to log exchanges to stderr.
    pub verbose: bool,
}

impl ChatConfig {
    /// Creates a configuration with defaults for everything but the key and root.
    pub fn new(api_key: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            api_key: api_key.into(),
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_url: DEFAULT_API_URL.to_string(),
            use_color: true,
            verbose: false,
        }
    }

    /// Resolve arguments against the process environment.
    ///
    /// Fails with [`Error::ConfigurationMissing`] when the API key is unset or
    /// blank, and with [`Error::PathInvalid`] when `--root` is not a directory.
    pub fn from_args(args: ChatArgs) -> Result<Self> {
        let api_key = api_key_from(env::var(API_KEY_VAR).ok())?;
        let root = match &args.root {
            Some(root) => {
                if !Path::new(root).is_dir() {
                    return Err(Error::path_invalid(root.as_str()));
                }
                PathBuf::from(root)
            }
            None => env::current_dir()
                .map_err(|err| Error::io(format!("cannot read working directory: {err}"), err))?,
        };
        Ok(Self::new(api_key, root).with_args(args))
    }

    fn with_args(mut self, args: ChatArgs) -> Self {
        if let Some(model) = args.model {
            self = self.with_model(Model::from(model));
        }
        if let Some(max_tokens) = args.max_tokens {
            self = self.with_max_tokens(max_tokens);
        }
        if let Some(api_url) = args.api_url {
            self = self.with_api_url(api_url);
        }
        if args.no_color {
            self = self.without_color();
        }
        self.verbose = args.verbose;
        self
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the API root URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Replace the root folder if `path` names an existing directory.
    ///
    /// On failure the current root is left untouched.
    pub fn set_root(&mut self, path: &str) -> Result<&Path> {
        let candidate = Path::new(path);
        if !candidate.is_dir() {
            return Err(Error::path_invalid(path));
        }
        self.root = candidate.to_path_buf();
        Ok(&self.root)
    }
}

fn api_key_from(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(Error::configuration_missing(format!(
            "Missing {API_KEY_VAR}. Set it in your environment before starting codechat."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn default_config() {
        let config = ChatConfig::new("key", "/proj");
        assert_eq!(config.root, PathBuf::from("/proj"));
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, Model::Known(KnownModel::ClaudeSonnet45));
        assert_eq!(config.max_tokens, 800);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.use_color);
        assert!(!config.verbose);
    }

    #[test]
    fn config_with_args() {
        let args = ChatArgs {
            root: None,
            model: Some("claude-haiku-4-5".to_string()),
            max_tokens: Some(2048),
            api_url: Some("http://localhost:8080/v1/".to_string()),
            no_color: true,
            verbose: true,
        };
        let config = ChatConfig::new("key", "/proj").with_args(args);
        assert_eq!(config.model, Model::Known(KnownModel::ClaudeHaiku45));
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.api_url, "http://localhost:8080/v1/");
        assert!(!config.use_color);
        assert!(config.verbose);
    }

    #[test]
    fn empty_args_keep_defaults() {
        let config = ChatConfig::new("key", "/proj").with_args(ChatArgs::default());
        assert_eq!(config, ChatConfig::new("key", "/proj"));
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new("key", "/proj")
            .with_model(Model::Custom("claude-next".to_string()))
            .with_max_tokens(16)
            .with_api_url("http://127.0.0.1:1/")
            .without_color();
        assert_eq!(config.model, Model::Custom("claude-next".to_string()));
        assert_eq!(config.max_tokens, 16);
        assert_eq!(config.api_url, "http://127.0.0.1:1/");
        assert!(!config.use_color);
    }

    #[test]
    fn api_key_must_be_present() {
        assert!(api_key_from(None).unwrap_err().is_configuration_missing());
        assert!(
            api_key_from(Some("  ".to_string()))
                .unwrap_err()
                .is_configuration_missing()
        );
        assert_eq!(api_key_from(Some("sk-1".to_string())).unwrap(), "sk-1");
    }

    #[test]
    fn set_root_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ChatConfig::new("key", "/proj");

        let missing = dir.path().join("missing");
        let err = config.set_root(&missing.to_string_lossy()).unwrap_err();
        assert!(err.is_path_invalid());
        assert_eq!(config.root, PathBuf::from("/proj"));

        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(config.set_root(&file.to_string_lossy()).is_err());
        assert_eq!(config.root, PathBuf::from("/proj"));

        let root = config.set_root(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(root, dir.path());
        assert_eq!(config.root, dir.path());
    }
}
