//! Logging trait for completion client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows callers to
//! capture every exchange passing through the [`CompletionClient`], and a
//! [`StderrLogger`] that prints one-line summaries.
//!
//! [`CompletionClient`]: crate::CompletionClient

use std::io::Write;

use crate::{Error, Message, MessageCreateParams, ReplyText};

/// A trait for logging completion client operations.
///
/// # Example
///
/// ```rust,ignore
/// use codechat::{ClientLogger, Error, Message, MessageCreateParams};
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, params: &MessageCreateParams) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(params).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, message: &Message) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(message).unwrap()).unwrap();
///     }
///
///     fn log_error(&self, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Error: {error}").unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log a request just before it is sent.
    fn log_request(&self, params: &MessageCreateParams);

    /// Log a successfully decoded reply.
    fn log_response(&self, message: &Message);

    /// Log a failed exchange.
    fn log_error(&self, error: &Error);
}

/// Writes a one-line summary of each exchange to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogger;

impl ClientLogger for StderrLogger {
    fn log_request(&self, params: &MessageCreateParams) {
        let bytes: usize = params.messages.iter().map(|m| m.content.len()).sum();
        let _ = writeln!(
            std::io::stderr(),
            "[request] model={} max_tokens={} messages={} bytes={}",
            params.model,
            params.max_tokens,
            params.messages.len(),
            bytes
        );
    }

    fn log_response(&self, message: &Message) {
        let usage = message.usage.unwrap_or_default();
        let text = match message.reply_text() {
            ReplyText::Text(text) => text.len().to_string(),
            ReplyText::Missing => "missing".to_string(),
        };
        let _ = writeln!(
            std::io::stderr(),
            "[response] id={} stop_reason={} text_bytes={} tokens={}/{}",
            message.id.as_deref().unwrap_or("-"),
            message.stop_reason.as_deref().unwrap_or("-"),
            text,
            usage.input_tokens,
            usage.output_tokens
        );
    }

    fn log_error(&self, error: &Error) {
        let status = error
            .status_code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| "-".to_string());
        let first_line = error.to_string().lines().next().unwrap_or("").to_string();
        let _ = writeln!(std::io::stderr(), "[error] status={status} {first_line}");
    }
}
