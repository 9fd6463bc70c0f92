//! Output rendering for the chat session.
//!
//! This module provides the [`Renderer`] trait, a plain-text implementation
//! for the terminal, and a [`BufferRenderer`] that records output in memory.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for local listings).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the assistant label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Trait for rendering session output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - In-memory capture
pub trait Renderer: Send {
    /// Print the assistant's reply (or the error text standing in for it).
    fn print_reply(&mut self, text: &str);

    /// Print a file listing that is shown locally as well as sent.
    fn print_listing(&mut self, listing: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn write(&mut self, text: &str) {
        let _ = self.stdout.write_all(text.as_bytes());
        let _ = self.stdout.flush();
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, text: &str) {
        let label = self.styled(ANSI_CYAN, "Claude:");
        self.write(&format!("\n{label} {text}\n"));
    }

    fn print_listing(&mut self, listing: &str) {
        let listing = self.styled(ANSI_DIM, listing.trim_end_matches('\n'));
        self.write(&format!("{listing}\n"));
    }

    fn print_error(&mut self, error: &str) {
        let error = self.styled(ANSI_RED, error);
        self.write(&format!("{error}\n"));
    }

    fn print_info(&mut self, info: &str) {
        self.write(&format!("{info}\n"));
    }
}

/// One call made on a [`BufferRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// From [`Renderer::print_reply`].
    Reply(String),
    /// From [`Renderer::print_listing`].
    Listing(String),
    /// From [`Renderer::print_error`].
    Error(String),
    /// From [`Renderer::print_info`].
    Info(String),
}

/// Renderer that keeps everything it is given.
#[derive(Debug, Clone, Default)]
pub struct BufferRenderer {
    /// Every event, in order.
    pub events: Vec<RenderEvent>,
}

impl BufferRenderer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Error messages, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replies, in order.
    pub fn replies(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Reply(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for BufferRenderer {
    fn print_reply(&mut self, text: &str) {
        self.events.push(RenderEvent::Reply(text.to_string()));
    }

    fn print_listing(&mut self, listing: &str) {
        self.events.push(RenderEvent::Listing(listing.to_string()));
    }

    fn print_error(&mut self, error: &str) {
        self.events.push(RenderEvent::Error(error.to_string()));
    }

    fn print_info(&mut self, info: &str) {
        self.events.push(RenderEvent::Info(info.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
        assert_eq!(renderer.styled(ANSI_RED, "x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
        assert_eq!(renderer.styled(ANSI_RED, "x"), "x");
    }

    #[test]
    fn buffer_records_in_order() {
        let mut renderer = BufferRenderer::new();
        renderer.print_info("hello");
        renderer.print_error("bad");
        renderer.print_reply("answer");
        assert_eq!(renderer.errors(), vec!["bad"]);
        assert_eq!(renderer.replies(), vec!["answer"]);
        assert_eq!(renderer.events[0], RenderEvent::Info("hello".to_string()));
    }
}
