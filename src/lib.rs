// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod error;
pub mod ingest;
pub mod observability;
pub mod render;
pub mod types;

// Re-exports
pub use client::{Completion, CompletionClient, reply_to_text};
pub use client_logger::{ClientLogger, StderrLogger};
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use render::{BufferRenderer, PlainTextRenderer, RenderEvent, Renderer};
pub use types::*;
