//! Interactive chat about a project folder.
//!
//! The session keeps one growing conversation with Claude and a project root.
//! Slash commands pull local material into the conversation:
//!
//! - `/tree` lists project files and sends the listing
//! - `/file` and `/open` send a single source file
//! - `/excel` sends a summary of a spreadsheet template
//! - `/code` sends a multi-line paste for review
//!
//! # Architecture
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: slash command parsing
//! - [`session`]: command dispatch and the exchange with the API
//! - [`transcript`]: the append-only conversation
//! - [`input`]: line sources for commands that keep reading

pub mod commands;
pub mod config;
pub mod input;
pub mod session;
pub mod transcript;

pub use commands::{ChatCommand, PASTE_TERMINATOR, help_text, is_paste_terminator, parse_command};
pub use config::{API_KEY_VAR, ChatArgs, ChatConfig};
pub use input::{LineReader, ReadLine, ScriptedLines};
pub use session::{ChatSession, Flow};
pub use transcript::Transcript;
