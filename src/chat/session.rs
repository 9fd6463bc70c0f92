//! Core chat session management.
//!
//! [`ChatSession`] owns the conversation and the session configuration,
//! dispatches parsed commands, and runs each exchange through a
//! [`Completion`] implementation.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::chat::commands::{ChatCommand, help_text, is_paste_terminator, parse_command};
use crate::chat::config::ChatConfig;
use crate::chat::input::{LineReader, ReadLine};
use crate::chat::transcript::Transcript;
use crate::client::Completion;
use crate::error::Error;
use crate::ingest::{self, ArtifactBlock, DEFAULT_MAX_ROWS};
use crate::observability::{CHAT_COMMANDS, CHAT_RESETS, CHAT_TURNS, INGEST_REJECTIONS};
use crate::render::Renderer;

const SPREADSHEET_LABEL: &str = "Here is a summary of my Excel template:";
const SPREADSHEET_REQUEST: &str = "Now generate C# code (a separate console app) that reads this \
Excel into a strongly typed object and validates required fields. Use ClosedXML. Output NuGet \
commands and the full code files.";
const CODE_REVIEW_LABEL: &str = "Please review this code and help me improve/fix it:";
const CODE_REVIEW_HINT: &str = "csharp";

/// What the session loop should do after a line is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Leave the loop.
    Exit,
}

/// A chat session that manages conversation state and API interactions.
pub struct ChatSession<C: Completion> {
    completion: C,
    config: ChatConfig,
    transcript: Transcript,
}

impl<C: Completion> ChatSession<C> {
    /// Creates a new chat session with an empty transcript.
    pub fn new(completion: C, config: ChatConfig) -> Self {
        Self {
            completion,
            config,
            transcript: Transcript::new(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// The current project root.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Clears the conversation history.
    pub fn clear(&mut self) {
        self.transcript.clear();
        CHAT_RESETS.click();
    }

    /// Parse and handle one line of input.
    ///
    /// Blank lines are ignored.  `input` is only read by `/code`.
    pub async fn handle_line(
        &mut self,
        line: &str,
        input: &mut dyn LineReader,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) -> Flow {
        match parse_command(line) {
            Some(command) => self.dispatch(command, input, renderer, cancel).await,
            None => Flow::Continue,
        }
    }

    /// Execute a parsed command.
    pub async fn dispatch(
        &mut self,
        command: ChatCommand,
        input: &mut dyn LineReader,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) -> Flow {
        CHAT_COMMANDS.click();
        match command {
            ChatCommand::Exit => {
                renderer.print_info("Goodbye!");
                return Flow::Exit;
            }
            ChatCommand::Reset => {
                self.clear();
                renderer.print_info("Conversation cleared.");
            }
            ChatCommand::Help => {
                renderer.print_info(help_text());
            }
            ChatCommand::SetRoot(path) => match self.config.set_root(&path) {
                Ok(root) => {
                    renderer.print_info(&format!("Root folder set to: {}", root.display()));
                }
                Err(err) => renderer.print_error(&err.to_string()),
            },
            ChatCommand::ShowTree(max_files) => {
                let root = self.config.root.clone();
                let listing = ingest::build_file_listing(&root, max_files);
                renderer.print_listing(&listing);
                let block = ArtifactBlock::new(
                    format!("Project file tree (root: {}):", root.display()),
                    "",
                    listing,
                );
                self.send(block.render(), renderer, cancel).await;
            }
            ChatCommand::SendFile(path) => {
                self.send_file(Path::new(&path), renderer, cancel).await;
            }
            ChatCommand::SendRelativeFile(relative) => {
                let path = self.config.root.join(relative);
                self.send_file(&path, renderer, cancel).await;
            }
            ChatCommand::SummarizeSpreadsheet(path) => {
                self.send_spreadsheet(&path, renderer, cancel).await;
            }
            ChatCommand::PasteCode => {
                renderer.print_info("Paste your code now. Type END on its own line to finish:");
                match read_paste(input) {
                    Some(code) => {
                        let block = ArtifactBlock::new(CODE_REVIEW_LABEL, CODE_REVIEW_HINT, code);
                        self.send(block.render(), renderer, cancel).await;
                    }
                    None => renderer.print_info("Paste cancelled."),
                }
            }
            ChatCommand::FreeText(text) => {
                self.send(text, renderer, cancel).await;
            }
        }
        Flow::Continue
    }

    /// Append a user message, exchange the whole transcript, and record the reply.
    ///
    /// The reply is recorded even when it is error text, so the next request
    /// carries the failure as context.
    pub async fn send(
        &mut self,
        content: impl Into<String>,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) {
        self.transcript.push_user(content);
        let reply = self
            .completion
            .complete(self.transcript.messages(), cancel)
            .await;
        renderer.print_reply(&reply);
        self.transcript.push_assistant(reply);
        CHAT_TURNS.click();
    }

    async fn send_file(
        &mut self,
        path: &Path,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) {
        match ingest::read_file(path) {
            Ok(block) => self.send(block.render(), renderer, cancel).await,
            Err(err) => renderer.print_error(&format!("ERROR: {err}")),
        }
    }

    async fn send_spreadsheet(
        &mut self,
        path: &str,
        renderer: &mut dyn Renderer,
        cancel: &CancellationToken,
    ) {
        if !Path::new(path).is_file() {
            INGEST_REJECTIONS.click();
            renderer.print_error(&Error::artifact_not_found(path).to_string());
            return;
        }
        match ingest::summarize_workbook(Path::new(path), DEFAULT_MAX_ROWS) {
            Ok(summary) => {
                let block = ArtifactBlock::new(SPREADSHEET_LABEL, "", summary);
                let message = format!("{}\n\n{SPREADSHEET_REQUEST}", block.render());
                self.send(message, renderer, cancel).await;
            }
            Err(err) => {
                INGEST_REJECTIONS.click();
                renderer.print_error(&format!("ERROR: {err}"));
            }
        }
    }
}

/// Collect pasted lines up to the terminator or the end of input.
///
/// Returns `None` when the paste is interrupted.
fn read_paste(input: &mut dyn LineReader) -> Option<String> {
    let mut code = String::new();
    loop {
        match input.read_line("") {
            ReadLine::Line(line) if is_paste_terminator(&line) => break,
            ReadLine::Line(line) => {
                code.push_str(&line);
                code.push('\n');
            }
            ReadLine::Eof => break,
            ReadLine::Interrupted => return None,
        }
    }
    Some(code)
}
