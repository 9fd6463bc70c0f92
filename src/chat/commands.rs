//! Slash command parsing for the chat application.
//!
//! Commands are matched case-insensitively by prefix.  Anything that does not
//! match, including an unknown slash command, is free text for the model.

use crate::ingest::DEFAULT_MAX_FILES;

/// Line that ends a `/code` paste.
pub const PASTE_TERMINATOR: &str = "END";

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Leave the chat.
    Exit,

    /// Clear the conversation history.
    Reset,

    /// Change the project root folder.
    SetRoot(String),

    /// List project files and send the listing.
    ShowTree(usize),

    /// Send a file by absolute path.
    SendFile(String),

    /// Send a file relative to the project root.
    SendRelativeFile(String),

    /// Send a summary of a spreadsheet template.
    SummarizeSpreadsheet(String),

    /// Read pasted lines until the terminator and send them for review.
    PasteCode,

    /// Display help information.
    Help,

    /// Send the line as-is.
    FreeText(String),
}

/// Parses one line of input.
///
/// Returns `None` for a blank line, which the caller ignores.
///
/// # Examples
///
/// ```
/// # use codechat::chat::{ChatCommand, parse_command};
/// assert_eq!(parse_command("/exit"), Some(ChatCommand::Exit));
/// assert_eq!(parse_command("/tree 5"), Some(ChatCommand::ShowTree(5)));
/// assert_eq!(parse_command("   "), None);
/// ```
pub fn parse_command(line: &str) -> Option<ChatCommand> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    let command = if input.eq_ignore_ascii_case("/exit") {
        ChatCommand::Exit
    } else if input.eq_ignore_ascii_case("/reset") {
        ChatCommand::Reset
    } else if input.eq_ignore_ascii_case("/code") {
        ChatCommand::PasteCode
    } else if input.eq_ignore_ascii_case("/help") {
        ChatCommand::Help
    } else if let Some(path) = strip_prefix_ignore_case(input, "/solution ") {
        ChatCommand::SetRoot(clean_path(path))
    } else if let Some(rest) = strip_prefix_ignore_case(input, "/tree") {
        ChatCommand::ShowTree(parse_max_files(rest))
    } else if let Some(path) = strip_prefix_ignore_case(input, "/excel ") {
        ChatCommand::SummarizeSpreadsheet(clean_path(path))
    } else if let Some(path) = strip_prefix_ignore_case(input, "/file ") {
        ChatCommand::SendFile(clean_path(path))
    } else if let Some(path) = strip_prefix_ignore_case(input, "/open ") {
        ChatCommand::SendRelativeFile(clean_path(path))
    } else {
        ChatCommand::FreeText(line.to_string())
    };
    Some(command)
}

/// True when `line` ends a `/code` paste.
pub fn is_paste_terminator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(PASTE_TERMINATOR)
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

fn clean_path(path: &str) -> String {
    path.trim().trim_matches('"').to_string()
}

fn parse_max_files(rest: &str) -> usize {
    rest.split_whitespace()
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_FILES)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Commands:
  /exit                         quit
  /reset                        clear conversation
  /solution <path>              set repo/solution root folder
  /tree [maxFiles]              show a quick file list from root (default 80)
  /file <absolutePath>          send a file to Claude
  /open <relativePathFromRoot>  send a file relative to root
  /excel <path>                 summarize a spreadsheet template and ask for reader code
  /code                         paste multi-line code (end with a single line: END)
  /help                         show this help"#
}
