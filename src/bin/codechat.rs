//! Interactive console chat about a project folder.
//!
//! # Usage
//!
//! ```bash
//! # Chat about the current directory
//! codechat
//!
//! # Start in a solution folder with a different model
//! codechat --root ~/src/Shipments --model claude-haiku-4-5
//!
//! # Disable colors (useful for piping output)
//! codechat --no-color
//! ```
//!
//! Type `/help` at the prompt for the list of commands.

use std::sync::{Arc, Mutex};

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio_util::sync::CancellationToken;

use codechat::chat::{ChatArgs, ChatConfig, ChatSession, Flow, LineReader, ReadLine, help_text};
use codechat::{CompletionClient, PlainTextRenderer, Renderer, StderrLogger};

/// Reads continuation lines (the `/code` paste) from the terminal.
struct EditorLines<'a> {
    editor: &'a mut DefaultEditor,
}

impl LineReader for EditorLines<'_> {
    fn read_line(&mut self, prompt: &str) -> ReadLine {
        match self.editor.readline(prompt) {
            Ok(line) => ReadLine::Line(line),
            Err(ReadlineError::Interrupted) => ReadLine::Interrupted,
            // End of input and terminal errors both end the paste.
            Err(_) => ReadLine::Eof,
        }
    }
}

/// Main entry point for the codechat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("codechat [OPTIONS]");
    let config = match ChatConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut client = CompletionClient::new(&config.api_key)?
        .with_base_url(config.api_url.clone())
        .with_model(config.model.clone())
        .with_max_tokens(config.max_tokens);
    if config.verbose {
        client = client.with_logger(Arc::new(StderrLogger));
    }

    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut session = ChatSession::new(client, config);
    let mut rl = DefaultEditor::new()?;

    // Token for the request in flight; replaced before every line.
    let current = Arc::new(Mutex::new(CancellationToken::new()));
    let handler_token = Arc::clone(&current);
    ctrlc::set_handler(move || {
        if let Ok(token) = handler_token.lock() {
            token.cancel();
        }
    })?;

    println!("Claude Chat Tool (Console)");
    println!("{}", help_text());
    println!();
    println!("Root folder: {}", session.root().display());

    loop {
        let readline = rl.readline("You: ");
        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }

                let cancel = CancellationToken::new();
                if let Ok(mut token) = current.lock() {
                    *token = cancel.clone();
                }

                let mut input = EditorLines { editor: &mut rl };
                let flow = session
                    .handle_line(&line, &mut input, &mut renderer, &cancel)
                    .await;
                if flow == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}
