//! Line input for commands that keep reading after their own line.

use std::collections::VecDeque;

/// The outcome of one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// A line, without its trailing newline.
    Line(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    /// Input ended.
    Eof,
}

/// A source of raw input lines.
pub trait LineReader {
    /// Read one line.
    fn read_line(&mut self, prompt: &str) -> ReadLine;
}

/// Lines supplied up front, e.g. from a script or a test.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    events: VecDeque<ReadLine>,
}

impl ScriptedLines {
    /// Creates a reader that yields `lines` in order, then ends.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: lines
                .into_iter()
                .map(|line| ReadLine::Line(line.into()))
                .collect(),
        }
    }

    /// Queue an interrupt after the lines given so far.
    pub fn then_interrupt(mut self) -> Self {
        self.events.push_back(ReadLine::Interrupted);
        self
    }

    /// Reads not yet consumed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl LineReader for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> ReadLine {
        self.events.pop_front().unwrap_or(ReadLine::Eof)
    }
}
