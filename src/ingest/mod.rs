//! Artifact ingestion.
//!
//! Ingestors turn something outside the conversation (a file, a directory
//! tree, a spreadsheet) into an [`ArtifactBlock`]: a label followed by a
//! fenced body.  The block is rendered to text immediately and becomes the
//! content of a user message.

mod file;
mod spreadsheet;
mod tree;

pub use file::{BINARY_EXTENSIONS, MAX_FILE_BYTES, language_hint, read_file};
pub use spreadsheet::{
    DEFAULT_MAX_ROWS, SheetGrid, Worksheet, open_first_worksheet, summarize_workbook,
    summarize_worksheet,
};
pub use tree::{DEFAULT_MAX_FILES, IGNORED_DIRECTORIES, LISTED_EXTENSIONS, build_file_listing};

/// A fenced rendering of an external resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBlock {
    /// Text placed above the fence.
    pub label: String,
    /// Fence info string; empty for none.
    pub language_hint: String,
    /// Fenced content, unmodified.
    pub body: String,
}

impl ArtifactBlock {
    /// Creates a new block.
    pub fn new(
        label: impl Into<String>,
        language_hint: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            language_hint: language_hint.into(),
            body: body.into(),
        }
    }

    /// Render as `label`, a blank line, then the body inside a code fence.
    pub fn render(&self) -> String {
        format!(
            "{}\n\n```{}\n{}\n```",
            self.label, self.language_hint, self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_with_hint() {
        let block = ArtifactBlock::new("Here:", "csharp", "class X{}");
        assert_eq!(block.render(), "Here:\n\n```csharp\nclass X{}\n```");
    }

    #[test]
    fn render_without_hint() {
        let block = ArtifactBlock::new("Listing:", "", "a.cs\n");
        assert_eq!(block.render(), "Listing:\n\n```\na.cs\n\n```");
    }
}
