use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingest::ArtifactBlock;
use crate::observability::{INGEST_FILES, INGEST_REJECTIONS};

/// Files larger than this are never sent.
pub const MAX_FILE_BYTES: u64 = 300_000;

/// Extensions that are refused outright.
pub const BINARY_EXTENSIONS: &[&str] = &[
    ".dll", ".exe", ".png", ".jpg", ".jpeg", ".gif", ".zip", ".pdf",
];

/// Map a lowercased extension (with leading dot) to a fence info string.
pub fn language_hint(extension: &str) -> &'static str {
    match extension {
        ".cs" => "csharp",
        ".csproj" | ".xml" => "xml",
        ".json" => "json",
        ".rs" => "rust",
        ".py" => "python",
        ".js" => "javascript",
        ".ts" => "typescript",
        ".md" => "markdown",
        ".yml" | ".yaml" => "yaml",
        ".toml" => "toml",
        ".sh" => "bash",
        ".go" => "go",
        ".java" => "java",
        ".c" | ".h" => "c",
        ".cpp" | ".hpp" => "cpp",
        ".sql" => "sql",
        ".html" => "html",
        ".css" => "css",
        _ => "",
    }
}

/// Read a file into an artifact block.
///
/// Checks run in order: existence, size, extension.  The body is the file's
/// text exactly as stored.
pub fn read_file(path: &Path) -> Result<ArtifactBlock> {
    let result = read_file_inner(path);
    match &result {
        Ok(_) => INGEST_FILES.click(),
        Err(_) => INGEST_REJECTIONS.click(),
    }
    result
}

fn read_file_inner(path: &Path) -> Result<ArtifactBlock> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(Error::artifact_not_found(display));
    }

    let size = fs::metadata(path)
        .map_err(|err| Error::io(format!("Failed reading file: {err}"), err))?
        .len();
    if size > MAX_FILE_BYTES {
        return Err(Error::artifact_too_large(display, size, MAX_FILE_BYTES));
    }

    let extension = dotted_extension(path);
    if BINARY_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::artifact_binary_rejected(extension));
    }

    let text = fs::read_to_string(path)
        .map_err(|err| Error::io(format!("Failed reading file: {err}"), err))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ArtifactBlock::new(
        format!("Here is the file `{name}` from `{display}`:"),
        language_hint(&extension),
        text,
    ))
}

/// The lowercased extension with its leading dot, or empty.
pub(crate) fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_file_text_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.cs");
        let text = "class X{}\r\n\n  // trailing   \n\t";
        fs::write(&path, text).unwrap();

        let block = read_file(&path).unwrap();
        assert_eq!(block.body, text);
        assert_eq!(block.language_hint, "csharp");
        assert_eq!(
            block.label,
            format!("Here is the file `main.cs` from `{}`:", path.display())
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("nope.cs")).unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound { .. }));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ArtifactNotFound { .. }));
    }

    #[test]
    fn oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, vec![b'a'; 300_001]).unwrap();
        let err = read_file(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::ArtifactTooLarge {
                size: 300_001,
                limit: 300_000,
                ..
            }
        ));

        let path = dir.path().join("edge.txt");
        fs::write(&path, vec![b'a'; 300_000]).unwrap();
        assert!(read_file(&path).is_ok());
    }

    #[test]
    fn size_is_checked_before_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        fs::write(&path, vec![0u8; 300_001]).unwrap();
        assert!(matches!(
            read_file(&path).unwrap_err(),
            Error::ArtifactTooLarge { .. }
        ));
    }

    #[test]
    fn binary_extensions_rejected_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.dll", "b.EXE", "c.Png", "d.jpg", "e.jpeg", "f.gif", "g.zip", "h.pdf"] {
            let path = dir.path().join(name);
            fs::write(&path, "x").unwrap();
            let err = read_file(&path).unwrap_err();
            let Error::ArtifactBinaryRejected { extension } = err else {
                panic!("expected binary rejection for {name}");
            };
            assert_eq!(extension, dotted_extension(&path));
        }
    }

    #[test]
    fn hints() {
        assert_eq!(language_hint(".cs"), "csharp");
        assert_eq!(language_hint(".csproj"), "xml");
        assert_eq!(language_hint(".json"), "json");
        assert_eq!(language_hint(".sln"), "");
        assert_eq!(language_hint(".weird"), "");
        assert_eq!(language_hint(""), "");
    }

    #[test]
    fn unknown_extension_has_no_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, "all:\n").unwrap();
        let block = read_file(&path).unwrap();
        assert_eq!(block.language_hint, "");
        assert!(block.render().contains("\n```\nall:\n\n```"));
    }
}
