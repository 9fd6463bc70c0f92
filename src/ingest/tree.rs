use std::fmt::Write;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};

use crate::ingest::file::dotted_extension;
use crate::observability::INGEST_TREE_FILES;

/// Files listed by `/tree` when no count is given.
pub const DEFAULT_MAX_FILES: usize = 80;

/// Directory names that are never descended into (compared case-insensitively).
pub const IGNORED_DIRECTORIES: &[&str] = &["bin", "obj", ".git", ".vs", "node_modules"];

/// Extensions that make it into a listing.
pub const LISTED_EXTENSIONS: &[&str] = &[
    ".cs", ".csproj", ".sln", ".json", ".xml", ".md", ".yml", ".yaml",
];

/// List project files under `root`, one relative path per line.
///
/// Walk order comes from the filesystem and is not sorted.  Once `max_files`
/// paths are collected the walk stops and a notice naming the cap is added.
pub fn build_file_listing(root: &Path, max_files: usize) -> String {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry))
        .build();

    let mut listing = String::new();
    let mut count = 0;
    for entry in walker {
        if count >= max_files {
            break;
        }
        // Unreadable entries are skipped rather than failing the listing.
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        let extension = dotted_extension(path);
        if !LISTED_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        let _ = writeln!(listing, "{}", relative.display());
        count += 1;
    }

    INGEST_TREE_FILES.add(count as f64);
    if count == 0 {
        listing.push_str("(No files found or all filtered out)\n");
    }
    if count >= max_files {
        let _ = writeln!(listing, "... (showing first {max_files})");
    }
    listing
}

fn is_ignored(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    IGNORED_DIRECTORIES
        .iter()
        .any(|ignored| name.eq_ignore_ascii_case(ignored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    fn lines(listing: &str) -> Vec<PathBuf> {
        listing
            .lines()
            .filter(|line| !line.starts_with('(') && !line.starts_with("..."))
            .map(PathBuf::from)
            .collect()
    }

    #[test]
    fn ignored_segments_never_listed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/Program.cs");
        touch(root, "src/bin/Debug/App.cs");
        touch(root, "src/obj/project.assets.json");
        touch(root, ".git/config.json");
        touch(root, ".vs/settings.json");
        touch(root, "web/node_modules/pkg/package.json");
        touch(root, "web/NODE_MODULES/pkg/package.json");
        touch(root, "deep/a/BIN/b/c.cs");
        touch(root, "App.sln");

        let listing = build_file_listing(root, 100);
        let mut listed = lines(&listing);
        listed.sort();
        assert_eq!(
            listed,
            vec![PathBuf::from("App.sln"), PathBuf::from("src/Program.cs")]
        );
        for path in &listed {
            for segment in path.iter() {
                let segment = segment.to_string_lossy();
                assert!(
                    !IGNORED_DIRECTORIES
                        .iter()
                        .any(|ignored| segment.eq_ignore_ascii_case(ignored))
                );
            }
        }
    }

    #[test]
    fn extension_allowlist() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for name in ["a.cs", "b.CSPROJ", "c.json", "d.xml", "e.md", "f.yml", "g.yaml"] {
            touch(root, name);
        }
        for name in ["h.txt", "i.png", "j", "k.rs"] {
            touch(root, name);
        }
        let listing = build_file_listing(root, 100);
        assert_eq!(lines(&listing).len(), 7);
        assert!(!listing.contains("h.txt"));
        assert!(!listing.contains("showing first"));
    }

    #[test]
    fn empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt");
        let listing = build_file_listing(dir.path(), 80);
        assert_eq!(listing, "(No files found or all filtered out)\n");
    }

    #[test]
    fn cap_stops_walk_and_adds_notice() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..10 {
            touch(dir.path(), &format!("f{i}.cs"));
        }
        let listing = build_file_listing(dir.path(), 3);
        assert_eq!(lines(&listing).len(), 3);
        assert!(listing.ends_with("... (showing first 3)\n"));
    }

    #[test]
    fn zero_cap() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.cs");
        let listing = build_file_listing(dir.path(), 0);
        assert_eq!(
            listing,
            "(No files found or all filtered out)\n... (showing first 0)\n"
        );
    }

    #[test]
    fn root_named_like_ignored_directory_is_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("bin");
        touch(&root, "tool.cs");
        let listing = build_file_listing(&root, 10);
        assert_eq!(lines(&listing), vec![PathBuf::from("tool.cs")]);
    }
}
