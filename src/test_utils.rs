//! Test utilities for creating temporary source files.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of source files.
///
/// The directory is automatically cleaned up when dropped.
pub struct SourceDir {
    dir: TempDir,
}

impl SourceDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Write raw bytes, for inputs that are not valid UTF-8.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for SourceDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A file starting with a `lines`-line `//` comment followed by code.
pub fn line_commented_source(lines: usize) -> String {
    let mut source = String::new();
    for i in 0..lines {
        source.push_str(&format!("// comment line {}\n", i));
    }
    source.push_str("fn main() {}\n");
    source
}

/// A file starting with a `lines`-line `/* */` comment followed by code.
pub fn block_commented_source(lines: usize) -> String {
    let mut source = String::from("/*\n");
    for i in 0..lines {
        source.push_str(&format!(" * comment line {}\n", i));
    }
    source.push_str(" */\nint main(void) { return 0; }\n");
    source
}
